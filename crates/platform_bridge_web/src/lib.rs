//! Browser (`wasm32`) implementations of [`platform_bridge`] service contracts.
//!
//! This crate is the concrete browser-side wiring layer for notifications, alarm
//! audio, page title, and console diagnostics. Every adapter also compiles on
//! non-wasm targets with a benign fallback branch so the workspace's native test
//! run exercises the public API.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod adapters;
pub mod alarm;
pub mod diagnostics;
pub mod notifications;
pub mod title;

pub use adapters::bridge_services;
pub use alarm::{WebAlarmAudioService, ALARM_AUDIO_ELEMENT_ID};
pub use diagnostics::ConsoleDiagnosticsSink;
pub use notifications::WebNotificationService;
pub use title::WebPageTitleService;
