//! Typed host-capability contracts and the bridge core for the browser platform bridge.
//!
//! This crate is the API-first boundary between the embedded application and the host
//! page's native capabilities. It defines the service traits for notifications, alarm
//! audio, page title, and diagnostics, the outbound message ports, and the
//! [`PlatformBridge`] that translates application messages into capability calls.
//! Concrete browser adapters live in `platform_bridge_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod alarm;
pub mod bridge;
pub mod diagnostics;
pub mod notifications;
pub mod ports;
pub mod title;

pub use alarm::{AlarmAudioService, AlarmFuture, MemoryAlarmAudioService, NoopAlarmAudioService};
pub use bridge::{BridgeServices, PermissionFlag, PlatformBridge};
pub use diagnostics::{DiagnosticsSink, MemoryDiagnosticsSink, NoopDiagnosticsSink};
pub use notifications::{
    MemoryNotificationService, NoopNotificationService, NotificationFuture, NotificationService,
    PermissionOutcome,
};
pub use ports::{AppMessage, AppPorts};
pub use title::{MemoryPageTitleService, NoopPageTitleService, PageTitleService};
