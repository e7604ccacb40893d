mod web_app;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
mod boot;

pub use web_app::TimerApp;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub use boot::{mount, AppHandle};

/// DOM id of the element the application is mounted into. This is an implicit
/// contract with the hosting page's markup, not runtime configuration.
pub const APP_HOST_ELEMENT_ID: &str = "app-lives-here";
