//! Diagnostics sink backed by the browser console.

use platform_bridge::DiagnosticsSink;

#[derive(Debug, Clone, Copy, Default)]
/// Diagnostics sink writing to the developer console.
pub struct ConsoleDiagnosticsSink;

impl DiagnosticsSink for ConsoleDiagnosticsSink {
    fn report(&self, message: &str) {
        #[cfg(target_arch = "wasm32")]
        web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(message));

        #[cfg(not(target_arch = "wasm32"))]
        eprintln!("{message}");
    }
}
