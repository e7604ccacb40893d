//! Page-title adapter backed by `document.title`.

use platform_bridge::PageTitleService;

#[derive(Debug, Clone, Copy, Default)]
/// Browser title adapter writing the host document's title property.
pub struct WebPageTitleService;

impl PageTitleService for WebPageTitleService {
    fn set_title(&self, title: &str) {
        #[cfg(target_arch = "wasm32")]
        if let Some(document) = web_sys::window().and_then(|window| window.document()) {
            document.set_title(title);
        }

        #[cfg(not(target_arch = "wasm32"))]
        let _ = title;
    }
}
