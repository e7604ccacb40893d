//! Notification adapter backed by the Web Notifications API.

use platform_bridge::{NotificationFuture, NotificationService, PermissionOutcome};

#[derive(Debug, Clone, Copy, Default)]
/// Browser notification adapter: feature detection, permission prompt, delivery.
pub struct WebNotificationService;

impl NotificationService for WebNotificationService {
    fn is_supported(&self) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsValue;
            web_sys::window()
                .map(|window| {
                    js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("Notification"))
                        .unwrap_or(false)
                })
                .unwrap_or(false)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            false
        }
    }

    fn request_permission<'a>(
        &'a self,
    ) -> NotificationFuture<'a, Result<PermissionOutcome, String>> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                use wasm_bindgen::JsValue;
                use wasm_bindgen_futures::JsFuture;

                let promise = web_sys::Notification::request_permission().map_err(
                    |err: JsValue| format!("notification permission request failed: {err:?}"),
                )?;
                let result = JsFuture::from(promise)
                    .await
                    .map_err(|err| format!("notification permission request rejected: {err:?}"))?;
                // Anything that is not an explicit refusal or a dismissed prompt
                // counts as a grant.
                return Ok(match result.as_string().as_deref() {
                    Some("denied") => PermissionOutcome::Denied,
                    Some("default") => PermissionOutcome::Default,
                    _ => PermissionOutcome::Granted,
                });
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                Ok(PermissionOutcome::Default)
            }
        })
    }

    fn show<'a>(
        &'a self,
        title: &'a str,
        body: &'a str,
    ) -> NotificationFuture<'a, Result<(), String>> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                use wasm_bindgen::JsValue;

                let options = web_sys::NotificationOptions::new();
                options.set_body(body);
                return web_sys::Notification::new_with_options(title, &options)
                    .map(|_| ())
                    .map_err(|err: JsValue| format!("notification dispatch failed: {err:?}"));
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = (title, body);
                Ok(())
            }
        })
    }
}
