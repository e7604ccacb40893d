//! Alarm-audio adapter backed by an `<audio>` element in the hosting page.

use platform_bridge::{AlarmAudioService, AlarmFuture};

/// DOM id of the alarm `<audio>` element the hosting page's markup provides.
pub const ALARM_AUDIO_ELEMENT_ID: &str = "alarm";

#[derive(Debug, Clone)]
/// Browser alarm adapter that starts playback of a pre-existing audio element.
pub struct WebAlarmAudioService {
    element_id: String,
}

impl WebAlarmAudioService {
    /// Creates an adapter bound to the `<audio>` element with the given DOM id.
    pub fn new(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
        }
    }
}

impl Default for WebAlarmAudioService {
    fn default() -> Self {
        Self::new(ALARM_AUDIO_ELEMENT_ID)
    }
}

impl AlarmAudioService for WebAlarmAudioService {
    fn play<'a>(&'a self) -> AlarmFuture<'a, Result<(), String>> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                use wasm_bindgen::JsCast;
                use wasm_bindgen_futures::JsFuture;

                let document = web_sys::window()
                    .and_then(|window| window.document())
                    .ok_or_else(|| "document is not available".to_string())?;
                let element = document
                    .get_element_by_id(&self.element_id)
                    .ok_or_else(|| format!("audio element `{}` not found", self.element_id))?;
                let audio: web_sys::HtmlAudioElement = element
                    .dyn_into()
                    .map_err(|_| format!("element `{}` is not an audio element", self.element_id))?;
                let promise = audio
                    .play()
                    .map_err(|err| format!("alarm playback did not start: {err:?}"))?;
                JsFuture::from(promise)
                    .await
                    .map(|_| ())
                    .map_err(|err| format!("alarm playback failed: {err:?}"))?;
                return Ok(());
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = &self.element_id;
                Ok(())
            }
        })
    }
}
