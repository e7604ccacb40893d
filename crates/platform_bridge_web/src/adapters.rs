//! Concrete adapter factory for browser runtime wiring.

use std::rc::Rc;

use platform_bridge::BridgeServices;

use crate::{
    ConsoleDiagnosticsSink, WebAlarmAudioService, WebNotificationService, WebPageTitleService,
};

/// Builds the browser service bundle consumed by [`platform_bridge::PlatformBridge`].
pub fn bridge_services() -> BridgeServices {
    BridgeServices {
        notifications: Rc::new(WebNotificationService),
        alarm: Rc::new(WebAlarmAudioService::default()),
        title: Rc::new(WebPageTitleService),
        diagnostics: Rc::new(ConsoleDiagnosticsSink),
    }
}
