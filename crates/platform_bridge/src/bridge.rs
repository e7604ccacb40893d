//! The platform bridge core: translates application messages into capability calls.

use std::{cell::Cell, rc::Rc};

use crate::{
    AlarmAudioService, AppMessage, DiagnosticsSink, NotificationService, PageTitleService,
    PermissionOutcome,
};

/// Title used for every "next up" notification.
const NOTIFY_NEXT_TITLE: &str = "Next up";

/// Cheaply clonable observable handle for the notification-permission flag.
///
/// The flag has exactly two reachable states: not-granted (initial) and granted.
/// [`PermissionFlag::grant`] is the only transition and nothing resets it.
#[derive(Debug, Clone, Default)]
pub struct PermissionFlag {
    granted: Rc<Cell<bool>>,
}

impl PermissionFlag {
    /// Returns whether the user has explicitly granted notification permission.
    pub fn is_granted(&self) -> bool {
        self.granted.get()
    }

    /// Marks permission as granted. One-way; there is no reset.
    pub fn grant(&self) {
        self.granted.set(true);
    }
}

/// Host service bundle injected into [`PlatformBridge`].
///
/// All environment-specific adapter selection happens before this bundle is built,
/// which keeps the bridge core decoupled from browser adapter details.
#[derive(Clone)]
pub struct BridgeServices {
    /// Notification capability: feature detection, permission prompt, delivery.
    pub notifications: Rc<dyn NotificationService>,
    /// Alarm audio playback.
    pub alarm: Rc<dyn AlarmAudioService>,
    /// Document-title writes.
    pub title: Rc<dyn PageTitleService>,
    /// Developer-facing diagnostics sink for recoverable failures.
    pub diagnostics: Rc<dyn DiagnosticsSink>,
}

/// Glue component translating outbound application messages into host capability calls.
pub struct PlatformBridge {
    services: BridgeServices,
    permission: PermissionFlag,
}

impl PlatformBridge {
    /// Creates a bridge over `services` with a fresh, not-granted permission flag.
    pub fn new(services: BridgeServices) -> Self {
        Self::with_permission_flag(services, PermissionFlag::default())
    }

    /// Creates a bridge over `services` observing an injected permission flag.
    pub fn with_permission_flag(services: BridgeServices, permission: PermissionFlag) -> Self {
        Self {
            services,
            permission,
        }
    }

    /// Returns a handle observing the bridge's permission flag.
    pub fn permission_flag(&self) -> PermissionFlag {
        self.permission.clone()
    }

    /// One-shot startup permission request.
    ///
    /// Without a notification capability this returns immediately and the flag stays
    /// not-granted. Otherwise the flag is set only on an explicit grant; `Denied` and
    /// `Default` leave it untouched, and a failed request leaves it untouched and
    /// propagates the error to the caller.
    ///
    /// # Errors
    ///
    /// Returns an error when the permission request itself fails.
    pub async fn request_notification_permission(&self) -> Result<(), String> {
        if !self.services.notifications.is_supported() {
            return Ok(());
        }
        if self.services.notifications.request_permission().await? == PermissionOutcome::Granted {
            self.permission.grant();
        }
        Ok(())
    }

    /// Handles a "set title" message by replacing the document title.
    pub fn on_set_title(&self, title: &str) {
        self.services.title.set_title(title);
    }

    /// Handles an "alarm" message by starting alarm playback.
    ///
    /// A playback failure is reported to the diagnostics sink and otherwise swallowed;
    /// the user gets no alarm sound and no explanation, and nothing retries.
    pub async fn on_alarm(&self) {
        if let Err(err) = self.services.alarm.play().await {
            self.services
                .diagnostics
                .report(&format!("could not play alarm: {err}"));
        }
    }

    /// Handles a "notify next" message by showing a `"<label> is next"` notification.
    ///
    /// The permission flag is deliberately not consulted here; the host notification
    /// API applies its own permission gate, and an ungranted show is left to that gate.
    ///
    /// # Errors
    ///
    /// Returns an error when notification construction or delivery fails.
    pub async fn on_notify_next(&self, next_label: &str) -> Result<(), String> {
        self.services
            .notifications
            .show(NOTIFY_NEXT_TITLE, &format!("{next_label} is next"))
            .await
    }

    /// Dispatches one outbound application message to its handler.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying capability call fails and the message's
    /// handler does not absorb the failure itself.
    pub async fn handle(&self, message: AppMessage) -> Result<(), String> {
        match message {
            AppMessage::SetTitle(title) => {
                self.on_set_title(&title);
                Ok(())
            }
            AppMessage::Alarm => {
                self.on_alarm().await;
                Ok(())
            }
            AppMessage::NotifyNext(next_label) => self.on_notify_next(&next_label).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use crate::{
        MemoryAlarmAudioService, MemoryDiagnosticsSink, MemoryNotificationService,
        MemoryPageTitleService, NoopNotificationService,
    };

    use super::*;

    struct Harness {
        bridge: PlatformBridge,
        notifications: MemoryNotificationService,
        alarm: MemoryAlarmAudioService,
        title: MemoryPageTitleService,
        diagnostics: MemoryDiagnosticsSink,
    }

    fn harness(notifications: MemoryNotificationService) -> Harness {
        harness_with_alarm(notifications, MemoryAlarmAudioService::default())
    }

    fn harness_with_alarm(
        notifications: MemoryNotificationService,
        alarm: MemoryAlarmAudioService,
    ) -> Harness {
        let title = MemoryPageTitleService::default();
        let diagnostics = MemoryDiagnosticsSink::default();
        let bridge = PlatformBridge::new(BridgeServices {
            notifications: Rc::new(notifications.clone()),
            alarm: Rc::new(alarm.clone()),
            title: Rc::new(title.clone()),
            diagnostics: Rc::new(diagnostics.clone()),
        });
        Harness {
            bridge,
            notifications,
            alarm,
            title,
            diagnostics,
        }
    }

    #[test]
    fn permission_flag_starts_not_granted_and_grants_one_way() {
        let flag = PermissionFlag::default();
        assert!(!flag.is_granted());
        flag.grant();
        assert!(flag.is_granted());

        let observer = flag.clone();
        assert!(observer.is_granted());
    }

    #[test]
    fn unsupported_capability_leaves_flag_not_granted() {
        let harness = harness(MemoryNotificationService::unsupported());
        block_on(harness.bridge.request_notification_permission()).expect("request");
        assert!(!harness.bridge.permission_flag().is_granted());
    }

    #[test]
    fn only_an_explicit_grant_sets_the_flag() {
        for outcome in [PermissionOutcome::Denied, PermissionOutcome::Default] {
            let harness = harness(MemoryNotificationService::with_permission(outcome));
            block_on(harness.bridge.request_notification_permission()).expect("request");
            assert!(!harness.bridge.permission_flag().is_granted());
        }

        let harness = harness(MemoryNotificationService::with_permission(
            PermissionOutcome::Granted,
        ));
        block_on(harness.bridge.request_notification_permission()).expect("request");
        assert!(harness.bridge.permission_flag().is_granted());
    }

    #[test]
    fn failed_permission_request_propagates_and_leaves_flag_not_granted() {
        let harness = harness(MemoryNotificationService::failing_permission(
            "prompt unavailable",
        ));
        assert_eq!(
            block_on(harness.bridge.request_notification_permission()),
            Err("prompt unavailable".to_string())
        );
        assert!(!harness.bridge.permission_flag().is_granted());
    }

    #[test]
    fn set_title_is_order_preserving() {
        let harness = harness(MemoryNotificationService::default());
        block_on(harness.bridge.handle(AppMessage::SetTitle("A".to_string()))).expect("handle");
        block_on(harness.bridge.handle(AppMessage::SetTitle("B".to_string()))).expect("handle");
        assert_eq!(harness.title.title(), Some("B".to_string()));
        assert_eq!(harness.title.history(), vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn alarm_message_starts_exactly_one_playback() {
        let harness = harness(MemoryNotificationService::default());
        block_on(harness.bridge.handle(AppMessage::Alarm)).expect("handle");
        assert_eq!(harness.alarm.play_count(), 1);
        assert_eq!(harness.diagnostics.entries(), Vec::<String>::new());
    }

    #[test]
    fn rejected_playback_is_caught_and_reported_exactly_once() {
        let harness = harness_with_alarm(
            MemoryNotificationService::default(),
            MemoryAlarmAudioService::failing("autoplay blocked"),
        );
        block_on(harness.bridge.handle(AppMessage::Alarm)).expect("handle");
        assert_eq!(
            harness.diagnostics.entries(),
            vec!["could not play alarm: autoplay blocked".to_string()]
        );
    }

    #[test]
    fn notify_next_derives_the_notification_body() {
        let harness = harness(MemoryNotificationService::default());
        block_on(
            harness
                .bridge
                .handle(AppMessage::NotifyNext("Alice".to_string())),
        )
        .expect("handle");
        assert_eq!(
            harness.notifications.shown(),
            vec![("Next up".to_string(), "Alice is next".to_string())]
        );
    }

    #[test]
    fn notify_next_does_not_consult_the_permission_flag() {
        // The show call happens regardless of grant status; the host API's own
        // permission gate is the actual guard.
        let harness = harness(MemoryNotificationService::with_permission(
            PermissionOutcome::Denied,
        ));
        assert!(!harness.bridge.permission_flag().is_granted());
        block_on(
            harness
                .bridge
                .handle(AppMessage::NotifyNext("Bob".to_string())),
        )
        .expect("handle");
        assert_eq!(
            harness.notifications.shown(),
            vec![("Next up".to_string(), "Bob is next".to_string())]
        );
    }

    #[test]
    fn noop_services_compose_into_a_working_bridge() {
        let bridge = PlatformBridge::new(BridgeServices {
            notifications: Rc::new(NoopNotificationService),
            alarm: Rc::new(crate::NoopAlarmAudioService),
            title: Rc::new(crate::NoopPageTitleService),
            diagnostics: Rc::new(crate::NoopDiagnosticsSink),
        });
        block_on(bridge.request_notification_permission()).expect("request");
        block_on(bridge.handle(AppMessage::SetTitle("T".to_string()))).expect("handle");
        block_on(bridge.handle(AppMessage::Alarm)).expect("handle");
        block_on(bridge.handle(AppMessage::NotifyNext("Carol".to_string()))).expect("handle");
        assert!(!bridge.permission_flag().is_granted());
    }

    #[test]
    fn injected_permission_flag_is_observable_from_outside() {
        let flag = PermissionFlag::default();
        let bridge = PlatformBridge::with_permission_flag(
            BridgeServices {
                notifications: Rc::new(MemoryNotificationService::default()),
                alarm: Rc::new(MemoryAlarmAudioService::default()),
                title: Rc::new(MemoryPageTitleService::default()),
                diagnostics: Rc::new(MemoryDiagnosticsSink::default()),
            },
            flag.clone(),
        );
        block_on(bridge.request_notification_permission()).expect("request");
        assert!(flag.is_granted());
    }
}
