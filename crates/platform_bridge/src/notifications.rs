//! Notification service contracts and baseline adapters.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};

/// Object-safe boxed future used by [`NotificationService`].
pub type NotificationFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Resolved outcome of an asynchronous notification-permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PermissionOutcome {
    /// The user explicitly granted notification permission.
    Granted,
    /// The user explicitly denied notification permission.
    Denied,
    /// The prompt was dismissed without an explicit choice.
    Default,
}

/// Host service for user-visible notifications.
pub trait NotificationService {
    /// Returns whether the host exposes a notification capability at all.
    fn is_supported(&self) -> bool;

    /// Prompts the user for notification permission.
    fn request_permission<'a>(
        &'a self,
    ) -> NotificationFuture<'a, Result<PermissionOutcome, String>>;

    /// Displays a notification with a title and body text.
    fn show<'a>(
        &'a self,
        title: &'a str,
        body: &'a str,
    ) -> NotificationFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op notification service for hosts without a notification capability.
pub struct NoopNotificationService;

impl NotificationService for NoopNotificationService {
    fn is_supported(&self) -> bool {
        false
    }

    fn request_permission<'a>(
        &'a self,
    ) -> NotificationFuture<'a, Result<PermissionOutcome, String>> {
        Box::pin(async { Ok(PermissionOutcome::Default) })
    }

    fn show<'a>(
        &'a self,
        _title: &'a str,
        _body: &'a str,
    ) -> NotificationFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone)]
/// In-memory notification service with a scripted permission outcome and recorded shows.
pub struct MemoryNotificationService {
    supported: bool,
    permission: Result<PermissionOutcome, String>,
    shown: Rc<RefCell<Vec<(String, String)>>>,
}

impl MemoryNotificationService {
    /// Creates a supported service whose permission request resolves to `outcome`.
    pub fn with_permission(outcome: PermissionOutcome) -> Self {
        Self {
            supported: true,
            permission: Ok(outcome),
            shown: Rc::default(),
        }
    }

    /// Creates a service reporting the notification capability as absent.
    pub fn unsupported() -> Self {
        Self {
            supported: false,
            permission: Ok(PermissionOutcome::Default),
            shown: Rc::default(),
        }
    }

    /// Creates a supported service whose permission request fails with `error`.
    pub fn failing_permission(error: impl Into<String>) -> Self {
        Self {
            supported: true,
            permission: Err(error.into()),
            shown: Rc::default(),
        }
    }

    /// Returns every `(title, body)` pair shown so far, in show order.
    pub fn shown(&self) -> Vec<(String, String)> {
        self.shown.borrow().clone()
    }
}

impl Default for MemoryNotificationService {
    fn default() -> Self {
        Self::with_permission(PermissionOutcome::Granted)
    }
}

impl NotificationService for MemoryNotificationService {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn request_permission<'a>(
        &'a self,
    ) -> NotificationFuture<'a, Result<PermissionOutcome, String>> {
        Box::pin(async move { self.permission.clone() })
    }

    fn show<'a>(
        &'a self,
        title: &'a str,
        body: &'a str,
    ) -> NotificationFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.shown
                .borrow_mut()
                .push((title.to_string(), body.to_string()));
            Ok(())
        })
    }
}
