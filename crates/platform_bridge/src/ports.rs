//! Outbound message ports from the embedded application to its host page.

use std::{cell::RefCell, rc::Rc};

use serde::{Deserialize, Serialize};

/// One outbound message emitted by the embedded application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppMessage {
    /// Replace the host document's visible title.
    SetTitle(String),
    /// Sound the page's alarm audio resource.
    Alarm,
    /// Show a "next up" notification for the named participant.
    NotifyNext(String),
}

type Handler = Rc<dyn Fn(AppMessage)>;

/// One-directional signal path from the embedded application to host-side handlers.
///
/// Handlers run synchronously inside [`AppPorts::emit`], so messages reach them in
/// emission order and, for a single message, in registration order. Emitting with no
/// subscriber drops the message.
#[derive(Clone, Default)]
pub struct AppPorts {
    handlers: Rc<RefCell<Vec<Handler>>>,
}

impl AppPorts {
    /// Registers a host-side handler for outbound messages.
    pub fn subscribe(&self, handler: impl Fn(AppMessage) + 'static) {
        self.handlers.borrow_mut().push(Rc::new(handler));
    }

    /// Emits one outbound message toward every subscribed handler.
    pub fn emit(&self, message: AppMessage) {
        let handlers: Vec<Handler> = self.handlers.borrow().clone();
        for handler in handlers {
            handler(message.clone());
        }
    }
}
