//! Page-title service contracts and baseline adapters.

use std::{cell::RefCell, rc::Rc};

/// Host service that replaces the document's visible title.
///
/// The title is treated as plain text by the host; no validation or escaping
/// happens on this seam.
pub trait PageTitleService {
    /// Replaces the host document's visible title.
    fn set_title(&self, title: &str);
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op title service for hosts without a document.
pub struct NoopPageTitleService;

impl PageTitleService for NoopPageTitleService {
    fn set_title(&self, _title: &str) {}
}

#[derive(Debug, Clone, Default)]
/// In-memory title service recording every title written, in write order.
pub struct MemoryPageTitleService {
    titles: Rc<RefCell<Vec<String>>>,
}

impl MemoryPageTitleService {
    /// Returns the currently visible title, if any was ever set.
    pub fn title(&self) -> Option<String> {
        self.titles.borrow().last().cloned()
    }

    /// Returns every title written so far, in write order.
    pub fn history(&self) -> Vec<String> {
        self.titles.borrow().clone()
    }
}

impl PageTitleService for MemoryPageTitleService {
    fn set_title(&self, title: &str) {
        self.titles.borrow_mut().push(title.to_string());
    }
}
