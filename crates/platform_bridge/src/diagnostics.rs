//! Diagnostics-sink contracts and baseline adapters.
//!
//! The sink is the bridge's only failure-reporting surface for recoverable
//! errors. It is injected so tests can assert on reported entries instead of
//! capturing global output streams.

use std::{cell::RefCell, rc::Rc};

/// Host sink for developer-facing diagnostic messages.
pub trait DiagnosticsSink {
    /// Records one diagnostic message.
    fn report(&self, message: &str);
}

#[derive(Debug, Clone, Copy, Default)]
/// Diagnostics sink that discards every message.
pub struct NoopDiagnosticsSink;

impl DiagnosticsSink for NoopDiagnosticsSink {
    fn report(&self, _message: &str) {}
}

#[derive(Debug, Clone, Default)]
/// In-memory diagnostics sink recording messages in report order.
pub struct MemoryDiagnosticsSink {
    entries: Rc<RefCell<Vec<String>>>,
}

impl MemoryDiagnosticsSink {
    /// Returns every reported message so far, in report order.
    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }
}

impl DiagnosticsSink for MemoryDiagnosticsSink {
    fn report(&self, message: &str) {
        self.entries.borrow_mut().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_records_in_report_order() {
        let sink = MemoryDiagnosticsSink::default();
        sink.report("first");
        sink.report("second");
        assert_eq!(sink.entries(), vec!["first".to_string(), "second".to_string()]);
    }
}
