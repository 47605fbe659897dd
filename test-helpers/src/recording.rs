//! Collaborators that remember everything the service told them.

use payloads::{Summary, Transaction};
use std::cell::RefCell;
use std::rc::Rc;
use transactions::{
    DiagnosticLog, MemoryState, NoticeLevel, Notifier, StateSink,
};

/// A single update pushed into the state sink, in order of arrival.
#[derive(Debug, Clone, PartialEq)]
pub enum StateEvent {
    Transactions(Vec<Transaction>),
    Summary(Summary),
    Loading(bool),
}

/// Keeps current state like [`MemoryState`] and also the history of
/// updates.
#[derive(Debug, Clone, Default)]
pub struct RecordingState {
    state: MemoryState,
    events: Rc<RefCell<Vec<StateEvent>>>,
}

impl RecordingState {
    pub fn transactions(&self) -> Vec<Transaction> {
        self.state.transactions()
    }

    pub fn summary(&self) -> Summary {
        self.state.summary()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn events(&self) -> Vec<StateEvent> {
        self.events.borrow().clone()
    }

    /// Only the loading flag transitions, in order.
    pub fn loading_events(&self) -> Vec<bool> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                StateEvent::Loading(is_loading) => Some(*is_loading),
                _ => None,
            })
            .collect()
    }

    pub fn clear_events(&self) {
        self.events.borrow_mut().clear();
    }
}

impl StateSink for RecordingState {
    fn set_transactions(&self, transactions: Vec<Transaction>) {
        self.events
            .borrow_mut()
            .push(StateEvent::Transactions(transactions.clone()));
        self.state.set_transactions(transactions);
    }

    fn set_summary(&self, summary: Summary) {
        self.events.borrow_mut().push(StateEvent::Summary(summary));
        self.state.set_summary(summary);
    }

    fn set_loading(&self, is_loading: bool) {
        self.events.borrow_mut().push(StateEvent::Loading(is_loading));
        self.state.set_loading(is_loading);
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notices: Rc<RefCell<Vec<(NoticeLevel, String)>>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<(NoticeLevel, String)> {
        self.notices.borrow().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.messages(NoticeLevel::Error)
    }

    pub fn successes(&self) -> Vec<String> {
        self.messages(NoticeLevel::Success)
    }

    fn messages(&self, level: NoticeLevel) -> Vec<String> {
        self.notices
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        self.notices.borrow_mut().push((level, message.to_string()));
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingLog {
    entries: Rc<RefCell<Vec<(String, String)>>>,
}

impl RecordingLog {
    /// `(context, detail)` pairs in the order they were logged.
    pub fn entries(&self) -> Vec<(String, String)> {
        self.entries.borrow().clone()
    }

    pub fn contexts(&self) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .map(|(context, _)| context.clone())
            .collect()
    }
}

impl DiagnosticLog for RecordingLog {
    fn log(&self, context: &str, detail: &str) {
        tracing::debug!("{context}: {detail}");
        self.entries
            .borrow_mut()
            .push((context.to_string(), detail.to_string()));
    }
}
