use payloads::{Summary, Transaction};
use std::cell::RefCell;
use std::rc::Rc;

/// Receives state updates from the service.
///
/// Implemented over whatever holds render state: Yew state handles in the
/// browser, [`MemoryState`] everywhere else.
pub trait StateSink {
    fn set_transactions(&self, transactions: Vec<Transaction>);
    fn set_summary(&self, summary: Summary);
    fn set_loading(&self, is_loading: bool);
}

/// Everything a transactions screen renders from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionsState {
    pub transactions: Vec<Transaction>,
    pub summary: Summary,
    pub is_loading: bool,
}

/// Shared in-memory state. Clones observe the same underlying value.
#[derive(Debug, Clone, Default)]
pub struct MemoryState {
    inner: Rc<RefCell<TransactionsState>>,
}

impl MemoryState {
    pub fn snapshot(&self) -> TransactionsState {
        self.inner.borrow().clone()
    }

    pub fn transactions(&self) -> Vec<Transaction> {
        self.inner.borrow().transactions.clone()
    }

    pub fn summary(&self) -> Summary {
        self.inner.borrow().summary
    }

    pub fn is_loading(&self) -> bool {
        self.inner.borrow().is_loading
    }
}

impl StateSink for MemoryState {
    fn set_transactions(&self, transactions: Vec<Transaction>) {
        self.inner.borrow_mut().transactions = transactions;
    }

    fn set_summary(&self, summary: Summary) {
        self.inner.borrow_mut().summary = summary;
    }

    fn set_loading(&self, is_loading: bool) {
        self.inner.borrow_mut().is_loading = is_loading;
    }
}

/// Holds the loading flag up for as long as it is alive.
///
/// Clearing happens on drop so that an early return, a panic, or the load
/// future being dropped mid-flight all leave the flag false.
pub(crate) struct LoadingGuard<'a, S: StateSink> {
    state: &'a S,
}

impl<'a, S: StateSink> LoadingGuard<'a, S> {
    pub(crate) fn start(state: &'a S) -> Self {
        state.set_loading(true);
        Self { state }
    }
}

impl<S: StateSink> Drop for LoadingGuard<'_, S> {
    fn drop(&mut self) {
        self.state.set_loading(false);
    }
}
