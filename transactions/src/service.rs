use payloads::{APIClient, ClientError, TransactionId, UserId};
use std::cell::RefCell;
use std::future::Future;

use crate::notify::{DiagnosticLog, NoticeLevel, Notifier};
use crate::state::{LoadingGuard, StateSink};

/// Loads and mutates one user's transactions.
///
/// Every operation fails soft: errors are logged, shown to the user through
/// the notifier, and replaced by empty defaults. Nothing is ever returned to
/// the caller as an error.
///
/// The service is single-threaded. Loads are not serialized against each
/// other, so when two overlap the one that settles last wins.
pub struct TransactionsDataService<S, N, L> {
    client: APIClient,
    user_id: RefCell<Option<UserId>>,
    state: S,
    notifier: N,
    log: L,
}

impl<S, N, L> TransactionsDataService<S, N, L>
where
    S: StateSink,
    N: Notifier,
    L: DiagnosticLog,
{
    /// Build a service. Nothing is fetched until [`Self::load_data`] or
    /// [`Self::set_user_id`] is called.
    pub fn new(
        client: APIClient,
        user_id: Option<UserId>,
        state: S,
        notifier: N,
        log: L,
    ) -> Self {
        Self {
            client,
            user_id: RefCell::new(user_id),
            state,
            notifier,
            log,
        }
    }

    pub fn client(&self) -> &APIClient {
        &self.client
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn log(&self) -> &L {
        &self.log
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.user_id.borrow().clone()
    }

    /// The current user id, if it is usable for requests.
    fn active_user_id(&self) -> Option<UserId> {
        self.user_id().filter(|id| !id.is_empty())
    }

    /// Switch to another user. A reload runs whenever the id actually
    /// changes to a usable one.
    pub async fn set_user_id(&self, user_id: Option<UserId>) {
        let previous = self.user_id.replace(user_id.clone());
        if previous == user_id {
            return;
        }
        if user_id.is_some_and(|id| !id.is_empty()) {
            self.load_data().await;
        }
    }

    /// Refresh transactions and summary together.
    ///
    /// Both requests are in flight at the same time. Each falls back to
    /// its own default on failure, independently of the other.
    pub async fn load_data(&self) {
        let Some(user_id) = self.active_user_id() else {
            return;
        };
        tracing::debug!(%user_id, "Loading transactions");

        let _loading = LoadingGuard::start(&self.state);
        futures::join!(self.fetch_transactions(), self.fetch_summary());
    }

    /// Refresh only the transaction list.
    pub async fn fetch_transactions(&self) {
        let client = &self.client;
        let transactions = self
            .safe_fetch("Transactions fetch", |user_id| async move {
                client.get_transactions(&user_id).await
            })
            .await;
        self.state.set_transactions(transactions.unwrap_or_default());
    }

    /// Refresh only the summary.
    pub async fn fetch_summary(&self) {
        let client = &self.client;
        let summary = self
            .safe_fetch("Summary fetch", |user_id| async move {
                client.get_summary(&user_id).await
            })
            .await;
        self.state.set_summary(summary.unwrap_or_default());
    }

    /// Delete a transaction, then reload everything.
    ///
    /// The deleted row stays in state until the reload completes. A failed
    /// delete does not reload.
    #[tracing::instrument(skip(self))]
    pub async fn delete_transaction(&self, id: &TransactionId) {
        if id.is_empty() {
            return;
        }

        match self.client.delete_transaction(id).await {
            Ok(()) => {
                self.load_data().await;
                self.notifier.notify(
                    NoticeLevel::Success,
                    "Transaction deleted successfully",
                );
            }
            Err(ClientError::APIError(_, text)) => {
                self.log.log("Delete transaction failed", &text);
                self.notifier
                    .notify(NoticeLevel::Error, "Failed to delete transaction");
            }
            Err(e) => {
                self.log.log("Error deleting transaction", &error_chain(e));
                self.notifier.notify(
                    NoticeLevel::Error,
                    "Failed to delete transaction. Please check your \
                     connection.",
                );
            }
        }
    }

    /// Run a read request for the current user, converting every failure
    /// into `None` after logging and notifying.
    ///
    /// Without a usable user id no request is made.
    async fn safe_fetch<T, F, Fut>(&self, action: &str, request: F) -> Option<T>
    where
        F: FnOnce(UserId) -> Fut,
        Fut: Future<Output = Result<T, ClientError>>,
    {
        let user_id = self.active_user_id()?;

        let failure = match request(user_id).await {
            Ok(data) => return Some(data),
            Err(ClientError::APIError(status, text)) => {
                tracing::debug!(%status, "{action} rejected");
                (format!("{action} failed"), text)
            }
            Err(e) => (format!("{action} exception"), error_chain(e)),
        };

        self.log.log(&failure.0, &failure.1);
        self.notifier.notify(
            NoticeLevel::Error,
            &format!("{action} failed. Returning empty data."),
        );
        None
    }
}

fn error_chain(e: ClientError) -> String {
    let e: anyhow::Error = e.into();
    format!("{e:#}")
}
