use payloads::{Summary, Transaction, TransactionId, UserId};
use std::rc::Rc;
use transactions::{StateSink, TracingLog, TransactionsDataService};
use yew::prelude::*;

use crate::contexts::{ToastHandle, use_toast};
use crate::get_api_client;

/// Hook return type for a user's transactions
pub struct TransactionsHookReturn {
    pub transactions: Vec<Transaction>,
    pub summary: Summary,
    pub is_loading: bool,
    /// Reload transactions and summary.
    pub load_data: Callback<()>,
    /// Delete a transaction, then reload everything.
    pub delete_transaction: Callback<TransactionId>,
}

/// Component state the service writes into.
#[derive(Clone)]
struct HookState {
    transactions: UseStateHandle<Vec<Transaction>>,
    summary: UseStateHandle<Summary>,
    is_loading: UseStateHandle<bool>,
}

impl StateSink for HookState {
    fn set_transactions(&self, transactions: Vec<Transaction>) {
        self.transactions.set(transactions);
    }

    fn set_summary(&self, summary: Summary) {
        self.summary.set(summary);
    }

    fn set_loading(&self, is_loading: bool) {
        self.is_loading.set(is_loading);
    }
}

type Service = TransactionsDataService<HookState, ToastHandle, TracingLog>;

/// Hook to fetch a user's transactions and summary.
///
/// Loads automatically on mount and whenever `user_id` changes to a usable
/// id. Errors are shown as toasts and leave empty data behind.
#[hook]
pub fn use_transactions(user_id: Option<UserId>) -> TransactionsHookReturn {
    let toast = use_toast();
    let transactions = use_state(Vec::<Transaction>::new);
    let summary = use_state(Summary::default);
    let is_loading = use_state(|| false);

    let service = {
        let state = HookState {
            transactions: transactions.clone(),
            summary: summary.clone(),
            is_loading: is_loading.clone(),
        };
        use_memo(user_id.clone(), move |user_id| {
            Service::new(
                get_api_client(),
                user_id.clone(),
                state,
                toast,
                TracingLog,
            )
        })
    };

    let load_data = {
        let service = service.clone();
        use_callback(user_id.clone(), move |_: (), _| {
            let service: Rc<Service> = service.clone();
            yew::platform::spawn_local(async move {
                service.load_data().await;
            });
        })
    };

    let delete_transaction = {
        let service = service.clone();
        use_callback(user_id.clone(), move |id: TransactionId, _| {
            let service: Rc<Service> = service.clone();
            yew::platform::spawn_local(async move {
                service.delete_transaction(&id).await;
            });
        })
    };

    // Auto-load whenever the user changes
    {
        let load_data = load_data.clone();
        use_effect_with(user_id, move |user_id| {
            if user_id.as_ref().is_some_and(|id| !id.is_empty()) {
                load_data.emit(());
            }
        });
    }

    TransactionsHookReturn {
        transactions: (*transactions).clone(),
        summary: *summary,
        is_loading: *is_loading,
        load_data,
        delete_transaction,
    }
}
