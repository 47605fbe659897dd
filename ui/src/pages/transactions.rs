use payloads::UserId;
use yew::prelude::*;

use crate::components::{SummaryCard, TransactionList};
use crate::hooks::use_transactions;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub user_id: UserId,
}

#[function_component]
pub fn TransactionsPage(props: &Props) -> Html {
    let hook = use_transactions(Some(props.user_id.clone()));

    let on_refresh = {
        let load_data = hook.load_data.clone();
        Callback::from(move |_: MouseEvent| load_data.emit(()))
    };

    html! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                    {"Recent Transactions"}
                </h1>
                <button
                    onclick={on_refresh}
                    disabled={hook.is_loading}
                    class="text-sm text-neutral-600 hover:text-neutral-900 dark:text-neutral-400 dark:hover:text-neutral-100 disabled:opacity-50"
                >
                    {if hook.is_loading { "Refreshing..." } else { "Refresh" }}
                </button>
            </div>

            <SummaryCard summary={hook.summary} />

            {
                if hook.is_loading && hook.transactions.is_empty() {
                    html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {"Loading transactions..."}
                            </p>
                        </div>
                    }
                } else {
                    html! {
                        <TransactionList
                            transactions={hook.transactions.clone()}
                            on_delete={hook.delete_transaction.clone()}
                        />
                    }
                }
            }
        </div>
    }
}
