use payloads::{Transaction, TransactionId};
use rust_decimal::Decimal;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub transactions: Vec<Transaction>,
    pub on_delete: Callback<TransactionId>,
}

#[function_component]
pub fn TransactionList(props: &Props) -> Html {
    if props.transactions.is_empty() {
        return html! {
            <div class="text-center py-8 text-neutral-600 dark:text-neutral-400">
                {"No transactions yet"}
            </div>
        };
    }

    html! {
        <div class="space-y-3">
            {
                props.transactions.iter().map(|txn| {
                    html! {
                        <TransactionRow
                            key={txn.id.to_string()}
                            transaction={txn.clone()}
                            on_delete={props.on_delete.clone()}
                        />
                    }
                }).collect::<Html>()
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TransactionRowProps {
    pub transaction: Transaction,
    pub on_delete: Callback<TransactionId>,
}

#[function_component]
fn TransactionRow(props: &TransactionRowProps) -> Html {
    let txn = &props.transaction;

    // The backend decides which fields exist, so everything is optional
    let title = txn
        .text("title")
        .map(str::to_string)
        .unwrap_or_else(|| format!("Transaction {}", txn.id));
    let amount = txn.amount();
    let is_credit = amount.is_some_and(|a| a > Decimal::ZERO);

    let on_delete = {
        let id = txn.id.clone();
        let on_delete = props.on_delete.clone();
        Callback::from(move |_| on_delete.emit(id.clone()))
    };

    html! {
        <div class="border border-neutral-200 dark:border-neutral-700 rounded-lg p-4 bg-white dark:bg-neutral-800">
            <div class="flex items-start justify-between gap-4">
                <div class="flex-1">
                    <div class="flex items-center gap-2">
                        <span class="font-medium text-neutral-900 dark:text-neutral-100">
                            {title}
                        </span>
                        {
                            if let Some(category) = txn.text("category") {
                                html! {
                                    <span class="text-sm text-neutral-600 dark:text-neutral-400">
                                        {category}
                                    </span>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                    {
                        if let Some(created_at) = txn.text("created_at") {
                            html! {
                                <div class="text-sm text-neutral-600 dark:text-neutral-400 mt-1">
                                    {created_at}
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>

                {
                    if let Some(amount) = amount {
                        html! {
                            <div class={classes!(
                                "text-lg", "font-semibold",
                                if is_credit {
                                    classes!("text-green-600", "dark:text-green-400")
                                } else {
                                    classes!("text-red-600", "dark:text-red-400")
                                }
                            )}>
                                {if is_credit { "+" } else { "" }}
                                {format_amount(amount)}
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }

                <button
                    onclick={on_delete}
                    class="text-neutral-400 hover:text-red-600 dark:hover:text-red-400 transition-colors"
                    title="Delete transaction"
                >
                    {"🗑"}
                </button>
            </div>
        </div>
    }
}

pub fn format_amount(amount: Decimal) -> String {
    let sign = if amount.is_sign_negative() { "-" } else { "" };
    format!("{sign}${:.2}", amount.abs())
}
