use payloads::Summary;
use yew::prelude::*;

use super::transaction_list::format_amount;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub summary: Summary,
}

#[function_component]
pub fn SummaryCard(props: &Props) -> Html {
    let summary = &props.summary;

    html! {
        <div class="bg-white dark:bg-neutral-800 p-6 rounded-lg shadow-md border border-neutral-200 dark:border-neutral-700">
            <p class="text-sm text-neutral-600 dark:text-neutral-400">{"Total Balance"}</p>
            <p class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                {format_amount(summary.balance)}
            </p>
            <div class="grid grid-cols-2 gap-4 mt-4 text-sm">
                <div>
                    <p class="text-neutral-600 dark:text-neutral-400">{"Income"}</p>
                    <p class="font-semibold text-green-600 dark:text-green-400">
                        {format!("+{}", format_amount(summary.income))}
                    </p>
                </div>
                <div>
                    <p class="text-neutral-600 dark:text-neutral-400">{"Expenses"}</p>
                    <p class="font-semibold text-red-600 dark:text-red-400">
                        {format_amount(summary.expenses.abs())}
                    </p>
                </div>
            </div>
        </div>
    }
}
