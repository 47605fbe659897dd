use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// Lets a user id be typed in, since sign-in lives outside this app.
#[function_component]
pub fn HomePage() -> Html {
    let navigator = use_navigator();
    let input_ref = use_node_ref();

    let on_submit = {
        let input_ref = input_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(input) = input_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let user_id = input.value().trim().to_string();
            if let (Some(navigator), false) = (&navigator, user_id.is_empty()) {
                navigator.push(&Route::Transactions { user_id });
            }
        })
    };

    html! {
        <div class="space-y-6 text-center">
            <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                {"Transactions"}
            </h1>
            <form onsubmit={on_submit} class="flex gap-2 justify-center">
                <input
                    ref={input_ref}
                    type="text"
                    placeholder="User id"
                    class="border border-neutral-300 dark:border-neutral-600 rounded-md px-3 py-2 bg-white dark:bg-neutral-800"
                />
                <button
                    type="submit"
                    class="bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 text-white px-4 py-2 rounded-md text-sm font-medium transition-colors"
                >
                    {"Open"}
                </button>
            </form>
        </div>
    }
}
