use payloads::{APIClient, UserId};
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod contexts;
mod hooks;
mod logs;
mod pages;

use components::ToastContainer;
use contexts::ToastProvider;
use pages::{HomePage, NotFoundPage, TransactionsPage};

// Global API client - configurable via environment or same-origin fallback
pub fn get_api_client() -> APIClient {
    // Try environment variable first (set at build time)
    let address = option_env!("BACKEND_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .or_else(|| web_sys::window()?.location().origin().ok())
        .unwrap_or_default();

    APIClient::new(address)
}

#[function_component]
pub fn App() -> Html {
    logs::init_logging();
    html! {
        <ToastProvider>
            <BrowserRouter>
                <div class="min-h-screen bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100 transition-colors">
                    <ToastContainer />
                    <main class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                        <Switch<Route> render={switch} />
                    </main>
                </div>
            </BrowserRouter>
        </ToastProvider>
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/users/:user_id")]
    Transactions { user_id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Transactions { user_id } => html! {
            <TransactionsPage user_id={UserId(user_id)} />
        },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
