//! Data service backing a user's transactions screen.
//!
//! [`TransactionsDataService`] fetches a user's transactions and summary,
//! tracks loading state, and deletes transactions. The UI it feeds, the
//! way errors are shown to the user, and where diagnostics go are all
//! supplied by the caller through [`StateSink`], [`Notifier`] and
//! [`DiagnosticLog`].

pub mod notify;
pub mod service;
pub mod state;
pub mod telemetry;

pub use notify::{
    DiagnosticLog, NoticeLevel, Notifier, TracingLog, TracingNotifier,
};
pub use service::TransactionsDataService;
pub use state::{MemoryState, StateSink, TransactionsState};

use anyhow::Context;
use payloads::APIClient;

pub struct Config {
    /// Base url of the transactions API, without a trailing slash.
    pub api_url: String,
}

impl Config {
    /// Read `API_URL`, loading a `.env` file first if one exists.
    pub fn from_env() -> anyhow::Result<Self> {
        // a missing .env is fine, the variable may come from the shell
        let _ = dotenvy::dotenv();
        let api_url =
            std::env::var("API_URL").context("API_URL must be set")?;
        Self::new(api_url)
    }

    pub fn new(api_url: impl Into<String>) -> anyhow::Result<Self> {
        let api_url = api_url.into();
        let api_url = api_url.trim().trim_end_matches('/');
        if api_url.is_empty() {
            anyhow::bail!("API url must not be empty");
        }
        Ok(Config {
            api_url: api_url.to_string(),
        })
    }

    pub fn client(&self) -> APIClient {
        APIClient::new(self.api_url.clone())
    }
}
