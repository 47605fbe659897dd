//! Types shared between the transactions backend and its clients, plus the
//! HTTP client used to talk to that backend.

pub mod api_client;
pub mod responses;

pub use api_client::{APIClient, ClientError};
pub use responses::{Summary, Transaction};

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Id of the user whose transactions are being viewed.
///
/// Issued by the external auth provider, so it is an opaque string.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    /// An empty id is treated the same as no id at all. Whitespace-only ids
    /// are still sent.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Server-assigned transaction id. The backend may hand out either numeric
/// or string keys, so both are accepted.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[serde(untagged)]
pub enum TransactionId {
    #[display("{_0}")]
    Number(i64),
    #[display("{_0}")]
    Text(String),
}

impl TransactionId {
    /// Zero and empty ids never refer to a stored transaction.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Number(n) => *n == 0,
            Self::Text(s) => s.is_empty(),
        }
    }
}

impl From<i64> for TransactionId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for TransactionId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}
