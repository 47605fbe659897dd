use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::TransactionId;

/// A transaction as returned by the backend.
///
/// Only the id is interpreted; every other field is carried through
/// untouched so the UI can show whatever the server sends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Transaction {
    pub fn new(id: impl Into<TransactionId>) -> Self {
        Self {
            id: id.into(),
            fields: Map::new(),
        }
    }

    /// Builder-style helper for attaching an extra field.
    pub fn with_field(
        mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// A string field, if present and actually a string.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// The `amount` field, which the backend may send as a JSON number or
    /// as a numeric string.
    pub fn amount(&self) -> Option<Decimal> {
        self.fields
            .get("amount")
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }
}

/// Per-user aggregate computed server-side.
///
/// Fields accept JSON numbers as well as numeric strings, since SQL numeric
/// columns usually arrive as strings.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize,
)]
pub struct Summary {
    pub balance: Decimal,
    pub income: Decimal,
    pub expenses: Decimal,
}
