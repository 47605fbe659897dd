//! Demo data for the mock backend
//!
//! Used by the dev-server so the UI has something realistic to show, and by
//! tests that want more than a couple of bare records.

use serde_json::{Value, json};
use tracing::info;

use crate::MockBackend;

pub const ALICE: &str = "user_alice";
pub const BOB: &str = "user_bob";

/// `(id, title, amount, category, created_at)`
type Row = (i64, &'static str, &'static str, &'static str, &'static str);

const ALICE_ROWS: &[Row] = &[
    (1, "Salary", "3200.00", "Income", "2025-01-01"),
    (2, "Rent", "-1450.00", "Bills", "2025-01-02"),
    (3, "Groceries", "-86.35", "Food & Drinks", "2025-01-04"),
    (4, "Bus pass", "-45.00", "Transportation", "2025-01-05"),
    (5, "Cinema", "-24.00", "Entertainment", "2025-01-07"),
];

const BOB_ROWS: &[Row] = &[
    (6, "Freelance invoice", "850.00", "Income", "2025-01-03"),
    (7, "Coffee beans", "-18.90", "Food & Drinks", "2025-01-03"),
    (8, "Headphones", "-129.99", "Shopping", "2025-01-06"),
];

/// Users and transactions loaded into a fresh backend.
pub struct DemoDataset {
    pub users: Vec<String>,
}

impl DemoDataset {
    /// Seed the backend. Summaries are left to be derived from amounts so
    /// that deleting a transaction changes them.
    pub fn create(backend: &MockBackend) -> Self {
        info!("👤 Creating transactions for Alice");
        backend.set_transactions(ALICE, transactions(ALICE, ALICE_ROWS));

        info!("👤 Creating transactions for Bob");
        backend.set_transactions(BOB, transactions(BOB, BOB_ROWS));

        DemoDataset {
            users: backend.users(),
        }
    }

    pub fn print_summary(&self) {
        info!("📊 Demo users:");
        for user in &self.users {
            info!("   /users/{user}");
        }
    }
}

fn transactions(user_id: &str, rows: &[Row]) -> Vec<Value> {
    rows.iter()
        .map(|&(id, title, amount, category, created_at)| {
            json!({
                "id": id,
                "user_id": user_id,
                "title": title,
                "amount": amount,
                "category": category,
                "created_at": created_at,
            })
        })
        .collect()
}
