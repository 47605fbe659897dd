//! In-memory stand-in for the transactions backend.
//!
//! Serves the same routes as the real API. Tests seed it, make individual
//! endpoints fail or slow down, and count how often each endpoint was hit.

use actix_web::{
    App, HttpResponse, HttpServer, delete, dev::Server, get, http::StatusCode,
    web,
};
use payloads::Summary;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::net::TcpListener;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    HealthCheck,
    ListTransactions,
    Summary,
    DeleteTransaction,
}

/// How an endpoint should misbehave until recovered.
#[derive(Debug, Clone)]
pub enum Failure {
    /// Respond with this status code and body text.
    Status(u16, String),
    /// Respond 200 with a body that is not valid JSON.
    MalformedBody,
}

#[derive(Default)]
struct BackendState {
    transactions: HashMap<String, Vec<Value>>,
    summaries: HashMap<String, Value>,
    failures: HashMap<Endpoint, Failure>,
    delays: HashMap<Endpoint, Duration>,
    hits: HashMap<Endpoint, usize>,
}

impl BackendState {
    /// Explicitly seeded summary, otherwise one derived from the `amount`
    /// of each stored transaction.
    fn summary_for(&self, user_id: &str) -> Value {
        if let Some(summary) = self.summaries.get(user_id) {
            return summary.clone();
        }

        let amounts = self
            .transactions
            .get(user_id)
            .into_iter()
            .flatten()
            .filter_map(|txn| {
                serde_json::from_value::<Decimal>(txn.get("amount")?.clone())
                    .ok()
            });
        let mut summary = Summary::default();
        for amount in amounts {
            summary.balance += amount;
            if amount.is_sign_positive() {
                summary.income += amount;
            } else {
                summary.expenses += amount;
            }
        }
        json!(summary)
    }

    /// Remove a transaction from whichever user owns it.
    fn remove_transaction(&mut self, id: &str) -> bool {
        for transactions in self.transactions.values_mut() {
            let before = transactions.len();
            transactions.retain(|txn| !has_id(txn, id));
            if transactions.len() != before {
                return true;
            }
        }
        false
    }
}

/// Compare ids the way they appear in a url path.
fn has_id(txn: &Value, id: &str) -> bool {
    match txn.get("id") {
        Some(Value::Number(n)) => n.to_string() == id,
        Some(Value::String(s)) => s == id,
        _ => false,
    }
}

#[derive(Clone, Default)]
pub struct MockBackend {
    inner: Arc<Mutex<BackendState>>,
}

impl MockBackend {
    fn lock(&self) -> MutexGuard<'_, BackendState> {
        // a failed assertion on another thread must not wedge the backend
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn set_transactions(&self, user_id: &str, transactions: Vec<Value>) {
        self.lock()
            .transactions
            .insert(user_id.to_string(), transactions);
    }

    pub fn push_transaction(&self, user_id: &str, transaction: Value) {
        self.lock()
            .transactions
            .entry(user_id.to_string())
            .or_default()
            .push(transaction);
    }

    pub fn transactions(&self, user_id: &str) -> Vec<Value> {
        self.lock()
            .transactions
            .get(user_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Pin the summary returned for a user instead of deriving it.
    pub fn set_summary(&self, user_id: &str, summary: Value) {
        self.lock().summaries.insert(user_id.to_string(), summary);
    }

    /// Users that have transactions stored, sorted.
    pub fn users(&self) -> Vec<String> {
        let mut users: Vec<_> =
            self.lock().transactions.keys().cloned().collect();
        users.sort();
        users
    }

    pub fn fail(&self, endpoint: Endpoint, failure: Failure) {
        self.lock().failures.insert(endpoint, failure);
    }

    pub fn recover(&self, endpoint: Endpoint) {
        self.lock().failures.remove(&endpoint);
    }

    /// Hold every response from `endpoint` for `delay` before answering.
    pub fn delay(&self, endpoint: Endpoint, delay: Duration) {
        self.lock().delays.insert(endpoint, delay);
    }

    pub fn hits(&self, endpoint: Endpoint) -> usize {
        self.lock().hits.get(&endpoint).copied().unwrap_or_default()
    }

    pub fn total_hits(&self) -> usize {
        self.lock().hits.values().sum()
    }

    /// Count the hit and build the response from the state at arrival,
    /// then hold it for any configured delay.
    async fn respond(
        &self,
        endpoint: Endpoint,
        success: impl FnOnce(&mut BackendState) -> HttpResponse,
    ) -> HttpResponse {
        let (delay, response) = {
            let mut state = self.lock();
            *state.hits.entry(endpoint).or_default() += 1;
            let failure = state.failures.get(&endpoint).cloned();
            let response = match failure {
                Some(failure) => failure_response(failure),
                None => success(&mut *state),
            };
            (state.delays.get(&endpoint).copied(), response)
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        response
    }
}

fn failure_response(failure: Failure) -> HttpResponse {
    match failure {
        Failure::Status(code, body) => {
            let status = StatusCode::from_u16(code)
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            HttpResponse::build(status).body(body)
        }
        Failure::MalformedBody => HttpResponse::Ok()
            .content_type("application/json")
            .body(r#"{"balance": "#),
    }
}

#[get("/health_check")]
async fn health_check(backend: web::Data<MockBackend>) -> HttpResponse {
    backend
        .respond(Endpoint::HealthCheck, |_| {
            HttpResponse::Ok().body("healthy")
        })
        .await
}

#[get("/transactions/summary/{user_id}")]
async fn get_summary(
    user_id: web::Path<String>,
    backend: web::Data<MockBackend>,
) -> HttpResponse {
    backend
        .respond(Endpoint::Summary, |state| {
            HttpResponse::Ok().json(state.summary_for(&user_id))
        })
        .await
}

#[get("/transactions/{user_id}")]
async fn list_transactions(
    user_id: web::Path<String>,
    backend: web::Data<MockBackend>,
) -> HttpResponse {
    backend
        .respond(Endpoint::ListTransactions, |state| {
            let transactions =
                state.transactions.get(user_id.as_str()).cloned();
            HttpResponse::Ok().json(transactions.unwrap_or_default())
        })
        .await
}

#[delete("/transactions/{id}")]
async fn delete_transaction(
    id: web::Path<String>,
    backend: web::Data<MockBackend>,
) -> HttpResponse {
    backend
        .respond(Endpoint::DeleteTransaction, |state| {
            if state.remove_transaction(&id) {
                HttpResponse::Ok().json(
                    json!({"message": "Transaction deleted successfully"}),
                )
            } else {
                HttpResponse::NotFound().body("Transaction not found")
            }
        })
        .await
}

/// Build the server, but not await it.
pub fn build(
    listener: TcpListener,
    backend: MockBackend,
) -> std::io::Result<Server> {
    let backend = web::Data::new(backend);
    let server = HttpServer::new(move || {
        App::new()
            .app_data(backend.clone())
            .service(health_check)
            .service(get_summary)
            .service(list_transactions)
            .service(delete_transaction)
    })
    .workers(1)
    .listen(listener)?
    .run();
    Ok(server)
}
