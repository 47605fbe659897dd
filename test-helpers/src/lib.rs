pub mod backend;
pub mod mock;
pub mod recording;

pub use backend::{Endpoint, Failure, MockBackend};
pub use recording::{
    RecordingLog, RecordingNotifier, RecordingState, StateEvent,
};

use payloads::{APIClient, UserId};
use serde_json::json;
use std::net::TcpListener;
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;
use transactions::{TransactionsDataService, telemetry};

/// The service wired to recording collaborators.
pub type TestService =
    TransactionsDataService<RecordingState, RecordingNotifier, RecordingLog>;

pub struct TestApp {
    pub port: u16,
    pub backend: MockBackend,
    pub client: APIClient,
}

impl TestApp {
    pub fn address(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    /// A service for `user_id` against this app's backend. Nothing has been
    /// loaded yet.
    pub fn service(&self, user_id: Option<&str>) -> TestService {
        service_with_client(APIClient::new(self.address()), user_id)
    }

    /// Seed user `u1` with two bare transactions and a fixed summary.
    pub fn seed_u1(&self) {
        self.backend
            .set_transactions("u1", vec![json!({"id": 1}), json!({"id": 2})]);
        self.backend.set_summary(
            "u1",
            json!({"balance": 100, "income": 200, "expenses": 100}),
        );
    }
}

pub fn service_with_client(
    client: APIClient,
    user_id: Option<&str>,
) -> TestService {
    TransactionsDataService::new(
        client,
        user_id.map(UserId::from),
        RecordingState::default(),
        RecordingNotifier::default(),
        RecordingLog::default(),
    )
}

/// A client pointed at a port nothing is listening on.
pub fn unreachable_client() -> anyhow::Result<APIClient> {
    // the listener is dropped straight away, freeing the port
    let port = TcpListener::bind("127.0.0.1:0")?.local_addr()?.port();
    Ok(APIClient::new(format!("http://127.0.0.1:{port}")))
}

pub async fn spawn_app_on_port(port: u16) -> anyhow::Result<TestApp> {
    let subscriber = telemetry::get_subscriber("error".into());
    let _ = LogTracer::init();
    let _ = subscriber.try_init();

    // OS assigns the port if binding to 0
    let listener = TcpListener::bind(("127.0.0.1", port))?;
    let port = listener.local_addr()?.port();

    let backend = MockBackend::default();
    let server = backend::build(listener, backend.clone())?;
    tokio::spawn(server);

    let client = APIClient::new(format!("http://127.0.0.1:{port}"));
    Ok(TestApp {
        port,
        backend,
        client,
    })
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app() -> anyhow::Result<TestApp> {
    spawn_app_on_port(0).await
}
