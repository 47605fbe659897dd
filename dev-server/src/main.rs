//! Development server for transactions UI development
//!
//! This binary runs the mock transactions backend with demo data so the UI
//! can be developed without the real API.
//!
//! Usage: cargo run -p dev-server

use anyhow::Result;
use test_helpers::mock::DemoDataset;
use tracing::info;
use transactions::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = get_subscriber("info".into());
    init_subscriber(subscriber)?;

    let _ = dotenvy::dotenv();
    let port = match std::env::var("PORT") {
        Ok(port) => port.parse()?,
        Err(_) => 0,
    };

    info!("🚀 Starting transactions development server");
    let app = test_helpers::spawn_app_on_port(port).await?;
    app.client.health_check().await?;
    info!("✅ API server running on {}", app.address());

    info!("📊 Setting up development test data...");
    let dataset = DemoDataset::create(&app.backend);

    info!("🎯 Development server ready!");
    info!("   API: {}", app.address());
    info!("   UI:  cd ui && BACKEND_URL={} trunk serve", app.address());
    info!("");
    dataset.print_summary();
    info!("");
    info!("👋 Press Ctrl+C to shutdown");

    // Keep server running until Ctrl+C
    tokio::signal::ctrl_c().await?;
    info!("🛑 Shutting down development server");
    Ok(())
}
