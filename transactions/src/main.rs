//! Command line front end for the transactions service.
//!
//! Loads a user's transactions and summary from `API_URL` and prints them
//! as JSON, optionally deleting a transaction first.
//!
//! Usage: cargo run -p transactions -- --user <USER_ID> [--delete <ID>]

use clap::Parser;
use payloads::{TransactionId, UserId};
use transactions::{
    Config, MemoryState, TracingLog, TracingNotifier, TransactionsDataService,
    telemetry::{get_subscriber, init_subscriber, log_error},
};

#[derive(Parser, Debug)]
#[command(version, about = "Inspect a user's transactions")]
struct Args {
    /// Id of the user whose transactions to load
    #[arg(short, long)]
    user: String,

    /// Delete this transaction before printing
    #[arg(short, long)]
    delete: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("info".into());
    init_subscriber(subscriber)?;

    let args = Args::parse();
    if let Err(e) = run(args).await {
        log_error(e);
        std::process::exit(1);
    }
    Ok(())
}

async fn run(args: Args) -> anyhow::Result<()> {
    let config = Config::from_env()?;
    tracing::info!("Using API at {}", config.api_url);

    let service = TransactionsDataService::new(
        config.client(),
        None,
        MemoryState::default(),
        TracingNotifier,
        TracingLog,
    );
    service.set_user_id(Some(UserId(args.user))).await;

    if let Some(id) = args.delete {
        service.delete_transaction(&parse_transaction_id(&id)).await;
    }

    let state = service.state().snapshot();
    println!("{}", serde_json::to_string_pretty(&state.transactions)?);
    println!("{}", serde_json::to_string_pretty(&state.summary)?);
    Ok(())
}

/// Numeric ids are sent as numbers, anything else as text.
fn parse_transaction_id(raw: &str) -> TransactionId {
    raw.parse::<i64>()
        .map(TransactionId::Number)
        .unwrap_or_else(|_| TransactionId::from(raw))
}
