use payloads::{Summary, Transaction};
use rust_decimal::dec;
use std::time::Duration;
use test_helpers::{Endpoint, StateEvent, mock, mock::DemoDataset, spawn_app};

#[tokio::test]
async fn load_populates_state() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    app.seed_u1();
    let service = app.service(Some("u1"));

    service.load_data().await;

    let state = service.state();
    assert_eq!(
        state.transactions(),
        vec![Transaction::new(1), Transaction::new(2)]
    );
    assert_eq!(
        state.summary(),
        Summary {
            balance: dec!(100),
            income: dec!(200),
            expenses: dec!(100),
        }
    );
    assert!(!state.is_loading());
    assert!(service.notifier().notices().is_empty());
    assert!(service.log().entries().is_empty());

    Ok(())
}

#[tokio::test]
async fn load_hits_each_endpoint_once() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    app.seed_u1();
    let service = app.service(Some("u1"));

    service.load_data().await;

    assert_eq!(app.backend.hits(Endpoint::ListTransactions), 1);
    assert_eq!(app.backend.hits(Endpoint::Summary), 1);
    assert_eq!(app.backend.hits(Endpoint::DeleteTransaction), 0);

    Ok(())
}

#[tokio::test]
async fn loading_flag_wraps_the_fetches() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    app.seed_u1();
    let service = app.service(Some("u1"));

    service.load_data().await;

    let events = service.state().events();
    assert_eq!(events.first(), Some(&StateEvent::Loading(true)));
    assert_eq!(events.last(), Some(&StateEvent::Loading(false)));
    assert_eq!(service.state().loading_events(), vec![true, false]);
    // both results land inside the loading window
    assert_eq!(events.len(), 4);

    Ok(())
}

#[tokio::test]
async fn loading_is_observable_while_in_flight() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    app.seed_u1();
    app.backend.delay(Endpoint::Summary, Duration::from_millis(300));
    let service = app.service(Some("u1"));

    assert!(!service.state().is_loading());

    let observe = async {
        tokio::time::sleep(Duration::from_millis(100)).await;
        service.state().is_loading()
    };
    let ((), was_loading) = tokio::join!(service.load_data(), observe);

    assert!(was_loading);
    assert!(!service.state().is_loading());

    Ok(())
}

#[tokio::test]
async fn fetches_run_concurrently() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    app.seed_u1();
    app.backend
        .delay(Endpoint::ListTransactions, Duration::from_millis(400));
    app.backend
        .delay(Endpoint::Summary, Duration::from_millis(400));
    let service = app.service(Some("u1"));

    let started = std::time::Instant::now();
    service.load_data().await;

    // sequential fetches would take at least 800ms
    assert!(started.elapsed() < Duration::from_millis(750));
    assert_eq!(service.state().transactions().len(), 2);

    Ok(())
}

#[tokio::test]
async fn load_without_user_is_a_noop() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    app.seed_u1();

    for user_id in [None, Some(""), Some("   ")] {
        let service = app.service(user_id);
        service.load_data().await;
        service.fetch_transactions().await;
        service.fetch_summary().await;

        assert!(service.state().transactions().is_empty());
        assert_eq!(service.state().summary(), Summary::default());
        assert!(!service.state().is_loading());
        assert!(service.state().loading_events().is_empty());
        assert!(service.notifier().notices().is_empty());
    }
    assert_eq!(app.backend.total_hits(), 0);

    Ok(())
}

#[tokio::test]
async fn reload_replaces_previous_state() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    app.seed_u1();
    let service = app.service(Some("u1"));
    service.load_data().await;

    app.backend.push_transaction("u1", serde_json::json!({"id": 3}));
    app.backend.set_summary(
        "u1",
        serde_json::json!({
            "balance": "90.5",
            "income": "200",
            "expenses": "109.5",
        }),
    );
    service.load_data().await;

    assert_eq!(service.state().transactions().len(), 3);
    assert_eq!(service.state().summary().balance, dec!(90.5));
    assert_eq!(service.state().summary().expenses, dec!(109.5));

    Ok(())
}

#[tokio::test]
async fn unknown_fields_are_kept() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    DemoDataset::create(&app.backend);
    let service = app.service(Some(mock::ALICE));

    service.load_data().await;

    let transactions = service.state().transactions();
    assert_eq!(transactions.len(), 5);
    assert_eq!(
        transactions[0],
        Transaction::new(1)
            .with_field("user_id", mock::ALICE)
            .with_field("title", "Salary")
            .with_field("amount", "3200.00")
            .with_field("category", "Income")
            .with_field("created_at", "2025-01-01")
    );
    assert_eq!(transactions[0].text("title"), Some("Salary"));
    assert_eq!(transactions[1].amount(), Some(dec!(-1450.00)));

    // summary derived server-side from the amounts
    let summary = service.state().summary();
    assert_eq!(summary.income, dec!(3200.00));
    assert_eq!(summary.expenses, dec!(-1605.35));
    assert_eq!(summary.balance, dec!(1594.65));

    Ok(())
}

#[tokio::test]
async fn single_resource_refresh() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    app.seed_u1();
    let service = app.service(Some("u1"));

    service.fetch_summary().await;

    assert_eq!(service.state().summary().income, dec!(200));
    assert!(service.state().transactions().is_empty());
    assert_eq!(app.backend.hits(Endpoint::ListTransactions), 0);
    // only a full load toggles the loading flag
    assert!(service.state().loading_events().is_empty());

    Ok(())
}
