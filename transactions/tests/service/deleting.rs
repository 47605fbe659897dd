use payloads::{Transaction, TransactionId};
use rust_decimal::dec;
use std::time::Duration;
use test_helpers::{
    Endpoint, Failure, mock, mock::DemoDataset, service_with_client,
    spawn_app, unreachable_client,
};
use transactions::NoticeLevel;

#[tokio::test]
async fn delete_reloads_everything() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    app.seed_u1();
    let service = app.service(Some("u1"));
    service.load_data().await;

    let list_hits = app.backend.hits(Endpoint::ListTransactions);
    let summary_hits = app.backend.hits(Endpoint::Summary);

    service.delete_transaction(&TransactionId::from(1)).await;

    assert_eq!(app.backend.hits(Endpoint::DeleteTransaction), 1);
    assert_eq!(app.backend.hits(Endpoint::ListTransactions), list_hits + 1);
    assert_eq!(app.backend.hits(Endpoint::Summary), summary_hits + 1);
    assert_eq!(service.state().transactions(), vec![Transaction::new(2)]);
    assert_eq!(
        service.notifier().notices(),
        vec![(
            NoticeLevel::Success,
            "Transaction deleted successfully".to_string()
        )]
    );

    Ok(())
}

#[tokio::test]
async fn success_is_notified_after_reload() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    app.seed_u1();
    let service = app.service(Some("u1"));

    service.delete_transaction(&TransactionId::from(2)).await;

    // the reload has fully settled before the success notice goes out
    assert_eq!(service.state().loading_events(), vec![true, false]);
    assert_eq!(service.notifier().successes().len(), 1);
    assert_eq!(service.state().transactions(), vec![Transaction::new(1)]);

    Ok(())
}

#[tokio::test]
async fn deleted_row_stays_until_reload_finishes() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    app.seed_u1();
    let service = app.service(Some("u1"));
    service.load_data().await;
    app.backend
        .delay(Endpoint::ListTransactions, Duration::from_millis(300));

    let observe = async {
        tokio::time::sleep(Duration::from_millis(100)).await;
        service.state().transactions().len()
    };
    let id = TransactionId::from(1);
    let ((), visible_mid_delete) =
        tokio::join!(service.delete_transaction(&id), observe);

    assert_eq!(visible_mid_delete, 2);
    assert_eq!(service.state().transactions().len(), 1);

    Ok(())
}

#[tokio::test]
async fn delete_updates_derived_summary() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    DemoDataset::create(&app.backend);
    let service = app.service(Some(mock::ALICE));
    service.load_data().await;
    assert_eq!(service.state().summary().balance, dec!(1594.65));

    // rent
    service.delete_transaction(&TransactionId::from(2)).await;

    let summary = service.state().summary();
    assert_eq!(summary.balance, dec!(3044.65));
    assert_eq!(summary.expenses, dec!(-155.35));
    assert_eq!(service.state().transactions().len(), 4);
    assert_eq!(app.backend.transactions(mock::ALICE).len(), 4);

    Ok(())
}

#[tokio::test]
async fn empty_id_is_a_noop() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    app.seed_u1();
    let service = app.service(Some("u1"));

    for id in [TransactionId::from(0), TransactionId::from("")] {
        service.delete_transaction(&id).await;
    }

    assert_eq!(app.backend.total_hits(), 0);
    assert!(service.state().events().is_empty());
    assert!(service.notifier().notices().is_empty());
    assert_eq!(app.backend.transactions("u1").len(), 2);

    Ok(())
}

#[tokio::test]
async fn whitespace_id_is_still_sent() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    app.seed_u1();
    let service = app.service(Some("u1"));

    service.delete_transaction(&TransactionId::from(" ")).await;

    assert_eq!(app.backend.hits(Endpoint::DeleteTransaction), 1);
    assert_eq!(app.backend.hits(Endpoint::ListTransactions), 0);
    assert_eq!(
        service.notifier().errors(),
        vec!["Failed to delete transaction".to_string()]
    );

    Ok(())
}

#[tokio::test]
async fn rejected_delete_does_not_reload() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    app.seed_u1();
    let service = app.service(Some("u1"));
    service.load_data().await;
    service.state().clear_events();

    // no such transaction
    service.delete_transaction(&TransactionId::from(99)).await;

    assert_eq!(app.backend.hits(Endpoint::DeleteTransaction), 1);
    assert_eq!(app.backend.hits(Endpoint::ListTransactions), 1);
    assert!(service.state().events().is_empty());
    assert_eq!(service.state().transactions().len(), 2);
    assert_eq!(
        service.notifier().notices(),
        vec![(
            NoticeLevel::Error,
            "Failed to delete transaction".to_string()
        )]
    );
    assert_eq!(
        service.log().entries(),
        vec![(
            "Delete transaction failed".to_string(),
            "Transaction not found".to_string()
        )]
    );

    Ok(())
}

#[tokio::test]
async fn server_error_on_delete_does_not_reload() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    app.seed_u1();
    app.backend.fail(
        Endpoint::DeleteTransaction,
        Failure::Status(500, "Internal server error".into()),
    );
    let service = app.service(Some("u1"));

    service.delete_transaction(&TransactionId::from(1)).await;

    assert_eq!(app.backend.hits(Endpoint::ListTransactions), 0);
    assert_eq!(app.backend.hits(Endpoint::Summary), 0);
    assert_eq!(app.backend.transactions("u1").len(), 2);
    assert_eq!(
        service.notifier().errors(),
        vec!["Failed to delete transaction".to_string()]
    );

    Ok(())
}

#[tokio::test]
async fn connection_failure_on_delete() -> anyhow::Result<()> {
    let service = service_with_client(unreachable_client()?, Some("u1"));

    service.delete_transaction(&TransactionId::from("abc")).await;

    assert!(service.state().events().is_empty());
    assert_eq!(
        service.notifier().errors(),
        vec![
            "Failed to delete transaction. Please check your connection."
                .to_string()
        ]
    );
    assert_eq!(
        service.log().contexts(),
        vec!["Error deleting transaction"]
    );

    Ok(())
}

#[tokio::test]
async fn delete_without_user_skips_reload() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    app.seed_u1();
    let service = app.service(None);

    service.delete_transaction(&TransactionId::from(1)).await;

    // deletion itself needs no user, only the reload does
    assert_eq!(app.backend.hits(Endpoint::DeleteTransaction), 1);
    assert_eq!(app.backend.transactions("u1").len(), 1);
    assert_eq!(app.backend.hits(Endpoint::ListTransactions), 0);
    assert!(service.state().events().is_empty());
    assert_eq!(service.notifier().successes().len(), 1);

    Ok(())
}

#[tokio::test]
async fn string_ids_are_deleted() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    app.backend.set_transactions(
        "u2",
        vec![
            serde_json::json!({"id": "tx a", "title": "first"}),
            serde_json::json!({"id": "tx-b", "title": "second"}),
        ],
    );
    let service = app.service(Some("u2"));

    service.delete_transaction(&TransactionId::from("tx a")).await;

    let transactions = service.state().transactions();
    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0].id, TransactionId::from("tx-b"));

    Ok(())
}
