use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};

use engine::{Engine, EngineError};
use migration::MigratorTrait;
use uuid::Uuid;

async fn engine_with_users(users: &[&str]) -> (Engine, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let backend = db.get_database_backend();
    for user in users {
        db.execute(Statement::from_sql_and_values(
            backend,
            "INSERT INTO users (username, password) VALUES (?, ?)",
            vec![(*user).into(), "password".into()],
        ))
        .await
        .unwrap();
    }
    let engine = Engine::builder()
        .database(db.clone())
        .build()
        .await
        .unwrap();
    (engine, db)
}

#[tokio::test]
async fn new_card_starts_active() {
    let (engine, _db) = engine_with_users(&["alice"]).await;

    let card = engine.new_card("alice", "Mastercard").await.unwrap();
    assert!(card.is_active());
    assert_eq!(card.card_type.as_str(), "Mastercard");
    assert_eq!(card.number.len(), 16);

    let fetched = engine.card(card.id, "alice").await.unwrap();
    assert_eq!(fetched.id, card.id);
    assert_eq!(fetched.number, card.number);
    assert!(fetched.disabled_at.is_none());
}

#[tokio::test]
async fn reject_unknown_card_type() {
    let (engine, _db) = engine_with_users(&["alice"]).await;

    let err = engine.new_card("alice", "Discover").await.unwrap_err();
    assert!(matches!(err, EngineError::InvalidCardType(_)));
    assert!(engine.list_cards("alice").await.unwrap().is_empty());
}

#[tokio::test]
async fn list_contains_only_own_cards() {
    let (engine, _db) = engine_with_users(&["alice", "bob"]).await;

    let mine = engine.new_card("alice", "Visa").await.unwrap();
    engine.new_card("bob", "Mastercard").await.unwrap();
    engine.new_card("bob", "UnionPay").await.unwrap();

    let cards = engine.list_cards("alice").await.unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].id, mine.id);

    let cards = engine.list_cards("bob").await.unwrap();
    assert_eq!(cards.len(), 2);
    assert!(cards.iter().all(|card| card.user_id == "bob"));
}

#[tokio::test]
async fn list_preserves_creation_order() {
    let (engine, _db) = engine_with_users(&["alice"]).await;

    let first = engine.new_card("alice", "Visa").await.unwrap();
    let second = engine.new_card("alice", "Mastercard").await.unwrap();
    let third = engine.new_card("alice", "AMEX").await.unwrap();

    let ids: Vec<_> = engine
        .list_cards("alice")
        .await
        .unwrap()
        .into_iter()
        .map(|card| card.id)
        .collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);
}

#[tokio::test]
async fn foreign_card_read_is_indistinguishable_from_absent() {
    let (engine, _db) = engine_with_users(&["alice", "bob"]).await;

    let card = engine.new_card("bob", "Visa").await.unwrap();

    let foreign = engine.card(card.id, "alice").await.unwrap_err();
    let absent = engine.card(Uuid::new_v4(), "alice").await.unwrap_err();
    assert_eq!(foreign, absent);
    assert_eq!(
        foreign,
        EngineError::KeyNotFound("debit card not exists".to_string())
    );
}

#[tokio::test]
async fn deactivate_then_reactivate() {
    let (engine, _db) = engine_with_users(&["alice"]).await;

    let card = engine.new_card("alice", "Mastercard").await.unwrap();

    let card = engine.set_card_active(card.id, false, "alice").await.unwrap();
    assert!(card.disabled_at.is_some());

    let card = engine.set_card_active(card.id, true, "alice").await.unwrap();
    assert!(card.disabled_at.is_none());
}

#[tokio::test]
async fn set_active_is_idempotent() {
    let (engine, _db) = engine_with_users(&["alice"]).await;

    let card = engine.new_card("alice", "Visa").await.unwrap();

    // Activating an already active card changes nothing.
    let unchanged = engine.set_card_active(card.id, true, "alice").await.unwrap();
    assert_eq!(unchanged.id, card.id);
    assert!(unchanged.disabled_at.is_none());

    let disabled = engine
        .set_card_active(card.id, false, "alice")
        .await
        .unwrap();
    let again = engine
        .set_card_active(card.id, false, "alice")
        .await
        .unwrap();
    assert_eq!(again.disabled_at, disabled.disabled_at);
}

#[tokio::test]
async fn only_the_owner_can_toggle_or_delete() {
    let (engine, _db) = engine_with_users(&["alice", "bob"]).await;

    let card = engine.new_card("alice", "Visa").await.unwrap();

    let err = engine.set_card_active(card.id, false, "bob").await.unwrap_err();
    assert_eq!(
        err,
        EngineError::KeyNotFound("debit card not exists".to_string())
    );

    let err = engine.delete_card(card.id, "bob").await.unwrap_err();
    assert_eq!(
        err,
        EngineError::KeyNotFound("debit card not exists".to_string())
    );
    assert!(engine.card(card.id, "alice").await.is_ok());
}

#[tokio::test]
async fn delete_card_without_transactions() {
    let (engine, _db) = engine_with_users(&["alice"]).await;

    let card = engine.new_card("alice", "UnionPay").await.unwrap();
    engine.delete_card(card.id, "alice").await.unwrap();

    let err = engine.card(card.id, "alice").await.unwrap_err();
    assert_eq!(
        err,
        EngineError::KeyNotFound("debit card not exists".to_string())
    );
}

#[tokio::test]
async fn delete_card_with_transactions_conflicts() {
    let (engine, _db) = engine_with_users(&["alice"]).await;

    let card = engine.new_card("alice", "Visa").await.unwrap();
    engine
        .new_card_transaction("alice", card.id, 100_000, "idr")
        .await
        .unwrap();

    let err = engine.delete_card(card.id, "alice").await.unwrap_err();
    assert_eq!(
        err,
        EngineError::Conflict("debit card has transactions".to_string())
    );

    // Still conflicts with more history, and the card survives.
    engine
        .new_card_transaction("alice", card.id, 2500, "sgd")
        .await
        .unwrap();
    let err = engine.delete_card(card.id, "alice").await.unwrap_err();
    assert!(matches!(err, EngineError::Conflict(_)));
    assert!(engine.card(card.id, "alice").await.is_ok());
}
