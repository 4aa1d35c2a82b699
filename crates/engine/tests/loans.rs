use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};

use engine::{Currency, Engine, EngineError, LoanStatus};
use migration::MigratorTrait;

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
async fn new_loan_is_due_with_full_outstanding() {
    let (engine, _db) = engine_with_users(&["alice"]).await;

    let loan = engine.new_loan("alice", 3000, 3, Some("vnd")).await.unwrap();
    assert_eq!(loan.amount, 3000);
    assert_eq!(loan.terms, 3);
    assert_eq!(loan.outstanding_amount, 3000);
    assert_eq!(loan.currency, Currency::Vnd);
    assert_eq!(loan.status, LoanStatus::Due);

    let fetched = engine.loan(loan.id, "alice").await.unwrap();
    assert_eq!(fetched.id, loan.id);
    assert_eq!(fetched.outstanding_amount, 3000);
    assert_eq!(fetched.status, LoanStatus::Due);
}

#[tokio::test]
async fn loan_currency_defaults_to_sgd() {
    let (engine, _db) = engine_with_users(&["alice"]).await;

    let loan = engine.new_loan("alice", 3000, 3, None).await.unwrap();
    assert_eq!(loan.currency, Currency::Sgd);
}

#[tokio::test]
async fn reject_invalid_loan_requests() {
    let (engine, _db) = engine_with_users(&["alice"]).await;

    assert!(matches!(
        engine.new_loan("alice", 0, 3, None).await.unwrap_err(),
        EngineError::InvalidAmount(_)
    ));
    assert!(matches!(
        engine.new_loan("alice", 3000, 0, None).await.unwrap_err(),
        EngineError::InvalidAmount(_)
    ));
    assert!(matches!(
        engine.new_loan("alice", 3000, 3, Some("usd")).await.unwrap_err(),
        EngineError::CurrencyMismatch(_)
    ));
}

#[tokio::test]
async fn list_contains_only_own_loans() {
    let (engine, _db) = engine_with_users(&["alice", "bob"]).await;

    let mine = engine.new_loan("alice", 3000, 3, None).await.unwrap();
    engine.new_loan("bob", 9000, 6, None).await.unwrap();

    let loans = engine.list_loans("alice").await.unwrap();
    assert_eq!(loans.len(), 1);
    assert_eq!(loans[0].id, mine.id);
}

#[tokio::test]
async fn foreign_loan_is_hidden() {
    let (engine, _db) = engine_with_users(&["alice", "bob"]).await;

    let loan = engine.new_loan("bob", 3000, 3, None).await.unwrap();

    let err = engine.loan(loan.id, "alice").await.unwrap_err();
    assert_eq!(err, EngineError::KeyNotFound("loan not exists".to_string()));

    let err = engine.repay_loan(loan.id, 1000, "alice").await.unwrap_err();
    assert_eq!(err, EngineError::KeyNotFound("loan not exists".to_string()));
    assert_eq!(
        engine.loan(loan.id, "bob").await.unwrap().outstanding_amount,
        3000
    );
}

#[tokio::test]
async fn repayments_decrease_outstanding_monotonically() {
    let (engine, _db) = engine_with_users(&["alice"]).await;

    let loan = engine.new_loan("alice", 3000, 3, None).await.unwrap();

    let mut previous = loan.outstanding_amount;
    for payment in [1000, 500, 1500] {
        let loan = engine.repay_loan(loan.id, payment, "alice").await.unwrap();
        assert!(loan.outstanding_amount < previous);
        assert!(loan.outstanding_amount >= 0);
        previous = loan.outstanding_amount;
    }
    assert_eq!(previous, 0);
}

#[tokio::test]
async fn full_repayment_is_terminal() {
    let (engine, _db) = engine_with_users(&["alice"]).await;

    let loan = engine.new_loan("alice", 3000, 3, None).await.unwrap();
    let loan = engine.repay_loan(loan.id, 3000, "alice").await.unwrap();
    assert_eq!(loan.outstanding_amount, 0);
    assert_eq!(loan.status, LoanStatus::Repaid);

    let err = engine.repay_loan(loan.id, 1, "alice").await.unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidOperation("loan already repaid".to_string())
    );

    // The persisted row did not move either.
    let fetched = engine.loan(loan.id, "alice").await.unwrap();
    assert_eq!(fetched.status, LoanStatus::Repaid);
    assert_eq!(fetched.outstanding_amount, 0);
}

#[tokio::test]
async fn over_repayment_leaves_loan_untouched() {
    let (engine, _db) = engine_with_users(&["alice"]).await;

    let loan = engine.new_loan("alice", 3000, 3, None).await.unwrap();
    engine.repay_loan(loan.id, 2000, "alice").await.unwrap();

    let err = engine.repay_loan(loan.id, 1001, "alice").await.unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidOperation("repayment exceeds outstanding amount".to_string())
    );

    let fetched = engine.loan(loan.id, "alice").await.unwrap();
    assert_eq!(fetched.outstanding_amount, 1000);
    assert_eq!(fetched.status, LoanStatus::Due);
}
