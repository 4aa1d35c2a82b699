//! Ownership checks shared by every operation.
//!
//! All three stores resolve access through this module, so the allow/deny
//! policy lives in exactly one place: an actor may touch a resource iff they
//! are its stored owner. What changes per operation is only how a denial
//! surfaces, see [`DenyAs`].

use sea_orm::{DatabaseTransaction, prelude::*};
use uuid::Uuid;

use crate::{EngineError, ResultEngine, card_transactions, cards, loans};

use super::Engine;

/// How an ownership failure surfaces to the caller.
///
/// Single-resource card and loan reads report a foreign resource as absent,
/// so existence never leaks to non-owners. Attaching data to a foreign card,
/// or reading a foreign transaction, acknowledges the resource and refuses
/// outright.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum DenyAs {
    NotFound,
    Forbidden,
}

/// Ownership policy: allow iff the actor is the stored owner.
pub(super) fn check_owner(
    actor_id: &str,
    owner_id: &str,
    deny_as: DenyAs,
    what: &str,
) -> ResultEngine<()> {
    if actor_id == owner_id {
        return Ok(());
    }
    match deny_as {
        DenyAs::NotFound => Err(EngineError::KeyNotFound(format!("{what} not exists"))),
        DenyAs::Forbidden => Err(EngineError::Forbidden(format!(
            "{what} belongs to another user"
        ))),
    }
}

impl Engine {
    /// Fetches a card the actor is allowed to act on.
    ///
    /// A truly absent id and a foreign card under `DenyAs::NotFound` produce
    /// the same error, so the two cases are indistinguishable to the caller.
    pub(super) async fn require_card(
        &self,
        db: &DatabaseTransaction,
        card_id: Uuid,
        user_id: &str,
        deny_as: DenyAs,
    ) -> ResultEngine<cards::Model> {
        let model = cards::Entity::find_by_id(card_id.to_string())
            .one(db)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound("debit card not exists".to_string()))?;
        check_owner(user_id, &model.user_id, deny_as, "debit card")?;
        Ok(model)
    }

    /// Fetches a transaction, resolving ownership through its parent card.
    pub(super) async fn require_card_transaction(
        &self,
        db: &DatabaseTransaction,
        transaction_id: Uuid,
        user_id: &str,
    ) -> ResultEngine<card_transactions::Model> {
        let model = card_transactions::Entity::find_by_id(transaction_id.to_string())
            .one(db)
            .await?
            .ok_or_else(|| {
                EngineError::KeyNotFound("debit card transaction not exists".to_string())
            })?;
        let card = cards::Entity::find_by_id(model.debit_card_id.clone())
            .one(db)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound("debit card not exists".to_string()))?;
        check_owner(
            user_id,
            &card.user_id,
            DenyAs::Forbidden,
            "debit card transaction",
        )?;
        Ok(model)
    }

    /// Fetches a loan the actor owns; foreign loans stay hidden.
    pub(super) async fn require_loan(
        &self,
        db: &DatabaseTransaction,
        loan_id: Uuid,
        user_id: &str,
    ) -> ResultEngine<loans::Model> {
        let model = loans::Entity::find_by_id(loan_id.to_string())
            .one(db)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound("loan not exists".to_string()))?;
        check_owner(user_id, &model.user_id, DenyAs::NotFound, "loan")?;
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_is_always_allowed() {
        check_owner("alice", "alice", DenyAs::NotFound, "debit card").unwrap();
        check_owner("alice", "alice", DenyAs::Forbidden, "debit card").unwrap();
    }

    #[test]
    fn foreign_read_hides_existence() {
        let err = check_owner("alice", "bob", DenyAs::NotFound, "debit card").unwrap_err();
        assert_eq!(
            err,
            EngineError::KeyNotFound("debit card not exists".to_string())
        );
    }

    #[test]
    fn foreign_attach_is_refused_openly() {
        let err = check_owner("alice", "bob", DenyAs::Forbidden, "debit card").unwrap_err();
        assert!(matches!(err, EngineError::Forbidden(_)));
    }
}
