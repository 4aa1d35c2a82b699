use chrono::Utc;
use uuid::Uuid;

use sea_orm::{ActiveValue, QueryFilter, QueryOrder, TransactionTrait, prelude::*};

use crate::{CardType, DebitCard, EngineError, ResultEngine, card_transactions, cards};

use super::{Engine, access::DenyAs, with_tx};

impl Engine {
    /// Lists the actor's own debit cards in creation order.
    ///
    /// Foreign cards are never part of the result; listing does not error.
    pub async fn list_cards(&self, user_id: &str) -> ResultEngine<Vec<DebitCard>> {
        with_tx!(self, |db_tx| {
            let models: Vec<cards::Model> = cards::Entity::find()
                .filter(cards::Column::UserId.eq(user_id.to_string()))
                .order_by_asc(cards::Column::CreatedAt)
                .order_by_asc(cards::Column::Id)
                .all(&db_tx)
                .await?;

            let mut out = Vec::with_capacity(models.len());
            for model in models {
                out.push(DebitCard::try_from(model)?);
            }
            Ok(out)
        })
    }

    /// Issues a new card for the actor. Cards start active.
    pub async fn new_card(&self, user_id: &str, card_type: &str) -> ResultEngine<DebitCard> {
        let card_type = CardType::try_from(card_type)?;
        let card = DebitCard::new(user_id, card_type, Utc::now());
        with_tx!(self, |db_tx| {
            cards::ActiveModel::from(&card).insert(&db_tx).await?;
            Ok(card)
        })
    }

    /// Returns a single card.
    ///
    /// A card owned by another user is reported as absent.
    pub async fn card(&self, card_id: Uuid, user_id: &str) -> ResultEngine<DebitCard> {
        with_tx!(self, |db_tx| {
            let model = self
                .require_card(&db_tx, card_id, user_id, DenyAs::NotFound)
                .await?;
            DebitCard::try_from(model)
        })
    }

    /// Activates or deactivates a card.
    ///
    /// Re-applying the current state is a no-op, not an error.
    pub async fn set_card_active(
        &self,
        card_id: Uuid,
        is_active: bool,
        user_id: &str,
    ) -> ResultEngine<DebitCard> {
        with_tx!(self, |db_tx| {
            let model = self
                .require_card(&db_tx, card_id, user_id, DenyAs::NotFound)
                .await?;
            let card = DebitCard::try_from(model)?;
            if card.is_active() == is_active {
                Ok(card)
            } else {
                let active = cards::ActiveModel {
                    id: ActiveValue::Set(card_id.to_string()),
                    disabled_at: ActiveValue::Set((!is_active).then(Utc::now)),
                    ..Default::default()
                };
                let updated = active.update(&db_tx).await?;
                DebitCard::try_from(updated)
            }
        })
    }

    /// Deletes a card.
    ///
    /// Transactions are immutable history, so a card that owns any is never
    /// deletable.
    pub async fn delete_card(&self, card_id: Uuid, user_id: &str) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            let model = self
                .require_card(&db_tx, card_id, user_id, DenyAs::NotFound)
                .await?;

            let has_transactions = card_transactions::Entity::find()
                .filter(card_transactions::Column::DebitCardId.eq(model.id.clone()))
                .one(&db_tx)
                .await?
                .is_some();
            if has_transactions {
                return Err(EngineError::Conflict(
                    "debit card has transactions".to_string(),
                ));
            }

            cards::Entity::delete_by_id(model.id).exec(&db_tx).await?;
            Ok(())
        })
    }
}
