use chrono::Utc;
use uuid::Uuid;

use sea_orm::{QueryFilter, QueryOrder, TransactionTrait, prelude::*};

use crate::{CardTransaction, Currency, ResultEngine, card_transactions, cards};

use super::{Engine, access::DenyAs, with_tx};

impl Engine {
    /// Lists transactions across all of the actor's cards, in creation order.
    ///
    /// Transactions on foreign cards are simply absent from the result.
    pub async fn list_card_transactions(
        &self,
        user_id: &str,
    ) -> ResultEngine<Vec<CardTransaction>> {
        with_tx!(self, |db_tx| {
            let rows: Vec<(card_transactions::Model, Option<cards::Model>)> =
                card_transactions::Entity::find()
                    .find_also_related(cards::Entity)
                    .filter(cards::Column::UserId.eq(user_id.to_string()))
                    .order_by_asc(card_transactions::Column::CreatedAt)
                    .order_by_asc(card_transactions::Column::Id)
                    .all(&db_tx)
                    .await?;

            let mut out = Vec::with_capacity(rows.len());
            for (model, _card) in rows {
                out.push(CardTransaction::try_from(model)?);
            }
            Ok(out)
        })
    }

    /// Records a transaction against one of the actor's cards.
    ///
    /// Unlike card reads, attaching data to a foreign card is refused openly
    /// rather than hidden. The ownership check and the insert share one DB
    /// transaction.
    pub async fn new_card_transaction(
        &self,
        user_id: &str,
        debit_card_id: Uuid,
        amount: i64,
        currency_code: &str,
    ) -> ResultEngine<CardTransaction> {
        let currency = Currency::try_from(currency_code)?;
        with_tx!(self, |db_tx| {
            self.require_card(&db_tx, debit_card_id, user_id, DenyAs::Forbidden)
                .await?;
            let tx = CardTransaction::new(debit_card_id, amount, currency, Utc::now())?;
            card_transactions::ActiveModel::from(&tx).insert(&db_tx).await?;
            Ok(tx)
        })
    }

    /// Returns a single transaction if its parent card belongs to the actor.
    pub async fn card_transaction(
        &self,
        transaction_id: Uuid,
        user_id: &str,
    ) -> ResultEngine<CardTransaction> {
        with_tx!(self, |db_tx| {
            let model = self
                .require_card_transaction(&db_tx, transaction_id, user_id)
                .await?;
            CardTransaction::try_from(model)
        })
    }
}
