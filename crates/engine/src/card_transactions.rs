//! Debit card transaction primitives.
//!
//! Transactions are append-only history: once recorded they are never updated
//! or deleted, and the parent card cannot be deleted while any transaction
//! references it. A transaction has no owner column of its own; ownership is
//! inherited from the parent card.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use uuid::Uuid;

use crate::{Currency, EngineError, ResultEngine};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardTransaction {
    pub id: Uuid,
    pub debit_card_id: Uuid,
    /// Positive amount in minor units of `currency`.
    pub amount: i64,
    pub currency: Currency,
    pub created_at: DateTime<Utc>,
}

impl CardTransaction {
    pub fn new(
        debit_card_id: Uuid,
        amount: i64,
        currency: Currency,
        created_at: DateTime<Utc>,
    ) -> ResultEngine<Self> {
        if amount <= 0 {
            return Err(EngineError::InvalidAmount(
                "amount must be > 0".to_string(),
            ));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            debit_card_id,
            amount,
            currency,
            created_at,
        })
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "debit_card_transactions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub debit_card_id: String,
    pub amount: i64,
    pub currency_code: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cards::Entity",
        from = "Column::DebitCardId",
        to = "super::cards::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Cards,
}

impl Related<super::cards::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cards.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&CardTransaction> for ActiveModel {
    fn from(tx: &CardTransaction) -> Self {
        Self {
            id: ActiveValue::Set(tx.id.to_string()),
            debit_card_id: ActiveValue::Set(tx.debit_card_id.to_string()),
            amount: ActiveValue::Set(tx.amount),
            currency_code: ActiveValue::Set(tx.currency.code().to_string()),
            created_at: ActiveValue::Set(tx.created_at),
        }
    }
}

impl TryFrom<Model> for CardTransaction {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Uuid::parse_str(&model.id).map_err(|_| {
                EngineError::KeyNotFound("debit card transaction not exists".to_string())
            })?,
            debit_card_id: Uuid::parse_str(&model.debit_card_id)
                .map_err(|_| EngineError::KeyNotFound("debit card not exists".to_string()))?,
            amount: model.amount,
            currency: Currency::try_from(model.currency_code.as_str())?,
            created_at: model.created_at,
        })
    }
}
