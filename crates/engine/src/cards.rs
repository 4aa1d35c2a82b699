//! The module contains the `DebitCard` struct and its entity.

use chrono::{DateTime, Months, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::EngineError;

/// Accepted card networks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardType {
    Visa,
    Mastercard,
    Amex,
    UnionPay,
}

impl CardType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Amex => "AMEX",
            Self::UnionPay => "UnionPay",
        }
    }
}

impl TryFrom<&str> for CardType {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "Visa" => Ok(Self::Visa),
            "Mastercard" => Ok(Self::Mastercard),
            "AMEX" => Ok(Self::Amex),
            "UnionPay" => Ok(Self::UnionPay),
            other => Err(EngineError::InvalidCardType(format!(
                "unsupported card type: {other}"
            ))),
        }
    }
}

/// How long a freshly issued card stays valid.
const VALIDITY_MONTHS: u32 = 48;

/// A debit card.
///
/// `disabled_at == None` means the card is active. A card is visible to its
/// owner only; every engine operation checks ownership before touching it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DebitCard {
    pub id: Uuid,
    pub user_id: String,
    pub number: String,
    pub card_type: CardType,
    pub expiration_date: DateTime<Utc>,
    pub disabled_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl DebitCard {
    pub fn new(user_id: &str, card_type: CardType, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            number: generate_number(),
            card_type,
            expiration_date: created_at + Months::new(VALIDITY_MONTHS),
            disabled_at: None,
            created_at,
        }
    }

    pub fn is_active(&self) -> bool {
        self.disabled_at.is_none()
    }
}

/// 16-digit card number derived from a fresh UUID.
fn generate_number() -> String {
    let raw = Uuid::new_v4().as_u128() % 10_000_000_000_000_000;
    format!("{raw:016}")
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "debit_cards")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub number: String,
    pub card_type: String,
    pub expiration_date: DateTimeUtc,
    pub disabled_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::card_transactions::Entity")]
    CardTransactions,
}

impl Related<super::card_transactions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CardTransactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&DebitCard> for ActiveModel {
    fn from(card: &DebitCard) -> Self {
        Self {
            id: ActiveValue::Set(card.id.to_string()),
            user_id: ActiveValue::Set(card.user_id.clone()),
            number: ActiveValue::Set(card.number.clone()),
            card_type: ActiveValue::Set(card.card_type.as_str().to_string()),
            expiration_date: ActiveValue::Set(card.expiration_date),
            disabled_at: ActiveValue::Set(card.disabled_at),
            created_at: ActiveValue::Set(card.created_at),
        }
    }
}

impl TryFrom<Model> for DebitCard {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Uuid::parse_str(&model.id)
                .map_err(|_| EngineError::KeyNotFound("debit card not exists".to_string()))?,
            user_id: model.user_id,
            number: model.number,
            card_type: CardType::try_from(model.card_type.as_str())?,
            expiration_date: model.expiration_date,
            disabled_at: model.disabled_at,
            created_at: model.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_card_is_active() {
        let card = DebitCard::new("alice", CardType::Mastercard, Utc::now());
        assert!(card.is_active());
        assert_eq!(card.user_id, "alice");
        assert_eq!(card.card_type, CardType::Mastercard);
    }

    #[test]
    fn card_number_has_sixteen_digits() {
        let card = DebitCard::new("alice", CardType::Visa, Utc::now());
        assert_eq!(card.number.len(), 16);
        assert!(card.number.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn expiration_is_four_years_out() {
        let created_at = Utc::now();
        let card = DebitCard::new("alice", CardType::Visa, created_at);
        assert_eq!(card.expiration_date, created_at + Months::new(48));
    }

    #[test]
    fn card_types_round_trip() {
        for card_type in [
            CardType::Visa,
            CardType::Mastercard,
            CardType::Amex,
            CardType::UnionPay,
        ] {
            assert_eq!(CardType::try_from(card_type.as_str()).unwrap(), card_type);
        }
    }

    #[test]
    fn reject_unknown_card_type() {
        assert!(matches!(
            CardType::try_from("Discover"),
            Err(EngineError::InvalidCardType(_))
        ));
    }
}
