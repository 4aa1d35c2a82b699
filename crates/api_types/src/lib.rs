use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Currency codes accepted on the wire, in their canonical lowercase form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Idr,
    #[default]
    Sgd,
    Thb,
    Vnd,
}

pub mod debit_card {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct DebitCardNew {
        /// Card network name, e.g. `"Mastercard"`.
        #[serde(rename = "type")]
        pub card_type: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct DebitCardUpdate {
        pub is_active: bool,
    }

    /// A card as returned to its owner.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct DebitCardView {
        pub id: Uuid,
        pub number: String,
        #[serde(rename = "type")]
        pub card_type: String,
        pub expiration_date: DateTime<Utc>,
        pub disabled_at: Option<DateTime<Utc>>,
    }
}

pub mod debit_card_transaction {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CardTransactionNew {
        pub debit_card_id: Uuid,
        /// Amount in minor units; must be positive.
        pub amount: i64,
        pub currency_code: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CardTransactionView {
        pub id: Uuid,
        pub amount: i64,
        pub currency_code: Currency,
    }

    /// List responses wrap the items in a `data` array.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct CardTransactionListResponse {
        pub data: Vec<CardTransactionView>,
    }
}

pub mod loan {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum LoanStatus {
        Due,
        Repaid,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct LoanNew {
        /// Principal in minor units; must be positive.
        pub amount: i64,
        /// Number of installments; must be positive.
        pub terms: i32,
        /// Defaults to `sgd` when absent.
        pub currency_code: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct RepaymentNew {
        pub amount: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct LoanView {
        pub id: Uuid,
        pub amount: i64,
        pub terms: i32,
        pub outstanding_amount: i64,
        pub currency_code: Currency,
        pub processed_at: DateTime<Utc>,
        pub status: LoanStatus,
    }
}
