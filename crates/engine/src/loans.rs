//! Loan primitives.
//!
//! A loan is opened with the full amount outstanding and is only ever mutated
//! by repayments, which monotonically decrease `outstanding_amount`. Reaching
//! zero flips the status to `Repaid`, which is terminal.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Currency, EngineError, ResultEngine};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanStatus {
    Due,
    Repaid,
}

impl LoanStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Due => "due",
            Self::Repaid => "repaid",
        }
    }
}

impl TryFrom<&str> for LoanStatus {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "due" => Ok(Self::Due),
            "repaid" => Ok(Self::Repaid),
            other => Err(EngineError::InvalidOperation(format!(
                "invalid loan status: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Loan {
    pub id: Uuid,
    pub user_id: String,
    /// Principal in minor units of `currency`.
    pub amount: i64,
    /// Number of installments agreed at processing time.
    pub terms: i32,
    pub outstanding_amount: i64,
    pub currency: Currency,
    pub processed_at: DateTime<Utc>,
    pub status: LoanStatus,
}

impl Loan {
    pub fn new(
        user_id: &str,
        amount: i64,
        terms: i32,
        currency: Currency,
        processed_at: DateTime<Utc>,
    ) -> ResultEngine<Self> {
        if amount <= 0 {
            return Err(EngineError::InvalidAmount(
                "amount must be > 0".to_string(),
            ));
        }
        if terms <= 0 {
            return Err(EngineError::InvalidAmount("terms must be > 0".to_string()));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            amount,
            terms,
            outstanding_amount: amount,
            currency,
            processed_at,
            status: LoanStatus::Due,
        })
    }

    /// Applies a repayment against the outstanding balance.
    ///
    /// `outstanding_amount` only ever decreases and never goes below zero;
    /// `Repaid` is terminal.
    pub fn apply_repayment(&mut self, amount: i64) -> ResultEngine<()> {
        if self.status == LoanStatus::Repaid {
            return Err(EngineError::InvalidOperation(
                "loan already repaid".to_string(),
            ));
        }
        if amount <= 0 {
            return Err(EngineError::InvalidAmount(
                "repayment amount must be > 0".to_string(),
            ));
        }
        if amount > self.outstanding_amount {
            return Err(EngineError::InvalidOperation(
                "repayment exceeds outstanding amount".to_string(),
            ));
        }

        self.outstanding_amount -= amount;
        if self.outstanding_amount == 0 {
            self.status = LoanStatus::Repaid;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "loans")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub amount: i64,
    pub terms: i32,
    pub outstanding_amount: i64,
    pub currency_code: String,
    pub processed_at: DateTimeUtc,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Loan> for ActiveModel {
    fn from(loan: &Loan) -> Self {
        Self {
            id: ActiveValue::Set(loan.id.to_string()),
            user_id: ActiveValue::Set(loan.user_id.clone()),
            amount: ActiveValue::Set(loan.amount),
            terms: ActiveValue::Set(loan.terms),
            outstanding_amount: ActiveValue::Set(loan.outstanding_amount),
            currency_code: ActiveValue::Set(loan.currency.code().to_string()),
            processed_at: ActiveValue::Set(loan.processed_at),
            status: ActiveValue::Set(loan.status.as_str().to_string()),
        }
    }
}

impl TryFrom<Model> for Loan {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Uuid::parse_str(&model.id)
                .map_err(|_| EngineError::KeyNotFound("loan not exists".to_string()))?,
            user_id: model.user_id,
            amount: model.amount,
            terms: model.terms,
            outstanding_amount: model.outstanding_amount,
            currency: Currency::try_from(model.currency_code.as_str())?,
            processed_at: model.processed_at,
            status: LoanStatus::try_from(model.status.as_str())?,
        })
    }
}
