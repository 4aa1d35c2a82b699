use chrono::Utc;
use uuid::Uuid;

use sea_orm::{ActiveValue, QueryFilter, QueryOrder, TransactionTrait, prelude::*};

use crate::{Currency, Loan, ResultEngine, loans};

use super::{Engine, with_tx};

impl Engine {
    /// Opens a loan for the actor with the full amount outstanding.
    ///
    /// Loans without an explicit currency are booked in the default currency.
    pub async fn new_loan(
        &self,
        user_id: &str,
        amount: i64,
        terms: i32,
        currency_code: Option<&str>,
    ) -> ResultEngine<Loan> {
        let currency = match currency_code {
            Some(code) => Currency::try_from(code)?,
            None => Currency::default(),
        };
        let loan = Loan::new(user_id, amount, terms, currency, Utc::now())?;
        with_tx!(self, |db_tx| {
            loans::ActiveModel::from(&loan).insert(&db_tx).await?;
            Ok(loan)
        })
    }

    /// Lists the actor's loans in processing order.
    pub async fn list_loans(&self, user_id: &str) -> ResultEngine<Vec<Loan>> {
        with_tx!(self, |db_tx| {
            let models: Vec<loans::Model> = loans::Entity::find()
                .filter(loans::Column::UserId.eq(user_id.to_string()))
                .order_by_asc(loans::Column::ProcessedAt)
                .order_by_asc(loans::Column::Id)
                .all(&db_tx)
                .await?;

            let mut out = Vec::with_capacity(models.len());
            for model in models {
                out.push(Loan::try_from(model)?);
            }
            Ok(out)
        })
    }

    /// Returns a single loan. A foreign loan is reported as absent.
    pub async fn loan(&self, loan_id: Uuid, user_id: &str) -> ResultEngine<Loan> {
        with_tx!(self, |db_tx| {
            let model = self.require_loan(&db_tx, loan_id, user_id).await?;
            Loan::try_from(model)
        })
    }

    /// Applies a repayment, persisting balance and status together.
    pub async fn repay_loan(
        &self,
        loan_id: Uuid,
        amount: i64,
        user_id: &str,
    ) -> ResultEngine<Loan> {
        with_tx!(self, |db_tx| {
            let model = self.require_loan(&db_tx, loan_id, user_id).await?;
            let mut loan = Loan::try_from(model)?;
            loan.apply_repayment(amount)?;

            let active = loans::ActiveModel {
                id: ActiveValue::Set(loan.id.to_string()),
                outstanding_amount: ActiveValue::Set(loan.outstanding_amount),
                status: ActiveValue::Set(loan.status.as_str().to_string()),
                ..Default::default()
            };
            active.update(&db_tx).await?;
            Ok(loan)
        })
    }
}
