//! Loans API endpoints

use api_types::loan::{LoanNew, LoanStatus as ApiLoanStatus, LoanView, RepaymentNew};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{ServerError, server::ServerState, user};

fn map_currency(currency: engine::Currency) -> api_types::Currency {
    match currency {
        engine::Currency::Idr => api_types::Currency::Idr,
        engine::Currency::Sgd => api_types::Currency::Sgd,
        engine::Currency::Thb => api_types::Currency::Thb,
        engine::Currency::Vnd => api_types::Currency::Vnd,
    }
}

fn map_status(status: engine::LoanStatus) -> ApiLoanStatus {
    match status {
        engine::LoanStatus::Due => ApiLoanStatus::Due,
        engine::LoanStatus::Repaid => ApiLoanStatus::Repaid,
    }
}

fn map_loan(loan: engine::Loan) -> LoanView {
    LoanView {
        id: loan.id,
        amount: loan.amount,
        terms: loan.terms,
        outstanding_amount: loan.outstanding_amount,
        currency_code: map_currency(loan.currency),
        processed_at: loan.processed_at,
        status: map_status(loan.status),
    }
}

pub async fn list(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
) -> Result<Json<Vec<LoanView>>, ServerError> {
    let loans = state.engine.list_loans(&user.username).await?;
    Ok(Json(loans.into_iter().map(map_loan).collect()))
}

pub async fn create(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
    Json(payload): Json<LoanNew>,
) -> Result<(StatusCode, Json<LoanView>), ServerError> {
    let loan = state
        .engine
        .new_loan(
            &user.username,
            payload.amount,
            payload.terms,
            payload.currency_code.as_deref(),
        )
        .await?;
    Ok((StatusCode::CREATED, Json(map_loan(loan))))
}

pub async fn get(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<LoanView>, ServerError> {
    let loan = state.engine.loan(id, &user.username).await?;
    Ok(Json(map_loan(loan)))
}

pub async fn repay(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<RepaymentNew>,
) -> Result<Json<LoanView>, ServerError> {
    let loan = state
        .engine
        .repay_loan(id, payload.amount, &user.username)
        .await?;
    Ok(Json(map_loan(loan)))
}
