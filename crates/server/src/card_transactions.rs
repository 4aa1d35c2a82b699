//! Debit card transactions API endpoints

use api_types::debit_card_transaction::{
    CardTransactionListResponse, CardTransactionNew, CardTransactionView,
};
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

fn map_transaction(tx: engine::CardTransaction) -> CardTransactionView {
    CardTransactionView {
        id: tx.id,
        amount: tx.amount,
        currency_code: map_currency(tx.currency),
    }
}

pub async fn list(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
) -> Result<Json<CardTransactionListResponse>, ServerError> {
    let transactions = state.engine.list_card_transactions(&user.username).await?;
    Ok(Json(CardTransactionListResponse {
        data: transactions.into_iter().map(map_transaction).collect(),
    }))
}

pub async fn create(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
    Json(payload): Json<CardTransactionNew>,
) -> Result<(StatusCode, Json<CardTransactionView>), ServerError> {
    let tx = state
        .engine
        .new_card_transaction(
            &user.username,
            payload.debit_card_id,
            payload.amount,
            &payload.currency_code,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(map_transaction(tx))))
}

pub async fn get(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CardTransactionView>, ServerError> {
    let tx = state.engine.card_transaction(id, &user.username).await?;
    Ok(Json(map_transaction(tx)))
}
