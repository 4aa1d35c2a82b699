//! Debit cards API endpoints

use api_types::debit_card::{DebitCardNew, DebitCardUpdate, DebitCardView};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{ServerError, server::ServerState, user};

fn map_card(card: engine::DebitCard) -> DebitCardView {
    DebitCardView {
        id: card.id,
        number: card.number,
        card_type: card.card_type.as_str().to_string(),
        expiration_date: card.expiration_date,
        disabled_at: card.disabled_at,
    }
}

pub async fn list(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
) -> Result<Json<Vec<DebitCardView>>, ServerError> {
    let cards = state.engine.list_cards(&user.username).await?;
    Ok(Json(cards.into_iter().map(map_card).collect()))
}

pub async fn create(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
    Json(payload): Json<DebitCardNew>,
) -> Result<(StatusCode, Json<DebitCardView>), ServerError> {
    let card = state
        .engine
        .new_card(&user.username, &payload.card_type)
        .await?;
    Ok((StatusCode::CREATED, Json(map_card(card))))
}

pub async fn get(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DebitCardView>, ServerError> {
    let card = state.engine.card(id, &user.username).await?;
    Ok(Json(map_card(card)))
}

pub async fn update(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<DebitCardUpdate>,
) -> Result<Json<DebitCardView>, ServerError> {
    let card = state
        .engine
        .set_card_active(id, payload.is_active, &user.username)
        .await?;
    Ok(Json(map_card(card)))
}

pub async fn delete(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_card(id, &user.username).await?;
    Ok(StatusCode::NO_CONTENT)
}
