// src/handlers/orders.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use validator::Validate;

use crate::{common::error::AppError, config::AppState};

// ---
// Payload: CreateOrder
// ---
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderPayload {
    #[validate(required(message = "O campo 'clientId' é obrigatório."))]
    pub client_id: Option<i64>,

    #[validate(required(message = "O campo 'product' é obrigatório."), length(min = 1, message = "O campo 'product' é obrigatório."))]
    pub product: Option<String>,

    #[validate(required(message = "O campo 'description' é obrigatório."), length(min = 1, message = "O campo 'description' é obrigatório."))]
    pub description: Option<String>,

    // Opcional; string crua para que o valor desconhecido responda
    // "Classe de serviço inválida". O service aplica o padrão "comum".
    pub service_class: Option<String>,
}

// ---
// Payload: UpdateOrder (lista explícita; id, date e clientId são
// gerenciados pelo servidor e não podem ser sobrescritos)
// ---
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderPayload {
    pub product: Option<String>,
    pub description: Option<String>,
    // Strings cruas, validadas no service, pelo mesmo motivo acima.
    pub status: Option<String>,
    pub service_class: Option<String>,
    pub observation: Option<String>,
}

// O status chega como string crua para que o valor desconhecido vire
// a resposta "Status inválido", e não um erro de parse do JSON.
#[derive(Debug, Deserialize)]
pub struct SetStatusPayload {
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct SetObservationPayload {
    #[serde(default)]
    pub observation: String,
}

pub async fn list_orders(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let orders = app_state.order_service.list().await?;
    Ok((StatusCode::OK, Json(orders)))
}

pub async fn create_order(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateOrderPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let order = app_state
        .order_service
        .create(
            payload.client_id.unwrap(),
            payload.product.unwrap(),
            payload.description.unwrap(),
            payload.service_class,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(order)))
}

pub async fn update_order(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateOrderPayload>,
) -> Result<impl IntoResponse, AppError> {
    let order = app_state
        .order_service
        .update(
            id,
            payload.product,
            payload.description,
            payload.status,
            payload.service_class,
            payload.observation,
        )
        .await?;

    Ok((StatusCode::OK, Json(order)))
}

pub async fn set_order_status(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<SetStatusPayload>,
) -> Result<impl IntoResponse, AppError> {
    let order = app_state.order_service.set_status(id, &payload.status).await?;
    Ok((StatusCode::OK, Json(order)))
}

pub async fn set_order_observation(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<SetObservationPayload>,
) -> Result<impl IntoResponse, AppError> {
    let order = app_state
        .order_service
        .set_observation(id, &payload.observation)
        .await?;
    Ok((StatusCode::OK, Json(order)))
}

pub async fn delete_order(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.order_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
