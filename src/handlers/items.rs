// src/handlers/items.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::item::{ItemChanges, NewItem},
};

// Quantidade inicial tolerante: ausente ou inválida (não numérica,
// negativa) vira 0. A invariante de não-negatividade começa na criação.
fn lenient_quantity<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_i64().filter(|q| *q >= 0).unwrap_or(0))
}

// ---
// Payload: CreateItem
// ---
#[derive(Debug, Deserialize, Validate)]
pub struct CreateItemPayload {
    #[validate(required(message = "Nome é obrigatório"), length(min = 1, message = "Nome é obrigatório"))]
    pub name: Option<String>,

    pub brand: Option<String>,
    pub model: Option<String>,

    #[serde(default, deserialize_with = "lenient_quantity")]
    pub quantity: i64,
}

// ---
// Payload: UpdateItem (lista explícita; None = não mexe)
// ---
#[derive(Debug, Deserialize)]
pub struct UpdateItemPayload {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub quantity: Option<i64>,
}

// O amount chega como JSON cru: qualquer coisa que não seja um inteiro
// responde "amount deve ser numérico" em vez de um erro de parse.
#[derive(Debug, Deserialize)]
pub struct AdjustItemPayload {
    #[serde(default)]
    pub amount: Value,
}

pub async fn list_items(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let items = app_state.stock_service.list().await?;
    Ok((StatusCode::OK, Json(items)))
}

pub async fn create_item(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateItemPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let item = app_state
        .stock_service
        .create(NewItem {
            name: payload.name.unwrap(),
            brand: payload.brand,
            model: payload.model,
            quantity: payload.quantity,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn update_item(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateItemPayload>,
) -> Result<impl IntoResponse, AppError> {
    let item = app_state
        .stock_service
        .update(
            id,
            ItemChanges {
                name: payload.name,
                brand: payload.brand,
                model: payload.model,
                quantity: payload.quantity,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(item)))
}

pub async fn adjust_item(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<AdjustItemPayload>,
) -> Result<impl IntoResponse, AppError> {
    let amount = payload.amount.as_i64().ok_or(AppError::InvalidAmount)?;

    let item = app_state.stock_service.adjust(id, amount).await?;

    Ok((StatusCode::OK, Json(item)))
}

pub async fn delete_item(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.stock_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
