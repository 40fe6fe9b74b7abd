// src/handlers/clients.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::client::{ClientChanges, NewClient},
};

// ---
// Payload: CreateClient
// ---
#[derive(Debug, Deserialize, Validate)]
pub struct CreateClientPayload {
    #[validate(required(message = "O campo 'name' é obrigatório."), length(min = 1, message = "O campo 'name' é obrigatório."))]
    pub name: Option<String>,

    #[validate(required(message = "O campo 'phone' é obrigatório."), length(min = 1, message = "O campo 'phone' é obrigatório."))]
    pub phone: Option<String>,

    pub email: Option<String>,

    #[validate(required(message = "O campo 'cpf' é obrigatório."), length(min = 1, message = "O campo 'cpf' é obrigatório."))]
    pub cpf: Option<String>,

    #[validate(required(message = "O campo 'cep' é obrigatório."), length(min = 1, message = "O campo 'cep' é obrigatório."))]
    pub cep: Option<String>,

    #[validate(required(message = "O campo 'address' é obrigatório."), length(min = 1, message = "O campo 'address' é obrigatório."))]
    pub address: Option<String>,
}

// ---
// Payload: UpdateClient (lista explícita; None = não mexe)
// ---
#[derive(Debug, Deserialize)]
pub struct UpdateClientPayload {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub cpf: Option<String>,
    pub cep: Option<String>,
    pub address: Option<String>,
}

pub async fn list_clients(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let clients = app_state.client_service.list().await?;
    Ok((StatusCode::OK, Json(clients)))
}

pub async fn create_client(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateClientPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    // Após o `required` do validator, os unwraps são seguros.
    let new_client = app_state
        .client_service
        .create(NewClient {
            name: payload.name.unwrap(),
            phone: payload.phone.unwrap(),
            email: payload.email,
            cpf: payload.cpf.unwrap(),
            cep: payload.cep.unwrap(),
            address: payload.address.unwrap(),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(new_client)))
}

pub async fn update_client(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateClientPayload>,
) -> Result<impl IntoResponse, AppError> {
    let client = app_state
        .client_service
        .update(
            id,
            ClientChanges {
                name: payload.name,
                phone: payload.phone,
                email: payload.email,
                cpf: payload.cpf,
                cep: payload.cep,
                address: payload.address,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(client)))
}

pub async fn delete_client(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.client_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
