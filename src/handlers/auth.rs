// src/handlers/auth.rs

use axum::{Json, extract::State, response::IntoResponse};
use serde::Deserialize;

use crate::{common::error::AppError, config::AppState};

// Os campos são opcionais de propósito: a ausência vira a mensagem
// "Usuário e senha são obrigatórios" em vez de um erro de parse.
#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

pub async fn login(
    State(app_state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<impl IntoResponse, AppError> {
    let username = payload.username.as_deref().unwrap_or("");
    let password = payload.password.as_deref().unwrap_or("");

    let response = app_state.auth_service.login(username, password).await?;

    Ok(Json(response))
}
