// src/services/auth.rs

use std::sync::Arc;

use crate::{
    common::error::AppError,
    db::Store,
    models::auth::{LoginResponse, UserInfo},
};

// O token é um valor fixo de demonstração: não há sessão nem expiração.
const DEMO_TOKEN: &str = "demo-token";

#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn Store>,
}

impl AuthService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, AppError> {
        if username.is_empty() || password.is_empty() {
            return Err(AppError::MissingCredentials);
        }

        let user = self
            .store
            .find_active_user(username, password)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        tracing::info!("Login efetuado: {}", user.username);

        Ok(LoginResponse {
            token: DEMO_TOKEN.to_string(),
            user: UserInfo::from(user),
        })
    }
}
