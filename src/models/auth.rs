// src/models/auth.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Usuário da aplicação. A senha fica em texto plano porque o login é
// apenas a credencial de demonstração (veja o seed nas migrações);
// nunca é serializada na resposta.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub role: String,
    pub name: String,
    pub status: bool,
}

// O que o frontend recebe após o login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub username: String,
    pub role: String,
    pub name: String,
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            role: user.role,
            name: user.name,
        }
    }
}
