// src/models/client.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Cliente da loja. `status = false` significa soft delete: o registro
// permanece no banco mas some de todas as listagens e vínculos de OS.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub cpf: String,
    pub cep: String,
    pub address: String,
    pub status: bool,
}

// Campos de um cliente novo, já validados pelo handler.
#[derive(Debug, Clone)]
pub struct NewClient {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub cpf: String,
    pub cep: String,
    pub address: String,
}

// Atualização com lista explícita de campos: o que vier `None` fica
// intacto. `id` e `status` são gerenciados pelo servidor.
#[derive(Debug, Clone, Default)]
pub struct ClientChanges {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub cpf: Option<String>,
    pub cep: Option<String>,
    pub address: Option<String>,
}
