// src/models/item.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Item de estoque. Invariante: `quantity` nunca fica negativa.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub quantity: i64,
    pub status: bool,
}

#[derive(Debug, Clone)]
pub struct NewItem {
    pub name: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub quantity: i64,
}

// Atualização com lista explícita de campos (None = não mexe).
#[derive(Debug, Clone, Default)]
pub struct ItemChanges {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub quantity: Option<i64>,
}
