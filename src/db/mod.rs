// src/db/mod.rs

pub mod memory;
pub mod pg;

use async_trait::async_trait;

use crate::common::error::AppError;
use crate::models::{
    auth::User,
    client::{Client, ClientChanges, NewClient},
    item::{Item, ItemChanges, NewItem},
    order::{NewOrder, OrderChanges, OrderStatus, OrderView, ServiceOrder},
};

// A abstração de armazenamento injetada nos services.
//
// Existem duas implementações, espelhando as duas variantes da aplicação:
// `PgStore` (Postgres via sqlx) e `MemoryStore` (registros em RwLock, usada
// quando não há DATABASE_URL e pelos testes). Todas as operações enxergam
// apenas registros ativos; soft delete é virar a flag.
//
// As operações de escrita que retornam `bool` seguem a semântica de
// "linhas afetadas": `false` significa que não existia registro ativo
// com aquele id (e o chamador converte em NotFound).
#[async_trait]
pub trait Store: Send + Sync {
    // --- Usuários ---
    async fn find_active_user(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, AppError>;

    // --- Clientes ---
    async fn list_clients(&self) -> Result<Vec<Client>, AppError>;
    async fn get_client(&self, id: i64) -> Result<Option<Client>, AppError>;
    async fn insert_client(&self, data: NewClient) -> Result<Client, AppError>;
    async fn update_client(
        &self,
        id: i64,
        changes: ClientChanges,
    ) -> Result<Option<Client>, AppError>;
    async fn deactivate_client(&self, id: i64) -> Result<bool, AppError>;

    // --- Ordens de serviço ---
    async fn list_order_views(&self) -> Result<Vec<OrderView>, AppError>;
    async fn get_order_view(&self, id: i64) -> Result<Option<OrderView>, AppError>;
    async fn insert_order(&self, data: NewOrder) -> Result<ServiceOrder, AppError>;
    async fn update_order(&self, id: i64, changes: OrderChanges) -> Result<bool, AppError>;
    async fn set_order_status(&self, id: i64, status: OrderStatus) -> Result<bool, AppError>;
    async fn set_order_observation(&self, id: i64, observation: &str) -> Result<bool, AppError>;
    async fn deactivate_order(&self, id: i64) -> Result<bool, AppError>;

    // --- Itens de estoque ---
    async fn list_items(&self) -> Result<Vec<Item>, AppError>;
    async fn get_item(&self, id: i64) -> Result<Option<Item>, AppError>;
    async fn insert_item(&self, data: NewItem) -> Result<Item, AppError>;
    async fn update_item(&self, id: i64, changes: ItemChanges) -> Result<Option<Item>, AppError>;
    async fn set_item_quantity(&self, id: i64, quantity: i64) -> Result<bool, AppError>;
    async fn deactivate_item(&self, id: i64) -> Result<bool, AppError>;
}
