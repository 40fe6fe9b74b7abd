// src/services/client_service.rs

use std::sync::Arc;

use crate::{
    common::error::AppError,
    db::Store,
    models::client::{Client, ClientChanges, NewClient},
};

#[derive(Clone)]
pub struct ClientService {
    store: Arc<dyn Store>,
}

impl ClientService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Client>, AppError> {
        self.store.list_clients().await
    }

    pub async fn create(&self, data: NewClient) -> Result<Client, AppError> {
        let client = self.store.insert_client(data).await?;
        tracing::info!("Cliente criado: id={}", client.id);
        Ok(client)
    }

    pub async fn update(&self, id: i64, changes: ClientChanges) -> Result<Client, AppError> {
        self.store
            .update_client(id, changes)
            .await?
            .ok_or(AppError::ClientNotFound)
    }

    // Soft delete. Um segundo delete no mesmo id responde NotFound,
    // porque o registro já inativo não é mais encontrado.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.store.deactivate_client(id).await? {
            return Err(AppError::ClientNotFound);
        }
        tracing::info!("Cliente desativado: id={}", id);
        Ok(())
    }
}
