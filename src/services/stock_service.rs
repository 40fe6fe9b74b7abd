// src/services/stock_service.rs

use std::sync::Arc;

use crate::{
    common::error::AppError,
    db::Store,
    models::item::{Item, ItemChanges, NewItem},
};

#[derive(Clone)]
pub struct StockService {
    store: Arc<dyn Store>,
}

impl StockService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Item>, AppError> {
        self.store.list_items().await
    }

    pub async fn create(&self, data: NewItem) -> Result<Item, AppError> {
        let item = self.store.insert_item(data).await?;
        tracing::info!("Item criado: id={}", item.id);
        Ok(item)
    }

    pub async fn update(&self, id: i64, changes: ItemChanges) -> Result<Item, AppError> {
        // A invariante vale também para o update direto da quantidade.
        if matches!(changes.quantity, Some(q) if q < 0) {
            return Err(AppError::NegativeQuantity);
        }

        self.store
            .update_item(id, changes)
            .await?
            .ok_or(AppError::ItemNotFound)
    }

    // Ajuste com delta assinado. O check-then-set é um passo lógico
    // único: ou a quantidade inteira é aplicada, ou nada muda.
    pub async fn adjust(&self, id: i64, amount: i64) -> Result<Item, AppError> {
        let item = self.store.get_item(id).await?.ok_or(AppError::ItemNotFound)?;

        // Um delta que estoura i64 é tratado como amount inválido.
        let new_quantity = item
            .quantity
            .checked_add(amount)
            .ok_or(AppError::InvalidAmount)?;
        if new_quantity < 0 {
            return Err(AppError::NegativeQuantity);
        }

        if !self.store.set_item_quantity(id, new_quantity).await? {
            return Err(AppError::ItemNotFound);
        }

        Ok(Item {
            quantity: new_quantity,
            ..item
        })
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.store.deactivate_item(id).await? {
            return Err(AppError::ItemNotFound);
        }
        tracing::info!("Item desativado: id={}", id);
        Ok(())
    }
}
