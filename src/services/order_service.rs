// src/services/order_service.rs

use std::sync::Arc;

use chrono::Utc;

use crate::{
    common::error::AppError,
    db::Store,
    models::order::{NewOrder, OrderChanges, OrderStatus, OrderView, ServiceClass},
};

#[derive(Clone)]
pub struct OrderService {
    store: Arc<dyn Store>,
}

impl OrderService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    // Listagem já na ordem do quadro: urgente, data-fixa, comum;
    // empates por id decrescente. OS de cliente inativo não aparece.
    pub async fn list(&self) -> Result<Vec<OrderView>, AppError> {
        self.store.list_order_views().await
    }

    pub async fn create(
        &self,
        client_id: i64,
        product: String,
        description: String,
        service_class: Option<String>,
    ) -> Result<OrderView, AppError> {
        // A classe chega como string crua (como o status): o valor
        // desconhecido vira 400 com a mensagem do contrato, não um
        // erro de parse do JSON. Ausente, vale o padrão "comum".
        let service_class = parse_service_class(service_class)?.unwrap_or(ServiceClass::Comum);

        // O vínculo exige um cliente ativo no momento da criação.
        let client = self
            .store
            .get_client(client_id)
            .await?
            .ok_or(AppError::ClientNotFound)?;

        let order = self
            .store
            .insert_order(NewOrder {
                client_id: client.id,
                product,
                description,
                date: Utc::now().date_naive(),
                status: OrderStatus::Recebido,
                service_class,
                observation: String::new(),
            })
            .await?;

        tracing::info!("OS criada: id={} cliente={}", order.id, client.id);

        Ok(OrderView {
            id: order.id,
            client_id: order.client_id,
            client_name: Some(client.name),
            product: order.product,
            description: order.description,
            date: order.date,
            status: order.status,
            service_class: order.service_class,
            observation: order.observation,
        })
    }

    pub async fn update(
        &self,
        id: i64,
        product: Option<String>,
        description: Option<String>,
        status: Option<String>,
        service_class: Option<String>,
        observation: Option<String>,
    ) -> Result<OrderView, AppError> {
        let changes = OrderChanges {
            product,
            description,
            status: parse_status(status)?,
            service_class: parse_service_class(service_class)?,
            observation,
        };

        if !self.store.update_order(id, changes).await? {
            return Err(AppError::OrderNotFound);
        }
        self.view(id).await
    }

    // Qualquer etapa é aceita a partir de qualquer outra; só a string
    // desconhecida é rejeitada. A validação vem antes da busca, então
    // status inválido responde 400 mesmo para OS inexistente.
    pub async fn set_status(&self, id: i64, status: &str) -> Result<OrderView, AppError> {
        let status = OrderStatus::parse(status).ok_or(AppError::InvalidStatus)?;

        if !self.store.set_order_status(id, status).await? {
            return Err(AppError::OrderNotFound);
        }
        self.view(id).await
    }

    pub async fn set_observation(&self, id: i64, observation: &str) -> Result<OrderView, AppError> {
        if !self.store.set_order_observation(id, observation).await? {
            return Err(AppError::OrderNotFound);
        }
        self.view(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.store.deactivate_order(id).await? {
            return Err(AppError::OrderNotFound);
        }
        tracing::info!("OS desativada: id={}", id);
        Ok(())
    }

    async fn view(&self, id: i64) -> Result<OrderView, AppError> {
        self.store
            .get_order_view(id)
            .await?
            .ok_or(AppError::OrderNotFound)
    }
}

fn parse_status(value: Option<String>) -> Result<Option<OrderStatus>, AppError> {
    match value.as_deref() {
        Some(s) => Ok(Some(OrderStatus::parse(s).ok_or(AppError::InvalidStatus)?)),
        None => Ok(None),
    }
}

fn parse_service_class(value: Option<String>) -> Result<Option<ServiceClass>, AppError> {
    match value.as_deref() {
        Some(s) => Ok(Some(
            ServiceClass::parse(s).ok_or(AppError::InvalidServiceClass)?,
        )),
        None => Ok(None),
    }
}
