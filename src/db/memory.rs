// src/db/memory.rs

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::common::error::AppError;
use crate::db::Store;
use crate::models::{
    auth::User,
    client::{Client, ClientChanges, NewClient},
    item::{Item, ItemChanges, NewItem},
    order::{NewOrder, OrderChanges, OrderStatus, OrderView, ServiceOrder},
};

// A variante sem banco de dados: os registros vivem num RwLock dentro
// do próprio store, em vez de arrays globais. É a implementação usada
// quando não há DATABASE_URL e pelos testes de integração.
//
// Divergência documentada: ao desativar um cliente, esta variante também
// desativa as OS vinculadas (cascata). A variante Postgres não cascateia;
// lá as OS apenas somem das listagens pelo filtro de join. Veja DESIGN.md.
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    users: Vec<User>,
    clients: Vec<Client>,
    items: Vec<Item>,
    orders: Vec<ServiceOrder>,
    next_client_id: i64,
    next_item_id: i64,
    next_order_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        let inner = Inner {
            // Mesmo usuário de demonstração que o seed das migrações.
            users: vec![User {
                id: 1,
                username: "admin".to_string(),
                password: "admin123".to_string(),
                role: "admin".to_string(),
                name: "Administrador".to_string(),
                status: true,
            }],
            next_client_id: 1,
            next_item_id: 1,
            next_order_id: 1,
            ..Inner::default()
        };

        Self {
            inner: RwLock::new(inner),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Inner {
    // Monta a visão desnormalizada de uma OS. O nome do cliente é
    // resolvido mesmo se ele estiver inativo; o filtro de join das
    // listagens fica em `list_order_views`.
    fn order_view(&self, order: &ServiceOrder) -> OrderView {
        let client_name = self
            .clients
            .iter()
            .find(|c| c.id == order.client_id)
            .map(|c| c.name.clone());

        OrderView {
            id: order.id,
            client_id: order.client_id,
            client_name,
            product: order.product.clone(),
            description: order.description.clone(),
            date: order.date,
            status: order.status,
            service_class: order.service_class,
            observation: order.observation.clone(),
        }
    }

    fn active_client(&self, id: i64) -> Option<&Client> {
        self.clients.iter().find(|c| c.id == id && c.status)
    }

    fn active_order_mut(&mut self, id: i64) -> Option<&mut ServiceOrder> {
        self.orders.iter_mut().find(|o| o.id == id && o.active)
    }

    fn active_item_mut(&mut self, id: i64) -> Option<&mut Item> {
        self.items.iter_mut().find(|i| i.id == id && i.status)
    }
}

#[async_trait]
impl Store for MemoryStore {
    // --- Usuários ---

    async fn find_active_user(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner
            .users
            .iter()
            .find(|u| u.username == username && u.password == password && u.status)
            .cloned())
    }

    // --- Clientes ---

    async fn list_clients(&self) -> Result<Vec<Client>, AppError> {
        let inner = self.inner.read().await;
        // O vetor é append-only, então já está em ordem crescente de id.
        Ok(inner.clients.iter().filter(|c| c.status).cloned().collect())
    }

    async fn get_client(&self, id: i64) -> Result<Option<Client>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.active_client(id).cloned())
    }

    async fn insert_client(&self, data: NewClient) -> Result<Client, AppError> {
        let mut inner = self.inner.write().await;
        let client = Client {
            id: inner.next_client_id,
            name: data.name,
            phone: data.phone,
            email: data.email,
            cpf: data.cpf,
            cep: data.cep,
            address: data.address,
            status: true,
        };
        inner.next_client_id += 1;
        inner.clients.push(client.clone());
        Ok(client)
    }

    async fn update_client(
        &self,
        id: i64,
        changes: ClientChanges,
    ) -> Result<Option<Client>, AppError> {
        let mut inner = self.inner.write().await;
        let Some(client) = inner.clients.iter_mut().find(|c| c.id == id && c.status) else {
            return Ok(None);
        };

        if let Some(name) = changes.name {
            client.name = name;
        }
        if let Some(phone) = changes.phone {
            client.phone = phone;
        }
        if let Some(email) = changes.email {
            client.email = Some(email);
        }
        if let Some(cpf) = changes.cpf {
            client.cpf = cpf;
        }
        if let Some(cep) = changes.cep {
            client.cep = cep;
        }
        if let Some(address) = changes.address {
            client.address = address;
        }

        Ok(Some(client.clone()))
    }

    async fn deactivate_client(&self, id: i64) -> Result<bool, AppError> {
        let mut inner = self.inner.write().await;
        let Some(client) = inner.clients.iter_mut().find(|c| c.id == id && c.status) else {
            return Ok(false);
        };
        client.status = false;

        // Cascata desta variante: desativa também as OS do cliente.
        for order in inner.orders.iter_mut().filter(|o| o.client_id == id) {
            order.active = false;
        }

        Ok(true)
    }

    // --- Ordens de serviço ---

    async fn list_order_views(&self) -> Result<Vec<OrderView>, AppError> {
        let inner = self.inner.read().await;

        // Semântica de inner join: OS ativa E cliente ativo.
        let mut views: Vec<OrderView> = inner
            .orders
            .iter()
            .filter(|o| o.active && inner.active_client(o.client_id).is_some())
            .map(|o| inner.order_view(o))
            .collect();

        // urgente antes de data-fixa antes de comum; empate por id decrescente.
        views.sort_by_key(|v| (v.service_class.priority(), std::cmp::Reverse(v.id)));

        Ok(views)
    }

    async fn get_order_view(&self, id: i64) -> Result<Option<OrderView>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner
            .orders
            .iter()
            .find(|o| o.id == id && o.active)
            .map(|o| inner.order_view(o)))
    }

    async fn insert_order(&self, data: NewOrder) -> Result<ServiceOrder, AppError> {
        let mut inner = self.inner.write().await;
        let order = ServiceOrder {
            id: inner.next_order_id,
            client_id: data.client_id,
            product: data.product,
            description: data.description,
            date: data.date,
            status: data.status,
            service_class: data.service_class,
            observation: data.observation,
            active: true,
        };
        inner.next_order_id += 1;
        inner.orders.push(order.clone());
        Ok(order)
    }

    async fn update_order(&self, id: i64, changes: OrderChanges) -> Result<bool, AppError> {
        let mut inner = self.inner.write().await;
        let Some(order) = inner.active_order_mut(id) else {
            return Ok(false);
        };

        if let Some(product) = changes.product {
            order.product = product;
        }
        if let Some(description) = changes.description {
            order.description = description;
        }
        if let Some(status) = changes.status {
            order.status = status;
        }
        if let Some(service_class) = changes.service_class {
            order.service_class = service_class;
        }
        if let Some(observation) = changes.observation {
            order.observation = observation;
        }

        Ok(true)
    }

    async fn set_order_status(&self, id: i64, status: OrderStatus) -> Result<bool, AppError> {
        let mut inner = self.inner.write().await;
        let Some(order) = inner.active_order_mut(id) else {
            return Ok(false);
        };
        order.status = status;
        Ok(true)
    }

    async fn set_order_observation(&self, id: i64, observation: &str) -> Result<bool, AppError> {
        let mut inner = self.inner.write().await;
        let Some(order) = inner.active_order_mut(id) else {
            return Ok(false);
        };
        order.observation = observation.to_string();
        Ok(true)
    }

    async fn deactivate_order(&self, id: i64) -> Result<bool, AppError> {
        let mut inner = self.inner.write().await;
        let Some(order) = inner.active_order_mut(id) else {
            return Ok(false);
        };
        order.active = false;
        Ok(true)
    }

    // --- Itens de estoque ---

    async fn list_items(&self) -> Result<Vec<Item>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.items.iter().filter(|i| i.status).cloned().collect())
    }

    async fn get_item(&self, id: i64) -> Result<Option<Item>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.items.iter().find(|i| i.id == id && i.status).cloned())
    }

    async fn insert_item(&self, data: NewItem) -> Result<Item, AppError> {
        let mut inner = self.inner.write().await;
        let item = Item {
            id: inner.next_item_id,
            name: data.name,
            brand: data.brand,
            model: data.model,
            quantity: data.quantity,
            status: true,
        };
        inner.next_item_id += 1;
        inner.items.push(item.clone());
        Ok(item)
    }

    async fn update_item(&self, id: i64, changes: ItemChanges) -> Result<Option<Item>, AppError> {
        let mut inner = self.inner.write().await;
        let Some(item) = inner.active_item_mut(id) else {
            return Ok(None);
        };

        if let Some(name) = changes.name {
            item.name = name;
        }
        if let Some(brand) = changes.brand {
            item.brand = Some(brand);
        }
        if let Some(model) = changes.model {
            item.model = Some(model);
        }
        if let Some(quantity) = changes.quantity {
            item.quantity = quantity;
        }

        Ok(Some(item.clone()))
    }

    async fn set_item_quantity(&self, id: i64, quantity: i64) -> Result<bool, AppError> {
        let mut inner = self.inner.write().await;
        let Some(item) = inner.active_item_mut(id) else {
            return Ok(false);
        };
        item.quantity = quantity;
        Ok(true)
    }

    async fn deactivate_item(&self, id: i64) -> Result<bool, AppError> {
        let mut inner = self.inner.write().await;
        let Some(item) = inner.active_item_mut(id) else {
            return Ok(false);
        };
        item.status = false;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::order::ServiceClass;
    use chrono::Utc;

    fn new_client(name: &str) -> NewClient {
        NewClient {
            name: name.to_string(),
            phone: "11999990000".to_string(),
            email: None,
            cpf: "12345678900".to_string(),
            cep: "01001-000".to_string(),
            address: "Rua A, 1".to_string(),
        }
    }

    fn new_order(client_id: i64) -> NewOrder {
        NewOrder {
            client_id,
            product: "TV".to_string(),
            description: "não liga".to_string(),
            date: Utc::now().date_naive(),
            status: OrderStatus::Recebido,
            service_class: ServiceClass::Comum,
            observation: String::new(),
        }
    }

    #[tokio::test]
    async fn desativar_cliente_cascateia_para_as_os() {
        let store = MemoryStore::new();
        let client = store.insert_client(new_client("Ana")).await.unwrap();
        let order = store.insert_order(new_order(client.id)).await.unwrap();

        assert!(store.deactivate_client(client.id).await.unwrap());

        // A OS foi desativada junto: nem a leitura individual a encontra.
        assert!(store.get_order_view(order.id).await.unwrap().is_none());
        assert!(store.list_order_views().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn ids_sao_crescentes_e_soft_delete_nao_reusa_id() {
        let store = MemoryStore::new();
        let a = store.insert_client(new_client("A")).await.unwrap();
        let b = store.insert_client(new_client("B")).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));

        store.deactivate_client(b.id).await.unwrap();
        let c = store.insert_client(new_client("C")).await.unwrap();
        assert_eq!(c.id, 3);
    }
}
