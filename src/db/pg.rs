// src/db/pg.rs

use std::time::Duration;

use async_trait::async_trait;
use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::common::error::AppError;
use crate::db::Store;
use crate::models::{
    auth::User,
    client::{Client, ClientChanges, NewClient},
    item::{Item, ItemChanges, NewItem},
    order::{NewOrder, OrderChanges, OrderStatus, OrderView, ServiceOrder},
};

// A variante persistente do store, sobre Postgres.
//
// Cada escrita é um único statement atômico (não há transações
// multi-statement — nenhuma operação precisa). O soft delete é um
// UPDATE da flag com `WHERE ... = TRUE`, então a semântica de
// "linhas afetadas" já distingue registro inativo de registro ausente.
//
// Ao contrário da variante de memória, desativar um cliente NÃO
// cascateia para as OS: elas apenas somem das listagens pelo filtro
// de join. Veja DESIGN.md.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

// SELECT comum da visão de OS; o LEFT JOIN deixa o nome do cliente
// nulo na leitura individual quando o cliente sumiu.
const ORDER_VIEW_COLUMNS: &str = r#"
    SELECT
        so.id,
        so.client_id,
        c.name AS client_name,
        so.product,
        so.description,
        so.date,
        so.status,
        so.service_class,
        so.observation
    FROM service_orders so
    LEFT JOIN clients c ON so.client_id = c.id
"#;

impl PgStore {
    pub async fn connect(database_url: &str) -> Result<Self, anyhow::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(database_url)
            .await?;
        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // Roda as migrações do SQLx na inicialização.
        sqlx::migrate!().run(&pool).await?;
        tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

        Ok(Self { pool })
    }
}

#[async_trait]
impl Store for PgStore {
    // --- Usuários ---

    async fn find_active_user(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password, role, name, status
            FROM users
            WHERE username = $1 AND password = $2 AND status = TRUE
            "#,
        )
        .bind(username)
        .bind(password)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    // --- Clientes ---

    async fn list_clients(&self) -> Result<Vec<Client>, AppError> {
        let clients = sqlx::query_as::<_, Client>(
            r#"
            SELECT id, name, phone, email, cpf, cep, address, status
            FROM clients
            WHERE status = TRUE
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(clients)
    }

    async fn get_client(&self, id: i64) -> Result<Option<Client>, AppError> {
        let client = sqlx::query_as::<_, Client>(
            r#"
            SELECT id, name, phone, email, cpf, cep, address, status
            FROM clients
            WHERE id = $1 AND status = TRUE
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(client)
    }

    async fn insert_client(&self, data: NewClient) -> Result<Client, AppError> {
        let client = sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (name, phone, email, cpf, cep, address)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, phone, email, cpf, cep, address, status
            "#,
        )
        .bind(&data.name)
        .bind(&data.phone)
        .bind(&data.email)
        .bind(&data.cpf)
        .bind(&data.cep)
        .bind(&data.address)
        .fetch_one(&self.pool)
        .await?;

        Ok(client)
    }

    async fn update_client(
        &self,
        id: i64,
        changes: ClientChanges,
    ) -> Result<Option<Client>, AppError> {
        // Lista explícita de campos: COALESCE deixa intacto o que vier nulo.
        let client = sqlx::query_as::<_, Client>(
            r#"
            UPDATE clients SET
                name = COALESCE($2, name),
                phone = COALESCE($3, phone),
                email = COALESCE($4, email),
                cpf = COALESCE($5, cpf),
                cep = COALESCE($6, cep),
                address = COALESCE($7, address)
            WHERE id = $1 AND status = TRUE
            RETURNING id, name, phone, email, cpf, cep, address, status
            "#,
        )
        .bind(id)
        .bind(&changes.name)
        .bind(&changes.phone)
        .bind(&changes.email)
        .bind(&changes.cpf)
        .bind(&changes.cep)
        .bind(&changes.address)
        .fetch_optional(&self.pool)
        .await?;

        Ok(client)
    }

    async fn deactivate_client(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE clients SET status = FALSE WHERE id = $1 AND status = TRUE")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // --- Ordens de serviço ---

    async fn list_order_views(&self) -> Result<Vec<OrderView>, AppError> {
        let sql = format!(
            r#"
            {ORDER_VIEW_COLUMNS}
            WHERE so.active = TRUE AND c.status = TRUE
            ORDER BY
                CASE so.service_class
                    WHEN 'urgente' THEN 1
                    WHEN 'data-fixa' THEN 2
                    ELSE 3
                END,
                so.id DESC
            "#
        );

        let views = sqlx::query_as::<_, OrderView>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(views)
    }

    async fn get_order_view(&self, id: i64) -> Result<Option<OrderView>, AppError> {
        let sql = format!("{ORDER_VIEW_COLUMNS} WHERE so.id = $1 AND so.active = TRUE");

        let view = sqlx::query_as::<_, OrderView>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(view)
    }

    async fn insert_order(&self, data: NewOrder) -> Result<ServiceOrder, AppError> {
        let order = sqlx::query_as::<_, ServiceOrder>(
            r#"
            INSERT INTO service_orders
                (client_id, product, description, date, status, service_class, observation)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, client_id, product, description, date, status,
                      service_class, observation, active
            "#,
        )
        .bind(data.client_id)
        .bind(&data.product)
        .bind(&data.description)
        .bind(data.date)
        .bind(data.status)
        .bind(data.service_class)
        .bind(&data.observation)
        .fetch_one(&self.pool)
        .await?;

        Ok(order)
    }

    async fn update_order(&self, id: i64, changes: OrderChanges) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE service_orders SET
                product = COALESCE($2, product),
                description = COALESCE($3, description),
                status = COALESCE($4, status),
                service_class = COALESCE($5, service_class),
                observation = COALESCE($6, observation)
            WHERE id = $1 AND active = TRUE
            "#,
        )
        .bind(id)
        .bind(&changes.product)
        .bind(&changes.description)
        .bind(changes.status)
        .bind(changes.service_class)
        .bind(&changes.observation)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn set_order_status(&self, id: i64, status: OrderStatus) -> Result<bool, AppError> {
        let result =
            sqlx::query("UPDATE service_orders SET status = $2 WHERE id = $1 AND active = TRUE")
                .bind(id)
                .bind(status)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn set_order_observation(&self, id: i64, observation: &str) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE service_orders SET observation = $2 WHERE id = $1 AND active = TRUE",
        )
        .bind(id)
        .bind(observation)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn deactivate_order(&self, id: i64) -> Result<bool, AppError> {
        // Sem cascata a partir do cliente nesta variante; o soft delete
        // da OS em si é este UPDATE.
        let result =
            sqlx::query("UPDATE service_orders SET active = FALSE WHERE id = $1 AND active = TRUE")
                .bind(id)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }

    // --- Itens de estoque ---

    async fn list_items(&self) -> Result<Vec<Item>, AppError> {
        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, name, brand, model, quantity, status
            FROM items
            WHERE status = TRUE
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    async fn get_item(&self, id: i64) -> Result<Option<Item>, AppError> {
        let item = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, name, brand, model, quantity, status
            FROM items
            WHERE id = $1 AND status = TRUE
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    async fn insert_item(&self, data: NewItem) -> Result<Item, AppError> {
        let item = sqlx::query_as::<_, Item>(
            r#"
            INSERT INTO items (name, brand, model, quantity)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, brand, model, quantity, status
            "#,
        )
        .bind(&data.name)
        .bind(&data.brand)
        .bind(&data.model)
        .bind(data.quantity)
        .fetch_one(&self.pool)
        .await?;

        Ok(item)
    }

    async fn update_item(&self, id: i64, changes: ItemChanges) -> Result<Option<Item>, AppError> {
        let item = sqlx::query_as::<_, Item>(
            r#"
            UPDATE items SET
                name = COALESCE($2, name),
                brand = COALESCE($3, brand),
                model = COALESCE($4, model),
                quantity = COALESCE($5, quantity)
            WHERE id = $1 AND status = TRUE
            RETURNING id, name, brand, model, quantity, status
            "#,
        )
        .bind(id)
        .bind(&changes.name)
        .bind(&changes.brand)
        .bind(&changes.model)
        .bind(changes.quantity)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    async fn set_item_quantity(&self, id: i64, quantity: i64) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE items SET quantity = $2 WHERE id = $1 AND status = TRUE")
            .bind(id)
            .bind(quantity)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn deactivate_item(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE items SET status = FALSE WHERE id = $1 AND status = TRUE")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
