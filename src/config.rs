// src/config.rs

use std::env;
use std::sync::Arc;

use crate::db::{Store, memory::MemoryStore, pg::PgStore};
use crate::services::{
    auth::AuthService, client_service::ClientService, order_service::OrderService,
    stock_service::StockService,
};

// Configuração carregada do ambiente.
// DATABASE_URL é opcional: sem ela, a aplicação usa o store de memória
// (a variante sem banco da aplicação, útil para demonstração e testes).
pub struct Config {
    pub port: u16,
    pub database_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(4000);
        let database_url = env::var("DATABASE_URL").ok();

        Self { port, database_url }
    }
}

// O estado compartilhado que será acessível em toda a aplicação.
// Os services recebem o Store por injeção, em vez de estado global.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: AuthService,
    pub client_service: ClientService,
    pub order_service: OrderService,
    pub stock_service: StockService,
}

impl AppState {
    pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
        let store: Arc<dyn Store> = match &config.database_url {
            Some(url) => {
                let pg = PgStore::connect(url).await?;
                Arc::new(pg)
            }
            None => {
                tracing::warn!(
                    "DATABASE_URL ausente: usando o store de memória (dados não persistem)."
                );
                Arc::new(MemoryStore::new())
            }
        };

        Ok(Self::with_store(store))
    }

    // Monta o estado a partir de um Store já construído (usado pelos testes).
    pub fn with_store(store: Arc<dyn Store>) -> Self {
        Self {
            auth_service: AuthService::new(store.clone()),
            client_service: ClientService::new(store.clone()),
            order_service: OrderService::new(store.clone()),
            stock_service: StockService::new(store),
        }
    }
}
