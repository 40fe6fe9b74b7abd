// src/routes.rs

use axum::{
    Json, Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post, put},
};
use serde_json::json;

use crate::config::AppState;
use crate::handlers;

// Monta o Router completo. Fica fora do main para que os testes de
// integração usem exatamente as mesmas rotas da aplicação real.
pub fn app(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        // --- Auth ---
        .route("/auth/login", post(handlers::auth::login))
        // --- Clientes ---
        .route(
            "/clients",
            get(handlers::clients::list_clients).post(handlers::clients::create_client),
        )
        .route(
            "/clients/{id}",
            put(handlers::clients::update_client).delete(handlers::clients::delete_client),
        )
        // --- Ordens de serviço ---
        .route(
            "/orders",
            get(handlers::orders::list_orders).post(handlers::orders::create_order),
        )
        .route(
            "/orders/{id}",
            put(handlers::orders::update_order).delete(handlers::orders::delete_order),
        )
        .route("/orders/{id}/status", patch(handlers::orders::set_order_status))
        .route(
            "/orders/{id}/observation",
            patch(handlers::orders::set_order_observation),
        )
        // --- Estoque ---
        .route(
            "/items",
            get(handlers::items::list_items).post(handlers::items::create_item),
        )
        .route(
            "/items/{id}",
            put(handlers::items::update_item).delete(handlers::items::delete_item),
        )
        .route("/items/{id}/adjust", patch(handlers::items::adjust_item))
        .fallback(not_found)
        .with_state(app_state)
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok", "service": "centel-backend" }))
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "Rota não encontrada" })),
    )
}
