// Harness compartilhado: monta o Router real sobre o store de memória
// e dispara requisições com tower::oneshot, sem subir servidor.
#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use centel_backend::{config::AppState, db::memory::MemoryStore, routes};

pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        let state = AppState::with_store(Arc::new(MemoryStore::new()));
        Self {
            router: routes::app(state),
        }
    }

    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(path);
        let request = match body {
            Some(value) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(value.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("resposta não é JSON válido")
        };

        (status, body)
    }

    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        self.request(Method::GET, path, None).await
    }

    pub async fn post(&self, path: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, path, Some(body)).await
    }

    pub async fn put(&self, path: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, path, Some(body)).await
    }

    pub async fn patch(&self, path: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PATCH, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, path, None).await
    }

    // --- Atalhos de cenário ---

    pub async fn create_client(&self, name: &str) -> i64 {
        let (status, body) = self
            .post(
                "/clients",
                json!({
                    "name": name,
                    "phone": "11999990000",
                    "cpf": "12345678900",
                    "cep": "01001-000",
                    "address": "Rua A, 1",
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create_client falhou: {body}");
        body["id"].as_i64().unwrap()
    }

    pub async fn create_order(&self, client_id: i64, service_class: Option<&str>) -> i64 {
        let mut payload = json!({
            "clientId": client_id,
            "product": "TV",
            "description": "não liga",
        });
        if let Some(class) = service_class {
            payload["serviceClass"] = json!(class);
        }

        let (status, body) = self.post("/orders", payload).await;
        assert_eq!(status, StatusCode::CREATED, "create_order falhou: {body}");
        body["id"].as_i64().unwrap()
    }

    pub async fn create_item(&self, name: &str, quantity: i64) -> i64 {
        let (status, body) = self
            .post("/items", json!({ "name": name, "quantity": quantity }))
            .await;
        assert_eq!(status, StatusCode::CREATED, "create_item falhou: {body}");
        body["id"].as_i64().unwrap()
    }
}
