mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::TestApp;

#[tokio::test]
async fn criar_item_sem_quantidade_assume_zero() {
    let app = TestApp::new();

    let (status, body) = app.post("/items", json!({ "name": "Fonte" })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["quantity"], 0);
    assert_eq!(body["brand"], serde_json::Value::Null);

    // Quantidade inválida também vira zero, em vez de erro.
    let (status, body) = app
        .post("/items", json!({ "name": "Cabo", "quantity": "muitos" }))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["quantity"], 0);

    let (status, body) = app
        .post("/items", json!({ "name": "Tela", "quantity": -3 }))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["quantity"], 0);
}

#[tokio::test]
async fn criar_item_sem_nome_responde_400() {
    let app = TestApp::new();

    let (status, body) = app.post("/items", json!({ "brand": "Acme" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Campos obrigatórios ausentes");
}

#[tokio::test]
async fn ajuste_soma_e_subtrai_quantidade() {
    let app = TestApp::new();
    let id = app.create_item("Fonte", 5).await;

    let (status, body) = app
        .patch(&format!("/items/{id}/adjust"), json!({ "amount": 3 }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["quantity"], 8);

    let (status, body) = app
        .patch(&format!("/items/{id}/adjust"), json!({ "amount": -8 }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["quantity"], 0);
}

#[tokio::test]
async fn ajuste_que_negativaria_e_rejeitado_sem_efeito() {
    let app = TestApp::new();
    let id = app.create_item("Fonte", 5).await;

    let (status, body) = app
        .patch(&format!("/items/{id}/adjust"), json!({ "amount": -100 }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Quantidade não pode ser negativa");

    // Nada foi aplicado: a quantidade armazenada continua 5.
    let (_, body) = app.get("/items").await;
    assert_eq!(body[0]["quantity"], 5);
}

#[tokio::test]
async fn ajuste_que_estoura_i64_e_rejeitado_sem_efeito() {
    let app = TestApp::new();
    let id = app.create_item("Fonte", 5).await;

    let (status, body) = app
        .patch(&format!("/items/{id}/adjust"), json!({ "amount": i64::MAX }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "amount deve ser numérico");

    // i64::MIN não estoura a soma, mas negativa a quantidade.
    let (status, body) = app
        .patch(&format!("/items/{id}/adjust"), json!({ "amount": i64::MIN }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Quantidade não pode ser negativa");

    let (_, body) = app.get("/items").await;
    assert_eq!(body[0]["quantity"], 5);
}

#[tokio::test]
async fn ajuste_nao_numerico_responde_400() {
    let app = TestApp::new();
    let id = app.create_item("Fonte", 5).await;

    let (status, body) = app
        .patch(&format!("/items/{id}/adjust"), json!({ "amount": "dez" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "amount deve ser numérico");

    let (status, _) = app.patch(&format!("/items/{id}/adjust"), json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn ajuste_em_item_inexistente_ou_inativo_responde_404() {
    let app = TestApp::new();

    let (status, body) = app.patch("/items/99/adjust", json!({ "amount": 1 })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Item não encontrado");

    let id = app.create_item("Fonte", 5).await;
    app.delete(&format!("/items/{id}")).await;

    let (status, _) = app
        .patch(&format!("/items/{id}/adjust"), json!({ "amount": 1 }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn atualizar_item_nao_aceita_quantidade_negativa() {
    let app = TestApp::new();
    let id = app.create_item("Fonte", 5).await;

    let (status, body) = app
        .put(&format!("/items/{id}"), json!({ "quantity": -1 }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Quantidade não pode ser negativa");

    // Atualização parcial válida preserva o resto.
    let (status, body) = app
        .put(&format!("/items/{id}"), json!({ "brand": "Acme" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["brand"], "Acme");
    assert_eq!(body["name"], "Fonte");
    assert_eq!(body["quantity"], 5);
}

#[tokio::test]
async fn soft_delete_de_item_nao_e_idempotente() {
    let app = TestApp::new();
    let id = app.create_item("Fonte", 5).await;

    let (status, _) = app.delete(&format!("/items/{id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = app.delete(&format!("/items/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Item não encontrado");

    let (_, body) = app.get("/items").await;
    assert!(body.as_array().unwrap().is_empty());
}
