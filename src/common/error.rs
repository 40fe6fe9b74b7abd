use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// As mensagens são as mesmas que o frontend já conhece.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Usuário e senha são obrigatórios")]
    MissingCredentials,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Cliente não encontrado")]
    ClientNotFound,

    #[error("OS não encontrada")]
    OrderNotFound,

    #[error("Item não encontrado")]
    ItemNotFound,

    #[error("Status inválido")]
    InvalidStatus,

    #[error("Classe de serviço inválida")]
    InvalidServiceClass,

    #[error("amount deve ser numérico")]
    InvalidAmount,

    #[error("Quantidade não pode ser negativa")]
    NegativeQuantity,

    // Variante para erros de banco de dados
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado.
    // `anyhow::Error` é ótimo para capturar o contexto do erro.
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            // Retorna os detalhes da validação campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "message": "Campos obrigatórios ausentes",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }

            AppError::MissingCredentials => {
                (StatusCode::BAD_REQUEST, "Usuário e senha são obrigatórios")
            }
            AppError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Credenciais inválidas"),

            AppError::ClientNotFound => (StatusCode::NOT_FOUND, "Cliente não encontrado"),
            AppError::OrderNotFound => (StatusCode::NOT_FOUND, "OS não encontrada"),
            AppError::ItemNotFound => (StatusCode::NOT_FOUND, "Item não encontrado"),

            AppError::InvalidStatus => (StatusCode::BAD_REQUEST, "Status inválido"),
            AppError::InvalidServiceClass => {
                (StatusCode::BAD_REQUEST, "Classe de serviço inválida")
            }
            AppError::InvalidAmount => (StatusCode::BAD_REQUEST, "amount deve ser numérico"),
            AppError::NegativeQuantity => {
                (StatusCode::BAD_REQUEST, "Quantidade não pode ser negativa")
            }

            // Todos os outros erros (DatabaseError, InternalServerError) viram 500.
            // O `tracing` loga a mensagem detalhada; a resposta fica genérica.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Erro interno do servidor")
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "message": message }));
        (status, body).into_response()
    }
}
