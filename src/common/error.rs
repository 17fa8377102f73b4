use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Token inválido")]
    InvalidToken,

    #[error("Passeio não encontrado")]
    TourNotFound,

    #[error("Reserva não encontrada")]
    ReservationNotFound,

    #[error("Ponto de embarque não encontrado")]
    PickupNotFound,

    // O tamanho do grupo ultrapassaria a capacidade do passeio.
    #[error("Capacidade do passeio excedida")]
    CapacityExceeded,

    // A única transição exposta é confirmed -> cancelled.
    #[error("Transição de status inválida")]
    InvalidStatusTransition,

    #[error("Upload inválido: {0}")]
    InvalidUpload(String),

    // Falha ao falar com um serviço externo (Imgur, LINE).
    #[error("Falha no serviço externo: {0}")]
    Upstream(String),

    // Variante genérica para qualquer outro erro inesperado.
    // `anyhow::Error` é ótimo para capturar o contexto do erro.
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação, campo a campo.
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
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Senha inválida.".to_string())
            }
            AppError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "Token de autenticação inválido ou ausente.".to_string(),
            ),
            AppError::TourNotFound => {
                (StatusCode::NOT_FOUND, "Passeio não encontrado.".to_string())
            }
            AppError::ReservationNotFound => {
                (StatusCode::NOT_FOUND, "Reserva não encontrada.".to_string())
            }
            AppError::PickupNotFound => (
                StatusCode::NOT_FOUND,
                "Ponto de embarque não encontrado.".to_string(),
            ),
            AppError::CapacityExceeded => (
                StatusCode::BAD_REQUEST,
                "A capacidade do passeio seria excedida.".to_string(),
            ),
            AppError::InvalidStatusTransition => (
                StatusCode::CONFLICT,
                "Apenas reservas confirmadas podem ser canceladas.".to_string(),
            ),
            AppError::InvalidUpload(reason) => (StatusCode::BAD_REQUEST, reason),
            AppError::Upstream(reason) => {
                tracing::error!("Falha no serviço externo: {}", reason);
                (StatusCode::BAD_GATEWAY, reason)
            }

            // Todos os outros erros viram 500.
            // O `tracing` vai logar a mensagem detalhada que `thiserror` nos deu.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Ocorreu um erro inesperado.".to_string(),
                )
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
