use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

// Tipo de violação de regra de negócio. `NoChange` é exclusivo do
// movimento de ejemplares (diff vazio).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleKind {
    Required,
    Invalid,
    NoChange,
}

// Erro de regra de negócio, sempre síncrono e local (nenhuma chamada de
// rede acontece antes dele). Carrega o campo ofensor para o formulário
// poder reexibir a mensagem no lugar certo.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{field}: {reason}")]
pub struct RuleError {
    pub field: String,
    pub kind: RuleKind,
    pub reason: String,
}

impl RuleError {
    pub fn required(field: &str) -> Self {
        Self {
            field: field.to_string(),
            kind: RuleKind::Required,
            reason: format!("El campo '{}' es obligatorio.", field),
        }
    }

    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            kind: RuleKind::Invalid,
            reason: reason.into(),
        }
    }

    pub fn no_change() -> Self {
        Self {
            field: "asignacion".to_string(),
            kind: RuleKind::NoChange,
            reason: "Al menos uno de Categoría, Sede o Propietario debe diferir de la asignación actual."
                .to_string(),
        }
    }
}

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // Regra de negócio violada (motor de asignación, contratos...).
    // Distinto de erro de persistência: acontece ANTES de tocar o banco.
    #[error("Regra de negócio: {0}")]
    Regla(#[from] RuleError),

    #[error("{0} no encontrado")]
    NotFound(String),

    // Violações de constraint (FK/unique) traduzidas nos repositórios.
    #[error("Conflicto: {0}")]
    Conflicto(String),

    // Variante para erros de banco de dados
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação, campo por campo.
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
                    "error": "Uno o más campos son inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }

            // Regras de negócio viram 422 com o campo etiquetado, para o
            // frontend decidir manter o formulário aberto.
            AppError::Regla(rule) => {
                let body = Json(json!({
                    "error": rule.reason,
                    "field": rule.field,
                    "kind": rule.kind,
                }));
                return (StatusCode::UNPROCESSABLE_ENTITY, body).into_response();
            }

            AppError::NotFound(recurso) => {
                let body = Json(json!({ "error": format!("{} no encontrado.", recurso) }));
                return (StatusCode::NOT_FOUND, body).into_response();
            }

            AppError::Conflicto(msg) => {
                let body = Json(json!({ "error": msg }));
                return (StatusCode::CONFLICT, body).into_response();
            }

            // Todos os outros erros (DatabaseError, InternalServerError) viram 500.
            // O `tracing` vai logar a mensagem detalhada que `thiserror` nos deu.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Ocurrió un error inesperado.")
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
