// src/handlers/clients.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{common::error::AppError, config::AppState, models::client::Client};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientPayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "María García")]
    pub name: String,

    #[schema(example = "12345678")]
    pub document_number: Option<String>,

    #[validate(email(message = "invalid_email"))]
    #[schema(example = "maria@correo.com")]
    pub email: Option<String>,

    pub phone: Option<String>,
}

// GET /api/clients
#[utoipa::path(
    get,
    path = "/api/clients",
    tag = "Clientes",
    responses(
        (status = 200, description = "Lista de clientes con conteo de ejemplares", body = Vec<Client>)
    )
)]
pub async fn list_clients(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let clientes = app_state.client_repo.listar().await?;
    Ok((StatusCode::OK, Json(clientes)))
}

// POST /api/clients
#[utoipa::path(
    post,
    path = "/api/clients",
    tag = "Clientes",
    request_body = ClientPayload,
    responses(
        (status = 201, description = "Cliente creado", body = Client),
        (status = 409, description = "Documento duplicado")
    )
)]
pub async fn create_client(
    State(app_state): State<AppState>,
    Json(payload): Json<ClientPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let cliente = app_state
        .client_repo
        .crear(
            payload.name.trim(),
            payload.document_number.as_deref(),
            payload.email.as_deref(),
            payload.phone.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(cliente)))
}

// GET /api/clients/{id}
#[utoipa::path(
    get,
    path = "/api/clients/{id}",
    tag = "Clientes",
    responses(
        (status = 200, description = "Cliente", body = Client),
        (status = 404, description = "No encontrado")
    )
)]
pub async fn get_client(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let cliente = app_state.client_repo.obtener(id).await?;
    Ok((StatusCode::OK, Json(cliente)))
}

// PUT /api/clients/{id}
#[utoipa::path(
    put,
    path = "/api/clients/{id}",
    tag = "Clientes",
    request_body = ClientPayload,
    responses(
        (status = 200, description = "Cliente actualizado", body = Client)
    )
)]
pub async fn update_client(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ClientPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let cliente = app_state
        .client_repo
        .actualizar(
            id,
            payload.name.trim(),
            payload.document_number.as_deref(),
            payload.email.as_deref(),
            payload.phone.as_deref(),
        )
        .await?;

    Ok((StatusCode::OK, Json(cliente)))
}

// DELETE /api/clients/{id}
#[utoipa::path(
    delete,
    path = "/api/clients/{id}",
    tag = "Clientes",
    responses(
        (status = 204, description = "Cliente eliminado"),
        (status = 409, description = "Tiene contratos asociados")
    )
)]
pub async fn delete_client(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.client_repo.eliminar(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
