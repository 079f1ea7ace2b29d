// src/handlers/sedes.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{common::error::AppError, config::AppState, models::sede::Sede};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SedePayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Sede Norte")]
    pub name: String,
}

// GET /api/sedes
#[utoipa::path(
    get,
    path = "/api/sedes",
    tag = "Sedes",
    responses(
        (status = 200, description = "Lista de sedes", body = Vec<Sede>)
    )
)]
pub async fn list_sedes(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let sedes = app_state.sede_repo.listar().await?;
    Ok((StatusCode::OK, Json(sedes)))
}

// POST /api/sedes
#[utoipa::path(
    post,
    path = "/api/sedes",
    tag = "Sedes",
    request_body = SedePayload,
    responses(
        (status = 201, description = "Sede creada", body = Sede)
    )
)]
pub async fn create_sede(
    State(app_state): State<AppState>,
    Json(payload): Json<SedePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let sede = app_state.sede_repo.crear(payload.name.trim()).await?;
    Ok((StatusCode::CREATED, Json(sede)))
}

// GET /api/sedes/{id}
#[utoipa::path(
    get,
    path = "/api/sedes/{id}",
    tag = "Sedes",
    responses(
        (status = 200, description = "Sede", body = Sede),
        (status = 404, description = "No encontrada")
    )
)]
pub async fn get_sede(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let sede = app_state.sede_repo.obtener(id).await?;
    Ok((StatusCode::OK, Json(sede)))
}

// PUT /api/sedes/{id}
#[utoipa::path(
    put,
    path = "/api/sedes/{id}",
    tag = "Sedes",
    request_body = SedePayload,
    responses(
        (status = 200, description = "Sede actualizada", body = Sede)
    )
)]
pub async fn update_sede(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<SedePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let sede = app_state
        .sede_repo
        .actualizar(id, payload.name.trim())
        .await?;
    Ok((StatusCode::OK, Json(sede)))
}

// DELETE /api/sedes/{id}
#[utoipa::path(
    delete,
    path = "/api/sedes/{id}",
    tag = "Sedes",
    responses(
        (status = 204, description = "Sede eliminada")
    )
)]
pub async fn delete_sede(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.sede_repo.eliminar(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
