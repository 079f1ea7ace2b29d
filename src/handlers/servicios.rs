// src/handlers/servicios.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{common::error::AppError, config::AppState, models::servicio::Servicio};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServicioPayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Hospedaje")]
    pub nombre: String,

    pub descripcion: Option<String>,
}

// GET /api/servicios
#[utoipa::path(
    get,
    path = "/api/servicios",
    tag = "Servicios",
    responses(
        (status = 200, description = "Catálogo de servicios", body = Vec<Servicio>)
    )
)]
pub async fn list_servicios(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let servicios = app_state.servicio_repo.listar().await?;
    Ok((StatusCode::OK, Json(servicios)))
}

// POST /api/servicios
#[utoipa::path(
    post,
    path = "/api/servicios",
    tag = "Servicios",
    request_body = ServicioPayload,
    responses(
        (status = 201, description = "Servicio creado", body = Servicio)
    )
)]
pub async fn create_servicio(
    State(app_state): State<AppState>,
    Json(payload): Json<ServicioPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let servicio = app_state
        .servicio_repo
        .crear(payload.nombre.trim(), payload.descripcion.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(servicio)))
}

// GET /api/servicios/{id}
#[utoipa::path(
    get,
    path = "/api/servicios/{id}",
    tag = "Servicios",
    responses(
        (status = 200, description = "Servicio", body = Servicio),
        (status = 404, description = "No encontrado")
    )
)]
pub async fn get_servicio(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let servicio = app_state.servicio_repo.obtener(id).await?;
    Ok((StatusCode::OK, Json(servicio)))
}

// PUT /api/servicios/{id}
#[utoipa::path(
    put,
    path = "/api/servicios/{id}",
    tag = "Servicios",
    request_body = ServicioPayload,
    responses(
        (status = 200, description = "Servicio actualizado", body = Servicio)
    )
)]
pub async fn update_servicio(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ServicioPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let servicio = app_state
        .servicio_repo
        .actualizar(id, payload.nombre.trim(), payload.descripcion.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(servicio)))
}

// DELETE /api/servicios/{id}
#[utoipa::path(
    delete,
    path = "/api/servicios/{id}",
    tag = "Servicios",
    responses(
        (status = 204, description = "Servicio eliminado"),
        (status = 409, description = "Incluido en contratos")
    )
)]
pub async fn delete_servicio(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.servicio_repo.eliminar(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
