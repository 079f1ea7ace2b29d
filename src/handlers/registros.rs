// src/handlers/registros.rs
//
// Históricos de cuidado (alimentación, medicina, vacunación): CRUD
// simples por ejemplar, sem regra de negócio além da referência.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::registro::{Alimentacion, Medicina, Vacunacion},
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistroQuery {
    pub specimen_id: Option<i64>,
}

// ------------------------------------------------------------------
//  Alimentación
// ------------------------------------------------------------------

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlimentacionPayload {
    #[schema(example = 10)]
    pub specimen_id: i64,

    #[schema(value_type = String, format = Date, example = "2024-05-02")]
    pub fecha: NaiveDate,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Concentrado")]
    pub tipo_alimento: String,

    #[schema(example = "2 kg")]
    pub cantidad: Option<String>,
    pub notas: Option<String>,
}

// GET /api/registros/alimentacion
#[utoipa::path(
    get,
    path = "/api/registros/alimentacion",
    tag = "Registros",
    params(
        ("specimenId" = Option<i64>, Query, description = "Filtrar por ejemplar")
    ),
    responses(
        (status = 200, description = "Historial de alimentación", body = Vec<Alimentacion>)
    )
)]
pub async fn list_alimentaciones(
    State(app_state): State<AppState>,
    Query(query): Query<RegistroQuery>,
) -> Result<impl IntoResponse, AppError> {
    let registros = app_state
        .registro_repo
        .listar_alimentaciones(query.specimen_id)
        .await?;
    Ok((StatusCode::OK, Json(registros)))
}

// POST /api/registros/alimentacion
#[utoipa::path(
    post,
    path = "/api/registros/alimentacion",
    tag = "Registros",
    request_body = AlimentacionPayload,
    responses(
        (status = 201, description = "Registro creado", body = Alimentacion)
    )
)]
pub async fn create_alimentacion(
    State(app_state): State<AppState>,
    Json(payload): Json<AlimentacionPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let registro = app_state
        .registro_repo
        .crear_alimentacion(
            payload.specimen_id,
            payload.fecha,
            payload.tipo_alimento.trim(),
            payload.cantidad.as_deref(),
            payload.notas.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(registro)))
}

// DELETE /api/registros/alimentacion/{id}
#[utoipa::path(
    delete,
    path = "/api/registros/alimentacion/{id}",
    tag = "Registros",
    responses(
        (status = 204, description = "Registro eliminado")
    )
)]
pub async fn delete_alimentacion(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.registro_repo.eliminar_alimentacion(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ------------------------------------------------------------------
//  Medicina
// ------------------------------------------------------------------

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MedicinaPayload {
    #[schema(example = 10)]
    pub specimen_id: i64,

    #[schema(value_type = String, format = Date, example = "2024-05-02")]
    pub fecha: NaiveDate,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Ivermectina")]
    pub medicamento: String,

    #[schema(example = "5 ml")]
    pub dosis: Option<String>,
    pub notas: Option<String>,
}

// GET /api/registros/medicina
#[utoipa::path(
    get,
    path = "/api/registros/medicina",
    tag = "Registros",
    params(
        ("specimenId" = Option<i64>, Query, description = "Filtrar por ejemplar")
    ),
    responses(
        (status = 200, description = "Historial de medicina", body = Vec<Medicina>)
    )
)]
pub async fn list_medicinas(
    State(app_state): State<AppState>,
    Query(query): Query<RegistroQuery>,
) -> Result<impl IntoResponse, AppError> {
    let registros = app_state
        .registro_repo
        .listar_medicinas(query.specimen_id)
        .await?;
    Ok((StatusCode::OK, Json(registros)))
}

// POST /api/registros/medicina
#[utoipa::path(
    post,
    path = "/api/registros/medicina",
    tag = "Registros",
    request_body = MedicinaPayload,
    responses(
        (status = 201, description = "Registro creado", body = Medicina)
    )
)]
pub async fn create_medicina(
    State(app_state): State<AppState>,
    Json(payload): Json<MedicinaPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let registro = app_state
        .registro_repo
        .crear_medicina(
            payload.specimen_id,
            payload.fecha,
            payload.medicamento.trim(),
            payload.dosis.as_deref(),
            payload.notas.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(registro)))
}

// DELETE /api/registros/medicina/{id}
#[utoipa::path(
    delete,
    path = "/api/registros/medicina/{id}",
    tag = "Registros",
    responses(
        (status = 204, description = "Registro eliminado")
    )
)]
pub async fn delete_medicina(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.registro_repo.eliminar_medicina(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ------------------------------------------------------------------
//  Vacunación
// ------------------------------------------------------------------

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VacunacionPayload {
    #[schema(example = 10)]
    pub specimen_id: i64,

    #[schema(value_type = String, format = Date, example = "2024-05-02")]
    pub fecha: NaiveDate,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Antirrábica")]
    pub vacuna: String,

    pub notas: Option<String>,
}

// GET /api/registros/vacunacion
#[utoipa::path(
    get,
    path = "/api/registros/vacunacion",
    tag = "Registros",
    params(
        ("specimenId" = Option<i64>, Query, description = "Filtrar por ejemplar")
    ),
    responses(
        (status = 200, description = "Historial de vacunación", body = Vec<Vacunacion>)
    )
)]
pub async fn list_vacunaciones(
    State(app_state): State<AppState>,
    Query(query): Query<RegistroQuery>,
) -> Result<impl IntoResponse, AppError> {
    let registros = app_state
        .registro_repo
        .listar_vacunaciones(query.specimen_id)
        .await?;
    Ok((StatusCode::OK, Json(registros)))
}

// POST /api/registros/vacunacion
#[utoipa::path(
    post,
    path = "/api/registros/vacunacion",
    tag = "Registros",
    request_body = VacunacionPayload,
    responses(
        (status = 201, description = "Registro creado", body = Vacunacion)
    )
)]
pub async fn create_vacunacion(
    State(app_state): State<AppState>,
    Json(payload): Json<VacunacionPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let registro = app_state
        .registro_repo
        .crear_vacunacion(
            payload.specimen_id,
            payload.fecha,
            payload.vacuna.trim(),
            payload.notas.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(registro)))
}

// DELETE /api/registros/vacunacion/{id}
#[utoipa::path(
    delete,
    path = "/api/registros/vacunacion/{id}",
    tag = "Registros",
    responses(
        (status = 204, description = "Registro eliminado")
    )
)]
pub async fn delete_vacunacion(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.registro_repo.eliminar_vacunacion(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
