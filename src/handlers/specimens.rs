// src/handlers/specimens.rs

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
    models::specimen::Specimen,
    services::assignment::{BorradorEjemplar, MovimientoPropuesto, RawId},
    services::grouping::GrupoCategoria,
};

// Os identificadores chegam como número ou string segundo a origem
// (formulário vs. payload de API); o motor normaliza.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpecimenPayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Rex")]
    pub name: String,

    #[schema(value_type = Option<String>, example = "1")]
    pub category_id: Option<RawId>,

    #[schema(value_type = Option<String>, example = "2")]
    pub sede_id: Option<RawId>,

    #[schema(value_type = Option<String>)]
    pub client_id: Option<RawId>,

    pub breed: Option<String>,
    pub color: Option<String>,

    #[schema(value_type = Option<String>, format = Date, example = "2021-03-14")]
    pub birth_date: Option<NaiveDate>,
}

impl SpecimenPayload {
    fn como_borrador(&self) -> BorradorEjemplar {
        BorradorEjemplar {
            name: self.name.clone(),
            category_id: self.category_id.clone(),
            sede_id: self.sede_id.clone(),
            client_id: self.client_id.clone(),
            breed: self.breed.clone(),
            color: self.color.clone(),
            birth_date: self.birth_date,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub category_id: Option<i64>,
}

// GET /api/specimens
#[utoipa::path(
    get,
    path = "/api/specimens",
    tag = "Ejemplares",
    params(
        ("categoryId" = Option<i64>, Query, description = "Filtrar por categoría")
    ),
    responses(
        (status = 200, description = "Lista de ejemplares", body = Vec<Specimen>)
    )
)]
pub async fn list_specimens(
    State(app_state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let ejemplares = app_state.specimen_service.listar(query.category_id).await?;
    Ok((StatusCode::OK, Json(ejemplares)))
}

// GET /api/specimens/agrupados
#[utoipa::path(
    get,
    path = "/api/specimens/agrupados",
    tag = "Ejemplares",
    responses(
        (status = 200, description = "Ejemplares particionados por categoría", body = Vec<GrupoCategoria>)
    )
)]
pub async fn list_specimens_agrupados(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let grupos = app_state.specimen_service.agrupados().await?;
    Ok((StatusCode::OK, Json(grupos)))
}

// POST /api/specimens
#[utoipa::path(
    post,
    path = "/api/specimens",
    tag = "Ejemplares",
    request_body = SpecimenPayload,
    responses(
        (status = 201, description = "Ejemplar creado", body = Specimen),
        (status = 422, description = "Categoría o sede faltante")
    )
)]
pub async fn create_specimen(
    State(app_state): State<AppState>,
    Json(payload): Json<SpecimenPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let ejemplar = app_state
        .specimen_service
        .crear(&payload.como_borrador())
        .await?;

    Ok((StatusCode::CREATED, Json(ejemplar)))
}

// GET /api/specimens/{id}
#[utoipa::path(
    get,
    path = "/api/specimens/{id}",
    tag = "Ejemplares",
    responses(
        (status = 200, description = "Ejemplar", body = Specimen),
        (status = 404, description = "No encontrado")
    )
)]
pub async fn get_specimen(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let ejemplar = app_state.specimen_service.obtener(id).await?;
    Ok((StatusCode::OK, Json(ejemplar)))
}

// PUT /api/specimens/{id}
#[utoipa::path(
    put,
    path = "/api/specimens/{id}",
    tag = "Ejemplares",
    request_body = SpecimenPayload,
    responses(
        (status = 200, description = "Ejemplar actualizado", body = Specimen),
        (status = 422, description = "Regla de asignación violada")
    )
)]
pub async fn update_specimen(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<SpecimenPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let ejemplar = app_state
        .specimen_service
        .editar(id, &payload.como_borrador())
        .await?;

    Ok((StatusCode::OK, Json(ejemplar)))
}

// PUT /api/specimens/{id}/move
//
// Operação distinta da edição: só a tripla relacional, com payload
// mínimo. Um movimiento sem cambio real responde 422 `noChange`.
#[utoipa::path(
    put,
    path = "/api/specimens/{id}/move",
    tag = "Ejemplares",
    request_body = MovimientoPropuesto,
    responses(
        (status = 200, description = "Ejemplar reubicado", body = Specimen),
        (status = 422, description = "Sin cambios o regla violada")
    )
)]
pub async fn move_specimen(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(propuesto): Json<MovimientoPropuesto>,
) -> Result<impl IntoResponse, AppError> {
    let ejemplar = app_state.specimen_service.mover(id, &propuesto).await?;
    Ok((StatusCode::OK, Json(ejemplar)))
}

// DELETE /api/specimens/{id}
#[utoipa::path(
    delete,
    path = "/api/specimens/{id}",
    tag = "Ejemplares",
    responses(
        (status = 204, description = "Ejemplar eliminado"),
        (status = 409, description = "Tiene contrato asociado")
    )
)]
pub async fn delete_specimen(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.specimen_service.eliminar(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
