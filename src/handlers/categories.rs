// src/handlers/categories.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::category::{Category, CategoryEstado},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Caninos")]
    pub name: String,

    #[serde(default = "estado_por_defecto")]
    pub estado: CategoryEstado,
}

fn estado_por_defecto() -> CategoryEstado {
    CategoryEstado::Activo
}

// GET /api/categories
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "Categorías",
    responses(
        (status = 200, description = "Lista de categorías", body = Vec<Category>)
    )
)]
pub async fn list_categories(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let categorias = app_state.category_repo.listar().await?;
    Ok((StatusCode::OK, Json(categorias)))
}

// POST /api/categories
#[utoipa::path(
    post,
    path = "/api/categories",
    tag = "Categorías",
    request_body = CategoryPayload,
    responses(
        (status = 201, description = "Categoría creada", body = Category),
        (status = 409, description = "Nombre duplicado")
    )
)]
pub async fn create_category(
    State(app_state): State<AppState>,
    Json(payload): Json<CategoryPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let categoria = app_state
        .category_repo
        .crear(payload.name.trim(), payload.estado)
        .await?;

    Ok((StatusCode::CREATED, Json(categoria)))
}

// GET /api/categories/{id}
#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    tag = "Categorías",
    responses(
        (status = 200, description = "Categoría", body = Category),
        (status = 404, description = "No encontrada")
    )
)]
pub async fn get_category(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let categoria = app_state.category_repo.obtener(id).await?;
    Ok((StatusCode::OK, Json(categoria)))
}

// PUT /api/categories/{id}
#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    tag = "Categorías",
    request_body = CategoryPayload,
    responses(
        (status = 200, description = "Categoría actualizada", body = Category)
    )
)]
pub async fn update_category(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<CategoryPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let categoria = app_state
        .category_repo
        .actualizar(id, payload.name.trim(), payload.estado)
        .await?;

    Ok((StatusCode::OK, Json(categoria)))
}

// DELETE /api/categories/{id}
#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    tag = "Categorías",
    responses(
        (status = 204, description = "Categoría eliminada"),
        (status = 409, description = "Tiene ejemplares asociados")
    )
)]
pub async fn delete_category(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.category_repo.eliminar(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
