// src/handlers/pagos.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::pago::{MetodoPago, Pago},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePagoPayload {
    #[schema(example = 1)]
    pub contract_id: i64,

    #[schema(value_type = f64, example = 150.0)]
    pub valor: Decimal,

    #[serde(default = "metodo_por_defecto")]
    pub metodo_pago: MetodoPago,

    #[validate(range(min = 1, max = 12, message = "invalid_month"))]
    #[schema(example = 3)]
    pub mes_pago: i32,

    #[schema(value_type = String, format = Date, example = "2024-03-05")]
    pub fecha_pago: NaiveDate,
}

// O contrato de um pago não é editável depois de criado.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePagoPayload {
    #[schema(value_type = f64, example = 150.0)]
    pub valor: Decimal,

    pub metodo_pago: MetodoPago,

    #[validate(range(min = 1, max = 12, message = "invalid_month"))]
    #[schema(example = 3)]
    pub mes_pago: i32,

    #[schema(value_type = String, format = Date, example = "2024-03-05")]
    pub fecha_pago: NaiveDate,
}

fn metodo_por_defecto() -> MetodoPago {
    MetodoPago::Efectivo
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagoQuery {
    pub contract_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SugerenciaQuery {
    pub contract_id: i64,
}

// GET /api/pagos
#[utoipa::path(
    get,
    path = "/api/pagos",
    tag = "Pagos",
    params(
        ("contractId" = Option<i64>, Query, description = "Filtrar por contrato")
    ),
    responses(
        (status = 200, description = "Lista de pagos", body = Vec<Pago>)
    )
)]
pub async fn list_pagos(
    State(app_state): State<AppState>,
    Query(query): Query<PagoQuery>,
) -> Result<impl IntoResponse, AppError> {
    let pagos = app_state.pago_service.listar(query.contract_id).await?;
    Ok((StatusCode::OK, Json(pagos)))
}

// GET /api/pagos/sugerencia-mes
//
// Sugestão recalculada quando o formulário troca de contrato; o
// usuário pode sobrescrever.
#[utoipa::path(
    get,
    path = "/api/pagos/sugerencia-mes",
    tag = "Pagos",
    params(
        ("contractId" = i64, Query, description = "Contrato seleccionado")
    ),
    responses(
        (status = 200, description = "Mes sugerido para el próximo pago")
    )
)]
pub async fn sugerencia_mes(
    State(app_state): State<AppState>,
    Query(query): Query<SugerenciaQuery>,
) -> Result<impl IntoResponse, AppError> {
    let mes = app_state.pago_service.sugerencia_mes(query.contract_id).await?;
    Ok((StatusCode::OK, Json(json!({ "mesSugerido": mes }))))
}

// POST /api/pagos
#[utoipa::path(
    post,
    path = "/api/pagos",
    tag = "Pagos",
    request_body = CreatePagoPayload,
    responses(
        (status = 201, description = "Pago registrado", body = Pago)
    )
)]
pub async fn create_pago(
    State(app_state): State<AppState>,
    Json(payload): Json<CreatePagoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let pago = app_state
        .pago_service
        .crear(
            payload.contract_id,
            payload.valor,
            payload.metodo_pago,
            payload.mes_pago,
            payload.fecha_pago,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(pago)))
}

// GET /api/pagos/{id}
#[utoipa::path(
    get,
    path = "/api/pagos/{id}",
    tag = "Pagos",
    responses(
        (status = 200, description = "Pago", body = Pago),
        (status = 404, description = "No encontrado")
    )
)]
pub async fn get_pago(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let pago = app_state.pago_service.obtener(id).await?;
    Ok((StatusCode::OK, Json(pago)))
}

// PUT /api/pagos/{id}
#[utoipa::path(
    put,
    path = "/api/pagos/{id}",
    tag = "Pagos",
    request_body = UpdatePagoPayload,
    responses(
        (status = 200, description = "Pago actualizado", body = Pago)
    )
)]
pub async fn update_pago(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePagoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let pago = app_state
        .pago_service
        .actualizar(
            id,
            payload.valor,
            payload.metodo_pago,
            payload.mes_pago,
            payload.fecha_pago,
        )
        .await?;

    Ok((StatusCode::OK, Json(pago)))
}

// DELETE /api/pagos/{id}
#[utoipa::path(
    delete,
    path = "/api/pagos/{id}",
    tag = "Pagos",
    responses(
        (status = 204, description = "Pago eliminado")
    )
)]
pub async fn delete_pago(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.pago_service.eliminar(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
