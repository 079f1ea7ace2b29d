// src/handlers/contracts.rs

use axum::{
    extract::{Path, State},
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
    models::contract::{Contract, ContractEstado},
    models::specimen::Specimen,
    services::assignment::RawId,
    services::contract_service::BorradorContrato,
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateContractPayload {
    #[schema(value_type = Option<String>, example = "4")]
    pub client_id: Option<RawId>,

    // O ejemplar a vincular; só pode ser um sem contrato ativo.
    #[schema(value_type = Option<String>, example = "10")]
    pub specimen_id: Option<RawId>,

    #[serde(default)]
    #[schema(example = json!([1, 3]))]
    pub servicio_ids: Vec<i64>,

    #[schema(value_type = Option<String>, format = Date, example = "2024-06-01")]
    pub fecha_inicio: Option<NaiveDate>,

    #[schema(value_type = Option<f64>, example = 150.0)]
    pub precio_mensual: Option<Decimal>,
}

// Ejemplar e cliente ficam fora de propósito: são fixos desde a criação.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContractPayload {
    #[schema(value_type = String, format = Date, example = "2024-06-01")]
    pub fecha_inicio: NaiveDate,

    #[schema(value_type = f64, example = 150.0)]
    pub precio_mensual: Decimal,

    pub estado: ContractEstado,

    #[schema(example = json!([1, 3]))]
    pub servicio_ids: Option<Vec<i64>>,
}

// GET /api/contracts
#[utoipa::path(
    get,
    path = "/api/contracts",
    tag = "Contratos",
    responses(
        (status = 200, description = "Lista de contratos", body = Vec<Contract>)
    )
)]
pub async fn list_contracts(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let contratos = app_state.contract_service.listar().await?;
    Ok((StatusCode::OK, Json(contratos)))
}

// GET /api/contracts/ejemplares-disponibles
//
// Alimenta o seletor do formulário de criação: só ejemplares sem
// contrato ativo aparecem.
#[utoipa::path(
    get,
    path = "/api/contracts/ejemplares-disponibles",
    tag = "Contratos",
    responses(
        (status = 200, description = "Ejemplares elegibles para un contrato nuevo", body = Vec<Specimen>)
    )
)]
pub async fn list_ejemplares_disponibles(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let disponibles = app_state.contract_service.disponibles().await?;
    Ok((StatusCode::OK, Json(disponibles)))
}

// POST /api/contracts
#[utoipa::path(
    post,
    path = "/api/contracts",
    tag = "Contratos",
    request_body = CreateContractPayload,
    responses(
        (status = 201, description = "Contrato creado", body = Contract),
        (status = 422, description = "Regla de vínculo violada"),
        (status = 409, description = "El ejemplar ya tiene contrato activo")
    )
)]
pub async fn create_contract(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateContractPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let borrador = BorradorContrato {
        client_id: payload.client_id.clone(),
        specimen_id: payload.specimen_id.clone(),
        servicio_ids: payload.servicio_ids.clone(),
        fecha_inicio: payload.fecha_inicio,
        precio_mensual: payload.precio_mensual,
    };

    let contrato = app_state.contract_service.crear(&borrador).await?;
    Ok((StatusCode::CREATED, Json(contrato)))
}

// GET /api/contracts/{id}
#[utoipa::path(
    get,
    path = "/api/contracts/{id}",
    tag = "Contratos",
    responses(
        (status = 200, description = "Contrato", body = Contract),
        (status = 404, description = "No encontrado")
    )
)]
pub async fn get_contract(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let contrato = app_state.contract_service.obtener(id).await?;
    Ok((StatusCode::OK, Json(contrato)))
}

// PUT /api/contracts/{id}
#[utoipa::path(
    put,
    path = "/api/contracts/{id}",
    tag = "Contratos",
    request_body = UpdateContractPayload,
    responses(
        (status = 200, description = "Contrato actualizado", body = Contract)
    )
)]
pub async fn update_contract(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateContractPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let contrato = app_state
        .contract_service
        .actualizar(
            id,
            payload.fecha_inicio,
            payload.precio_mensual,
            payload.estado,
            payload.servicio_ids.as_deref(),
        )
        .await?;

    Ok((StatusCode::OK, Json(contrato)))
}

// DELETE /api/contracts/{id}
#[utoipa::path(
    delete,
    path = "/api/contracts/{id}",
    tag = "Contratos",
    responses(
        (status = 204, description = "Contrato eliminado"),
        (status = 409, description = "Tiene pagos registrados")
    )
)]
pub async fn delete_contract(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.contract_service.eliminar(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
