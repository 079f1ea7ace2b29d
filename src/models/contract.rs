// src/models/contract.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

// Mapeia o CREATE TYPE contract_estado do banco
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, ToSchema)]
#[sqlx(type_name = "contract_estado", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ContractEstado {
    Activo,
    Finalizado,
    Cancelado,
}

// O ejemplar e o cliente são fixados na criação do contrato e nunca
// mudam depois; só estado, preço, data e serviços são editáveis.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: i64,

    #[schema(value_type = String, format = Date, example = "2024-01-01")]
    pub fecha_inicio: NaiveDate,

    #[schema(value_type = f64, example = 150.0)]
    pub precio_mensual: Decimal,

    pub client_id: i64,
    pub specimen_id: i64,
    pub estado: ContractEstado,

    // Derivado na consulta: ARRAY(...) sobre contract_servicios.
    pub servicio_ids: Vec<i64>,

    pub created_at: DateTime<Utc>,
}
