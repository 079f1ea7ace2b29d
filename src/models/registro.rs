// src/models/registro.rs
//
// Registros de cuidado por ejemplar: alimentación, medicina e vacunación.
// São históricos simples (append-only na prática), sem regra de negócio.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Alimentacion {
    pub id: i64,
    pub specimen_id: i64,

    #[schema(value_type = String, format = Date)]
    pub fecha: NaiveDate,

    pub tipo_alimento: String,
    pub cantidad: Option<String>,
    pub notas: Option<String>,

    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Medicina {
    pub id: i64,
    pub specimen_id: i64,

    #[schema(value_type = String, format = Date)]
    pub fecha: NaiveDate,

    pub medicamento: String,
    pub dosis: Option<String>,
    pub notas: Option<String>,

    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Vacunacion {
    pub id: i64,
    pub specimen_id: i64,

    #[schema(value_type = String, format = Date)]
    pub fecha: NaiveDate,

    pub vacuna: String,
    pub notas: Option<String>,

    pub created_at: DateTime<Utc>,
}
