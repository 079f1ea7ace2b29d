// src/models/servicio.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

// Catálogo de serviços que um contrato pode incluir.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Servicio {
    pub id: i64,
    pub nombre: String,
    pub descripcion: Option<String>,
}
