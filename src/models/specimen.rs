// src/models/specimen.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

// A entidade central do sistema. As três associações (categoria, sede,
// dono) são opcionais e independentes entre si; `contract_id` é derivado
// na consulta (o contrato ATIVO que referencia este ejemplar, se houver).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Specimen {
    pub id: i64,
    pub name: String,
    pub breed: Option<String>,
    pub color: Option<String>,

    #[schema(value_type = Option<String>, format = Date, example = "2021-03-14")]
    pub birth_date: Option<NaiveDate>,

    pub category_id: Option<i64>,
    pub sede_id: Option<i64>,
    pub client_id: Option<i64>,

    // Sempre vindo de um LEFT JOIN com contracts WHERE estado = 'activo'.
    pub contract_id: Option<i64>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
