// src/models/client.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub document_number: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,

    // Derivado na consulta: quantos ejemplares o cliente possui hoje.
    pub ejemplares_count: i64,

    pub created_at: DateTime<Utc>,
}
