// src/models/sede.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

// Uma sede é só identidade + nome: a localização física de um ejemplar.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Sede {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
