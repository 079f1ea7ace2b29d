// src/models/category.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

// Mapeia o CREATE TYPE category_estado do banco
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, ToSchema)]
#[sqlx(type_name = "category_estado", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CategoryEstado {
    Activo,
    Inactivo,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub estado: CategoryEstado,
    pub created_at: DateTime<Utc>,
}
