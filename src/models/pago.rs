// src/models/pago.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, ToSchema)]
#[sqlx(type_name = "metodo_pago", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MetodoPago {
    Efectivo,
    Transferencia,
    Tarjeta,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pago {
    pub id: i64,
    pub contract_id: i64,

    #[schema(value_type = f64, example = 150.0)]
    pub valor: Decimal,

    pub metodo_pago: MetodoPago,

    // Mês de serviço coberto pelo pagamento, 1..=12.
    pub mes_pago: i32,

    #[schema(value_type = String, format = Date, example = "2024-02-05")]
    pub fecha_pago: NaiveDate,

    pub created_at: DateTime<Utc>,
}
