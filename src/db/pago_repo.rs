// src/db/pago_repo.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::pago::{MetodoPago, Pago},
};

const SELECT_PAGO: &str = r#"
    SELECT id, contract_id, valor, metodo_pago, mes_pago, fecha_pago, created_at
    FROM pagos
"#;

#[derive(Clone)]
pub struct PagoRepository {
    pool: PgPool,
}

impl PagoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn listar(&self, contract_id: Option<i64>) -> Result<Vec<Pago>, AppError> {
        let sql = format!(
            "{} WHERE ($1::bigint IS NULL OR contract_id = $1) ORDER BY fecha_pago ASC, id ASC",
            SELECT_PAGO
        );
        let pagos = sqlx::query_as::<_, Pago>(&sql)
            .bind(contract_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(pagos)
    }

    pub async fn obtener(&self, id: i64) -> Result<Pago, AppError> {
        let sql = format!("{} WHERE id = $1", SELECT_PAGO);
        sqlx::query_as::<_, Pago>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Pago".to_string()))
    }

    pub async fn crear(
        &self,
        contract_id: i64,
        valor: Decimal,
        metodo_pago: MetodoPago,
        mes_pago: i32,
        fecha_pago: NaiveDate,
    ) -> Result<Pago, AppError> {
        sqlx::query_as::<_, Pago>(
            r#"
            INSERT INTO pagos (contract_id, valor, metodo_pago, mes_pago, fecha_pago)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, contract_id, valor, metodo_pago, mes_pago, fecha_pago, created_at
            "#,
        )
            .bind(contract_id)
            .bind(valor)
            .bind(metodo_pago)
            .bind(mes_pago)
            .bind(fecha_pago)
            .fetch_one(&self.pool)
            .await
            .map_err(traducir_fk)
    }

    // O contrato de um pago não muda; só valor, método, mês e data.
    pub async fn actualizar(
        &self,
        id: i64,
        valor: Decimal,
        metodo_pago: MetodoPago,
        mes_pago: i32,
        fecha_pago: NaiveDate,
    ) -> Result<Pago, AppError> {
        sqlx::query_as::<_, Pago>(
            r#"
            UPDATE pagos
            SET valor = $2, metodo_pago = $3, mes_pago = $4, fecha_pago = $5
            WHERE id = $1
            RETURNING id, contract_id, valor, metodo_pago, mes_pago, fecha_pago, created_at
            "#,
        )
        .bind(id)
        .bind(valor)
        .bind(metodo_pago)
        .bind(mes_pago)
        .bind(fecha_pago)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Pago".to_string()))
    }

    pub async fn eliminar(&self, id: i64) -> Result<(), AppError> {
        let resultado = sqlx::query("DELETE FROM pagos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if resultado.rows_affected() == 0 {
            return Err(AppError::NotFound("Pago".to_string()));
        }

        Ok(())
    }
}

fn traducir_fk(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_foreign_key_violation() {
            return AppError::Conflicto("El contrato referenciado no existe.".to_string());
        }
    }
    e.into()
}
