// src/db/contract_repo.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::contract::{Contract, ContractEstado},
    services::contract_service::ContratoValido,
};

// A lista de serviços é derivada da tabela de vínculo.
const SELECT_CONTRATO: &str = r#"
    SELECT c.id, c.fecha_inicio, c.precio_mensual, c.client_id, c.specimen_id, c.estado,
           ARRAY(
               SELECT cs.servicio_id FROM contract_servicios cs
               WHERE cs.contract_id = c.id
               ORDER BY cs.servicio_id
           ) AS servicio_ids,
           c.created_at
    FROM contracts c
"#;

#[derive(Clone)]
pub struct ContractRepository {
    pool: PgPool,
}

impl ContractRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn listar(&self) -> Result<Vec<Contract>, AppError> {
        let sql = format!("{} ORDER BY c.id ASC", SELECT_CONTRATO);
        let contratos = sqlx::query_as::<_, Contract>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(contratos)
    }

    pub async fn obtener(&self, id: i64) -> Result<Contract, AppError> {
        let sql = format!("{} WHERE c.id = $1", SELECT_CONTRATO);
        sqlx::query_as::<_, Contract>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Contrato".to_string()))
    }

    /// Insere o contrato e os vínculos de serviço numa transação só.
    /// O índice parcial (um contrato ativo por ejemplar) é a última
    /// linha de defesa contra corridas entre duas criações.
    pub async fn crear(&self, valido: &ContratoValido) -> Result<Contract, AppError> {
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO contracts (fecha_inicio, precio_mensual, client_id, specimen_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(valido.fecha_inicio)
        .bind(valido.precio_mensual)
        .bind(valido.client_id)
        .bind(valido.specimen_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(traducir_constraints)?;

        for servicio_id in &valido.servicio_ids {
            sqlx::query("INSERT INTO contract_servicios (contract_id, servicio_id) VALUES ($1, $2)")
                .bind(id)
                .bind(servicio_id)
                .execute(&mut *tx)
                .await
                .map_err(traducir_constraints)?;
        }

        tx.commit().await?;

        self.obtener(id).await
    }

    /// Só estado, data, preço e serviços são editáveis; ejemplar e
    /// cliente ficam fixos desde a criação.
    pub async fn actualizar(
        &self,
        id: i64,
        fecha_inicio: NaiveDate,
        precio_mensual: Decimal,
        estado: ContractEstado,
        servicio_ids: Option<&[i64]>,
    ) -> Result<Contract, AppError> {
        let mut tx = self.pool.begin().await?;

        let resultado = sqlx::query(
            r#"
            UPDATE contracts
            SET fecha_inicio = $2, precio_mensual = $3, estado = $4
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(fecha_inicio)
        .bind(precio_mensual)
        .bind(estado)
        .execute(&mut *tx)
        .await
        .map_err(traducir_constraints)?;

        if resultado.rows_affected() == 0 {
            return Err(AppError::NotFound("Contrato".to_string()));
        }

        if let Some(servicios) = servicio_ids {
            sqlx::query("DELETE FROM contract_servicios WHERE contract_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;

            for servicio_id in servicios {
                sqlx::query(
                    "INSERT INTO contract_servicios (contract_id, servicio_id) VALUES ($1, $2)",
                )
                .bind(id)
                .bind(servicio_id)
                .execute(&mut *tx)
                .await
                .map_err(traducir_constraints)?;
            }
        }

        tx.commit().await?;

        self.obtener(id).await
    }

    pub async fn eliminar(&self, id: i64) -> Result<(), AppError> {
        let resultado = sqlx::query("DELETE FROM contracts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.is_foreign_key_violation() {
                        return AppError::Conflicto(
                            "El contrato tiene pagos registrados y no puede eliminarse.".to_string(),
                        );
                    }
                }
                e.into()
            })?;

        if resultado.rows_affected() == 0 {
            return Err(AppError::NotFound("Contrato".to_string()));
        }

        Ok(())
    }
}

fn traducir_constraints(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return AppError::Conflicto("El ejemplar ya tiene un contrato activo.".to_string());
        }
        if db_err.is_foreign_key_violation() {
            return AppError::Conflicto(
                "El cliente, ejemplar o servicio referenciado no existe.".to_string(),
            );
        }
    }
    e.into()
}
