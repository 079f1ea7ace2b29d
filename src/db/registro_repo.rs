// src/db/registro_repo.rs
//
// Um repositório só para os três históricos de cuidado; as operações
// são idênticas entre si (listar por ejemplar, criar, apagar).

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::registro::{Alimentacion, Medicina, Vacunacion},
};

#[derive(Clone)]
pub struct RegistroRepository {
    pool: PgPool,
}

impl RegistroRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // ------------------------------------------------------------------
    //  Alimentación
    // ------------------------------------------------------------------

    pub async fn listar_alimentaciones(
        &self,
        specimen_id: Option<i64>,
    ) -> Result<Vec<Alimentacion>, AppError> {
        let registros = sqlx::query_as::<_, Alimentacion>(
            r#"
            SELECT id, specimen_id, fecha, tipo_alimento, cantidad, notas, created_at
            FROM alimentaciones
            WHERE ($1::bigint IS NULL OR specimen_id = $1)
            ORDER BY fecha DESC, id DESC
            "#,
        )
        .bind(specimen_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(registros)
    }

    pub async fn crear_alimentacion(
        &self,
        specimen_id: i64,
        fecha: NaiveDate,
        tipo_alimento: &str,
        cantidad: Option<&str>,
        notas: Option<&str>,
    ) -> Result<Alimentacion, AppError> {
        sqlx::query_as::<_, Alimentacion>(
            r#"
            INSERT INTO alimentaciones (specimen_id, fecha, tipo_alimento, cantidad, notas)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, specimen_id, fecha, tipo_alimento, cantidad, notas, created_at
            "#,
        )
        .bind(specimen_id)
        .bind(fecha)
        .bind(tipo_alimento)
        .bind(cantidad)
        .bind(notas)
        .fetch_one(&self.pool)
        .await
        .map_err(traducir_fk)
    }

    pub async fn eliminar_alimentacion(&self, id: i64) -> Result<(), AppError> {
        let resultado = sqlx::query("DELETE FROM alimentaciones WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if resultado.rows_affected() == 0 {
            return Err(AppError::NotFound("Registro de alimentación".to_string()));
        }

        Ok(())
    }

    // ------------------------------------------------------------------
    //  Medicina
    // ------------------------------------------------------------------

    pub async fn listar_medicinas(
        &self,
        specimen_id: Option<i64>,
    ) -> Result<Vec<Medicina>, AppError> {
        let registros = sqlx::query_as::<_, Medicina>(
            r#"
            SELECT id, specimen_id, fecha, medicamento, dosis, notas, created_at
            FROM medicinas
            WHERE ($1::bigint IS NULL OR specimen_id = $1)
            ORDER BY fecha DESC, id DESC
            "#,
        )
        .bind(specimen_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(registros)
    }

    pub async fn crear_medicina(
        &self,
        specimen_id: i64,
        fecha: NaiveDate,
        medicamento: &str,
        dosis: Option<&str>,
        notas: Option<&str>,
    ) -> Result<Medicina, AppError> {
        sqlx::query_as::<_, Medicina>(
            r#"
            INSERT INTO medicinas (specimen_id, fecha, medicamento, dosis, notas)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, specimen_id, fecha, medicamento, dosis, notas, created_at
            "#,
        )
        .bind(specimen_id)
        .bind(fecha)
        .bind(medicamento)
        .bind(dosis)
        .bind(notas)
        .fetch_one(&self.pool)
        .await
        .map_err(traducir_fk)
    }

    pub async fn eliminar_medicina(&self, id: i64) -> Result<(), AppError> {
        let resultado = sqlx::query("DELETE FROM medicinas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if resultado.rows_affected() == 0 {
            return Err(AppError::NotFound("Registro de medicina".to_string()));
        }

        Ok(())
    }

    // ------------------------------------------------------------------
    //  Vacunación
    // ------------------------------------------------------------------

    pub async fn listar_vacunaciones(
        &self,
        specimen_id: Option<i64>,
    ) -> Result<Vec<Vacunacion>, AppError> {
        let registros = sqlx::query_as::<_, Vacunacion>(
            r#"
            SELECT id, specimen_id, fecha, vacuna, notas, created_at
            FROM vacunaciones
            WHERE ($1::bigint IS NULL OR specimen_id = $1)
            ORDER BY fecha DESC, id DESC
            "#,
        )
        .bind(specimen_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(registros)
    }

    pub async fn crear_vacunacion(
        &self,
        specimen_id: i64,
        fecha: NaiveDate,
        vacuna: &str,
        notas: Option<&str>,
    ) -> Result<Vacunacion, AppError> {
        sqlx::query_as::<_, Vacunacion>(
            r#"
            INSERT INTO vacunaciones (specimen_id, fecha, vacuna, notas)
            VALUES ($1, $2, $3, $4)
            RETURNING id, specimen_id, fecha, vacuna, notas, created_at
            "#,
        )
        .bind(specimen_id)
        .bind(fecha)
        .bind(vacuna)
        .bind(notas)
        .fetch_one(&self.pool)
        .await
        .map_err(traducir_fk)
    }

    pub async fn eliminar_vacunacion(&self, id: i64) -> Result<(), AppError> {
        let resultado = sqlx::query("DELETE FROM vacunaciones WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if resultado.rows_affected() == 0 {
            return Err(AppError::NotFound("Registro de vacunación".to_string()));
        }

        Ok(())
    }
}

fn traducir_fk(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_foreign_key_violation() {
            return AppError::NotFound("Ejemplar".to_string());
        }
    }
    e.into()
}
