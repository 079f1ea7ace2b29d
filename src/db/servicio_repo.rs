// src/db/servicio_repo.rs

use sqlx::PgPool;

use crate::{common::error::AppError, models::servicio::Servicio};

#[derive(Clone)]
pub struct ServicioRepository {
    pool: PgPool,
}

impl ServicioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn listar(&self) -> Result<Vec<Servicio>, AppError> {
        let servicios = sqlx::query_as::<_, Servicio>(
            "SELECT id, nombre, descripcion FROM servicios ORDER BY nombre ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(servicios)
    }

    pub async fn obtener(&self, id: i64) -> Result<Servicio, AppError> {
        sqlx::query_as::<_, Servicio>(
            "SELECT id, nombre, descripcion FROM servicios WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Servicio".to_string()))
    }

    pub async fn crear(&self, nombre: &str, descripcion: Option<&str>) -> Result<Servicio, AppError> {
        sqlx::query_as::<_, Servicio>(
            r#"
            INSERT INTO servicios (nombre, descripcion)
            VALUES ($1, $2)
            RETURNING id, nombre, descripcion
            "#,
        )
        .bind(nombre)
        .bind(descripcion)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| traducir_unique(e, nombre))
    }

    pub async fn actualizar(
        &self,
        id: i64,
        nombre: &str,
        descripcion: Option<&str>,
    ) -> Result<Servicio, AppError> {
        sqlx::query_as::<_, Servicio>(
            r#"
            UPDATE servicios SET nombre = $2, descripcion = $3
            WHERE id = $1
            RETURNING id, nombre, descripcion
            "#,
        )
        .bind(id)
        .bind(nombre)
        .bind(descripcion)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| traducir_unique(e, nombre))?
        .ok_or_else(|| AppError::NotFound("Servicio".to_string()))
    }

    pub async fn eliminar(&self, id: i64) -> Result<(), AppError> {
        let resultado = sqlx::query("DELETE FROM servicios WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.is_foreign_key_violation() {
                        return AppError::Conflicto(
                            "El servicio está incluido en contratos y no puede eliminarse.".to_string(),
                        );
                    }
                }
                e.into()
            })?;

        if resultado.rows_affected() == 0 {
            return Err(AppError::NotFound("Servicio".to_string()));
        }

        Ok(())
    }
}

fn traducir_unique(e: sqlx::Error, nombre: &str) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return AppError::Conflicto(format!("El servicio '{}' ya existe.", nombre));
        }
    }
    e.into()
}
