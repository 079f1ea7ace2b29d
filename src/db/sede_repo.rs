// src/db/sede_repo.rs

use sqlx::PgPool;

use crate::{common::error::AppError, models::sede::Sede};

#[derive(Clone)]
pub struct SedeRepository {
    pool: PgPool,
}

impl SedeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn listar(&self) -> Result<Vec<Sede>, AppError> {
        let sedes =
            sqlx::query_as::<_, Sede>("SELECT id, name, created_at FROM sedes ORDER BY name ASC")
                .fetch_all(&self.pool)
                .await?;

        Ok(sedes)
    }

    pub async fn obtener(&self, id: i64) -> Result<Sede, AppError> {
        sqlx::query_as::<_, Sede>("SELECT id, name, created_at FROM sedes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Sede".to_string()))
    }

    pub async fn crear(&self, name: &str) -> Result<Sede, AppError> {
        sqlx::query_as::<_, Sede>(
            "INSERT INTO sedes (name) VALUES ($1) RETURNING id, name, created_at",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| traducir_unique(e, name))
    }

    pub async fn actualizar(&self, id: i64, name: &str) -> Result<Sede, AppError> {
        sqlx::query_as::<_, Sede>(
            "UPDATE sedes SET name = $2 WHERE id = $1 RETURNING id, name, created_at",
        )
        .bind(id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| traducir_unique(e, name))?
        .ok_or_else(|| AppError::NotFound("Sede".to_string()))
    }

    // Apagar uma sede só anula a referência nos ejemplares (SET NULL).
    pub async fn eliminar(&self, id: i64) -> Result<(), AppError> {
        let resultado = sqlx::query("DELETE FROM sedes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if resultado.rows_affected() == 0 {
            return Err(AppError::NotFound("Sede".to_string()));
        }

        Ok(())
    }
}

fn traducir_unique(e: sqlx::Error, name: &str) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return AppError::Conflicto(format!("La sede '{}' ya existe.", name));
        }
    }
    e.into()
}
