// src/db/category_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::category::{Category, CategoryEstado},
};

#[derive(Clone)]
pub struct CategoryRepository {
    pool: PgPool,
}

impl CategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn listar(&self) -> Result<Vec<Category>, AppError> {
        let categorias = sqlx::query_as::<_, Category>(
            "SELECT id, name, estado, created_at FROM categories ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categorias)
    }

    pub async fn obtener(&self, id: i64) -> Result<Category, AppError> {
        sqlx::query_as::<_, Category>(
            "SELECT id, name, estado, created_at FROM categories WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Categoría".to_string()))
    }

    pub async fn crear(&self, name: &str, estado: CategoryEstado) -> Result<Category, AppError> {
        sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name, estado)
            VALUES ($1, $2)
            RETURNING id, name, estado, created_at
            "#,
        )
        .bind(name)
        .bind(estado)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| traducir_unique(e, name))
    }

    pub async fn actualizar(
        &self,
        id: i64,
        name: &str,
        estado: CategoryEstado,
    ) -> Result<Category, AppError> {
        sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories SET name = $2, estado = $3
            WHERE id = $1
            RETURNING id, name, estado, created_at
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(estado)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| traducir_unique(e, name))?
        .ok_or_else(|| AppError::NotFound("Categoría".to_string()))
    }

    /// O banco bloqueia a remoção enquanto houver ejemplares na
    /// categoria (FK RESTRICT); traduzimos para um 409 legível.
    pub async fn eliminar(&self, id: i64) -> Result<(), AppError> {
        let resultado = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.is_foreign_key_violation() {
                        return AppError::Conflicto(
                            "La categoría tiene ejemplares asociados y no puede eliminarse.".to_string(),
                        );
                    }
                }
                e.into()
            })?;

        if resultado.rows_affected() == 0 {
            return Err(AppError::NotFound("Categoría".to_string()));
        }

        Ok(())
    }
}

fn traducir_unique(e: sqlx::Error, name: &str) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return AppError::Conflicto(format!("La categoría '{}' ya existe.", name));
        }
    }
    e.into()
}
