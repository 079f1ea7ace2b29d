// src/db/client_repo.rs

use sqlx::PgPool;

use crate::{common::error::AppError, models::client::Client};

// `ejemplares_count` é derivado na consulta: quantos ejemplares o
// cliente possui hoje.
const SELECT_CLIENTE: &str = r#"
    SELECT c.id, c.name, c.document_number, c.email, c.phone,
           (SELECT COUNT(*) FROM specimens s WHERE s.client_id = c.id) AS ejemplares_count,
           c.created_at
    FROM clients c
"#;

#[derive(Clone)]
pub struct ClientRepository {
    pool: PgPool,
}

impl ClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn listar(&self) -> Result<Vec<Client>, AppError> {
        let sql = format!("{} ORDER BY c.name ASC", SELECT_CLIENTE);
        let clientes = sqlx::query_as::<_, Client>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(clientes)
    }

    pub async fn obtener(&self, id: i64) -> Result<Client, AppError> {
        let sql = format!("{} WHERE c.id = $1", SELECT_CLIENTE);
        sqlx::query_as::<_, Client>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente".to_string()))
    }

    pub async fn crear(
        &self,
        name: &str,
        document_number: Option<&str>,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> Result<Client, AppError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO clients (name, document_number, email, phone)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(name)
        .bind(document_number)
        .bind(email)
        .bind(phone)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| traducir_unique(e, document_number))?;

        self.obtener(id).await
    }

    pub async fn actualizar(
        &self,
        id: i64,
        name: &str,
        document_number: Option<&str>,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> Result<Client, AppError> {
        let resultado = sqlx::query(
            r#"
            UPDATE clients SET name = $2, document_number = $3, email = $4, phone = $5
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(document_number)
        .bind(email)
        .bind(phone)
        .execute(&self.pool)
        .await
        .map_err(|e| traducir_unique(e, document_number))?;

        if resultado.rows_affected() == 0 {
            return Err(AppError::NotFound("Cliente".to_string()));
        }

        self.obtener(id).await
    }

    // Apagar um cliente anula o `client_id` dos seus ejemplares
    // (SET NULL); contratos ativos bloqueiam via FK RESTRICT.
    pub async fn eliminar(&self, id: i64) -> Result<(), AppError> {
        let resultado = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.is_foreign_key_violation() {
                        return AppError::Conflicto(
                            "El cliente tiene contratos asociados y no puede eliminarse.".to_string(),
                        );
                    }
                }
                e.into()
            })?;

        if resultado.rows_affected() == 0 {
            return Err(AppError::NotFound("Cliente".to_string()));
        }

        Ok(())
    }
}

fn traducir_unique(e: sqlx::Error, document_number: Option<&str>) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return AppError::Conflicto(format!(
                "El documento '{}' ya está registrado.",
                document_number.unwrap_or("?")
            ));
        }
    }
    e.into()
}
