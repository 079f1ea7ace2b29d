// src/db/specimen_repo.rs

use sqlx::PgPool;

use crate::{common::error::AppError, models::specimen::Specimen, services::assignment::AsignacionValida};

use crate::services::assignment::parsear_id;

// Projeção padrão: o contract_id derivado vem do contrato ATIVO que
// referencia o ejemplar (no máximo um, garantido por índice parcial).
const SELECT_EJEMPLAR: &str = r#"
    SELECT s.id, s.name, s.breed, s.color, s.birth_date,
           s.category_id, s.sede_id, s.client_id,
           c.id AS contract_id,
           s.created_at, s.updated_at
    FROM specimens s
    LEFT JOIN contracts c ON c.specimen_id = s.id AND c.estado = 'activo'
"#;

// Diff de asignación já traduzido para as colunas do banco. O `Option`
// de fora marca se a coluna entra no UPDATE.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CambiosEjemplar {
    pub category_id: Option<Option<i64>>,
    pub sede_id: Option<Option<i64>>,
    pub client_id: Option<Option<i64>>,
}

// Valores prontos para inserir/atualizar, com os ids já na chave do banco.
#[derive(Debug, Clone)]
pub struct NuevoEjemplar {
    pub name: String,
    pub category_id: i64,
    pub sede_id: i64,
    pub client_id: Option<i64>,
    pub breed: Option<String>,
    pub color: Option<String>,
    pub birth_date: Option<chrono::NaiveDate>,
}

impl NuevoEjemplar {
    // Fronteira motor → banco: tokens opacos viram chaves numéricas.
    pub fn desde_valido(valido: &AsignacionValida) -> Result<Self, AppError> {
        let client_id = match &valido.client_id {
            Some(token) => Some(parsear_id("clientId", token)?),
            None => None,
        };
        Ok(Self {
            name: valido.name.clone(),
            category_id: parsear_id("categoryId", &valido.category_id)?,
            sede_id: parsear_id("sedeId", &valido.sede_id)?,
            client_id,
            breed: valido.breed.clone(),
            color: valido.color.clone(),
            birth_date: valido.birth_date,
        })
    }
}

#[derive(Clone)]
pub struct SpecimenRepository {
    pool: PgPool,
}

impl SpecimenRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lista todos os ejemplares, opcionalmente filtrados por categoria.
    /// Sempre retorna um vetor (vazio quando não há dados).
    pub async fn listar(&self, category_id: Option<i64>) -> Result<Vec<Specimen>, AppError> {
        let sql = format!(
            "{} WHERE ($1::bigint IS NULL OR s.category_id = $1) ORDER BY s.id ASC",
            SELECT_EJEMPLAR
        );
        let ejemplares = sqlx::query_as::<_, Specimen>(&sql)
            .bind(category_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(ejemplares)
    }

    pub async fn obtener(&self, id: i64) -> Result<Specimen, AppError> {
        let sql = format!("{} WHERE s.id = $1", SELECT_EJEMPLAR);
        sqlx::query_as::<_, Specimen>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Ejemplar".to_string()))
    }

    pub async fn crear(&self, nuevo: &NuevoEjemplar) -> Result<Specimen, AppError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO specimens (name, breed, color, birth_date, category_id, sede_id, client_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(&nuevo.name)
        .bind(&nuevo.breed)
        .bind(&nuevo.color)
        .bind(nuevo.birth_date)
        .bind(nuevo.category_id)
        .bind(nuevo.sede_id)
        .bind(nuevo.client_id)
        .fetch_one(&self.pool)
        .await
        .map_err(traducir_fk)?;

        self.obtener(id).await
    }

    /// Edição completa: todos os campos descritivos + as três associações.
    pub async fn actualizar(&self, id: i64, nuevo: &NuevoEjemplar) -> Result<Specimen, AppError> {
        let resultado = sqlx::query(
            r#"
            UPDATE specimens
            SET name = $2, breed = $3, color = $4, birth_date = $5,
                category_id = $6, sede_id = $7, client_id = $8,
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&nuevo.name)
        .bind(&nuevo.breed)
        .bind(&nuevo.color)
        .bind(nuevo.birth_date)
        .bind(nuevo.category_id)
        .bind(nuevo.sede_id)
        .bind(nuevo.client_id)
        .execute(&self.pool)
        .await
        .map_err(traducir_fk)?;

        if resultado.rows_affected() == 0 {
            return Err(AppError::NotFound("Ejemplar".to_string()));
        }

        self.obtener(id).await
    }

    /// Aplica um diff de movimiento: só as colunas marcadas no diff são
    /// escritas, as demais ficam intactas (edições concorrentes de
    /// campos descritivos não são sobrescritas).
    pub async fn actualizar_asignacion(
        &self,
        id: i64,
        cambios: &CambiosEjemplar,
    ) -> Result<Specimen, AppError> {
        let resultado = sqlx::query(
            r#"
            UPDATE specimens
            SET category_id = CASE WHEN $2 THEN $3::bigint ELSE category_id END,
                sede_id     = CASE WHEN $4 THEN $5::bigint ELSE sede_id END,
                client_id   = CASE WHEN $6 THEN $7::bigint ELSE client_id END,
                updated_at  = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(cambios.category_id.is_some())
        .bind(cambios.category_id.flatten())
        .bind(cambios.sede_id.is_some())
        .bind(cambios.sede_id.flatten())
        .bind(cambios.client_id.is_some())
        .bind(cambios.client_id.flatten())
        .execute(&self.pool)
        .await
        .map_err(traducir_fk)?;

        if resultado.rows_affected() == 0 {
            return Err(AppError::NotFound("Ejemplar".to_string()));
        }

        self.obtener(id).await
    }

    pub async fn eliminar(&self, id: i64) -> Result<(), AppError> {
        let resultado = sqlx::query("DELETE FROM specimens WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.is_foreign_key_violation() {
                        return AppError::Conflicto(
                            "El ejemplar tiene un contrato asociado y no puede eliminarse.".to_string(),
                        );
                    }
                }
                e.into()
            })?;

        if resultado.rows_affected() == 0 {
            return Err(AppError::NotFound("Ejemplar".to_string()));
        }

        Ok(())
    }
}

// FK inexistente em INSERT/UPDATE significa que o id referenciado não
// existe (categoria, sede ou cliente apagados entre a carga e o submit).
fn traducir_fk(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_foreign_key_violation() {
            return AppError::Conflicto(
                "La categoría, sede o cliente referenciado ya no existe.".to_string(),
            );
        }
    }
    e.into()
}
