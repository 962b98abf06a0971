//! Modulo Repository Implementation
//!
//! PostgreSQL implementation of the ModuloRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{Modulo, ModuloRepository, ModuloUpdate, NovoModulo};
use crate::shared::error::AppError;

/// Database row representation matching the `modulos` table schema.
#[derive(Debug, sqlx::FromRow)]
struct ModuloRow {
    id: i32,
    nome: String,
    descricao: Option<String>,
    sistema_id: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ModuloRow {
    /// Convert database row to domain Modulo entity.
    fn into_modulo(self) -> Modulo {
        Modulo {
            id: self.id,
            nome: self.nome,
            descricao: self.descricao,
            sistema_id: self.sistema_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// PostgreSQL modulo repository implementation.
#[derive(Clone)]
pub struct PgModuloRepository {
    pool: PgPool,
}

impl PgModuloRepository {
    /// Create a new PgModuloRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ModuloRepository for PgModuloRepository {
    /// Find a modulo by its ID.
    async fn find_by_id(&self, id: i32) -> Result<Option<Modulo>, AppError> {
        let row = sqlx::query_as::<_, ModuloRow>(
            r#"
            SELECT id, nome, descricao, sistema_id, created_at, updated_at
            FROM modulos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_modulo()))
    }

    /// List all modulos, ordered by name.
    async fn find_all(&self) -> Result<Vec<Modulo>, AppError> {
        let rows = sqlx::query_as::<_, ModuloRow>(
            r#"
            SELECT id, nome, descricao, sistema_id, created_at, updated_at
            FROM modulos
            ORDER BY nome ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_modulo()).collect())
    }

    /// Find a modulo by its name within a sistema.
    async fn find_by_nome_e_sistema(
        &self,
        nome: &str,
        sistema_id: i32,
    ) -> Result<Option<Modulo>, AppError> {
        let row = sqlx::query_as::<_, ModuloRow>(
            r#"
            SELECT id, nome, descricao, sistema_id, created_at, updated_at
            FROM modulos
            WHERE nome = $1 AND sistema_id = $2
            "#,
        )
        .bind(nome)
        .bind(sistema_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_modulo()))
    }

    /// Insert a new modulo.
    async fn create(&self, data: &NovoModulo) -> Result<Modulo, AppError> {
        let row = sqlx::query_as::<_, ModuloRow>(
            r#"
            INSERT INTO modulos (nome, descricao, sistema_id)
            VALUES ($1, $2, $3)
            RETURNING id, nome, descricao, sistema_id, created_at, updated_at
            "#,
        )
        .bind(&data.nome)
        .bind(&data.descricao)
        .bind(data.sistema_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("Duplicate modulo name within sistema".to_string())
            }
            _ => AppError::Database(e),
        })?;

        Ok(row.into_modulo())
    }

    /// Apply a partial update to an existing modulo.
    async fn update(&self, id: i32, changes: &ModuloUpdate) -> Result<Option<Modulo>, AppError> {
        let row = sqlx::query_as::<_, ModuloRow>(
            r#"
            UPDATE modulos
            SET nome = COALESCE($2, nome),
                descricao = COALESCE($3, descricao),
                sistema_id = COALESCE($4, sistema_id),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, nome, descricao, sistema_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&changes.nome)
        .bind(&changes.descricao)
        .bind(changes.sistema_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("Duplicate modulo name within sistema".to_string())
            }
            _ => AppError::Database(e),
        })?;

        Ok(row.map(|r| r.into_modulo()))
    }

    /// Delete a modulo. Runs in its own transaction; a referential-integrity
    /// violation from dependent projetos rolls the transaction back and is
    /// reported as a conflict the service layer can translate.
    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM modulos WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await;

        match result {
            Ok(done) => {
                tx.commit().await?;
                Ok(done.rows_affected() > 0)
            }
            Err(e) => {
                tx.rollback().await?;
                match &e {
                    sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                        Err(AppError::Conflict(
                            "Modulo has dependent projetos".to_string(),
                        ))
                    }
                    _ => Err(AppError::Database(e)),
                }
            }
        }
    }
}
