//! Sistema Repository Implementation
//!
//! PostgreSQL implementation of the SistemaRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{NovoSistema, Sistema, SistemaRepository, SistemaUpdate};
use crate::shared::error::AppError;

/// Database row representation matching the `sistemas` table schema.
#[derive(Debug, sqlx::FromRow)]
struct SistemaRow {
    id: i32,
    nome: String,
    descricao: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl SistemaRow {
    fn into_sistema(self) -> Sistema {
        Sistema {
            id: self.id,
            nome: self.nome,
            descricao: self.descricao,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// PostgreSQL sistema repository implementation.
#[derive(Clone)]
pub struct PgSistemaRepository {
    pool: PgPool,
}

impl PgSistemaRepository {
    /// Create a new PgSistemaRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SistemaRepository for PgSistemaRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Sistema>, AppError> {
        let row = sqlx::query_as::<_, SistemaRow>(
            r#"
            SELECT id, nome, descricao, created_at, updated_at
            FROM sistemas
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_sistema()))
    }

    async fn find_all(&self) -> Result<Vec<Sistema>, AppError> {
        let rows = sqlx::query_as::<_, SistemaRow>(
            r#"
            SELECT id, nome, descricao, created_at, updated_at
            FROM sistemas
            ORDER BY nome ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_sistema()).collect())
    }

    async fn find_by_nome(&self, nome: &str) -> Result<Option<Sistema>, AppError> {
        let row = sqlx::query_as::<_, SistemaRow>(
            r#"
            SELECT id, nome, descricao, created_at, updated_at
            FROM sistemas
            WHERE nome = $1
            "#,
        )
        .bind(nome)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_sistema()))
    }

    async fn create(&self, data: &NovoSistema) -> Result<Sistema, AppError> {
        let row = sqlx::query_as::<_, SistemaRow>(
            r#"
            INSERT INTO sistemas (nome, descricao)
            VALUES ($1, $2)
            RETURNING id, nome, descricao, created_at, updated_at
            "#,
        )
        .bind(&data.nome)
        .bind(&data.descricao)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("Duplicate sistema name".to_string())
            }
            _ => AppError::Database(e),
        })?;

        Ok(row.into_sistema())
    }

    async fn update(&self, id: i32, changes: &SistemaUpdate) -> Result<Option<Sistema>, AppError> {
        let row = sqlx::query_as::<_, SistemaRow>(
            r#"
            UPDATE sistemas
            SET nome = COALESCE($2, nome),
                descricao = COALESCE($3, descricao),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, nome, descricao, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&changes.nome)
        .bind(&changes.descricao)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("Duplicate sistema name".to_string())
            }
            _ => AppError::Database(e),
        })?;

        Ok(row.map(|r| r.into_sistema()))
    }

    /// Delete a sistema. Rolls back and reports a conflict when dependent
    /// modulos still reference it.
    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM sistemas WHERE id = $1")
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
                        Err(AppError::Conflict("Sistema has dependent modulos".to_string()))
                    }
                    _ => Err(AppError::Database(e)),
                }
            }
        }
    }
}
