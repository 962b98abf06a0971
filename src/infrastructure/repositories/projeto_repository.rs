//! Projeto Repository Implementation
//!
//! PostgreSQL implementation of the ProjetoRepository trait. Read-only.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{Projeto, ProjetoRepository};
use crate::shared::error::AppError;

/// Database row representation matching the `projetos` table schema.
#[derive(Debug, sqlx::FromRow)]
struct ProjetoRow {
    id: i32,
    nome: String,
    descricao: Option<String>,
    modulo_id: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProjetoRow {
    fn into_projeto(self) -> Projeto {
        Projeto {
            id: self.id,
            nome: self.nome,
            descricao: self.descricao,
            modulo_id: self.modulo_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// PostgreSQL projeto repository implementation.
#[derive(Clone)]
pub struct PgProjetoRepository {
    pool: PgPool,
}

impl PgProjetoRepository {
    /// Create a new PgProjetoRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjetoRepository for PgProjetoRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Projeto>, AppError> {
        let row = sqlx::query_as::<_, ProjetoRow>(
            r#"
            SELECT id, nome, descricao, modulo_id, created_at, updated_at
            FROM projetos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_projeto()))
    }

    async fn find_all(&self) -> Result<Vec<Projeto>, AppError> {
        let rows = sqlx::query_as::<_, ProjetoRow>(
            r#"
            SELECT id, nome, descricao, modulo_id, created_at, updated_at
            FROM projetos
            ORDER BY nome ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_projeto()).collect())
    }

    async fn find_by_modulo(&self, modulo_id: i32) -> Result<Vec<Projeto>, AppError> {
        let rows = sqlx::query_as::<_, ProjetoRow>(
            r#"
            SELECT id, nome, descricao, modulo_id, created_at, updated_at
            FROM projetos
            WHERE modulo_id = $1
            ORDER BY nome ASC
            "#,
        )
        .bind(modulo_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_projeto()).collect())
    }
}
