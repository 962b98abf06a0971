//! Sistema entity and repository trait.
//!
//! Maps to the `sistemas` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Represents a top-level system in the portfolio.
///
/// Maps to the `sistemas` table:
/// - id: SERIAL PRIMARY KEY
/// - nome: VARCHAR(100) NOT NULL UNIQUE
/// - descricao: TEXT NULL
/// - created_at / updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sistema {
    /// Primary key
    pub id: i32,

    /// System name, globally unique
    pub nome: String,

    /// Free-form description
    pub descricao: Option<String>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a Sistema.
#[derive(Debug, Clone)]
pub struct NovoSistema {
    pub nome: String,
    pub descricao: Option<String>,
}

/// Partial update of a Sistema. `None` fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct SistemaUpdate {
    pub nome: Option<String>,
    pub descricao: Option<String>,
}

/// Repository trait for Sistema data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SistemaRepository: Send + Sync {
    /// Find a sistema by its primary key.
    async fn find_by_id(&self, id: i32) -> Result<Option<Sistema>, AppError>;

    /// List all sistemas.
    async fn find_all(&self) -> Result<Vec<Sistema>, AppError>;

    /// Find a sistema by its name.
    async fn find_by_nome(&self, nome: &str) -> Result<Option<Sistema>, AppError>;

    /// Insert a new sistema.
    async fn create(&self, data: &NovoSistema) -> Result<Sistema, AppError>;

    /// Apply a partial update, returning the updated row or `None` when
    /// the id does not exist.
    async fn update(&self, id: i32, changes: &SistemaUpdate) -> Result<Option<Sistema>, AppError>;

    /// Delete a sistema, returning whether a row was removed. Fails with a
    /// conflict when dependent Modulos still reference the sistema.
    async fn delete(&self, id: i32) -> Result<bool, AppError>;
}
