//! Projeto entity and repository trait.
//!
//! Maps to the `projetos` table. Projetos reference a Modulo with
//! `ON DELETE RESTRICT`, which is what blocks Modulo deletion while
//! dependent projects exist.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Represents a project executed under a Modulo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projeto {
    /// Primary key
    pub id: i32,

    /// Project name
    pub nome: String,

    /// Free-form description
    pub descricao: Option<String>,

    /// Modulo the project belongs to
    pub modulo_id: i32,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Repository trait for Projeto data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjetoRepository: Send + Sync {
    /// Find a projeto by its primary key.
    async fn find_by_id(&self, id: i32) -> Result<Option<Projeto>, AppError>;

    /// List all projetos.
    async fn find_all(&self) -> Result<Vec<Projeto>, AppError>;

    /// List the projetos tied to a modulo.
    async fn find_by_modulo(&self, modulo_id: i32) -> Result<Vec<Projeto>, AppError>;
}
