//! Modulo entity and repository trait.
//!
//! Maps to the `modulos` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Represents a functional module of a Sistema.
///
/// Maps to the `modulos` table:
/// - id: SERIAL PRIMARY KEY
/// - nome: VARCHAR(100) NOT NULL
/// - descricao: TEXT NULL
/// - sistema_id: INTEGER NOT NULL REFERENCES sistemas(id)
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// - updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
///
/// `(nome, sistema_id)` is unique among live records. The service layer
/// pre-checks the pair before writes and the table carries a matching
/// unique constraint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Modulo {
    /// Primary key
    pub id: i32,

    /// Module name (1-100 characters), unique within its Sistema
    pub nome: String,

    /// Free-form description
    pub descricao: Option<String>,

    /// Owning Sistema
    pub sistema_id: i32,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a Modulo.
#[derive(Debug, Clone)]
pub struct NovoModulo {
    pub nome: String,
    pub descricao: Option<String>,
    pub sistema_id: i32,
}

/// Partial update of a Modulo. `None` fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct ModuloUpdate {
    pub nome: Option<String>,
    pub descricao: Option<String>,
    pub sistema_id: Option<i32>,
}

/// Repository trait for Modulo data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModuloRepository: Send + Sync {
    /// Find a modulo by its primary key.
    async fn find_by_id(&self, id: i32) -> Result<Option<Modulo>, AppError>;

    /// List all modulos.
    async fn find_all(&self) -> Result<Vec<Modulo>, AppError>;

    /// Find a modulo by its name within a sistema.
    async fn find_by_nome_e_sistema(
        &self,
        nome: &str,
        sistema_id: i32,
    ) -> Result<Option<Modulo>, AppError>;

    /// Insert a new modulo.
    async fn create(&self, data: &NovoModulo) -> Result<Modulo, AppError>;

    /// Apply a partial update, returning the updated row or `None` when
    /// the id does not exist.
    async fn update(&self, id: i32, changes: &ModuloUpdate) -> Result<Option<Modulo>, AppError>;

    /// Delete a modulo, returning whether a row was removed. Fails with a
    /// conflict when dependent Projetos still reference the modulo.
    async fn delete(&self, id: i32) -> Result<bool, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modulo_serialization_includes_all_fields() {
        let now = Utc::now();
        let modulo = Modulo {
            id: 7,
            nome: "Relatórios".to_string(),
            descricao: Some("Módulo de relatórios gerenciais".to_string()),
            sistema_id: 2,
            created_at: now,
            updated_at: now,
        };

        let serialized = serde_json::to_string(&modulo).expect("Failed to serialize modulo");

        assert!(serialized.contains("\"id\":7"));
        assert!(serialized.contains("\"nome\":\"Relatórios\""));
        assert!(serialized.contains("\"sistema_id\":2"));
    }

    #[test]
    fn test_modulo_update_default_changes_nothing() {
        let update = ModuloUpdate::default();

        assert!(update.nome.is_none());
        assert!(update.descricao.is_none());
        assert!(update.sistema_id.is_none());
    }
}
