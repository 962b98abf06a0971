//! Sistema Service
//!
//! Same validate-then-delegate shape as the Modulo service, with the
//! uniqueness scope widened to the whole table.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{NovoSistema, Sistema, SistemaRepository, SistemaUpdate};
use crate::shared::error::AppError;

/// Sistema service trait
#[async_trait]
pub trait SistemaService: Send + Sync {
    /// Create a new sistema after checking name uniqueness
    async fn create_sistema(&self, data: NovoSistema) -> Result<Sistema, SistemaError>;

    /// List all sistemas
    async fn get_all_sistemas(&self) -> Result<Vec<Sistema>, SistemaError>;

    /// Get a sistema by id
    async fn get_sistema_by_id(&self, id: i32) -> Result<Option<Sistema>, SistemaError>;

    /// Apply a partial update, re-checking uniqueness when the name changes
    async fn update_sistema(
        &self,
        id: i32,
        changes: SistemaUpdate,
    ) -> Result<Option<Sistema>, SistemaError>;

    /// Delete a sistema unless dependent Modulos reference it
    async fn delete_sistema(&self, id: i32) -> Result<bool, SistemaError>;
}

/// Sistema service errors
#[derive(Debug, thiserror::Error)]
pub enum SistemaError {
    #[error("Já existe um sistema com este nome.")]
    NomeDuplicado,

    #[error("Não é possível excluir este sistema pois ele possui Módulos vinculados.")]
    ModulosVinculados,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// SistemaService implementation
pub struct SistemaServiceImpl<R>
where
    R: SistemaRepository,
{
    sistema_repo: Arc<R>,
}

impl<R> SistemaServiceImpl<R>
where
    R: SistemaRepository,
{
    pub fn new(sistema_repo: Arc<R>) -> Self {
        Self { sistema_repo }
    }
}

#[async_trait]
impl<R> SistemaService for SistemaServiceImpl<R>
where
    R: SistemaRepository + 'static,
{
    async fn create_sistema(&self, data: NovoSistema) -> Result<Sistema, SistemaError> {
        let existente = self
            .sistema_repo
            .find_by_nome(&data.nome)
            .await
            .map_err(|e| SistemaError::Internal(e.to_string()))?;

        if existente.is_some() {
            return Err(SistemaError::NomeDuplicado);
        }

        match self.sistema_repo.create(&data).await {
            Ok(sistema) => Ok(sistema),
            Err(AppError::Conflict(_)) => Err(SistemaError::NomeDuplicado),
            Err(e) => Err(SistemaError::Internal(e.to_string())),
        }
    }

    async fn get_all_sistemas(&self) -> Result<Vec<Sistema>, SistemaError> {
        self.sistema_repo
            .find_all()
            .await
            .map_err(|e| SistemaError::Internal(e.to_string()))
    }

    async fn get_sistema_by_id(&self, id: i32) -> Result<Option<Sistema>, SistemaError> {
        self.sistema_repo
            .find_by_id(id)
            .await
            .map_err(|e| SistemaError::Internal(e.to_string()))
    }

    async fn update_sistema(
        &self,
        id: i32,
        changes: SistemaUpdate,
    ) -> Result<Option<Sistema>, SistemaError> {
        if let Some(nome) = changes.nome.as_deref() {
            let atual = self
                .sistema_repo
                .find_by_id(id)
                .await
                .map_err(|e| SistemaError::Internal(e.to_string()))?;

            if atual.is_none() {
                return Ok(None);
            }

            let existente = self
                .sistema_repo
                .find_by_nome(nome)
                .await
                .map_err(|e| SistemaError::Internal(e.to_string()))?;

            if existente.is_some_and(|s| s.id != id) {
                return Err(SistemaError::NomeDuplicado);
            }
        }

        match self.sistema_repo.update(id, &changes).await {
            Ok(sistema) => Ok(sistema),
            Err(AppError::Conflict(_)) => Err(SistemaError::NomeDuplicado),
            Err(e) => Err(SistemaError::Internal(e.to_string())),
        }
    }

    async fn delete_sistema(&self, id: i32) -> Result<bool, SistemaError> {
        match self.sistema_repo.delete(id).await {
            Ok(removed) => Ok(removed),
            Err(AppError::Conflict(_)) => Err(SistemaError::ModulosVinculados),
            Err(e) => Err(SistemaError::Internal(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::MockSistemaRepository;
    use chrono::Utc;

    fn sistema(id: i32, nome: &str) -> Sistema {
        let now = Utc::now();
        Sistema {
            id,
            nome: nome.to_string(),
            descricao: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_name() {
        let mut repo = MockSistemaRepository::new();
        repo.expect_find_by_nome()
            .returning(|nome| Ok(Some(sistema(3, nome))));
        repo.expect_create().times(0);

        let service = SistemaServiceImpl::new(Arc::new(repo));
        let result = service
            .create_sistema(NovoSistema {
                nome: "Gestão Estratégica".to_string(),
                descricao: None,
            })
            .await;

        assert!(matches!(result, Err(SistemaError::NomeDuplicado)));
    }

    #[tokio::test]
    async fn test_delete_maps_integrity_violation_to_dependency_conflict() {
        let mut repo = MockSistemaRepository::new();
        repo.expect_delete()
            .returning(|_| Err(AppError::Conflict("violates foreign key constraint".into())));

        let service = SistemaServiceImpl::new(Arc::new(repo));
        let result = service.delete_sistema(3).await;

        assert!(matches!(result, Err(SistemaError::ModulosVinculados)));
    }

    #[tokio::test]
    async fn test_update_allows_keeping_own_name() {
        let mut repo = MockSistemaRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(sistema(id, "Gestão Estratégica"))));
        repo.expect_find_by_nome()
            .returning(|nome| Ok(Some(sistema(3, nome))));
        repo.expect_update()
            .times(1)
            .returning(|id, _| Ok(Some(sistema(id, "Gestão Estratégica"))));

        let service = SistemaServiceImpl::new(Arc::new(repo));
        let changes = SistemaUpdate {
            nome: Some("Gestão Estratégica".to_string()),
            ..Default::default()
        };
        let result = service.update_sistema(3, changes).await;

        assert!(matches!(result, Ok(Some(_))));
    }
}
