//! Modulo Service
//!
//! Validates and delegates Modulo operations. The only business rule here
//! is name uniqueness within a Sistema, checked before any write reaches
//! the repository; delete additionally translates a referential-integrity
//! conflict into a domain error the HTTP layer can map to 409.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Modulo, ModuloRepository, ModuloUpdate, NovoModulo};
use crate::shared::error::AppError;

/// Modulo service trait
#[async_trait]
pub trait ModuloService: Send + Sync {
    /// Create a new modulo after checking name uniqueness
    async fn create_modulo(&self, data: NovoModulo) -> Result<Modulo, ModuloError>;

    /// List all modulos
    async fn get_all_modulos(&self) -> Result<Vec<Modulo>, ModuloError>;

    /// Get a modulo by id
    async fn get_modulo_by_id(&self, id: i32) -> Result<Option<Modulo>, ModuloError>;

    /// Apply a partial update, re-checking uniqueness when the name changes
    async fn update_modulo(
        &self,
        id: i32,
        changes: ModuloUpdate,
    ) -> Result<Option<Modulo>, ModuloError>;

    /// Delete a modulo unless dependent Projetos reference it
    async fn delete_modulo(&self, id: i32) -> Result<bool, ModuloError>;
}

/// Modulo service errors
#[derive(Debug, thiserror::Error)]
pub enum ModuloError {
    /// Duplicate (nome, sistema_id) pair
    #[error("Já existe um módulo com este nome neste sistema.")]
    NomeDuplicado,

    /// Delete blocked by dependent Projetos
    #[error("Não é possível excluir este módulo pois ele possui Projetos vinculados.")]
    ProjetosVinculados,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// ModuloService implementation
pub struct ModuloServiceImpl<R>
where
    R: ModuloRepository,
{
    modulo_repo: Arc<R>,
}

impl<R> ModuloServiceImpl<R>
where
    R: ModuloRepository,
{
    pub fn new(modulo_repo: Arc<R>) -> Self {
        Self { modulo_repo }
    }
}

#[async_trait]
impl<R> ModuloService for ModuloServiceImpl<R>
where
    R: ModuloRepository + 'static,
{
    async fn create_modulo(&self, data: NovoModulo) -> Result<Modulo, ModuloError> {
        // Check if the name is already taken within the sistema
        let existente = self
            .modulo_repo
            .find_by_nome_e_sistema(&data.nome, data.sistema_id)
            .await
            .map_err(|e| ModuloError::Internal(e.to_string()))?;

        if existente.is_some() {
            return Err(ModuloError::NomeDuplicado);
        }

        match self.modulo_repo.create(&data).await {
            Ok(modulo) => Ok(modulo),
            // Lost a race against a concurrent insert; the table constraint
            // reports the same duplicate
            Err(AppError::Conflict(_)) => Err(ModuloError::NomeDuplicado),
            Err(e) => Err(ModuloError::Internal(e.to_string())),
        }
    }

    async fn get_all_modulos(&self) -> Result<Vec<Modulo>, ModuloError> {
        self.modulo_repo
            .find_all()
            .await
            .map_err(|e| ModuloError::Internal(e.to_string()))
    }

    async fn get_modulo_by_id(&self, id: i32) -> Result<Option<Modulo>, ModuloError> {
        self.modulo_repo
            .find_by_id(id)
            .await
            .map_err(|e| ModuloError::Internal(e.to_string()))
    }

    async fn update_modulo(
        &self,
        id: i32,
        changes: ModuloUpdate,
    ) -> Result<Option<Modulo>, ModuloError> {
        if let Some(nome) = changes.nome.as_deref() {
            let atual = self
                .modulo_repo
                .find_by_id(id)
                .await
                .map_err(|e| ModuloError::Internal(e.to_string()))?;

            let Some(atual) = atual else {
                return Ok(None);
            };

            // The uniqueness scope is the sistema the record will end up in
            let sistema_id = changes.sistema_id.unwrap_or(atual.sistema_id);

            let existente = self
                .modulo_repo
                .find_by_nome_e_sistema(nome, sistema_id)
                .await
                .map_err(|e| ModuloError::Internal(e.to_string()))?;

            // Keeping its own name is not a conflict
            if existente.is_some_and(|m| m.id != id) {
                return Err(ModuloError::NomeDuplicado);
            }
        }

        match self.modulo_repo.update(id, &changes).await {
            Ok(modulo) => Ok(modulo),
            Err(AppError::Conflict(_)) => Err(ModuloError::NomeDuplicado),
            Err(e) => Err(ModuloError::Internal(e.to_string())),
        }
    }

    async fn delete_modulo(&self, id: i32) -> Result<bool, ModuloError> {
        match self.modulo_repo.delete(id).await {
            Ok(removed) => Ok(removed),
            // The repository rolled its transaction back and reported the
            // referential-integrity violation as a conflict
            Err(AppError::Conflict(_)) => Err(ModuloError::ProjetosVinculados),
            Err(e) => Err(ModuloError::Internal(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::MockModuloRepository;
    use chrono::Utc;
    use mockall::predicate;
    use pretty_assertions::assert_eq;

    fn modulo(id: i32, nome: &str, sistema_id: i32) -> Modulo {
        let now = Utc::now();
        Modulo {
            id,
            nome: nome.to_string(),
            descricao: None,
            sistema_id,
            created_at: now,
            updated_at: now,
        }
    }

    fn novo(nome: &str, sistema_id: i32) -> NovoModulo {
        NovoModulo {
            nome: nome.to_string(),
            descricao: None,
            sistema_id,
        }
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_without_touching_storage() {
        let mut repo = MockModuloRepository::new();
        repo.expect_find_by_nome_e_sistema()
            .with(predicate::eq("Relatórios"), predicate::eq(1))
            .returning(|nome, sistema_id| Ok(Some(modulo(9, nome, sistema_id))));
        repo.expect_create().times(0);

        let service = ModuloServiceImpl::new(Arc::new(repo));
        let result = service.create_modulo(novo("Relatórios", 1)).await;

        assert!(matches!(result, Err(ModuloError::NomeDuplicado)));
    }

    #[tokio::test]
    async fn test_create_delegates_when_name_is_free() {
        let mut repo = MockModuloRepository::new();
        repo.expect_find_by_nome_e_sistema().returning(|_, _| Ok(None));
        repo.expect_create()
            .times(1)
            .returning(|data| Ok(modulo(1, &data.nome, data.sistema_id)));

        let service = ModuloServiceImpl::new(Arc::new(repo));
        let created = service
            .create_modulo(novo("Cadastros", 3))
            .await
            .expect("create should succeed");

        assert_eq!(created.nome, "Cadastros");
        assert_eq!(created.sistema_id, 3);
    }

    #[tokio::test]
    async fn test_create_maps_storage_conflict_to_duplicate() {
        let mut repo = MockModuloRepository::new();
        repo.expect_find_by_nome_e_sistema().returning(|_, _| Ok(None));
        repo.expect_create()
            .returning(|_| Err(AppError::Conflict("duplicate key".into())));

        let service = ModuloServiceImpl::new(Arc::new(repo));
        let result = service.create_modulo(novo("Cadastros", 3)).await;

        assert!(matches!(result, Err(ModuloError::NomeDuplicado)));
    }

    #[tokio::test]
    async fn test_update_rejects_name_held_by_other_record() {
        let mut repo = MockModuloRepository::new();
        repo.expect_find_by_id()
            .with(predicate::eq(5))
            .returning(|id| Ok(Some(modulo(id, "Antigo", 1))));
        repo.expect_find_by_nome_e_sistema()
            .with(predicate::eq("Relatórios"), predicate::eq(1))
            .returning(|nome, sistema_id| Ok(Some(modulo(9, nome, sistema_id))));
        repo.expect_update().times(0);

        let service = ModuloServiceImpl::new(Arc::new(repo));
        let changes = ModuloUpdate {
            nome: Some("Relatórios".to_string()),
            ..Default::default()
        };
        let result = service.update_modulo(5, changes).await;

        assert!(matches!(result, Err(ModuloError::NomeDuplicado)));
    }

    #[tokio::test]
    async fn test_update_allows_keeping_own_name() {
        let mut repo = MockModuloRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(modulo(id, "Relatórios", 1))));
        // The pair exists, but it is this very record
        repo.expect_find_by_nome_e_sistema()
            .returning(|nome, sistema_id| Ok(Some(modulo(5, nome, sistema_id))));
        repo.expect_update()
            .times(1)
            .returning(|id, _| Ok(Some(modulo(id, "Relatórios", 1))));

        let service = ModuloServiceImpl::new(Arc::new(repo));
        let changes = ModuloUpdate {
            nome: Some("Relatórios".to_string()),
            ..Default::default()
        };
        let updated = service
            .update_modulo(5, changes)
            .await
            .expect("update should succeed");

        assert_eq!(updated.expect("record exists").id, 5);
    }

    #[tokio::test]
    async fn test_update_missing_record_returns_none_without_updating() {
        let mut repo = MockModuloRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_find_by_nome_e_sistema().times(0);
        repo.expect_update().times(0);

        let service = ModuloServiceImpl::new(Arc::new(repo));
        let changes = ModuloUpdate {
            nome: Some("Relatórios".to_string()),
            ..Default::default()
        };
        let result = service.update_modulo(404, changes).await;

        assert!(matches!(result, Ok(None)));
    }

    #[tokio::test]
    async fn test_update_without_name_skips_uniqueness_check() {
        let mut repo = MockModuloRepository::new();
        repo.expect_find_by_id().times(0);
        repo.expect_find_by_nome_e_sistema().times(0);
        repo.expect_update()
            .times(1)
            .returning(|id, _| Ok(Some(modulo(id, "Relatórios", 1))));

        let service = ModuloServiceImpl::new(Arc::new(repo));
        let changes = ModuloUpdate {
            descricao: Some("Nova descrição".to_string()),
            ..Default::default()
        };
        let result = service.update_modulo(5, changes).await;

        assert!(matches!(result, Ok(Some(_))));
    }

    #[tokio::test]
    async fn test_update_checks_uniqueness_in_target_sistema() {
        let mut repo = MockModuloRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(modulo(id, "Relatórios", 1))));
        // The record is moving to sistema 2, so that is where the name
        // must be free
        repo.expect_find_by_nome_e_sistema()
            .with(predicate::eq("Relatórios"), predicate::eq(2))
            .returning(|_, _| Ok(None));
        repo.expect_update()
            .times(1)
            .returning(|id, _| Ok(Some(modulo(id, "Relatórios", 2))));

        let service = ModuloServiceImpl::new(Arc::new(repo));
        let changes = ModuloUpdate {
            nome: Some("Relatórios".to_string()),
            sistema_id: Some(2),
            ..Default::default()
        };
        let result = service.update_modulo(5, changes).await;

        assert!(matches!(result, Ok(Some(_))));
    }

    #[tokio::test]
    async fn test_delete_maps_integrity_violation_to_dependency_conflict() {
        let mut repo = MockModuloRepository::new();
        repo.expect_delete()
            .with(predicate::eq(5))
            .returning(|_| Err(AppError::Conflict("violates foreign key constraint".into())));

        let service = ModuloServiceImpl::new(Arc::new(repo));
        let result = service.delete_modulo(5).await;

        assert!(matches!(result, Err(ModuloError::ProjetosVinculados)));
    }

    #[tokio::test]
    async fn test_delete_passes_through() {
        let mut repo = MockModuloRepository::new();
        repo.expect_delete().returning(|_| Ok(true));

        let service = ModuloServiceImpl::new(Arc::new(repo));
        let removed = service.delete_modulo(5).await.expect("delete should succeed");

        assert!(removed);
    }

    #[tokio::test]
    async fn test_get_by_id_passes_through() {
        let mut repo = MockModuloRepository::new();
        repo.expect_find_by_id()
            .with(predicate::eq(7))
            .returning(|id| Ok(Some(modulo(id, "Relatórios", 1))));

        let service = ModuloServiceImpl::new(Arc::new(repo));
        let found = service.get_modulo_by_id(7).await.expect("lookup should succeed");

        assert_eq!(found.expect("record exists").id, 7);
    }

    #[test]
    fn test_error_messages_are_user_facing() {
        assert_eq!(
            ModuloError::NomeDuplicado.to_string(),
            "Já existe um módulo com este nome neste sistema."
        );
        assert_eq!(
            ModuloError::ProjetosVinculados.to_string(),
            "Não é possível excluir este módulo pois ele possui Projetos vinculados."
        );
    }
}
