//! Projeto Service
//!
//! Read-only passthroughs; Projeto lifecycle is managed elsewhere and the
//! records matter to this API mostly as deletion blockers for Modulos.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Projeto, ProjetoRepository};

/// Projeto service trait
#[async_trait]
pub trait ProjetoService: Send + Sync {
    /// List all projetos
    async fn get_all_projetos(&self) -> Result<Vec<Projeto>, ProjetoError>;

    /// Get a projeto by id
    async fn get_projeto_by_id(&self, id: i32) -> Result<Option<Projeto>, ProjetoError>;

    /// List the projetos tied to a modulo
    async fn get_projetos_by_modulo(&self, modulo_id: i32) -> Result<Vec<Projeto>, ProjetoError>;
}

/// Projeto service errors
#[derive(Debug, thiserror::Error)]
pub enum ProjetoError {
    #[error("Internal error: {0}")]
    Internal(String),
}

/// ProjetoService implementation
pub struct ProjetoServiceImpl<R>
where
    R: ProjetoRepository,
{
    projeto_repo: Arc<R>,
}

impl<R> ProjetoServiceImpl<R>
where
    R: ProjetoRepository,
{
    pub fn new(projeto_repo: Arc<R>) -> Self {
        Self { projeto_repo }
    }
}

#[async_trait]
impl<R> ProjetoService for ProjetoServiceImpl<R>
where
    R: ProjetoRepository + 'static,
{
    async fn get_all_projetos(&self) -> Result<Vec<Projeto>, ProjetoError> {
        self.projeto_repo
            .find_all()
            .await
            .map_err(|e| ProjetoError::Internal(e.to_string()))
    }

    async fn get_projeto_by_id(&self, id: i32) -> Result<Option<Projeto>, ProjetoError> {
        self.projeto_repo
            .find_by_id(id)
            .await
            .map_err(|e| ProjetoError::Internal(e.to_string()))
    }

    async fn get_projetos_by_modulo(&self, modulo_id: i32) -> Result<Vec<Projeto>, ProjetoError> {
        self.projeto_repo
            .find_by_modulo(modulo_id)
            .await
            .map_err(|e| ProjetoError::Internal(e.to_string()))
    }
}
