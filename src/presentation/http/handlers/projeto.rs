//! Projeto Handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::application::dto::response::ProjetoResponse;
use crate::application::services::{ProjetoError, ProjetoService, ProjetoServiceImpl};
use crate::infrastructure::repositories::PgProjetoRepository;
use crate::shared::error::AppError;
use crate::startup::AppState;

impl From<ProjetoError> for AppError {
    fn from(e: ProjetoError) -> Self {
        match e {
            ProjetoError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

fn projeto_service(state: &AppState) -> ProjetoServiceImpl<PgProjetoRepository> {
    ProjetoServiceImpl::new(Arc::new(PgProjetoRepository::new(state.db.clone())))
}

/// List all projetos
pub async fn get_projetos(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProjetoResponse>>, AppError> {
    let projetos = projeto_service(&state).get_all_projetos().await?;

    Ok(Json(projetos.into_iter().map(ProjetoResponse::from).collect()))
}

/// Get projeto by ID
pub async fn get_projeto(
    State(state): State<AppState>,
    Path(projeto_id): Path<i32>,
) -> Result<Json<ProjetoResponse>, AppError> {
    let projeto = projeto_service(&state)
        .get_projeto_by_id(projeto_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Projeto não encontrado".into()))?;

    Ok(Json(ProjetoResponse::from(projeto)))
}
