//! Modulo Handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::application::dto::request::{CreateModuloRequest, UpdateModuloRequest};
use crate::application::dto::response::{ModuloResponse, ProjetoResponse};
use crate::application::services::{
    ModuloError, ModuloService, ModuloServiceImpl, ProjetoService, ProjetoServiceImpl,
};
use crate::infrastructure::repositories::{PgModuloRepository, PgProjetoRepository};
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

impl From<ModuloError> for AppError {
    fn from(e: ModuloError) -> Self {
        match &e {
            ModuloError::NomeDuplicado => AppError::BadRequest(e.to_string()),
            ModuloError::ProjetosVinculados => AppError::Conflict(e.to_string()),
            ModuloError::Internal(msg) => AppError::Internal(msg.clone()),
        }
    }
}

fn modulo_service(state: &AppState) -> ModuloServiceImpl<PgModuloRepository> {
    ModuloServiceImpl::new(Arc::new(PgModuloRepository::new(state.db.clone())))
}

/// Create a new modulo
pub async fn create_modulo(
    State(state): State<AppState>,
    Json(body): Json<CreateModuloRequest>,
) -> Result<(StatusCode, Json<ModuloResponse>), AppError> {
    // Validate request
    body.validate().map_err(validation_error)?;

    let modulo = modulo_service(&state).create_modulo(body.into()).await?;

    Ok((StatusCode::CREATED, Json(ModuloResponse::from(modulo))))
}

/// List all modulos
pub async fn get_modulos(
    State(state): State<AppState>,
) -> Result<Json<Vec<ModuloResponse>>, AppError> {
    let modulos = modulo_service(&state).get_all_modulos().await?;

    Ok(Json(modulos.into_iter().map(ModuloResponse::from).collect()))
}

/// Get modulo by ID
pub async fn get_modulo(
    State(state): State<AppState>,
    Path(modulo_id): Path<i32>,
) -> Result<Json<ModuloResponse>, AppError> {
    let modulo = modulo_service(&state)
        .get_modulo_by_id(modulo_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Módulo não encontrado".into()))?;

    Ok(Json(ModuloResponse::from(modulo)))
}

/// Update modulo
pub async fn update_modulo(
    State(state): State<AppState>,
    Path(modulo_id): Path<i32>,
    Json(body): Json<UpdateModuloRequest>,
) -> Result<Json<ModuloResponse>, AppError> {
    // Validate request
    body.validate().map_err(validation_error)?;

    let modulo = modulo_service(&state)
        .update_modulo(modulo_id, body.into())
        .await?
        .ok_or_else(|| AppError::NotFound("Módulo não encontrado".into()))?;

    Ok(Json(ModuloResponse::from(modulo)))
}

/// Delete modulo
pub async fn delete_modulo(
    State(state): State<AppState>,
    Path(modulo_id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let removed = modulo_service(&state).delete_modulo(modulo_id).await?;

    if !removed {
        return Err(AppError::NotFound("Módulo não encontrado".into()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// List the projetos tied to a modulo
pub async fn get_modulo_projetos(
    State(state): State<AppState>,
    Path(modulo_id): Path<i32>,
) -> Result<Json<Vec<ProjetoResponse>>, AppError> {
    let service = ProjetoServiceImpl::new(Arc::new(PgProjetoRepository::new(state.db.clone())));
    let projetos = service.get_projetos_by_modulo(modulo_id).await?;

    Ok(Json(projetos.into_iter().map(ProjetoResponse::from).collect()))
}
