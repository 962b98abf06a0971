//! Sistema Handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::application::dto::request::{CreateSistemaRequest, UpdateSistemaRequest};
use crate::application::dto::response::SistemaResponse;
use crate::application::services::{SistemaError, SistemaService, SistemaServiceImpl};
use crate::infrastructure::repositories::PgSistemaRepository;
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

impl From<SistemaError> for AppError {
    fn from(e: SistemaError) -> Self {
        match &e {
            SistemaError::NomeDuplicado => AppError::BadRequest(e.to_string()),
            SistemaError::ModulosVinculados => AppError::Conflict(e.to_string()),
            SistemaError::Internal(msg) => AppError::Internal(msg.clone()),
        }
    }
}

fn sistema_service(state: &AppState) -> SistemaServiceImpl<PgSistemaRepository> {
    SistemaServiceImpl::new(Arc::new(PgSistemaRepository::new(state.db.clone())))
}

/// Create a new sistema
pub async fn create_sistema(
    State(state): State<AppState>,
    Json(body): Json<CreateSistemaRequest>,
) -> Result<(StatusCode, Json<SistemaResponse>), AppError> {
    // Validate request
    body.validate().map_err(validation_error)?;

    let sistema = sistema_service(&state).create_sistema(body.into()).await?;

    Ok((StatusCode::CREATED, Json(SistemaResponse::from(sistema))))
}

/// List all sistemas
pub async fn get_sistemas(
    State(state): State<AppState>,
) -> Result<Json<Vec<SistemaResponse>>, AppError> {
    let sistemas = sistema_service(&state).get_all_sistemas().await?;

    Ok(Json(sistemas.into_iter().map(SistemaResponse::from).collect()))
}

/// Get sistema by ID
pub async fn get_sistema(
    State(state): State<AppState>,
    Path(sistema_id): Path<i32>,
) -> Result<Json<SistemaResponse>, AppError> {
    let sistema = sistema_service(&state)
        .get_sistema_by_id(sistema_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Sistema não encontrado".into()))?;

    Ok(Json(SistemaResponse::from(sistema)))
}

/// Update sistema
pub async fn update_sistema(
    State(state): State<AppState>,
    Path(sistema_id): Path<i32>,
    Json(body): Json<UpdateSistemaRequest>,
) -> Result<Json<SistemaResponse>, AppError> {
    // Validate request
    body.validate().map_err(validation_error)?;

    let sistema = sistema_service(&state)
        .update_sistema(sistema_id, body.into())
        .await?
        .ok_or_else(|| AppError::NotFound("Sistema não encontrado".into()))?;

    Ok(Json(SistemaResponse::from(sistema)))
}

/// Delete sistema
pub async fn delete_sistema(
    State(state): State<AppState>,
    Path(sistema_id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let removed = sistema_service(&state).delete_sistema(sistema_id).await?;

    if !removed {
        return Err(AppError::NotFound("Sistema não encontrado".into()));
    }

    Ok(StatusCode::NO_CONTENT)
}
