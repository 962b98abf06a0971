//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use super::handlers;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    let api_prefix = state.settings.api_prefix.clone();

    Router::new()
        .nest(&api_prefix, api_routes())
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        .with_state(state)
}

/// API routes, nested under the configured prefix
fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/sistemas", sistema_routes())
        .nest("/modulos", modulo_routes())
        .nest("/projetos", projeto_routes())
}

/// Sistema routes
fn sistema_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::sistema::get_sistemas))
        .route("/", post(handlers::sistema::create_sistema))
        .route("/{sistema_id}", get(handlers::sistema::get_sistema))
        .route("/{sistema_id}", patch(handlers::sistema::update_sistema))
        .route("/{sistema_id}", delete(handlers::sistema::delete_sistema))
}

/// Modulo routes
fn modulo_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::modulo::get_modulos))
        .route("/", post(handlers::modulo::create_modulo))
        .route("/{modulo_id}", get(handlers::modulo::get_modulo))
        .route("/{modulo_id}", patch(handlers::modulo::update_modulo))
        .route("/{modulo_id}", delete(handlers::modulo::delete_modulo))
        .route("/{modulo_id}/projetos", get(handlers::modulo::get_modulo_projetos))
}

/// Projeto routes (read-only)
fn projeto_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::projeto::get_projetos))
        .route("/{projeto_id}", get(handlers::projeto::get_projeto))
}
