//! Request DTOs
//!
//! Data structures for API request bodies.

use serde::Deserialize;
use validator::Validate;

use crate::domain::{ModuloUpdate, NovoModulo, NovoSistema, SistemaUpdate};

/// Create sistema request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSistemaRequest {
    #[validate(length(min = 1, max = 100, message = "Nome must be 1-100 characters"))]
    pub nome: String,

    pub descricao: Option<String>,
}

/// Update sistema request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSistemaRequest {
    #[validate(length(min = 1, max = 100, message = "Nome must be 1-100 characters"))]
    pub nome: Option<String>,

    pub descricao: Option<String>,
}

/// Create modulo request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateModuloRequest {
    #[validate(length(min = 1, max = 100, message = "Nome must be 1-100 characters"))]
    pub nome: String,

    pub descricao: Option<String>,

    pub sistema_id: i32,
}

/// Update modulo request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateModuloRequest {
    #[validate(length(min = 1, max = 100, message = "Nome must be 1-100 characters"))]
    pub nome: Option<String>,

    pub descricao: Option<String>,

    pub sistema_id: Option<i32>,
}

impl From<CreateSistemaRequest> for NovoSistema {
    fn from(body: CreateSistemaRequest) -> Self {
        Self {
            nome: body.nome,
            descricao: body.descricao,
        }
    }
}

impl From<UpdateSistemaRequest> for SistemaUpdate {
    fn from(body: UpdateSistemaRequest) -> Self {
        Self {
            nome: body.nome,
            descricao: body.descricao,
        }
    }
}

impl From<CreateModuloRequest> for NovoModulo {
    fn from(body: CreateModuloRequest) -> Self {
        Self {
            nome: body.nome,
            descricao: body.descricao,
            sistema_id: body.sistema_id,
        }
    }
}

impl From<UpdateModuloRequest> for ModuloUpdate {
    fn from(body: UpdateModuloRequest) -> Self {
        Self {
            nome: body.nome,
            descricao: body.descricao,
            sistema_id: body.sistema_id,
        }
    }
}
