//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::Serialize;

use crate::domain::{Modulo, Projeto, Sistema};

/// Sistema response
#[derive(Debug, Serialize)]
pub struct SistemaResponse {
    pub id: i32,
    pub nome: String,
    pub descricao: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Sistema> for SistemaResponse {
    fn from(sistema: Sistema) -> Self {
        Self {
            id: sistema.id,
            nome: sistema.nome,
            descricao: sistema.descricao,
            created_at: sistema.created_at.to_rfc3339(),
            updated_at: sistema.updated_at.to_rfc3339(),
        }
    }
}

/// Modulo response
#[derive(Debug, Serialize)]
pub struct ModuloResponse {
    pub id: i32,
    pub nome: String,
    pub descricao: Option<String>,
    pub sistema_id: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Modulo> for ModuloResponse {
    fn from(modulo: Modulo) -> Self {
        Self {
            id: modulo.id,
            nome: modulo.nome,
            descricao: modulo.descricao,
            sistema_id: modulo.sistema_id,
            created_at: modulo.created_at.to_rfc3339(),
            updated_at: modulo.updated_at.to_rfc3339(),
        }
    }
}

/// Projeto response
#[derive(Debug, Serialize)]
pub struct ProjetoResponse {
    pub id: i32,
    pub nome: String,
    pub descricao: Option<String>,
    pub modulo_id: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Projeto> for ProjetoResponse {
    fn from(projeto: Projeto) -> Self {
        Self {
            id: projeto.id,
            nome: projeto.nome,
            descricao: projeto.descricao,
            modulo_id: projeto.modulo_id,
            created_at: projeto.created_at.to_rfc3339(),
            updated_at: projeto.updated_at.to_rfc3339(),
        }
    }
}
