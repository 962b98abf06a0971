//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **SistemaService**: Sistema CRUD with global name uniqueness
//! - **ModuloService**: Modulo CRUD with per-sistema name uniqueness and
//!   delete guarded against dependent Projetos
//! - **ProjetoService**: Read access to Projetos

pub mod modulo_service;
pub mod projeto_service;
pub mod sistema_service;

// Re-export sistema service types
pub use sistema_service::{SistemaError, SistemaService, SistemaServiceImpl};

// Re-export modulo service types
pub use modulo_service::{ModuloError, ModuloService, ModuloServiceImpl};

// Re-export projeto service types
pub use projeto_service::{ProjetoError, ProjetoService, ProjetoServiceImpl};
