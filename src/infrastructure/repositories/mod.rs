//! Repository Implementations
//!
//! PostgreSQL implementations of the domain repository traits.
//!
//! ## Available Repositories
//!
//! - **SistemaRepository** - Sistema CRUD
//! - **ModuloRepository** - Modulo CRUD, including the name-within-sistema
//!   lookup used by the uniqueness check
//! - **ProjetoRepository** - Read access to projetos

pub mod modulo_repository;
pub mod projeto_repository;
pub mod sistema_repository;

// Re-export repository structs for convenience
pub use modulo_repository::PgModuloRepository;
pub use projeto_repository::PgProjetoRepository;
pub use sistema_repository::PgSistemaRepository;
