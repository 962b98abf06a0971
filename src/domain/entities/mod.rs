//! # Domain Entities
//!
//! Core domain entities representing the portfolio hierarchy. All entities
//! map directly to their corresponding database tables.
//!
//! - **Sistema**: Top-level system that owns zero or more Modulos
//! - **Modulo**: Functional module, uniquely named within its Sistema
//! - **Projeto**: Project tied to a Modulo; its existence blocks deletion
//!   of the Modulo it references
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access
//! operations. These traits are implemented in the infrastructure layer,
//! following the dependency inversion principle.

mod modulo;
mod projeto;
mod sistema;

// Re-export Sistema entity and related types
pub use sistema::{NovoSistema, Sistema, SistemaRepository, SistemaUpdate};

// Re-export Modulo entity and related types
pub use modulo::{Modulo, ModuloRepository, ModuloUpdate, NovoModulo};

// Re-export Projeto entity and related types
pub use projeto::{Projeto, ProjetoRepository};

// Repository mocks for service-level unit tests
#[cfg(test)]
pub use modulo::MockModuloRepository;
#[cfg(test)]
pub use projeto::MockProjetoRepository;
#[cfg(test)]
pub use sistema::MockSistemaRepository;
