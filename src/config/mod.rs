//! # Configuration Module
//!
//! This module handles application configuration loading and management.
//! Configuration can be loaded from:
//! - Environment variables (flat names like `POSTGRES_HOST`, or prefixed with APP__)
//! - Configuration files (config/default.toml, config/{environment}.toml)
//! - .env files (via dotenvy)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ge_server::config::Settings;
//!
//! let settings = Settings::load()?;
//! println!("Connecting to {}", settings.database.connection_url());
//! ```

mod settings;

pub use settings::*;
