//! # ChronoLog Config
//!
//! Workspace layout, codec tunables, listing and logging settings, read from
//! a TOML file.

mod error;
mod loader;
mod schema;
mod validator;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;
pub use validator::{ConfigValidator, ValidationError, ValidationResult, ValidationWarning};
