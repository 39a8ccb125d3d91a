//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults + optional TOML file + environment
//!     → loader.rs (layering, parse)
//!     → validation.rs (semantic checks)
//!     → WatchdogConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload path
//! - All fields have defaults so a bare environment-only setup works
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{ObservabilityConfig, WatchdogConfig};
pub use validation::{validate_config, ValidationError};
