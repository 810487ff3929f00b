//! Shared error type across xsslab crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, LabError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum LabError {
    /// Level key is not one of the three fixed values.
    /// The HTTP layer maps this to 404, never 500.
    #[error("unknown level: {0}")]
    UnknownLevel(String),
    /// Bad or unreadable server configuration.
    #[error("config: {0}")]
    Config(String),
}
