use std::result::Result as StdResult;

use thiserror::Error;

/// Error type shared by the storage, configuration and shell layers.
///
/// The bookkeeping rules themselves never fail; these variants only cover the
/// edges where the crate touches the filesystem or parses user input.
#[derive(Debug, Error)]
pub enum RentalError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Tenant not found: {0}")]
    TenantNotFound(String),
}

pub type Result<T> = StdResult<T, RentalError>;
