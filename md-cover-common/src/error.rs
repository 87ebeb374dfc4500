//! Common error types for MD Cover Creator

use thiserror::Error;

/// Common result type for MD Cover Creator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across MD Cover Creator services
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
