//! Error types for the users API client.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when preparing or sending a users API request.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The user or contact failed validation; nothing was sent
    #[error("Invalid request: {0}")]
    Validation(#[from] ValidationError),

    /// The transport could not deliver the request
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ApiError
pub type ApiResult<T> = Result<T, ApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
