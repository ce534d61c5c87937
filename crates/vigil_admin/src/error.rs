//! Admin collaborator error types

use thiserror::Error;

/// Errors from the data-source registry and alarm-rule store
#[derive(Error, Debug)]
pub enum RegistryError {
    /// A record with this id is already registered
    #[error("duplicate id `{0}`")]
    DuplicateId(String),

    /// No record with this id
    #[error("no record with id `{0}`")]
    NotFound(String),

    /// Malformed JSON payload
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from the threshold suggestion service
#[derive(Error, Debug)]
pub enum SuggestError {
    /// The service could not be reached or refused the request
    #[error("suggestion service unavailable: {0}")]
    Unavailable(String),

    /// The service did not answer in time
    #[error("suggestion request timed out")]
    Timeout,

    /// The service answered with something that is not a suggestion
    #[error("invalid suggestion response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;
