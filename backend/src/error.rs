use actix_web::http::StatusCode;
use common::error::ModelError;
use std::io;
use thiserror::Error;

/// Failures of a load or save request. Each one is recovered by the session
/// controller and shown to the user as a message.
#[derive(Debug, Error)]
pub enum BadgeError {
    #[error("The store directory {dir} could not be created. Check server permissions. ({source})")]
    StorageUnavailable {
        dir: String,
        #[source]
        source: io::Error,
    },

    #[error("Requested configuration file {0} was not found.")]
    FileNotFound(String),

    #[error("Failed to read configuration file: {filename}. Starting fresh. ({reason})")]
    ReadFailure { filename: String, reason: String },

    #[error("Invalid configuration data received: {0}")]
    InvalidPayload(String),

    #[error("Invalid file specified for overwrite: {0}")]
    InvalidTarget(String),

    #[error("Could not write file {filename}. Check directory permissions for {dir}. ({reason})")]
    WriteFailure {
        filename: String,
        dir: String,
        reason: String,
    },
}

impl BadgeError {
    /// Status of the response that carries this error back to the client.
    pub fn status_code(&self) -> StatusCode {
        match self {
            BadgeError::InvalidPayload(_) | BadgeError::InvalidTarget(_) => {
                StatusCode::BAD_REQUEST
            }
            BadgeError::FileNotFound(_) => StatusCode::NOT_FOUND,
            BadgeError::StorageUnavailable { .. }
            | BadgeError::ReadFailure { .. }
            | BadgeError::WriteFailure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ModelError> for BadgeError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::InvalidPayload(reason) => BadgeError::InvalidPayload(reason),
            other => BadgeError::InvalidPayload(other.to_string()),
        }
    }
}
