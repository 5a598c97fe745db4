use thiserror::Error;

/// Errors raised by the in-memory model, before anything touches the store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("Invalid configuration data received: {0}")]
    InvalidPayload(String),

    #[error("Cannot remove the last remaining group.")]
    LastGroup,

    #[error("No group at position {0}")]
    NoSuchGroup(usize),

    #[error("Please enter a configuration name before saving.")]
    MissingName,
}
