use thiserror::Error;

use crate::store::StoreError;

/// Crate-level errors. The pure computations never produce these; they only
/// surface from configuration and from the store/live plumbing.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Snapshot file error: {0}")]
    Snapshot(String),
}

impl EngineError {
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        EngineError::InvalidConfig(msg.into())
    }
}
