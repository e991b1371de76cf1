use crate::storage::StoreError;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum EngineError {
    #[error("store error: {0}")]
    Store(String),
    #[error("invalid course: {0}")]
    InvalidCourse(String),
    #[error("invalid wager: {0}")]
    InvalidWager(String),
    #[error("not found: {0}")]
    NotFound(String),
}

impl From<StoreError> for EngineError {
    fn from(err: StoreError) -> Self {
        Self::Store(err.to_string())
    }
}
