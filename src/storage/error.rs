use thiserror::Error;

use crate::domain::DomainError;

/// Storage-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Duplicate id: {0}")]
    DuplicateId(String),

    #[error("Domain error: {0}")]
    DomainError(#[from] DomainError),
}
