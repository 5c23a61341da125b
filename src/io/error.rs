use std::io;
use thiserror::Error;

use crate::domain::DomainError;

/// IO-level errors for CSV export and import
#[derive(Error, Debug)]
pub enum IoError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid currency code: {0}")]
    InvalidCurrency(String),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}
