use std::io;
use thiserror::Error;

use crate::domain::DomainError;
use crate::engine::EngineError;
use crate::io::IoError;
use crate::storage::StorageError;

/// Top-level application errors unifying all layer errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV IO error: {0}")]
    CsvIo(#[from] IoError),

    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formats_correctly() {
        assert_eq!(
            AppError::FileNotFound("recipients.csv".to_string()).to_string(),
            "File not found: recipients.csv"
        );
        assert_eq!(
            AppError::InvalidArguments("unknown command".to_string()).to_string(),
            "Invalid arguments: unknown command"
        );
    }

    #[test]
    fn io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let app_err = AppError::from(io_err);

        match app_err {
            AppError::Io(_) => {}
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn domain_error_conversion() {
        let app_err = AppError::from(DomainError::InvalidAmount);

        match app_err {
            AppError::Domain(DomainError::InvalidAmount) => {}
            _ => panic!("Expected Domain error variant"),
        }
    }

    #[test]
    fn engine_error_conversion() {
        let app_err = AppError::from(EngineError::RecipientNotFound("RCP404".to_string()));

        match app_err {
            AppError::Engine(EngineError::RecipientNotFound(_)) => {}
            _ => panic!("Expected Engine error variant"),
        }
    }
}
