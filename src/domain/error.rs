use thiserror::Error;

/// Domain-level errors representing business rule violations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid amount")]
    InvalidAmount,

    #[error("Amount must be positive")]
    NonPositiveAmount,

    #[error("Arithmetic overflow")]
    Overflow,

    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    #[error("Required field is empty: {0}")]
    MissingField(&'static str),
}
