use thiserror::Error;

use super::wizard::WizardStep;
use crate::domain::DomainError;
use crate::storage::StorageError;

/// Engine-level errors for back-office flows
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Recipient not found: {0}")]
    RecipientNotFound(String),

    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    #[error("Invoice not found: {0}")]
    InvoiceNotFound(String),

    #[error("{action} is not allowed in the {step:?} step")]
    WizardStepViolation {
        step: WizardStep,
        action: &'static str,
    },

    #[error("Transfer is incomplete: {0}")]
    IncompleteTransfer(&'static str),

    #[error("Line item index out of range: {0}")]
    LineItemOutOfRange(usize),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
