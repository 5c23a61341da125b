//! Prelude module for convenient imports
//!
//! Import everything you need with: `use paydesk::prelude::*;`

// Domain types
pub use crate::domain::{
    AmountType, Currency, Customer, CustomerDraft, DomainError, ExchangeRate, FeeSchedule,
    FixedPoint, Invoice, InvoiceStatus, InvoiceTotals, LineItem, RateTable, Recipient,
    RecipientDraft, RemittanceTransaction, TransferQuote, TransferStatus, compute_invoice_totals,
    compute_transfer_quote, line_item_total,
};

// Storage types
pub use crate::storage::{
    InMemoryRegistry, InMemoryTransactionLog, Keyed, Registry, StorageError, TransactionLog,
};

// Engine types
pub use crate::engine::{
    BackOffice, EngineError, IdSequence, InvoiceEditor, TransferWizard, WizardStep,
};

// Fixture data
pub use crate::fixtures::seeded_back_office;

// IO types
pub use crate::io::{
    IoError, RawRecipientRecord, read_recipients, write_invoice_summary,
    write_transaction_history,
};

// App types
pub use crate::app::{AppError, Command, parse_args, run};
