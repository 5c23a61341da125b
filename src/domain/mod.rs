pub mod amount;
pub mod currency;
pub mod customer;
pub mod error;
pub mod invoice;
pub mod operations;
pub mod rates;
pub mod recipient;
pub mod transaction;

// Re-export commonly used types
pub use amount::{AmountType, FixedPoint};
pub use currency::Currency;
pub use customer::{Customer, CustomerDraft};
pub use error::DomainError;
pub use invoice::{Invoice, InvoiceStatus, InvoiceTotals, LineItem};
pub use operations::{
    TransferQuote, compute_invoice_totals, compute_transfer_quote, line_item_total,
};
pub use rates::{ExchangeRate, FeeSchedule, RateTable};
pub use recipient::{Recipient, RecipientDraft};
pub use transaction::{RemittanceTransaction, TransferStatus};
