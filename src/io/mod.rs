pub mod csv_reader;
pub mod csv_writer;
pub mod error;

// Re-export commonly used types
pub use csv_reader::{RawRecipientRecord, read_recipients};
pub use csv_writer::{write_invoice_summary, write_transaction_history};
pub use error::IoError;
