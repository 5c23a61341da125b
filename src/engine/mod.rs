pub mod back_office;
pub mod error;
pub mod ids;
pub mod invoice_editor;
pub mod wizard;

// Re-export commonly used types
pub use back_office::BackOffice;
pub use error::EngineError;
pub use ids::IdSequence;
pub use invoice_editor::InvoiceEditor;
pub use wizard::{TransferWizard, WizardStep};
