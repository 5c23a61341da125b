pub mod error;
pub mod in_memory;
pub mod traits;

// Re-export commonly used types
pub use error::StorageError;
pub use in_memory::{InMemoryRegistry, InMemoryTransactionLog};
pub use traits::{Keyed, Registry, TransactionLog};
