use super::error::StorageError;
use crate::domain::{AmountType, Customer, Invoice, Recipient, RemittanceTransaction};

/// Anything stored in a registry under a string id
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Recipient {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Customer {
    fn key(&self) -> &str {
        &self.id
    }
}

impl<A: AmountType> Keyed for Invoice<A> {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Trait for id-keyed registries of back-office records.
///
/// Records are created and updated, never deleted; iteration preserves
/// insertion order because that is the order the lists are rendered in.
pub trait Registry<T: Keyed> {
    /// Insert a new record; the id must not already exist
    fn create(&mut self, record: T) -> Result<(), StorageError>;

    /// Replace an existing record under the same id
    fn update(&mut self, record: T) -> Result<(), StorageError>;

    /// Get a record by id (returns clone, not reference)
    fn get(&self, id: &str) -> Option<T>;

    /// Check if an id exists
    fn contains(&self, id: &str) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All records in insertion order
    fn all(&self) -> Vec<T>;
}

/// Trait for the remittance transaction history.
///
/// Append-only: records are immutable once inserted and there is no update
/// path for status transitions.
pub trait TransactionLog<A: AmountType> {
    /// Append a transaction record (immutable after insertion)
    fn append(&mut self, tx: RemittanceTransaction<A>);

    /// Get a transaction by id (returns clone, not reference)
    fn get(&self, id: &str) -> Option<RemittanceTransaction<A>>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All transactions in append order
    fn all(&self) -> Vec<RemittanceTransaction<A>>;
}
