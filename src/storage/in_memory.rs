use std::collections::HashMap;

use super::error::StorageError;
use super::traits::{Keyed, Registry, TransactionLog};
use crate::domain::{AmountType, RemittanceTransaction};

/// In-memory registry backed by a HashMap plus an insertion-order index
#[derive(Debug, Clone)]
pub struct InMemoryRegistry<T: Keyed + Clone> {
    records: HashMap<String, T>,
    order: Vec<String>,
}

impl<T: Keyed + Clone> InMemoryRegistry<T> {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<T: Keyed + Clone> Default for InMemoryRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Keyed + Clone> Registry<T> for InMemoryRegistry<T> {
    fn create(&mut self, record: T) -> Result<(), StorageError> {
        let id = record.key().to_string();
        if self.records.contains_key(&id) {
            return Err(StorageError::DuplicateId(id));
        }

        self.order.push(id.clone());
        self.records.insert(id, record);
        Ok(())
    }

    fn update(&mut self, record: T) -> Result<(), StorageError> {
        let id = record.key().to_string();
        if !self.records.contains_key(&id) {
            return Err(StorageError::NotFound(id));
        }

        self.records.insert(id, record);
        Ok(())
    }

    fn get(&self, id: &str) -> Option<T> {
        self.records.get(id).cloned()
    }

    fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn all(&self) -> Vec<T> {
        self.order
            .iter()
            .filter_map(|id| self.records.get(id).cloned())
            .collect()
    }
}

/// Append-only in-memory transaction history
#[derive(Debug, Clone)]
pub struct InMemoryTransactionLog<A: AmountType> {
    transactions: Vec<RemittanceTransaction<A>>,
}

impl<A: AmountType> InMemoryTransactionLog<A> {
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
        }
    }
}

impl<A: AmountType> Default for InMemoryTransactionLog<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: AmountType> TransactionLog<A> for InMemoryTransactionLog<A> {
    fn append(&mut self, tx: RemittanceTransaction<A>) {
        self.transactions.push(tx);
    }

    fn get(&self, id: &str) -> Option<RemittanceTransaction<A>> {
        self.transactions.iter().find(|tx| tx.id == id).cloned()
    }

    fn len(&self) -> usize {
        self.transactions.len()
    }

    fn all(&self) -> Vec<RemittanceTransaction<A>> {
        self.transactions.clone()
    }
}
