use tracing::{debug, warn};

use super::error::EngineError;
use super::ids::IdSequence;
use crate::domain::{
    AmountType, Currency, Customer, CustomerDraft, Invoice, RateTable, Recipient, RecipientDraft,
    RemittanceTransaction, TransferQuote, compute_transfer_quote,
};
use crate::storage::{InMemoryRegistry, InMemoryTransactionLog, Registry, TransactionLog};

/// One back-office session: registries, the transaction history, and the
/// static rate table.
///
/// A `BackOffice` is the unit of isolation: one instance per user
/// session, instances share nothing, and all state is lost when the value
/// is dropped.
pub struct BackOffice<A: AmountType> {
    recipients: InMemoryRegistry<Recipient>,
    customers: InMemoryRegistry<Customer>,
    invoices: InMemoryRegistry<Invoice<A>>,
    transactions: InMemoryTransactionLog<A>,
    rates: RateTable<A>,
    current_date: String,
    recipient_ids: IdSequence,
    customer_ids: IdSequence,
    invoice_ids: IdSequence,
    transaction_ids: IdSequence,
    tracking_counter: u64,
}

impl<A: AmountType> BackOffice<A> {
    /// Create an empty back office over a rate table.
    ///
    /// `current_date` stamps new transactions; the clock is an input here,
    /// not something the engine reads on its own.
    pub fn new(rates: RateTable<A>, current_date: &str) -> Self {
        Self {
            recipients: InMemoryRegistry::new(),
            customers: InMemoryRegistry::new(),
            invoices: InMemoryRegistry::new(),
            transactions: InMemoryTransactionLog::new(),
            rates,
            current_date: current_date.to_string(),
            recipient_ids: IdSequence::new("RCP", 3),
            customer_ids: IdSequence::new("CUST", 3),
            invoice_ids: IdSequence::new("INV-2024-", 3),
            transaction_ids: IdSequence::new("TXN", 3),
            tracking_counter: 0,
        }
    }

    // --- recipients ---

    /// Validate a draft and store it under a freshly assigned id
    pub fn add_recipient(&mut self, draft: RecipientDraft) -> Result<Recipient, EngineError> {
        draft.validate()?;

        let id = self.recipient_ids.next_id();
        let recipient = draft.into_recipient(id);
        debug!(id = %recipient.id, name = %recipient.name, "Adding recipient");

        self.recipients.create(recipient.clone())?;
        Ok(recipient)
    }

    /// Replace an existing recipient
    pub fn update_recipient(&mut self, recipient: Recipient) -> Result<(), EngineError> {
        if !self.recipients.contains(&recipient.id) {
            return Err(EngineError::RecipientNotFound(recipient.id));
        }

        debug!(id = %recipient.id, "Updating recipient");
        self.recipients.update(recipient)?;
        Ok(())
    }

    pub fn recipient(&self, id: &str) -> Option<Recipient> {
        self.recipients.get(id)
    }

    pub fn recipients(&self) -> Vec<Recipient> {
        self.recipients.all()
    }

    // --- customers ---

    pub fn add_customer(&mut self, draft: CustomerDraft) -> Result<Customer, EngineError> {
        draft.validate()?;

        let id = self.customer_ids.next_id();
        let customer = draft.into_customer(id);
        debug!(id = %customer.id, name = %customer.name, "Adding customer");

        self.customers.create(customer.clone())?;
        Ok(customer)
    }

    pub fn update_customer(&mut self, customer: Customer) -> Result<(), EngineError> {
        if !self.customers.contains(&customer.id) {
            return Err(EngineError::CustomerNotFound(customer.id));
        }

        debug!(id = %customer.id, "Updating customer");
        self.customers.update(customer)?;
        Ok(())
    }

    pub fn customer(&self, id: &str) -> Option<Customer> {
        self.customers.get(id)
    }

    pub fn customers(&self) -> Vec<Customer> {
        self.customers.all()
    }

    // --- invoices ---

    /// Store an invoice exactly as constructed. Totals are NOT rechecked
    /// here; only the editing flow keeps amount = subtotal + tax consistent.
    pub fn create_invoice(&mut self, invoice: Invoice<A>) -> Result<(), EngineError> {
        debug!(id = %invoice.id, customer = %invoice.customer_id, "Creating invoice");
        self.invoices.create(invoice)?;
        Ok(())
    }

    pub fn update_invoice(&mut self, invoice: Invoice<A>) -> Result<(), EngineError> {
        if !self.invoices.contains(&invoice.id) {
            return Err(EngineError::InvoiceNotFound(invoice.id));
        }

        debug!(id = %invoice.id, "Updating invoice");
        self.invoices.update(invoice)?;
        Ok(())
    }

    pub fn invoice(&self, id: &str) -> Option<Invoice<A>> {
        self.invoices.get(id)
    }

    pub fn invoices(&self) -> Vec<Invoice<A>> {
        self.invoices.all()
    }

    pub fn next_invoice_id(&mut self) -> String {
        self.invoice_ids.next_id()
    }

    // --- transfers ---

    /// Quote a raw currency pair. An unconfigured pair degrades to the
    /// zeroed quote; it is logged because nothing else makes it visible.
    pub fn quote_pair(
        &self,
        send_amount: A,
        from: Currency,
        to: Currency,
    ) -> Result<TransferQuote<A>, EngineError> {
        let quote = compute_transfer_quote(&self.rates, send_amount, from, to)?;

        if quote.is_zeroed() {
            warn!(%from, %to, "No exchange rate configured for pair; quote is zeroed");
        }

        Ok(quote)
    }

    /// Quote a transfer to a stored recipient, paid out in the
    /// recipient's currency
    pub fn quote_for_recipient(
        &self,
        send_amount: A,
        from: Currency,
        recipient_id: &str,
    ) -> Result<TransferQuote<A>, EngineError> {
        let recipient = self
            .recipients
            .get(recipient_id)
            .ok_or_else(|| EngineError::RecipientNotFound(recipient_id.to_string()))?;

        self.quote_pair(send_amount, from, recipient.currency)
    }

    /// Append a transaction to the history. Records are immutable once
    /// appended; statuses never transition afterwards.
    pub fn append_transaction(&mut self, tx: RemittanceTransaction<A>) {
        debug!(id = %tx.id, status = %tx.status, "Appending transaction");
        self.transactions.append(tx);
    }

    pub fn transaction(&self, id: &str) -> Option<RemittanceTransaction<A>> {
        self.transactions.get(id)
    }

    pub fn transactions(&self) -> Vec<RemittanceTransaction<A>> {
        self.transactions.all()
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn next_transaction_id(&mut self) -> String {
        self.transaction_ids.next_id()
    }

    /// Fabricate a tracking number. Deterministic counter spreading keeps
    /// the numbers looking like the seeded ones without a randomness source.
    pub fn next_tracking_number(&mut self) -> String {
        self.tracking_counter += 1;
        let spread = (self.tracking_counter as u128 * 4_821_907_365) % 10_000_000_000;
        format!("TRK{:010}", spread)
    }

    /// Direct view of the invoice registry, for report export
    pub fn invoice_registry(&self) -> &InMemoryRegistry<Invoice<A>> {
        &self.invoices
    }

    /// Direct view of the transaction history, for report export
    pub fn transaction_log(&self) -> &InMemoryTransactionLog<A> {
        &self.transactions
    }

    pub fn rates(&self) -> &RateTable<A> {
        &self.rates
    }

    pub fn current_date(&self) -> &str {
        &self.current_date
    }

    /// Re-anchor the id sequences after seeding records with explicit ids
    pub(crate) fn resume_sequences(
        &mut self,
        next_recipient: u64,
        next_customer: u64,
        next_invoice: u64,
        next_transaction: u64,
    ) {
        self.recipient_ids = IdSequence::starting_at("RCP", 3, next_recipient);
        self.customer_ids = IdSequence::starting_at("CUST", 3, next_customer);
        self.invoice_ids = IdSequence::starting_at("INV-2024-", 3, next_invoice);
        self.transaction_ids = IdSequence::starting_at("TXN", 3, next_transaction);
        self.tracking_counter = next_transaction.saturating_sub(1);
    }
}
