use tracing::debug;

use super::back_office::BackOffice;
use super::error::EngineError;
use crate::domain::{
    AmountType, Currency, Invoice, InvoiceStatus, LineItem, compute_invoice_totals,
};

/// Editing session for one invoice, mirroring the edit modal.
///
/// Every mutation recomputes subtotal, tax and amount synchronously. This
/// is the only place the `amount = subtotal + tax_amount` invariant is
/// enforced; invoices stored through `BackOffice::create_invoice` directly
/// are taken at face value.
#[derive(Debug, Clone)]
pub struct InvoiceEditor<A: AmountType> {
    invoice: Invoice<A>,
    is_new: bool,
}

impl<A: AmountType> InvoiceEditor<A> {
    /// Start a new invoice for a customer; the id is assigned immediately
    pub fn create(
        desk: &mut BackOffice<A>,
        customer_id: &str,
        currency: Currency,
        due_date: &str,
    ) -> Result<Self, EngineError> {
        if desk.customer(customer_id).is_none() {
            return Err(EngineError::CustomerNotFound(customer_id.to_string()));
        }

        let invoice = Invoice {
            id: desk.next_invoice_id(),
            customer_id: customer_id.to_string(),
            issued_date: desk.current_date().to_string(),
            due_date: due_date.to_string(),
            status: InvoiceStatus::Draft,
            currency,
            subtotal: A::zero(),
            tax_rate: A::zero(),
            tax_amount: A::zero(),
            amount: A::zero(),
            line_items: Vec::new(),
        };

        debug!(id = %invoice.id, customer = %invoice.customer_id, "Opened new invoice");
        Ok(Self {
            invoice,
            is_new: true,
        })
    }

    /// Open an existing invoice for editing. Totals are recomputed on
    /// open, so a record stored with inconsistent figures is repaired the
    /// moment it passes through the editor.
    pub fn open(desk: &BackOffice<A>, invoice_id: &str) -> Result<Self, EngineError> {
        let invoice = desk
            .invoice(invoice_id)
            .ok_or_else(|| EngineError::InvoiceNotFound(invoice_id.to_string()))?;

        let mut editor = Self {
            invoice,
            is_new: false,
        };
        editor.recompute()?;
        Ok(editor)
    }

    pub fn invoice(&self) -> &Invoice<A> {
        &self.invoice
    }

    pub fn add_item(&mut self, item: LineItem<A>) -> Result<(), EngineError> {
        self.invoice.line_items.push(item);
        self.recompute()
    }

    pub fn update_item(&mut self, index: usize, item: LineItem<A>) -> Result<(), EngineError> {
        let slot = self
            .invoice
            .line_items
            .get_mut(index)
            .ok_or(EngineError::LineItemOutOfRange(index))?;
        *slot = item;
        self.recompute()
    }

    pub fn remove_item(&mut self, index: usize) -> Result<(), EngineError> {
        if index >= self.invoice.line_items.len() {
            return Err(EngineError::LineItemOutOfRange(index));
        }
        self.invoice.line_items.remove(index);
        self.recompute()
    }

    pub fn set_tax_rate(&mut self, tax_rate: A) -> Result<(), EngineError> {
        self.invoice.tax_rate = tax_rate;
        self.recompute()
    }

    /// Status is a display field; changing it does not touch the totals
    pub fn set_status(&mut self, status: InvoiceStatus) {
        self.invoice.status = status;
    }

    pub fn set_due_date(&mut self, due_date: &str) {
        self.invoice.due_date = due_date.to_string();
    }

    /// Validate the header and store the invoice (create or update)
    pub fn save(self, desk: &mut BackOffice<A>) -> Result<Invoice<A>, EngineError> {
        if self.invoice.due_date.trim().is_empty() {
            return Err(EngineError::Domain(
                crate::domain::DomainError::MissingField("due_date"),
            ));
        }
        if desk.customer(&self.invoice.customer_id).is_none() {
            return Err(EngineError::CustomerNotFound(
                self.invoice.customer_id.clone(),
            ));
        }

        debug!(id = %self.invoice.id, is_new = self.is_new, "Saving invoice");
        if self.is_new {
            desk.create_invoice(self.invoice.clone())?;
        } else {
            desk.update_invoice(self.invoice.clone())?;
        }
        Ok(self.invoice)
    }

    fn recompute(&mut self) -> Result<(), EngineError> {
        let totals = compute_invoice_totals(&self.invoice.line_items, self.invoice.tax_rate)?;
        self.invoice.set_totals(totals);
        Ok(())
    }
}
