use std::fmt;
use std::str::FromStr;

use super::amount::AmountType;
use super::currency::Currency;
use super::error::DomainError;

/// A single billable entry on an invoice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem<A: AmountType> {
    pub description: String,
    pub quantity: u32,
    pub unit_price: A,
}

impl<A: AmountType> LineItem<A> {
    pub fn new(description: &str, quantity: u32, unit_price: A) -> Self {
        Self {
            description: description.to_string(),
            quantity,
            unit_price,
        }
    }
}

/// Billing status of an invoice.
///
/// `Discounted` and `PaymentPlan` carry no workflow of their own; they are
/// display states assigned when the invoice is created or edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceStatus {
    Draft,
    Pending,
    Paid,
    Overdue,
    Discounted,
    PaymentPlan,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Overdue => "overdue",
            Self::Discounted => "discounted",
            Self::PaymentPlan => "payment-plan",
        }
    }
}

impl FromStr for InvoiceStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            "overdue" => Ok(Self::Overdue),
            "discounted" => Ok(Self::Discounted),
            "payment-plan" => Ok(Self::PaymentPlan),
            _ => Err(DomainError::MissingField("status")),
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived totals for an invoice: `amount = subtotal + tax_amount`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InvoiceTotals<A: AmountType> {
    pub subtotal: A,
    pub tax_amount: A,
    pub amount: A,
}

/// Invoice header plus line items.
///
/// `amount` is expected to equal `subtotal + tax_amount`, but nothing here
/// checks it: the invariant is maintained by the editing flow only, and a
/// directly constructed invoice may carry inconsistent figures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice<A: AmountType> {
    pub id: String,
    pub customer_id: String,
    pub issued_date: String,
    pub due_date: String,
    pub status: InvoiceStatus,
    pub currency: Currency,
    pub subtotal: A,
    /// Tax rate in percent (e.g. 8.25 for 8.25%)
    pub tax_rate: A,
    pub tax_amount: A,
    pub amount: A,
    pub line_items: Vec<LineItem<A>>,
}

impl<A: AmountType> Invoice<A> {
    /// Apply computed totals to the header fields
    pub fn set_totals(&mut self, totals: InvoiceTotals<A>) {
        self.subtotal = totals.subtotal;
        self.tax_amount = totals.tax_amount;
        self.amount = totals.amount;
    }
}
