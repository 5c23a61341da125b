use super::amount::AmountType;
use super::currency::Currency;
use super::error::DomainError;
use super::invoice::{InvoiceTotals, LineItem};
use super::rates::RateTable;

/// Derived figures for one prospective transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransferQuote<A: AmountType> {
    pub exchange_rate: A,
    pub fees: A,
    pub receive_amount: A,
    pub total_cost: A,
}

impl<A: AmountType> TransferQuote<A> {
    /// The all-zero quote produced when no rate pair is configured
    pub fn zeroed() -> Self {
        Self {
            exchange_rate: A::zero(),
            fees: A::zero(),
            receive_amount: A::zero(),
            total_cost: A::zero(),
        }
    }

    pub fn is_zeroed(&self) -> bool {
        *self == Self::zeroed()
    }
}

/// Compute the quote for sending `send_amount` of `from` to a recipient
/// paid in `to`:
///
///   receive_amount = send_amount * rate
///   fees           = fixed + send_amount * percentage / 100
///   total_cost     = send_amount + fees
///
/// An unconfigured (from, to) pair yields the zeroed quote rather than an
/// error; callers display the zeros as-is.
pub fn compute_transfer_quote<A: AmountType>(
    table: &RateTable<A>,
    send_amount: A,
    from: Currency,
    to: Currency,
) -> Result<TransferQuote<A>, DomainError> {
    if !send_amount.is_positive() {
        return Err(DomainError::NonPositiveAmount);
    }

    let Some(entry) = table.lookup(from, to) else {
        return Ok(TransferQuote::zeroed());
    };

    let receive_amount = send_amount
        .checked_mul(entry.rate)
        .ok_or(DomainError::Overflow)?;

    let percentage_fee = send_amount
        .checked_percent(entry.fees.percentage)
        .ok_or(DomainError::Overflow)?;

    let fees = entry
        .fees
        .fixed
        .checked_add(percentage_fee)
        .ok_or(DomainError::Overflow)?;

    let total_cost = send_amount.checked_add(fees).ok_or(DomainError::Overflow)?;

    Ok(TransferQuote {
        exchange_rate: entry.rate,
        fees,
        receive_amount,
        total_cost,
    })
}

/// Total for a single line item: quantity * unit_price
pub fn line_item_total<A: AmountType>(item: &LineItem<A>) -> Result<A, DomainError> {
    item.unit_price
        .checked_mul(A::from_int(item.quantity as i64))
        .ok_or(DomainError::Overflow)
}

/// Derive invoice totals from line items and a tax rate percentage:
///
///   subtotal   = sum(quantity * unit_price)
///   tax_amount = subtotal * tax_rate / 100
///   amount     = subtotal + tax_amount
pub fn compute_invoice_totals<A: AmountType>(
    items: &[LineItem<A>],
    tax_rate: A,
) -> Result<InvoiceTotals<A>, DomainError> {
    let mut subtotal = A::zero();
    for item in items {
        subtotal = subtotal
            .checked_add(line_item_total(item)?)
            .ok_or(DomainError::Overflow)?;
    }

    let tax_amount = subtotal
        .checked_percent(tax_rate)
        .ok_or(DomainError::Overflow)?;

    let amount = subtotal
        .checked_add(tax_amount)
        .ok_or(DomainError::Overflow)?;

    Ok(InvoiceTotals {
        subtotal,
        tax_amount,
        amount,
    })
}
