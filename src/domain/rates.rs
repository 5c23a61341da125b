use super::amount::AmountType;
use super::currency::Currency;

/// Fee schedule for a currency pair: flat fee plus a percentage of the
/// send amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeSchedule<A: AmountType> {
    pub fixed: A,
    /// Percentage of the send amount, in percent (0.4 means 0.4%)
    pub percentage: A,
}

/// Static conversion factor for one (from, to) currency pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExchangeRate<A: AmountType> {
    pub from: Currency,
    pub to: Currency,
    pub rate: A,
    pub fees: FeeSchedule<A>,
}

/// Read-only lookup table of exchange rates.
///
/// Built once at startup and never updated at runtime. Lookup is by exact
/// (from, to) pair; there is no triangulation through a base currency.
#[derive(Debug, Clone, Default)]
pub struct RateTable<A: AmountType> {
    rates: Vec<ExchangeRate<A>>,
}

impl<A: AmountType> RateTable<A> {
    pub fn new(rates: Vec<ExchangeRate<A>>) -> Self {
        Self { rates }
    }

    /// Exact-pair lookup; None when the pair is not configured
    pub fn lookup(&self, from: Currency, to: Currency) -> Option<&ExchangeRate<A>> {
        self.rates.iter().find(|r| r.from == from && r.to == to)
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExchangeRate<A>> {
        self.rates.iter()
    }
}
