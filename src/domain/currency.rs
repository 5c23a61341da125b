use std::fmt;
use std::str::FromStr;

use super::error::DomainError;

/// ISO-4217 currency codes known to the back office.
///
/// The set mirrors the seeded rate table plus JPY, which has recipients but
/// no configured rate pair (quotes against it degrade to zero).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Mxn,
    Inr,
    Php,
    Ngn,
    Jpy,
}

impl Currency {
    /// Currency code as it appears in fixtures and exports
    pub fn code(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Mxn => "MXN",
            Self::Inr => "INR",
            Self::Php => "PHP",
            Self::Ngn => "NGN",
            Self::Jpy => "JPY",
        }
    }
}

impl FromStr for Currency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            "GBP" => Ok(Self::Gbp),
            "MXN" => Ok(Self::Mxn),
            "INR" => Ok(Self::Inr),
            "PHP" => Ok(Self::Php),
            "NGN" => Ok(Self::Ngn),
            "JPY" => Ok(Self::Jpy),
            other => Err(DomainError::UnknownCurrency(other.to_string())),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
