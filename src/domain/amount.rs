use std::fmt;
use std::ops::{Add, Sub};

use super::error::DomainError;

/// Trait representing a monetary amount or rate with fixed precision
pub trait AmountType:
    Copy + Ord + Add<Output = Self> + Sub<Output = Self> + Default + Send + Sync + fmt::Debug
{
    /// Parse from decimal string (e.g., "17.15")
    fn from_decimal_str(s: &str) -> Result<Self, DomainError>;

    /// Convert from a whole number of currency units
    fn from_int(value: i64) -> Self;

    /// Convert to decimal string with 4 decimal places
    fn to_decimal_string(&self) -> String;

    /// Convert to display string with 2 decimal places (truncating)
    fn to_money_string(&self) -> String;

    /// Checked addition, returns None on overflow
    fn checked_add(&self, other: Self) -> Option<Self>;

    /// Checked subtraction, returns None on underflow
    fn checked_sub(&self, other: Self) -> Option<Self>;

    /// Checked fixed-point multiplication (amount x rate), None on overflow
    fn checked_mul(&self, other: Self) -> Option<Self>;

    /// Checked percentage: self x pct / 100, None on overflow
    fn checked_percent(&self, pct: Self) -> Option<Self>;

    /// Zero value
    fn zero() -> Self;

    /// True if strictly greater than zero
    fn is_positive(&self) -> bool {
        *self > Self::zero()
    }
}

/// Fixed-point decimal representation using i64 (multiply by 10,000)
/// Represents amounts and rates with 4 decimal places of precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct FixedPoint(i64);

impl FixedPoint {
    const SCALE: i64 = 10_000;

    /// Create from raw scaled value (for internal use)
    pub fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Get raw scaled value
    pub fn raw(&self) -> i64 {
        self.0
    }
}

impl AmountType for FixedPoint {
    fn from_decimal_str(s: &str) -> Result<Self, DomainError> {
        let s = s.trim();

        // Handle negative sign
        let (is_negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        // Split on decimal point
        let parts: Vec<&str> = s.split('.').collect();

        let (integer_part, decimal_part) = match parts.len() {
            1 => (parts[0], ""),
            2 => (parts[0], parts[1]),
            _ => return Err(DomainError::InvalidAmount),
        };

        // Validate decimal places (max 4)
        if decimal_part.len() > 4 {
            return Err(DomainError::InvalidAmount);
        }

        // Parse integer part
        let integer: i64 = integer_part
            .parse()
            .map_err(|_| DomainError::InvalidAmount)?;

        // Parse decimal part and pad to 4 digits
        let decimal_str = format!("{:0<4}", decimal_part);
        let decimal: i64 = decimal_str
            .parse()
            .map_err(|_| DomainError::InvalidAmount)?;

        // Combine: integer * 10000 + decimal
        let scaled = integer
            .checked_mul(Self::SCALE)
            .and_then(|v| v.checked_add(decimal))
            .ok_or(DomainError::Overflow)?;

        let result = if is_negative { -scaled } else { scaled };

        Ok(Self(result))
    }

    fn from_int(value: i64) -> Self {
        Self(value.saturating_mul(Self::SCALE))
    }

    fn to_decimal_string(&self) -> String {
        let abs_value = self.0.abs();
        let integer_part = abs_value / Self::SCALE;
        let decimal_part = abs_value % Self::SCALE;

        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:04}", sign, integer_part, decimal_part)
    }

    fn to_money_string(&self) -> String {
        // Truncates rather than rounds
        let abs_value = self.0.abs();
        let integer_part = abs_value / Self::SCALE;
        let cents = (abs_value % Self::SCALE) / 100;

        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, integer_part, cents)
    }

    fn checked_add(&self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    fn checked_sub(&self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    fn checked_mul(&self, other: Self) -> Option<Self> {
        // Widen to i128 so intermediate products cannot overflow
        let product = (self.0 as i128 * other.0 as i128) / Self::SCALE as i128;
        i64::try_from(product).ok().map(Self)
    }

    fn checked_percent(&self, pct: Self) -> Option<Self> {
        let product = (self.0 as i128 * pct.0 as i128) / Self::SCALE as i128 / 100;
        i64::try_from(product).ok().map(Self)
    }

    fn zero() -> Self {
        Self(0)
    }
}

impl Add for FixedPoint {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for FixedPoint {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl fmt::Display for FixedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_money_string())
    }
}
