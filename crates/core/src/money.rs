//! Money: an amount in exactly one currency.
//!
//! Amounts are split into whole `units` and fractional `nanos` (10^-9 of a
//! unit) so prices never pass through floating point.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Canonical catalog currency.
pub const USD: &str = "USD";

/// Number of nanos in one whole unit.
pub const NANOS_PER_UNIT: i64 = 1_000_000_000;

/// A monetary amount in a single ISO 4217 currency.
///
/// Invariants (checked by [`Money::new`] and [`Money::validate`]):
/// - `nanos` is in `-999_999_999..=999_999_999`
/// - `units` and `nanos` never have opposite signs
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    pub currency_code: String,
    #[serde(default)]
    pub units: i64,
    #[serde(default)]
    pub nanos: i32,
}

impl Money {
    /// Build a validated amount.
    pub fn new(currency_code: impl Into<String>, units: i64, nanos: i32) -> DomainResult<Self> {
        let money = Self {
            currency_code: currency_code.into(),
            units,
            nanos,
        };
        money.validate()?;
        Ok(money)
    }

    /// Build a USD amount.
    pub fn usd(units: i64, nanos: i32) -> DomainResult<Self> {
        Self::new(USD, units, nanos)
    }

    /// Zero in the given currency.
    pub fn zero(currency_code: impl Into<String>) -> Self {
        Self {
            currency_code: currency_code.into(),
            units: 0,
            nanos: 0,
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.currency_code.trim().is_empty() {
            return Err(DomainError::validation("currency code cannot be empty"));
        }
        if i64::from(self.nanos).abs() >= NANOS_PER_UNIT {
            return Err(DomainError::validation(format!(
                "nanos out of range: {}",
                self.nanos
            )));
        }
        if (self.units > 0 && self.nanos < 0) || (self.units < 0 && self.nanos > 0) {
            return Err(DomainError::validation(format!(
                "units ({}) and nanos ({}) have opposite signs",
                self.units, self.nanos
            )));
        }
        Ok(())
    }

    pub fn is_zero(&self) -> bool {
        self.units == 0 && self.nanos == 0
    }

    /// Whether this amount is already denominated in `currency_code`.
    pub fn is_in(&self, currency_code: &str) -> bool {
        self.currency_code == currency_code
    }

    /// The whole amount expressed in nanos.
    pub fn total_nanos(&self) -> i128 {
        i128::from(self.units) * i128::from(NANOS_PER_UNIT) + i128::from(self.nanos)
    }

    /// Inverse of [`Money::total_nanos`]; the sign rule holds by construction.
    pub fn from_total_nanos(currency_code: impl Into<String>, total: i128) -> DomainResult<Self> {
        let per_unit = i128::from(NANOS_PER_UNIT);
        let units = i64::try_from(total / per_unit)
            .map_err(|_| DomainError::validation("amount overflows i64 units"))?;
        // |total % per_unit| < 10^9 always fits in i32.
        let nanos = (total % per_unit) as i32;
        Self::new(currency_code, units, nanos)
    }
}

impl core::fmt::Display for Money {
    /// Two decimal places, truncated: `9.00 EUR`.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let sign = if self.units < 0 || self.nanos < 0 { "-" } else { "" };
        let cents = (i64::from(self.nanos) / 10_000_000).abs();
        write!(
            f,
            "{sign}{}.{cents:02} {}",
            self.units.abs(),
            self.currency_code
        )
    }
}
