//! Currency

use std::num::NonZeroU32;

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{AUD, CAD, Currency, EUR, GBP, JPY, NZD, USD},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors related to currency lookup and display.
#[derive(Debug, Error, PartialEq)]
pub enum CurrencyError {
    /// The ISO code is not one the engine can display.
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// A major-unit amount does not fit in minor units.
    #[error("Amount {0} is out of range for {1}")]
    OutOfRange(Decimal, String),
}

/// Currency details supplied by the tour provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyInfo {
    /// ISO 4217 alpha code (e.g. "CAD")
    #[serde(rename = "currency")]
    pub iso_code: String,

    /// Divisor converting minor units into major units (e.g. 100)
    #[serde(rename = "currencyOffset")]
    pub minor_unit_offset: NonZeroU32,
}

impl CurrencyInfo {
    /// Creates currency details from an ISO code and a minor-unit divisor.
    pub fn new(iso_code: impl Into<String>, minor_unit_offset: NonZeroU32) -> Self {
        Self {
            iso_code: iso_code.into(),
            minor_unit_offset,
        }
    }

    /// Converts an amount in minor units into major units.
    pub fn to_major(&self, minor: i64) -> Decimal {
        minor_to_major(minor, self.minor_unit_offset)
    }

    /// Looks up the ISO currency for display.
    ///
    /// # Errors
    ///
    /// Returns [`CurrencyError::UnknownCurrency`] if the code is not supported.
    pub fn currency(&self) -> Result<&'static Currency, CurrencyError> {
        find_currency(&self.iso_code)
    }

    /// Renders a major-unit amount as currency text.
    ///
    /// # Errors
    ///
    /// Returns a [`CurrencyError`] if the code is unknown or the amount does not
    /// fit in minor units.
    pub fn format(&self, price: Decimal) -> Result<String, CurrencyError> {
        let currency = self.currency()?;

        let minor = price
            .checked_mul(Decimal::from(self.minor_unit_offset.get()))
            .and_then(|value| value.round_dp(0).to_i64())
            .ok_or_else(|| CurrencyError::OutOfRange(price, self.iso_code.clone()))?;

        Ok(format!("{}", Money::from_minor(minor, currency)))
    }
}

impl Default for CurrencyInfo {
    fn default() -> Self {
        Self::new(CAD.iso_alpha_code, NonZeroU32::new(100).unwrap_or(NonZeroU32::MIN))
    }
}

/// Divides a minor-unit amount by the minor-unit divisor.
pub fn minor_to_major(minor: i64, minor_unit_offset: NonZeroU32) -> Decimal {
    Decimal::from(minor) / Decimal::from(minor_unit_offset.get())
}

/// Finds a supported ISO currency by alpha code, ignoring case.
///
/// # Errors
///
/// Returns [`CurrencyError::UnknownCurrency`] if the code is not supported.
pub fn find_currency(code: &str) -> Result<&'static Currency, CurrencyError> {
    let currency = match code.trim().to_ascii_uppercase().as_str() {
        "AUD" => AUD,
        "CAD" => CAD,
        "EUR" => EUR,
        "GBP" => GBP,
        "JPY" => JPY,
        "NZD" => NZD,
        "USD" => USD,
        _ => return Err(CurrencyError::UnknownCurrency(code.to_string())),
    };

    Ok(currency)
}
