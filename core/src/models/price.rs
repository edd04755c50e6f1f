// core/src/models/price.rs

//! Fixed-point money amount.
//!
//! Prices are held as integer minor units (cents) so that arithmetic and
//! equality never go through binary floating point. On the wire a price is a
//! plain JSON number (`9.99`). Incoming values are read as exact decimals and
//! rounded half away from zero to two places (`1.005` -> `1.01`).

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

const MINOR_UNIT_SCALE: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(i64);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PriceParseError {
  #[error("invalid decimal amount: {0:?}")]
  Invalid(String),

  #[error("amount out of range: {0}")]
  OutOfRange(String),
}

impl Price {
  pub const fn from_cents(cents: i64) -> Self {
    Price(cents)
  }

  pub const fn cents(self) -> i64 {
    self.0
  }

  /// Exact decimal view, always with two fractional digits.
  pub fn as_decimal(self) -> Decimal {
    Decimal::new(self.0, MINOR_UNIT_SCALE)
  }

  /// Rounds `value` half away from zero to whole cents.
  pub fn from_decimal(value: Decimal) -> Result<Self, PriceParseError> {
    let mut rounded = value.round_dp_with_strategy(MINOR_UNIT_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MINOR_UNIT_SCALE);
    i64::try_from(rounded.mantissa())
      .map(Price)
      .map_err(|_| PriceParseError::OutOfRange(value.to_string()))
  }

  /// Lossy view for serialization; exact for any amount below 2^53 cents.
  pub fn as_f64(self) -> f64 {
    self.0 as f64 / 100.0
  }
}

impl FromStr for Price {
  type Err = PriceParseError;

  fn from_str(raw: &str) -> Result<Self, Self::Err> {
    let value = Decimal::from_str(raw.trim()).map_err(|_| PriceParseError::Invalid(raw.to_string()))?;
    Price::from_decimal(value)
  }
}

impl fmt::Display for Price {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_decimal())
  }
}

impl Serialize for Price {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(self.as_f64())
  }
}

// JSON numbers reach `Decimal` with their original digits (arbitrary precision),
// so `1.0049999999999999` and `"1.0049999999999999"` round the same way.
impl<'de> Deserialize<'de> for Price {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let value = rust_decimal::serde::arbitrary_precision::deserialize(deserializer)?;
    Price::from_decimal(value).map_err(serde::de::Error::custom)
  }
}
