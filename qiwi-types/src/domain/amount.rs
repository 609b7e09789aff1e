//! Monetary amount as reported by the bill API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::error::ModelError;

/// Currency code plus an exact decimal value.
///
/// The value travels as a string on the wire (`"100.00"`) and is kept as a
/// `Decimal`, so its scale survives a parse/serialize cycle unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    pub currency: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub value: Decimal,
}

impl Amount {
    /// Builds an amount for an outgoing request. The currency code is uppercased.
    pub fn new(value: Decimal, currency: &str) -> Self {
        Self {
            currency: currency.to_uppercase(),
            value,
        }
    }

    /// Reads the nested `amount` object of a bill or refund payload.
    pub fn prepare(data: &Value) -> Result<Self, ModelError> {
        let raw = data.get("amount").ok_or(ModelError::MissingField("amount"))?;
        Amount::deserialize(raw).map_err(ModelError::invalid("amount"))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.currency)
    }
}
