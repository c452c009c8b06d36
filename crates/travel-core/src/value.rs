//! Small structured records shared by flights, hotels and transfers.

use serde::{Deserialize, Serialize};

/// An amount in a currency, kept as the provider's decimal string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Money {
    pub amount: String,
    pub currency: String,
}

impl Money {
    pub fn new(amount: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            currency: currency.into(),
        }
    }
}

/// A postal address in the provider's field naming.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub city_name: String,
    pub country_code: String,
    pub state_code: String,
    pub postal_code: String,
    /// First street line.
    pub address: String,
}
