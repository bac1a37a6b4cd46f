//! Monetary amounts.

use serde::{Deserialize, Serialize};

/// Currency used for every listing on the marketplace.
pub const MARKETPLACE_CURRENCY: &str = "JPY";

/// Whole-unit amount paired with an ISO 4217 currency code.
///
/// Yen has no minor unit, so amounts are stored as whole integers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    pub amount: u64,
    pub currency: String,
}

impl Money {
    /// Amount in the marketplace currency.
    ///
    /// # Examples
    /// ```
    /// use freemarket::domain::Money;
    ///
    /// let price = Money::jpy(8_500);
    /// assert_eq!(price.currency, "JPY");
    /// ```
    pub fn jpy(amount: u64) -> Self {
        Self {
            amount,
            currency: MARKETPLACE_CURRENCY.to_owned(),
        }
    }
}
