use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{CurrencyError, CurrencyResult};

/// Alternate codes used by some venues, mapped to the commonly used code.
const COMMON_CODES: &[(&str, &str)] = &[
    ("XBT", "BTC"),
    ("XDG", "DOGE"),
    ("STR", "XLM"),
    ("BCC", "BCH"),
];

/// A normalized currency code (e.g., BTC, USD)
///
/// Codes are trimmed and uppercased on construction. When a currency is
/// known under several codes, the commonly used one is kept, so `"Xbt"`
/// and `"btc"` both become `BTC`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(String);

impl Currency {
    /// Normalize a raw code into its canonical form
    pub fn new(code: &str) -> CurrencyResult<Self> {
        let upper = code.trim().to_uppercase();
        if upper.is_empty() {
            return Err(CurrencyError::Empty);
        }

        let common = COMMON_CODES
            .iter()
            .find(|(alt, _)| *alt == upper)
            .map(|(_, common)| (*common).to_string())
            .unwrap_or(upper);

        Ok(Self(common))
    }

    /// Get the code as a string slice
    pub fn code(&self) -> &str {
        &self.0
    }

    // Well-known currencies

    pub fn btc() -> Self {
        Self("BTC".to_string())
    }

    pub fn eth() -> Self {
        Self("ETH".to_string())
    }

    pub fn usd() -> Self {
        Self("USD".to_string())
    }

    pub fn aud() -> Self {
        Self("AUD".to_string())
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Currency {
    type Error = CurrencyError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(&s)
    }
}

impl From<Currency> for String {
    fn from(c: Currency) -> Self {
        c.0
    }
}
