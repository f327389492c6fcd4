use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::Currency;
use crate::error::{CurrencyError, CurrencyResult};

/// A market identified by its base and counter currency (e.g., BTC/USD)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyPair {
    /// Currency being bought or sold
    pub base: Currency,
    /// Currency the base is priced in
    pub counter: Currency,
}

impl CurrencyPair {
    pub fn new(base: Currency, counter: Currency) -> Self {
        Self { base, counter }
    }

    /// Build a pair from raw exchange codes, normalizing both sides
    pub fn from_codes(base: &str, counter: &str) -> CurrencyResult<Self> {
        Ok(Self::new(Currency::new(base)?, Currency::new(counter)?))
    }

    /// Common crypto pairs
    pub fn btc_usd() -> Self {
        Self::new(Currency::btc(), Currency::usd())
    }

    pub fn eth_usd() -> Self {
        Self::new(Currency::eth(), Currency::usd())
    }

    pub fn btc_aud() -> Self {
        Self::new(Currency::btc(), Currency::aud())
    }
}

impl std::fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.base, self.counter)
    }
}

impl FromStr for CurrencyPair {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (base, counter) = s
            .split_once('/')
            .ok_or_else(|| CurrencyError::InvalidPair(s.to_string()))?;
        Self::from_codes(base, counter)
    }
}

impl TryFrom<String> for CurrencyPair {
    type Error = CurrencyError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<CurrencyPair> for String {
    fn from(pair: CurrencyPair) -> Self {
        pair.to_string()
    }
}
