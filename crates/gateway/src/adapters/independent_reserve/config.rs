use kestrel_core::CurrencyPair;
use serde::Deserialize;

/// Configuration for the Independent Reserve adapter
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    /// Pair assumed for records that do not carry their own currency codes,
    /// and the pair trade history is validated against
    pub default_pair: CurrencyPair,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            default_pair: CurrencyPair::btc_usd(),
        }
    }
}

impl AdapterConfig {
    pub fn with_default_pair(mut self, pair: CurrencyPair) -> Self {
        self.default_pair = pair;
        self
    }
}
