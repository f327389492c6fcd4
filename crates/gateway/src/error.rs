//! Error types for the gateway crate

use kestrel_core::{CurrencyError, CurrencyPair};
use thiserror::Error;

/// Adapter errors
///
/// Any of these aborts the whole translation; no partial result is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdapterError {
    /// The exchange reported an order type token missing from the mapping table
    #[error("Unknown order type: {0}")]
    UnknownOrderType(String),

    /// A record's currency codes differ from the pair the caller expects
    #[error("Currency mismatch: expected {expected}, base was {base}, counter was {counter}")]
    CurrencyMismatch {
        expected: CurrencyPair,
        base: String,
        counter: String,
    },

    #[error("Invalid currency: {0}")]
    InvalidCurrency(#[from] CurrencyError),

    #[error("Timestamp out of range: {0} ms")]
    InvalidTimestamp(i64),
}

pub type AdapterResult<T> = std::result::Result<T, AdapterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_message_carries_both_pairs() {
        let err = AdapterError::CurrencyMismatch {
            expected: CurrencyPair::btc_usd(),
            base: "Eth".to_string(),
            counter: "Usd".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "Currency mismatch: expected BTC/USD, base was Eth, counter was Usd"
        );
    }
}
