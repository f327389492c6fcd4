//! Currency pair checks for records tied to an assumed market

use kestrel_core::CurrencyPair;

use crate::error::{AdapterError, AdapterResult};

/// Check a record's raw currency codes against the pair the caller expects
///
/// Raw codes are normalized first, so the exchange's `Xbt`/`Usd` matches
/// BTC/USD. On mismatch the raw codes are reported verbatim.
pub fn validate_pair(
    raw_base: &str,
    raw_counter: &str,
    expected: &CurrencyPair,
) -> AdapterResult<CurrencyPair> {
    let actual = CurrencyPair::from_codes(raw_base, raw_counter)?;

    if &actual != expected {
        return Err(AdapterError::CurrencyMismatch {
            expected: expected.clone(),
            base: raw_base.to_string(),
            counter: raw_counter.to_string(),
        });
    }

    Ok(actual)
}
