//! Order type token to side mapping

use kestrel_core::Side;

use crate::error::{AdapterError, AdapterResult};

/// Recognized order type tokens. Matching is exact and case-sensitive.
const ORDER_TYPES: &[(&str, Side)] = &[
    ("LimitOffer", Side::Sell),
    ("MarketOffer", Side::Sell),
    ("LimitBid", Side::Buy),
    ("MarketBid", Side::Buy),
];

/// Classify an Independent Reserve order type token as Buy or Sell
///
/// An unknown token means the exchange introduced a new order type or this
/// table is stale; it is returned as `UnknownOrderType` for the caller.
pub fn classify_order_type(token: &str) -> AdapterResult<Side> {
    ORDER_TYPES
        .iter()
        .find(|(known, _)| *known == token)
        .map(|(_, side)| *side)
        .ok_or_else(|| AdapterError::UnknownOrderType(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offers_are_sells() {
        assert_eq!(classify_order_type("LimitOffer"), Ok(Side::Sell));
        assert_eq!(classify_order_type("MarketOffer"), Ok(Side::Sell));
    }

    #[test]
    fn test_bids_are_buys() {
        assert_eq!(classify_order_type("LimitBid"), Ok(Side::Buy));
        assert_eq!(classify_order_type("MarketBid"), Ok(Side::Buy));
    }

    #[test]
    fn test_unknown_tokens_fail() {
        for token in ["limitbid", "LIMITOFFER", "StopBid", "", " LimitBid"] {
            assert_eq!(
                classify_order_type(token),
                Err(AdapterError::UnknownOrderType(token.to_string()))
            );
        }
    }
}
