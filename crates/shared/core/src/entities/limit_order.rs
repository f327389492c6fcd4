use serde::{Deserialize, Serialize};

use super::Side;
use crate::currency::CurrencyPair;
use crate::values::{Price, Quantity, Timestamp};

/// A resting order at a fixed price
///
/// Used both for order book levels (no id, no timestamp) and for a user's
/// open orders (exchange id and creation time set).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitOrder {
    pub side: Side,
    pub quantity: Quantity,
    pub pair: CurrencyPair,
    /// Exchange-assigned order id
    pub id: Option<String>,
    pub timestamp: Option<Timestamp>,
    pub limit_price: Price,
}

impl LimitOrder {
    /// Create an anonymous order (no id, no timestamp)
    pub fn new(side: Side, quantity: Quantity, pair: CurrencyPair, limit_price: Price) -> Self {
        Self {
            side,
            quantity,
            pair,
            id: None,
            timestamp: None,
            limit_price,
        }
    }

    /// Set the exchange order id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the order timestamp
    pub fn with_timestamp(mut self, timestamp: Timestamp) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}
