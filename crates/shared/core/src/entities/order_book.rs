use serde::{Deserialize, Serialize};

use super::LimitOrder;
use crate::values::Timestamp;

/// Snapshot of a market's resting orders
///
/// Levels are kept in the order the exchange reported them; nothing here
/// re-sorts them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBook {
    pub timestamp: Timestamp,
    /// Sell side
    pub asks: Vec<LimitOrder>,
    /// Buy side
    pub bids: Vec<LimitOrder>,
}

impl OrderBook {
    pub fn new(timestamp: Timestamp, asks: Vec<LimitOrder>, bids: Vec<LimitOrder>) -> Self {
        Self {
            timestamp,
            asks,
            bids,
        }
    }

    /// First ask as reported by the exchange
    pub fn best_ask(&self) -> Option<&LimitOrder> {
        self.asks.first()
    }

    /// First bid as reported by the exchange
    pub fn best_bid(&self) -> Option<&LimitOrder> {
        self.bids.first()
    }

    pub fn is_empty(&self) -> bool {
        self.asks.is_empty() && self.bids.is_empty()
    }
}
