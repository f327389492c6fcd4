use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Side;
use crate::currency::{Currency, CurrencyPair};
use crate::values::{Price, Quantity, Timestamp};

/// A fill on one of the user's orders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserTrade {
    pub side: Side,
    pub quantity: Quantity,
    pub pair: CurrencyPair,
    pub price: Price,
    pub timestamp: Timestamp,
    pub trade_id: String,
    pub order_id: String,
    /// Fee charged, when the exchange reports it
    pub fee_amount: Option<Decimal>,
    /// Currency the fee was charged in, when the exchange reports it
    pub fee_currency: Option<Currency>,
}

impl UserTrade {
    /// Create a trade with no fee information
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        side: Side,
        quantity: Quantity,
        pair: CurrencyPair,
        price: Price,
        timestamp: Timestamp,
        trade_id: impl Into<String>,
        order_id: impl Into<String>,
    ) -> Self {
        Self {
            side,
            quantity,
            pair,
            price,
            timestamp,
            trade_id: trade_id.into(),
            order_id: order_id.into(),
            fee_amount: None,
            fee_currency: None,
        }
    }
}

/// Ordering the source is expected to deliver trades in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeSortType {
    SortByTimestamp,
}

/// Trade history with the ordering the source declares
///
/// `sort_type` documents the order the listing is expected to be in.
/// The trades themselves are never re-sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserTrades {
    trades: Vec<UserTrade>,
    sort_type: TradeSortType,
}

impl UserTrades {
    pub fn new(trades: Vec<UserTrade>, sort_type: TradeSortType) -> Self {
        Self { trades, sort_type }
    }

    pub fn trades(&self) -> &[UserTrade] {
        &self.trades
    }

    pub fn sort_type(&self) -> TradeSortType {
        self.sort_type
    }

    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }
}

impl IntoIterator for UserTrades {
    type Item = UserTrade;
    type IntoIter = std::vec::IntoIter<UserTrade>;

    fn into_iter(self) -> Self::IntoIter {
        self.trades.into_iter()
    }
}
