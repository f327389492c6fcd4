//! Independent Reserve adapter
//!
//! Translates already-deserialized Independent Reserve responses into
//! kestrel-core types. Every function is pure: no I/O, no shared state,
//! safe to call from any thread.

mod account;
mod classify;
mod config;
mod market_data;
pub mod raw;
mod trade;
mod validate;

pub use account::adapt_wallet;
pub use classify::classify_order_type;
pub use config::AdapterConfig;
pub use market_data::adapt_order_book;
pub use trade::{adapt_open_orders, adapt_trade_history};
pub use validate::validate_pair;

use kestrel_core::{OpenOrders, OrderBook, UserTrades, Wallet};
use raw::{RawBalance, RawOpenOrdersResponse, RawOrderBook, RawTradeHistoryResponse};

use crate::error::AdapterResult;

/// Adapter bound to a configured default pair
///
/// Convenience wrapper over the free functions for callers that serve a
/// single market per account.
#[derive(Debug, Clone, Default)]
pub struct IndependentReserveAdapter {
    config: AdapterConfig,
}

impl IndependentReserveAdapter {
    pub fn new(config: AdapterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    pub fn order_book(&self, raw: &RawOrderBook) -> AdapterResult<OrderBook> {
        adapt_order_book(raw)
    }

    pub fn wallet(&self, raw: &RawBalance) -> AdapterResult<Wallet> {
        adapt_wallet(raw)
    }

    /// Open orders, assuming the configured pair where a record has none
    pub fn open_orders(&self, raw: &RawOpenOrdersResponse) -> AdapterResult<OpenOrders> {
        adapt_open_orders(raw, &self.config.default_pair)
    }

    /// Trade history, validated against the configured pair
    pub fn trade_history(&self, raw: &RawTradeHistoryResponse) -> AdapterResult<UserTrades> {
        adapt_trade_history(raw, &self.config.default_pair)
    }
}
