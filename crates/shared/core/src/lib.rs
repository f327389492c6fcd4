//! Kestrel Core Domain
//!
//! Canonical, exchange-agnostic trading model. Exchange gateways translate
//! their wire formats into these types so downstream code never sees a
//! venue-specific representation.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod currency;
pub mod entities;
pub mod error;
pub mod values;

// Re-export commonly used types at crate root
pub use currency::{Currency, CurrencyPair};
pub use entities::{
    Balance, LimitOrder, OpenOrders, OrderBook, Side, TradeSortType, UserTrade, UserTrades,
    Wallet,
};
pub use error::{CurrencyError, CurrencyResult};
pub use values::{Price, Quantity, Timestamp};
