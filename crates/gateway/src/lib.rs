//! Kestrel Gateway
//!
//! Gateway layer for the Kestrel trading model. Takes responses that an
//! upstream client has already deserialized and normalizes them into the
//! canonical types from `kestrel-core`.
//!
//! ## Architecture
//!
//! ```text
//! Exchange client (HTTP, auth, rate limits)
//!         │ raw DTOs
//!    ┌────▼────┐
//!    │ Adapter │  classify sides, validate pairs
//!    └────┬────┘
//!         │ OrderBook, Wallet, OpenOrders, UserTrades
//!    ┌────▼────┐
//!    │Internal │
//!    │Systems  │
//!    └─────────┘
//! ```
//!
//! Translations are all-or-nothing: a single unexpected record fails the
//! whole call with an [`AdapterError`].

pub mod adapters;
pub mod error;

// Re-export commonly used types
pub use adapters::independent_reserve::{
    AdapterConfig, IndependentReserveAdapter, adapt_open_orders, adapt_order_book,
    adapt_trade_history, adapt_wallet,
};
pub use error::{AdapterError, AdapterResult};
