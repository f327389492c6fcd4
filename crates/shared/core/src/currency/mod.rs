//! Currency identifiers
//!
//! Exchanges spell the same currency differently (`Xbt`, `XBT`, `btc`).
//! Everything past the gateway uses the normalized forms defined here.

mod code;
mod pair;

pub use code::Currency;
pub use pair::CurrencyPair;
