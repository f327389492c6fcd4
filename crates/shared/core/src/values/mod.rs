use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Price value - uses Decimal so exchange figures pass through without loss
pub type Price = Decimal;

/// Quantity value - uses Decimal for precision
pub type Quantity = Decimal;

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;
