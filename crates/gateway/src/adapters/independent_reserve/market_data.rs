use chrono::DateTime;
use kestrel_core::{CurrencyPair, LimitOrder, OrderBook, Side};
use log::debug;

use super::raw::{RawOrderBook, RawOrderBookEntry};
use crate::error::{AdapterError, AdapterResult};

/// Normalize an order book snapshot
///
/// Sell records become asks and buy records become bids, in the order the
/// exchange listed them. Prices and volumes pass through untouched and
/// zero-volume levels are kept.
pub fn adapt_order_book(raw: &RawOrderBook) -> AdapterResult<OrderBook> {
    let pair = CurrencyPair::from_codes(&raw.primary_currency_code, &raw.secondary_currency_code)?;
    let timestamp = DateTime::from_timestamp_millis(raw.created_timestamp_utc)
        .ok_or(AdapterError::InvalidTimestamp(raw.created_timestamp_utc))?;

    let asks = adapt_levels(&raw.sell_orders, Side::Sell, &pair);
    let bids = adapt_levels(&raw.buy_orders, Side::Buy, &pair);

    debug!(
        "Adapted {} order book: {} asks, {} bids",
        pair,
        asks.len(),
        bids.len()
    );

    Ok(OrderBook::new(timestamp, asks, bids))
}

fn adapt_levels(entries: &[RawOrderBookEntry], side: Side, pair: &CurrencyPair) -> Vec<LimitOrder> {
    entries
        .iter()
        .map(|e| LimitOrder::new(side, e.volume, pair.clone(), e.price))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use kestrel_core::CurrencyError;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn entry(price: Decimal, volume: Decimal) -> RawOrderBookEntry {
        RawOrderBookEntry {
            order_type: None,
            price,
            volume,
        }
    }

    fn snapshot(buys: Vec<RawOrderBookEntry>, sells: Vec<RawOrderBookEntry>) -> RawOrderBook {
        RawOrderBook {
            created_timestamp_utc: 1_428_654_000_123,
            primary_currency_code: "Xbt".to_string(),
            secondary_currency_code: "Usd".to_string(),
            buy_orders: buys,
            sell_orders: sells,
        }
    }

    #[test]
    fn test_counts_and_sides() {
        let raw = snapshot(
            vec![entry(dec!(249.5), dec!(1)), entry(dec!(249), dec!(2))],
            vec![
                entry(dec!(251), dec!(0.5)),
                entry(dec!(252), dec!(3)),
                entry(dec!(253), dec!(4)),
            ],
        );

        let book = adapt_order_book(&raw).unwrap();

        assert_eq!(book.bids.len(), 2);
        assert_eq!(book.asks.len(), 3);
        assert!(book.bids.iter().all(|o| o.side == Side::Buy));
        assert!(book.asks.iter().all(|o| o.side == Side::Sell));
        assert!(book.asks.iter().all(|o| o.pair == CurrencyPair::btc_usd()));
        assert!(book.asks.iter().all(|o| o.id.is_none() && o.timestamp.is_none()));
    }

    #[test]
    fn test_preserves_order_and_precision() {
        let raw = snapshot(
            vec![entry(dec!(100.123456789), dec!(0.00000001)), entry(dec!(120), dec!(1))],
            vec![entry(dec!(130), dec!(0)), entry(dec!(125), dec!(7.5))],
        );

        let book = adapt_order_book(&raw).unwrap();

        assert_eq!(book.bids[0].limit_price, dec!(100.123456789));
        assert_eq!(book.bids[0].quantity, dec!(0.00000001));
        // not re-sorted: higher bid stays second
        assert_eq!(book.bids[1].limit_price, dec!(120));
        assert_eq!(book.asks[0].limit_price, dec!(130));
        assert_eq!(book.asks[0].quantity, Decimal::ZERO);
        assert_eq!(book.asks[1].quantity, dec!(7.5));
    }

    #[test]
    fn test_timestamp_from_millis() {
        let book = adapt_order_book(&snapshot(vec![], vec![])).unwrap();

        let expected = Utc.with_ymd_and_hms(2015, 4, 10, 8, 20, 0).unwrap()
            + chrono::Duration::milliseconds(123);
        assert_eq!(book.timestamp, expected);
        assert!(book.is_empty());
    }

    #[test]
    fn test_malformed_snapshot() {
        let mut raw = snapshot(vec![], vec![]);
        raw.created_timestamp_utc = i64::MAX;
        assert_eq!(
            adapt_order_book(&raw),
            Err(AdapterError::InvalidTimestamp(i64::MAX))
        );

        let mut raw = snapshot(vec![], vec![]);
        raw.secondary_currency_code = String::new();
        assert_eq!(
            adapt_order_book(&raw),
            Err(AdapterError::InvalidCurrency(CurrencyError::Empty))
        );
    }
}
