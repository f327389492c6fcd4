use kestrel_core::{
    CurrencyError, CurrencyPair, LimitOrder, OpenOrders, TradeSortType, UserTrade, UserTrades,
};
use log::debug;

use super::classify::classify_order_type;
use super::raw::{RawOpenOrder, RawOpenOrdersResponse, RawTrade, RawTradeHistoryResponse};
use super::validate::validate_pair;
use crate::error::AdapterResult;

/// Normalize the user's open orders
///
/// Records carrying both currency codes use them; records carrying neither
/// assume `default_pair`. A record with only one code, or an unrecognized
/// order type, aborts the whole listing.
pub fn adapt_open_orders(
    raw: &RawOpenOrdersResponse,
    default_pair: &CurrencyPair,
) -> AdapterResult<OpenOrders> {
    let orders = raw
        .orders
        .iter()
        .map(|order| adapt_open_order(order, default_pair))
        .collect::<AdapterResult<Vec<_>>>()?;

    debug!("Adapted {} open orders", orders.len());

    Ok(OpenOrders::new(orders))
}

fn adapt_open_order(order: &RawOpenOrder, default_pair: &CurrencyPair) -> AdapterResult<LimitOrder> {
    let side = classify_order_type(&order.order_type).inspect_err(|e| {
        debug!("Rejecting open order {}: {}", order.order_guid, e);
    })?;

    // A record carrying only one code is malformed, not a default-pair order
    let pair = match (&order.primary_currency_code, &order.secondary_currency_code) {
        (Some(base), Some(counter)) => CurrencyPair::from_codes(base, counter)?,
        (None, None) => default_pair.clone(),
        _ => return Err(CurrencyError::Empty.into()),
    };

    Ok(LimitOrder::new(side, order.outstanding, pair, order.price)
        .with_id(order.order_guid.clone())
        .with_timestamp(order.created_timestamp_utc))
}

/// Normalize the user's trade history
///
/// Every record must be a known order type and trade `expected`; otherwise
/// the whole history is rejected. Fees are not reported by this source and
/// are left unset. The result is tagged `SortByTimestamp`, the order the
/// exchange lists trades in; trades are not re-sorted here.
pub fn adapt_trade_history(
    raw: &RawTradeHistoryResponse,
    expected: &CurrencyPair,
) -> AdapterResult<UserTrades> {
    let trades = raw
        .trades
        .iter()
        .map(|trade| adapt_trade(trade, expected))
        .collect::<AdapterResult<Vec<_>>>()?;

    debug!("Adapted {} {} trades", trades.len(), expected);

    Ok(UserTrades::new(trades, TradeSortType::SortByTimestamp))
}

fn adapt_trade(trade: &RawTrade, expected: &CurrencyPair) -> AdapterResult<UserTrade> {
    let checked = classify_order_type(&trade.order_type).and_then(|side| {
        let pair = validate_pair(
            &trade.primary_currency_code,
            &trade.secondary_currency_code,
            expected,
        )?;
        Ok((side, pair))
    });
    let (side, pair) =
        checked.inspect_err(|e| debug!("Rejecting trade {}: {}", trade.trade_guid, e))?;

    Ok(UserTrade::new(
        side,
        trade.volume_traded,
        pair,
        trade.price,
        trade.trade_timestamp_utc,
        trade.trade_guid.clone(),
        trade.order_guid.clone(),
    ))
}
