//! Independent Reserve response types
//!
//! Field names follow the exchange's PascalCase JSON. Only the fields the
//! adapters read are required; the rest are optional so a trimmed payload
//! still deserializes.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Order book snapshot (`GetOrderBook`)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawOrderBook {
    /// Milliseconds since the Unix epoch
    pub created_timestamp_utc: i64,
    pub primary_currency_code: String,
    pub secondary_currency_code: String,
    pub buy_orders: Vec<RawOrderBookEntry>,
    pub sell_orders: Vec<RawOrderBookEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawOrderBookEntry {
    #[serde(default)]
    pub order_type: Option<String>,
    pub price: Decimal,
    pub volume: Decimal,
}

/// Account listing (`GetAccounts`)
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct RawBalance {
    pub accounts: Vec<RawAccount>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawAccount {
    #[serde(default)]
    pub account_guid: Option<String>,
    #[serde(default)]
    pub account_status: Option<String>,
    #[serde(default)]
    pub available_balance: Option<Decimal>,
    pub currency_code: String,
    pub total_balance: Decimal,
}

/// Paged open orders (`GetOpenOrders`)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawOpenOrdersResponse {
    #[serde(default)]
    pub page_size: Option<u32>,
    #[serde(default)]
    pub total_items: Option<u32>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(rename = "Data")]
    pub orders: Vec<RawOpenOrder>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawOpenOrder {
    pub order_type: String,
    pub outstanding: Decimal,
    pub price: Decimal,
    pub order_guid: String,
    pub created_timestamp_utc: DateTime<Utc>,
    #[serde(default)]
    pub primary_currency_code: Option<String>,
    #[serde(default)]
    pub secondary_currency_code: Option<String>,
    #[serde(default)]
    pub volume: Option<Decimal>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Paged trade history (`GetTrades`)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawTradeHistoryResponse {
    #[serde(default)]
    pub page_size: Option<u32>,
    #[serde(default)]
    pub total_items: Option<u32>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(rename = "Data")]
    pub trades: Vec<RawTrade>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawTrade {
    pub order_type: String,
    pub volume_traded: Decimal,
    pub price: Decimal,
    pub trade_timestamp_utc: DateTime<Utc>,
    #[serde(default)]
    pub order_timestamp_utc: Option<DateTime<Utc>>,
    pub trade_guid: String,
    pub order_guid: String,
    pub primary_currency_code: String,
    pub secondary_currency_code: String,
}
