mod limit_order;
mod open_orders;
mod order_book;
mod side;
mod user_trade;
mod wallet;

pub use limit_order::LimitOrder;
pub use open_orders::OpenOrders;
pub use order_book::OrderBook;
pub use side::Side;
pub use user_trade::{TradeSortType, UserTrade, UserTrades};
pub use wallet::{Balance, Wallet};
