use serde::{Deserialize, Serialize};

use super::LimitOrder;

/// A user's resting orders, in exchange listing order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OpenOrders {
    orders: Vec<LimitOrder>,
}

impl OpenOrders {
    pub fn new(orders: Vec<LimitOrder>) -> Self {
        Self { orders }
    }

    pub fn orders(&self) -> &[LimitOrder] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl IntoIterator for OpenOrders {
    type Item = LimitOrder;
    type IntoIter = std::vec::IntoIter<LimitOrder>;

    fn into_iter(self) -> Self::IntoIter {
        self.orders.into_iter()
    }
}
