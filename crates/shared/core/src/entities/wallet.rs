use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currency::Currency;

/// Holding of a single currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub currency: Currency,
    pub total: Decimal,
}

impl Balance {
    pub fn new(currency: Currency, total: Decimal) -> Self {
        Self { currency, total }
    }
}

/// Account balances as listed by the exchange
///
/// Entries keep the listing order and are not merged, so a currency
/// reported twice appears twice.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Wallet {
    balances: Vec<Balance>,
}

impl Wallet {
    pub fn new(balances: Vec<Balance>) -> Self {
        Self { balances }
    }

    pub fn balances(&self) -> &[Balance] {
        &self.balances
    }

    /// Total of the first entry for `currency`
    pub fn total_of(&self, currency: &Currency) -> Option<Decimal> {
        self.balances
            .iter()
            .find(|b| &b.currency == currency)
            .map(|b| b.total)
    }

    pub fn len(&self) -> usize {
        self.balances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }
}

impl IntoIterator for Wallet {
    type Item = Balance;
    type IntoIter = std::vec::IntoIter<Balance>;

    fn into_iter(self) -> Self::IntoIter {
        self.balances.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_total_of() {
        let wallet = Wallet::new(vec![
            Balance::new(Currency::btc(), dec!(1.25)),
            Balance::new(Currency::usd(), dec!(300)),
            Balance::new(Currency::btc(), dec!(9)),
        ]);

        assert_eq!(wallet.len(), 3);
        assert_eq!(wallet.total_of(&Currency::btc()), Some(dec!(1.25)));
        assert_eq!(wallet.total_of(&Currency::eth()), None);
    }
}
