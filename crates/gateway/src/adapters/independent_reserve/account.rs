use kestrel_core::{Balance, Currency, Wallet};
use log::debug;

use super::raw::RawBalance;
use crate::error::AdapterResult;

/// Normalize an account listing into a wallet
///
/// One balance per account, in listing order. Currency codes are normalized
/// (`Xbt` becomes BTC); accounts in the same currency are not merged.
pub fn adapt_wallet(raw: &RawBalance) -> AdapterResult<Wallet> {
    let balances = raw
        .accounts
        .iter()
        .map(|account| -> AdapterResult<Balance> {
            let currency = Currency::new(&account.currency_code)?;
            Ok(Balance::new(currency, account.total_balance))
        })
        .collect::<AdapterResult<Vec<_>>>()?;

    debug!("Adapted wallet with {} balances", balances.len());

    Ok(Wallet::new(balances))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::independent_reserve::raw::RawAccount;
    use crate::error::AdapterError;
    use kestrel_core::CurrencyError;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn account(code: &str, total: Decimal) -> RawAccount {
        RawAccount {
            account_guid: None,
            account_status: Some("Active".to_string()),
            available_balance: None,
            currency_code: code.to_string(),
            total_balance: total,
        }
    }

    #[test]
    fn test_normalizes_and_keeps_totals() {
        let raw = RawBalance {
            accounts: vec![
                account("Xbt", dec!(1.23456789)),
                account("Usd", dec!(1000.50)),
                account("Eth", dec!(0)),
            ],
        };

        let wallet = adapt_wallet(&raw).unwrap();
        let codes: Vec<&str> = wallet.balances().iter().map(|b| b.currency.code()).collect();
        let totals: Vec<Decimal> = wallet.balances().iter().map(|b| b.total).collect();

        assert_eq!(codes, vec!["BTC", "USD", "ETH"]);
        assert_eq!(totals, vec![dec!(1.23456789), dec!(1000.50), dec!(0)]);
    }

    #[test]
    fn test_duplicates_are_not_merged() {
        let raw = RawBalance {
            accounts: vec![account("Xbt", dec!(1)), account("BTC", dec!(2))],
        };

        let wallet = adapt_wallet(&raw).unwrap();
        assert_eq!(wallet.len(), 2);
        assert_eq!(wallet.total_of(&Currency::btc()), Some(dec!(1)));
    }

    #[test]
    fn test_empty_currency_code() {
        let raw = RawBalance {
            accounts: vec![account("Usd", dec!(1)), account("", dec!(2))],
        };

        assert_eq!(
            adapt_wallet(&raw),
            Err(AdapterError::InvalidCurrency(CurrencyError::Empty))
        );
    }
}
