use thiserror::Error;

/// Errors raised while building canonical currency identifiers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    #[error("Currency code is empty")]
    Empty,

    #[error("Invalid currency pair: {0}")]
    InvalidPair(String),
}

pub type CurrencyResult<T> = std::result::Result<T, CurrencyError>;
