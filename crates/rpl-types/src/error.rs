use thiserror::Error;

/// Errors produced while parsing wire values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    #[error("invalid byte length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid account address: {0}")]
    InvalidAccount(String),

    #[error("invalid currency code: {0}")]
    InvalidCurrency(String),

    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("invalid ledger selector: {0}")]
    InvalidLedgerIndex(String),
}
