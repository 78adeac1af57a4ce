use crate::{common::money::Money, domain::player::PlayerId};

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("config error: {0}")]
    Config(String),
}

/// Why a transfer was not applied.
///
/// Everything except [`TransferError::InsufficientFunds`] is a validation
/// failure the UI rejects silently; insufficient funds is reported to the user.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    #[error("amount must be a positive integer")]
    InvalidAmount,
    #[error("sender and recipient must both be selected")]
    MissingEndpoint,
    #[error("sender and recipient must differ")]
    SameEndpoint,
    #[error("no player with id {0}")]
    UnknownPlayer(PlayerId),
    #[error("balance of {name} would overflow")]
    BalanceOverflow { name: String },
    #[error("{name} doesn't have enough money!")]
    InsufficientFunds {
        name: String,
        balance: Money,
        amount: Money,
    },
}

impl TransferError {
    pub fn is_validation(&self) -> bool {
        !matches!(self, TransferError::InsufficientFunds { .. })
    }
}
