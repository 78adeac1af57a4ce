use chrono::{DateTime, Utc};

use crate::common::money::Money;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TransactionRecord {
    pub id: String,
    /// Sender name at the time of the transfer.
    pub from: String,
    /// Recipient name at the time of the transfer.
    pub to: String,
    pub amount: Money,
    pub timestamp: DateTime<Utc>,
    // Older saves spell this field `type`.
    #[serde(alias = "type")]
    pub kind: TxKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxKind {
    /// Player to player.
    Transfer,
    /// Bank to player.
    BankDeposit,
    /// Player to bank.
    BankWithdrawal,
}

impl TxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxKind::Transfer => "transfer",
            TxKind::BankDeposit => "bank_deposit",
            TxKind::BankWithdrawal => "bank_withdrawal",
        }
    }
}

impl TransactionRecord {
    pub fn new(
        id: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
        amount: Money,
        timestamp: DateTime<Utc>,
        kind: TxKind,
    ) -> Self {
        Self {
            id: id.into(),
            from: from.into(),
            to: to.into(),
            amount,
            timestamp,
            kind,
        }
    }
}
