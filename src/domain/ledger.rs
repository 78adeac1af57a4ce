use std::collections::HashSet;

use tracing::warn;

use crate::domain::{
    player::{Player, PlayerId},
    transaction::TransactionRecord,
};

/// Players in creation order and transaction history, newest first.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Ledger {
    pub(crate) players: Vec<Player>,
    pub(crate) txs: Vec<TransactionRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
            txs: Vec::new(),
        }
    }

    /// Builds a ledger from previously stored lists. Later duplicates of a
    /// player id are dropped so ids stay unique, and so is any transaction
    /// whose amount is not positive.
    pub fn from_parts(players: Vec<Player>, txs: Vec<TransactionRecord>) -> Self {
        let mut seen = HashSet::new();
        let players = players
            .into_iter()
            .filter(|p| {
                let fresh = seen.insert(p.id.clone());
                if !fresh {
                    warn!(id = %p.id, name = %p.name, "dropping player with duplicate id");
                }
                fresh
            })
            .collect();
        let txs = txs
            .into_iter()
            .filter(|t| {
                let valid = t.amount.is_positive();
                if !valid {
                    warn!(id = %t.id, amount = %t.amount, "dropping transaction with non-positive amount");
                }
                valid
            })
            .collect();
        Self { players, txs }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn transactions(&self) -> &[TransactionRecord] {
        &self.txs
    }

    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    pub fn player_mut(&mut self, id: &PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| &p.id == id)
    }

    pub(crate) fn push_player(&mut self, player: Player) {
        self.players.push(player);
    }

    pub(crate) fn take_player(&mut self, id: &PlayerId) -> Option<Player> {
        let idx = self.players.iter().position(|p| &p.id == id)?;
        Some(self.players.remove(idx))
    }

    /// History is newest first.
    pub(crate) fn record(&mut self, tx: TransactionRecord) {
        self.txs.insert(0, tx);
    }
}
