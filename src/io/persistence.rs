use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::{
    domain::{ledger::Ledger, player::Player, transaction::TransactionRecord},
    io::storage::{KeyValueStore, StorageResult},
};

pub const PLAYERS_KEY: &str = "monopoly-players";
pub const TRANSACTIONS_KEY: &str = "monopoly-transactions";

/// Mirrors the ledger's two lists into a [`KeyValueStore`], one key each.
///
/// Loading is forgiving: an absent, unreadable or malformed entry yields an
/// empty list for that key only. Saving overwrites the whole list.
#[derive(Debug)]
pub struct Persistence<S> {
    store: S,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn load(&self) -> Ledger {
        let players: Vec<Player> = self.load_list(PLAYERS_KEY);
        let txs: Vec<TransactionRecord> = self.load_list(TRANSACTIONS_KEY);
        debug!(players = players.len(), transactions = txs.len(), "ledger loaded");
        Ledger::from_parts(players, txs)
    }

    pub fn save_players(&mut self, players: &[Player]) -> StorageResult<()> {
        self.save_list(PLAYERS_KEY, players)
    }

    pub fn save_transactions(&mut self, txs: &[TransactionRecord]) -> StorageResult<()> {
        self.save_list(TRANSACTIONS_KEY, txs)
    }

    fn load_list<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(key, %err, "could not read stored list, starting empty");
                return Vec::new();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|err| {
            warn!(key, %err, "stored list is malformed, starting empty");
            Vec::new()
        })
    }

    fn save_list<T: Serialize>(&mut self, key: &str, items: &[T]) -> StorageResult<()> {
        let json = serde_json::to_string(items)?;
        self.store.set(key, &json)?;
        debug!(key, items = items.len(), "list saved");
        Ok(())
    }
}
