use chrono::Utc;
use tracing::debug;

use crate::{
    common::{error::TransferError, event::LedgerEvent},
    domain::{
        ids::IdGenerator,
        ledger::Ledger,
        player::{Player, PlayerId},
        transaction::TransactionRecord,
    },
    worker::handlers::{add_player, remove_player, transfer},
};

/// What a processed event did to the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    PlayerAdded(PlayerId),
    PlayerRemoved(Player),
    Transferred(TransactionRecord),
    /// The transfer was refused for a reason the user should see.
    Rejected(TransferError),
    /// Nothing changed; the input did not pass validation.
    Ignored,
}

impl Outcome {
    pub fn players_changed(&self) -> bool {
        match self {
            // Every transfer has at least one player side.
            Outcome::PlayerAdded(_) | Outcome::PlayerRemoved(_) | Outcome::Transferred(_) => true,
            Outcome::Rejected(_) | Outcome::Ignored => false,
        }
    }

    pub fn transactions_changed(&self) -> bool {
        matches!(self, Outcome::Transferred(_))
    }
}

pub struct Processor {
    ids: Box<dyn IdGenerator>,
}

impl Processor {
    pub fn new(ids: Box<dyn IdGenerator>) -> Self {
        Self { ids }
    }

    pub fn process(&mut self, ledger: &mut Ledger, event: LedgerEvent) -> Outcome {
        match event {
            LedgerEvent::AddPlayer {
                name,
                starting_balance,
            } => add_player::handle(ledger, self.ids.as_mut(), &name, &starting_balance)
                .map_or(Outcome::Ignored, Outcome::PlayerAdded),
            LedgerEvent::RemovePlayer { id } => {
                remove_player::handle(ledger, &id).map_or(Outcome::Ignored, Outcome::PlayerRemoved)
            }
            LedgerEvent::Transfer { from, to, amount } => {
                match transfer::handle(ledger, self.ids.as_mut(), &from, &to, &amount, Utc::now()) {
                    Ok(record) => Outcome::Transferred(record),
                    Err(err) if err.is_validation() => {
                        debug!(%err, %from, %to, %amount, "transfer ignored");
                        Outcome::Ignored
                    }
                    Err(err) => Outcome::Rejected(err),
                }
            }
        }
    }
}

impl std::fmt::Debug for Processor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Processor").finish_non_exhaustive()
    }
}
