use tracing::warn;

use crate::{
    common::{event::LedgerEvent, money::Money},
    domain::{entity::Entity, ids::IdGenerator, ledger::Ledger},
    io::{persistence::Persistence, storage::KeyValueStore},
    ui::transfer_form::TransferForm,
    worker::processor::{Outcome, Processor},
};

/// Owns the ledger for the lifetime of the program and turns user intents
/// into ledger events, mirroring every change to storage.
#[derive(Debug)]
pub struct Session<S: KeyValueStore> {
    ledger: Ledger,
    persistence: Persistence<S>,
    processor: Processor,
    transfer: TransferForm,
    starting_balance: Money,
    history_visible: bool,
}

impl<S: KeyValueStore> Session<S> {
    /// Loads whatever the store holds and starts a session on top of it.
    pub fn open(store: S, ids: Box<dyn IdGenerator>, starting_balance: Money) -> Self {
        let persistence = Persistence::new(store);
        let ledger = persistence.load();
        Self {
            ledger,
            persistence,
            processor: Processor::new(ids),
            transfer: TransferForm::default(),
            starting_balance,
            history_visible: false,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn transfer_form(&self) -> &TransferForm {
        &self.transfer
    }

    pub fn history_visible(&self) -> bool {
        self.history_visible
    }

    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    /// Adds a player. Without an explicit balance the configured default applies.
    pub fn add_player(&mut self, name: &str, starting_balance: Option<&str>) -> Outcome {
        let starting_balance = starting_balance
            .map(str::to_string)
            .unwrap_or_else(|| self.starting_balance.to_string());
        self.dispatch(LedgerEvent::AddPlayer {
            name: name.to_string(),
            starting_balance,
        })
    }

    /// Removes a player. Never opens or fills the transfer form.
    pub fn remove_player(&mut self, id: &str) -> Outcome {
        self.dispatch(LedgerEvent::RemovePlayer { id: id.to_string() })
    }

    pub fn open_transfer(&mut self) {
        self.transfer.open();
    }

    /// Opens the transfer form with a player or the bank as sender. Returns
    /// false when the selection names nobody on the board.
    pub fn initiate_transfer(&mut self, selection: &str) -> bool {
        match Entity::from_selection(selection) {
            Some(Entity::Player(id)) if self.ledger.player(&id).is_none() => false,
            Some(source) => {
                self.transfer.open_with_source(&source);
                true
            }
            None => false,
        }
    }

    pub fn set_from(&mut self, selection: &str) {
        self.transfer.open();
        self.transfer.from = selection.trim().to_string();
    }

    pub fn set_to(&mut self, selection: &str) {
        self.transfer.open();
        self.transfer.to = selection.trim().to_string();
    }

    pub fn set_amount(&mut self, amount: &str) {
        self.transfer.open();
        self.transfer.amount = amount.trim().to_string();
    }

    pub fn quick_amount(&mut self, amount: i64) -> bool {
        self.transfer.open();
        self.transfer.quick_amount(amount)
    }

    /// Submits the transfer form. A successful transfer resets and closes it;
    /// a rejected one leaves the fields as they were.
    pub fn confirm_transfer(&mut self) -> Outcome {
        if !self.transfer.can_submit() {
            return Outcome::Ignored;
        }
        let outcome = self.dispatch(self.transfer.to_event());
        if let Outcome::Transferred(_) = outcome {
            self.transfer.reset();
        }
        outcome
    }

    pub fn cancel_transfer(&mut self) {
        self.transfer.reset();
    }

    /// Transfers without going through the form.
    pub fn send(&mut self, from: &str, to: &str, amount: &str) -> Outcome {
        self.dispatch(LedgerEvent::Transfer {
            from: from.to_string(),
            to: to.to_string(),
            amount: amount.to_string(),
        })
    }

    pub fn toggle_history(&mut self) -> bool {
        self.history_visible = !self.history_visible;
        self.history_visible
    }

    fn dispatch(&mut self, event: LedgerEvent) -> Outcome {
        let outcome = self.processor.process(&mut self.ledger, event);

        // Fire-and-forget: a failed write leaves memory ahead of storage.
        if outcome.players_changed()
            && let Err(err) = self.persistence.save_players(self.ledger.players())
        {
            warn!(%err, "failed to save players");
        }
        if outcome.transactions_changed()
            && let Err(err) = self.persistence.save_transactions(self.ledger.transactions())
        {
            warn!(%err, "failed to save transactions");
        }
        outcome
    }
}
