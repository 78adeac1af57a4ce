use std::str::FromStr;

use tracing::{debug, info};

use crate::{
    common::money::{DEFAULT_STARTING_BALANCE, Money},
    domain::{
        ids::IdGenerator,
        ledger::Ledger,
        player::{Player, PlayerId},
    },
};

/// Appends a new player. Returns `None` (and changes nothing) when the name
/// is blank. A starting balance that is not an integer falls back to 1500.
pub fn handle(
    ledger: &mut Ledger,
    ids: &mut dyn IdGenerator,
    name: &str,
    starting_balance: &str,
) -> Option<PlayerId> {
    let name = name.trim();
    if name.is_empty() {
        debug!("ignoring add player with blank name");
        return None;
    }

    let balance = Money::from_str(starting_balance).unwrap_or(DEFAULT_STARTING_BALANCE);
    let id = PlayerId::new(ids.next_id());

    ledger.push_player(Player::new(id.clone(), name, balance));
    info!(%id, name, %balance, "player added");
    Some(id)
}
