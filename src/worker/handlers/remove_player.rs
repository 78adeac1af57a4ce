use tracing::{debug, info};

use crate::domain::{
    ledger::Ledger,
    player::{Player, PlayerId},
};

/// Removes the player unconditionally, whatever its balance. History is kept.
pub fn handle(ledger: &mut Ledger, id: &str) -> Option<Player> {
    let id = PlayerId::new(id.trim());
    match ledger.take_player(&id) {
        Some(player) => {
            info!(%id, name = %player.name, balance = %player.balance, "player removed");
            Some(player)
        }
        None => {
            debug!(%id, "remove for unknown player ignored");
            None
        }
    }
}
