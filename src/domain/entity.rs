use crate::domain::player::PlayerId;

/// Identifier a user selects to mean the bank.
pub const BANK_SELECTION: &str = "bank";
/// Name the bank is recorded under in transaction history.
pub const BANK_LABEL: &str = "Bank";

/// One side of a transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entity {
    Bank,
    Player(PlayerId),
}

impl Entity {
    /// Resolves a selection as typed by the user or held in a form field.
    /// Blank selections resolve to `None`.
    pub fn from_selection(selection: &str) -> Option<Entity> {
        let s = selection.trim();
        if s.is_empty() {
            None
        } else if s == BANK_SELECTION {
            Some(Entity::Bank)
        } else {
            Some(Entity::Player(PlayerId::new(s)))
        }
    }

    pub fn selection(&self) -> &str {
        match self {
            Entity::Bank => BANK_SELECTION,
            Entity::Player(id) => id.as_str(),
        }
    }
}
