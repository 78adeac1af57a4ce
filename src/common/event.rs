/// A user intent that touches the ledger, sent from the session to the
/// processor. Fields carry the raw text the user entered; parsing and
/// validation happen in the handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerEvent {
    AddPlayer {
        name: String,
        starting_balance: String,
    },
    RemovePlayer {
        id: String,
    },
    Transfer {
        from: String,
        to: String,
        amount: String,
    },
}
