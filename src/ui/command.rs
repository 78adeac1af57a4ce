/// One line of user input, already tokenized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddPlayer {
        name: String,
        starting_balance: Option<String>,
    },
    RemovePlayer {
        id: String,
    },
    /// Open the transfer form empty.
    OpenTransfer,
    /// Open the transfer form with this player (or the bank) as sender.
    Select(String),
    SetFrom(String),
    SetTo(String),
    SetAmount(String),
    QuickAmount(i64),
    Confirm,
    Cancel,
    /// One-shot transfer that bypasses the form.
    Send {
        from: String,
        to: String,
        amount: String,
    },
    ShowPlayers,
    ToggleHistory,
    Export(ExportTarget),
    Help,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportTarget {
    Players,
    History,
}

pub const HELP: &str = "\
commands:
  add <name> [balance]         add a player (quote names with spaces)
  remove <player-id>           remove a player
  transfer                     open the transfer form
  select <player-id|bank>      open the transfer form with a sender
  from|to <player-id|bank>     set sender / recipient
  amount <n>                   set the amount
  quick <10|20|50|100|200|500> set a preset amount
  confirm                      send the money
  cancel                       close the transfer form
  send <from> <to> <amount>    transfer in one step
  players                      show the board
  history                      toggle transaction history
  export players|history       write CSV to stdout
  help                         this text
  quit                         leave";
