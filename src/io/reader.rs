use std::io::BufRead;

use crate::ui::{
    command::{Command, ExportTarget},
    transfer_form::QUICK_AMOUNTS,
};

/// Reads commands from line-oriented input, one per line.
///
/// Fields are separated by spaces; double quotes keep a field together, so
/// `add "Top Hat" 2000` names a player `Top Hat`. Blank lines and lines
/// starting with `#` are skipped. Errors carry the offending line.
///
/// # Examples
///
/// ```
/// use monopoly_wallet::io::reader::read_commands;
/// use monopoly_wallet::ui::command::Command;
///
/// let input = "add \"Top Hat\" 2000\n\n# comment\nsend bank 1 200\n";
/// let cmds: Vec<_> = read_commands(input.as_bytes()).collect();
///
/// assert_eq!(cmds.len(), 2);
/// assert!(matches!(&cmds[0], Ok(Command::AddPlayer { name, .. }) if name == "Top Hat"));
/// assert!(matches!(&cmds[1], Ok(Command::Send { .. })));
/// ```
pub fn read_commands<R: BufRead>(input: R) -> impl Iterator<Item = Result<Command, String>> {
    input.lines().filter_map(|line| match line {
        Ok(line) => parse_command(&line).transpose(),
        Err(e) => Some(Err(e.to_string())),
    })
}

/// Parses one line. `Ok(None)` for blank and comment lines.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let fields = tokenize(trimmed)?;
    let (verb, args) = match fields.split_first() {
        Some((verb, args)) => (verb.to_ascii_lowercase(), args),
        None => return Ok(None),
    };

    let cmd = match (verb.as_str(), args) {
        ("add", [name]) => Command::AddPlayer {
            name: name.clone(),
            starting_balance: None,
        },
        ("add", [name, balance]) => Command::AddPlayer {
            name: name.clone(),
            starting_balance: Some(balance.clone()),
        },
        ("remove", [id]) => Command::RemovePlayer { id: id.clone() },
        ("transfer", []) => Command::OpenTransfer,
        ("select", [entity]) => Command::Select(entity.clone()),
        ("from", [entity]) => Command::SetFrom(entity.clone()),
        ("to", [entity]) => Command::SetTo(entity.clone()),
        ("amount", [amount]) => Command::SetAmount(amount.clone()),
        ("quick", [amount]) => Command::QuickAmount(parse_quick_amount(amount)?),
        ("confirm", []) => Command::Confirm,
        ("cancel", []) => Command::Cancel,
        ("send", [from, to, amount]) => Command::Send {
            from: from.clone(),
            to: to.clone(),
            amount: amount.clone(),
        },
        ("players", []) => Command::ShowPlayers,
        ("history", []) => Command::ToggleHistory,
        ("export", [target]) => match target.to_ascii_lowercase().as_str() {
            "players" => Command::Export(ExportTarget::Players),
            "history" => Command::Export(ExportTarget::History),
            other => return Err(format!("unknown export target: {other}")),
        },
        ("help", []) => Command::Help,
        ("quit" | "exit", []) => Command::Quit,
        (
            "add" | "remove" | "transfer" | "select" | "from" | "to" | "amount" | "quick"
            | "confirm" | "cancel" | "send" | "players" | "history" | "export" | "help" | "quit"
            | "exit",
            _,
        ) => return Err(format!("wrong number of arguments for {verb}: {trimmed}")),
        (other, _) => return Err(format!("unknown command: {other}")),
    };
    Ok(Some(cmd))
}

fn tokenize(line: &str) -> Result<Vec<String>, String> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b' ')
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(line.as_bytes());

    let mut record = csv::StringRecord::new();
    rdr.read_record(&mut record).map_err(|e| e.to_string())?;

    // Runs of spaces produce empty fields.
    Ok(record
        .iter()
        .filter(|f| !f.is_empty())
        .map(str::to_string)
        .collect())
}

fn parse_quick_amount(s: &str) -> Result<i64, String> {
    s.parse::<i64>()
        .ok()
        .filter(|n| QUICK_AMOUNTS.contains(n))
        .ok_or_else(|| format!("quick amount must be one of {QUICK_AMOUNTS:?}, got {s}"))
}
