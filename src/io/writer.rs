use std::io::Write;

use crate::domain::{player::Player, transaction::TransactionRecord};

#[derive(serde::Serialize)]
/// CSV row for a player. Headers: `id,name,balance`.
struct PlayerRow<'a> {
    id: &'a str,
    name: &'a str,
    balance: i64,
}

#[derive(serde::Serialize)]
/// CSV row for a transaction. Headers: `id,from,to,amount,timestamp,kind`.
struct TransactionRow<'a> {
    id: &'a str,
    from: &'a str,
    to: &'a str,
    amount: i64,
    timestamp: String,
    kind: &'static str,
}

/// Writes players to CSV in creation order.
///
/// # Examples
///
/// ```
/// use monopoly_wallet::common::money::Money;
/// use monopoly_wallet::domain::player::{Player, PlayerId};
/// use monopoly_wallet::io::writer::write_players;
///
/// let players = vec![Player::new(PlayerId::new("1"), "Alice", Money::new(1500))];
/// let mut out = Vec::new();
/// write_players(&mut out, &players).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "id,name,balance\n1,Alice,1500\n");
/// ```
pub fn write_players<W: Write>(writer: W, players: &[Player]) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    for p in players {
        wtr.serialize(PlayerRow {
            id: p.id.as_str(),
            name: &p.name,
            balance: p.balance.as_i64(),
        })?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes transaction history to CSV, newest first, timestamps in RFC 3339.
pub fn write_history<W: Write>(writer: W, txs: &[TransactionRecord]) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    for tx in txs {
        wtr.serialize(TransactionRow {
            id: &tx.id,
            from: &tx.from,
            to: &tx.to,
            amount: tx.amount.as_i64(),
            timestamp: tx.timestamp.to_rfc3339(),
            kind: tx.kind.as_str(),
        })?;
    }

    wtr.flush()?;
    Ok(())
}
