use std::io::{self, Write};

use chrono::Local;

use crate::{
    domain::{entity::BANK_LABEL, ledger::Ledger, transaction::TransactionRecord},
    ui::transfer_form::{QUICK_AMOUNTS, TransferForm},
    worker::processor::Outcome,
};

pub fn board<W: Write>(out: &mut W, ledger: &Ledger) -> io::Result<()> {
    let players = ledger.players();
    writeln!(out, "{} players active", players.len())?;

    if players.is_empty() {
        writeln!(out, "No players added. Add players to start managing the bank: add <name> [balance]")?;
    }
    for p in players {
        let badge = if p.is_in_debt() { "  In Debt" } else { "" };
        writeln!(out, "  [{}] {:<20} {:>10}{}", p.id, p.name, p.balance, badge)?;
    }
    writeln!(out, "  [bank] {BANK_LABEL:<18} {:>10}  Unlimited Balance", "∞")
}

pub fn history<W: Write>(out: &mut W, txs: &[TransactionRecord]) -> io::Result<()> {
    if txs.is_empty() {
        return writeln!(out, "No transactions yet");
    }

    writeln!(out, "Transaction history ({} transactions)", txs.len())?;
    for tx in txs {
        writeln!(
            out,
            "  {} → {}  {:>8}  {}",
            tx.from,
            tx.to,
            tx.amount,
            tx.timestamp.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S")
        )?;
    }
    Ok(())
}

pub fn transfer_form<W: Write>(out: &mut W, form: &TransferForm) -> io::Result<()> {
    let field = |s: &str| if s.is_empty() { "-".to_string() } else { s.to_string() };
    writeln!(
        out,
        "send money: from {} to {} amount {}  (quick: {:?}){}",
        field(&form.from),
        field(&form.to),
        field(&form.amount),
        QUICK_AMOUNTS,
        if form.can_submit() { "  ready, type confirm" } else { "" }
    )
}

pub fn outcome<W: Write>(out: &mut W, ledger: &Ledger, outcome: &Outcome) -> io::Result<()> {
    match outcome {
        Outcome::PlayerAdded(id) => match ledger.player(id) {
            Some(p) => writeln!(out, "added {} [{}] with {}", p.name, p.id, p.balance),
            None => Ok(()),
        },
        Outcome::PlayerRemoved(p) => writeln!(out, "removed {} [{}]", p.name, p.id),
        Outcome::Transferred(tx) => writeln!(out, "{} → {}  {}", tx.from, tx.to, tx.amount),
        Outcome::Rejected(err) => writeln!(out, "{err}"),
        Outcome::Ignored => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::{
        common::{error::TransferError, money::Money},
        domain::{
            player::{Player, PlayerId},
            transaction::TxKind,
        },
    };

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn board_shows_players_debt_badge_and_bank() {
        let ledger = Ledger::from_parts(
            vec![
                Player::new(PlayerId::new("1"), "Alice", Money::new(1500)),
                Player::new(PlayerId::new("2"), "Bob", Money::new(-20)),
            ],
            vec![],
        );

        let s = render(|out| board(out, &ledger));

        assert!(s.starts_with("2 players active\n"));
        let alice = s.lines().find(|l| l.contains("Alice")).unwrap();
        let bob = s.lines().find(|l| l.contains("Bob")).unwrap();
        assert!(alice.contains("1500") && !alice.contains("In Debt"));
        assert!(bob.contains("-20") && bob.contains("In Debt"));
        assert!(s.contains("Unlimited Balance"));
    }

    #[test]
    fn empty_board_prompts_for_first_player() {
        let s = render(|out| board(out, &Ledger::new()));
        assert!(s.contains("No players added"));
    }

    #[test]
    fn history_lists_newest_first_or_says_empty() {
        assert_eq!(render(|out| history(out, &[])), "No transactions yet\n");

        let txs = vec![
            TransactionRecord::new("2", "Alice", "Bank", Money::new(200), Utc::now(), TxKind::BankWithdrawal),
            TransactionRecord::new("1", "Bank", "Alice", Money::new(1500), Utc::now(), TxKind::BankDeposit),
        ];
        let s = render(|out| history(out, &txs));
        let lines: Vec<&str> = s.lines().collect();

        assert_eq!(lines[0], "Transaction history (2 transactions)");
        assert!(lines[1].contains("Alice → Bank"));
        assert!(lines[2].contains("Bank → Alice"));
    }

    #[test]
    fn rejected_outcome_names_the_player() {
        let err = TransferError::InsufficientFunds {
            name: "Alice".into(),
            balance: Money::new(1),
            amount: Money::new(5),
        };
        let s = render(|out| outcome(out, &Ledger::new(), &Outcome::Rejected(err)));
        assert_eq!(s, "Alice doesn't have enough money!\n");

        assert_eq!(render(|out| outcome(out, &Ledger::new(), &Outcome::Ignored)), "");
    }
}
