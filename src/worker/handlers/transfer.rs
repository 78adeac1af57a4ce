use std::str::FromStr;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::{
    common::{error::TransferError, money::Money},
    domain::{
        entity::{BANK_LABEL, Entity},
        ids::IdGenerator,
        ledger::Ledger,
        player::PlayerId,
        transaction::{TransactionRecord, TxKind},
    },
};

/// Moves `amount` from `from` to `to` and records one transaction.
///
/// Preconditions are checked in order before anything is touched: a positive
/// integer amount, both endpoints selected, distinct endpoints, known players.
/// A player sender must hold at least `amount`; the bank never runs out.
pub fn handle(
    ledger: &mut Ledger,
    ids: &mut dyn IdGenerator,
    from: &str,
    to: &str,
    amount: &str,
    timestamp: DateTime<Utc>,
) -> Result<TransactionRecord, TransferError> {
    let amount = Money::from_str(amount)
        .ok()
        .filter(Money::is_positive)
        .ok_or(TransferError::InvalidAmount)?;

    let (from, to) = match (Entity::from_selection(from), Entity::from_selection(to)) {
        (Some(from), Some(to)) => (from, to),
        _ => return Err(TransferError::MissingEndpoint),
    };
    if from == to {
        return Err(TransferError::SameEndpoint);
    }

    let kind = match (&from, &to) {
        (Entity::Bank, _) => TxKind::BankDeposit,
        (_, Entity::Bank) => TxKind::BankWithdrawal,
        _ => TxKind::Transfer,
    };

    let from_name = display_name(ledger, &from)?;
    let to_name = display_name(ledger, &to)?;

    // Compute both new balances before writing either.
    let debit = match &from {
        Entity::Player(id) => Some((id.clone(), checked_debit(ledger, id, amount)?)),
        Entity::Bank => None,
    };
    let credit = match &to {
        Entity::Player(id) => Some((id.clone(), checked_credit(ledger, id, amount)?)),
        Entity::Bank => None,
    };

    for (id, balance) in debit.into_iter().chain(credit) {
        if let Some(p) = ledger.player_mut(&id) {
            p.balance = balance;
        }
    }

    let record = TransactionRecord::new(ids.next_id(), from_name, to_name, amount, timestamp, kind);
    ledger.record(record.clone());

    info!(
        tx = %record.id,
        from = %record.from,
        to = %record.to,
        amount = %record.amount,
        kind = record.kind.as_str(),
        "transfer applied"
    );
    Ok(record)
}

fn display_name(ledger: &Ledger, entity: &Entity) -> Result<String, TransferError> {
    match entity {
        Entity::Bank => Ok(BANK_LABEL.to_string()),
        Entity::Player(id) => ledger
            .player(id)
            .map(|p| p.name.clone())
            .ok_or_else(|| TransferError::UnknownPlayer(id.clone())),
    }
}

fn checked_debit(ledger: &Ledger, id: &PlayerId, amount: Money) -> Result<Money, TransferError> {
    let player = ledger
        .player(id)
        .ok_or_else(|| TransferError::UnknownPlayer(id.clone()))?;

    if player.balance < amount {
        debug!(%id, balance = %player.balance, %amount, "insufficient funds");
        return Err(TransferError::InsufficientFunds {
            name: player.name.clone(),
            balance: player.balance,
            amount,
        });
    }

    player
        .balance
        .checked_sub(amount)
        .ok_or_else(|| TransferError::BalanceOverflow {
            name: player.name.clone(),
        })
}

fn checked_credit(ledger: &Ledger, id: &PlayerId, amount: Money) -> Result<Money, TransferError> {
    let player = ledger
        .player(id)
        .ok_or_else(|| TransferError::UnknownPlayer(id.clone()))?;

    player
        .balance
        .checked_add(amount)
        .ok_or_else(|| TransferError::BalanceOverflow {
            name: player.name.clone(),
        })
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::{ids::SequentialIds, player::Player};

    // Helper: a ledger with the given (id, name, balance) players.
    fn ledger_with(players: &[(&str, &str, i64)]) -> Ledger {
        Ledger::from_parts(
            players
                .iter()
                .map(|(id, name, bal)| Player::new(PlayerId::new(*id), *name, Money::new(*bal)))
                .collect(),
            vec![],
        )
    }

    fn balance(ledger: &Ledger, id: &str) -> i64 {
        ledger.player(&PlayerId::new(id)).expect("player exists").balance.as_i64()
    }

    fn send(ledger: &mut Ledger, from: &str, to: &str, amount: &str) -> Result<TransactionRecord, TransferError> {
        let mut ids = SequentialIds::starting_after(100);
        handle(ledger, &mut ids, from, to, amount, Utc::now())
    }

    #[test]
    fn player_to_player_moves_money_and_records_transfer() {
        let mut ledger = ledger_with(&[("1", "P1", 1500), ("2", "P2", 1500)]);

        let rec = send(&mut ledger, "1", "2", "300").unwrap();

        assert_eq!(balance(&ledger, "1"), 1200);
        assert_eq!(balance(&ledger, "2"), 1800);
        assert_eq!(rec.kind, TxKind::Transfer);
        assert_eq!((rec.from.as_str(), rec.to.as_str()), ("P1", "P2"));
        assert_eq!(rec.amount, Money::new(300));
        assert_eq!(ledger.transactions(), &[rec]);
    }

    #[test]
    fn player_to_bank_is_a_withdrawal() {
        let mut ledger = ledger_with(&[("1", "P1", 1500)]);

        let rec = send(&mut ledger, "1", "bank", "200").unwrap();

        assert_eq!(balance(&ledger, "1"), 1300);
        assert_eq!(rec.kind, TxKind::BankWithdrawal);
        assert_eq!((rec.from.as_str(), rec.to.as_str()), ("P1", "Bank"));
        assert_eq!(ledger.transactions().len(), 1);
    }

    #[test]
    fn bank_to_player_is_a_deposit_without_limit() {
        let mut ledger = ledger_with(&[("2", "P2", 0)]);

        for _ in 0..5 {
            let rec = send(&mut ledger, "bank", "2", "1000000").unwrap();
            assert_eq!(rec.kind, TxKind::BankDeposit);
            assert_eq!(rec.from, "Bank");
        }

        assert_eq!(balance(&ledger, "2"), 5_000_000);
        assert_eq!(ledger.transactions().len(), 5);
    }

    #[test]
    fn exact_balance_can_be_spent() {
        let mut ledger = ledger_with(&[("1", "P1", 100), ("2", "P2", 0)]);

        send(&mut ledger, "1", "2", "100").unwrap();

        assert_eq!(balance(&ledger, "1"), 0);
        assert_eq!(balance(&ledger, "2"), 100);
    }

    #[test]
    fn insufficient_funds_names_the_sender_and_changes_nothing() {
        let mut ledger = ledger_with(&[("1", "P1", 100), ("2", "P2", 1500)]);
        let before = ledger.clone();

        let err = send(&mut ledger, "1", "2", "500").unwrap_err();

        assert_eq!(
            err,
            TransferError::InsufficientFunds {
                name: "P1".into(),
                balance: Money::new(100),
                amount: Money::new(500),
            }
        );
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "P1 doesn't have enough money!");
        assert_eq!(ledger, before);
    }

    #[test]
    fn player_in_debt_cannot_pay() {
        let mut ledger = ledger_with(&[("1", "P1", -10)]);

        let err = send(&mut ledger, "1", "bank", "1").unwrap_err();
        assert!(matches!(err, TransferError::InsufficientFunds { .. }));
        assert_eq!(balance(&ledger, "1"), -10);
    }

    #[test]
    fn validation_failures_are_checked_in_order_and_change_nothing() {
        let mut ledger = ledger_with(&[("1", "P1", 1500), ("2", "P2", 1500)]);
        let before = ledger.clone();

        // amount is checked first, even when endpoints are also bad
        assert_eq!(send(&mut ledger, "", "", "0"), Err(TransferError::InvalidAmount));
        assert_eq!(send(&mut ledger, "1", "2", "-5"), Err(TransferError::InvalidAmount));
        assert_eq!(send(&mut ledger, "1", "2", "abc"), Err(TransferError::InvalidAmount));
        assert_eq!(send(&mut ledger, "1", "2", ""), Err(TransferError::InvalidAmount));

        assert_eq!(send(&mut ledger, "", "2", "10"), Err(TransferError::MissingEndpoint));
        assert_eq!(send(&mut ledger, "1", "  ", "10"), Err(TransferError::MissingEndpoint));

        assert_eq!(send(&mut ledger, "1", "1", "10"), Err(TransferError::SameEndpoint));
        assert_eq!(send(&mut ledger, "bank", "bank", "10"), Err(TransferError::SameEndpoint));

        assert_eq!(
            send(&mut ledger, "1", "9", "10"),
            Err(TransferError::UnknownPlayer(PlayerId::new("9")))
        );
        assert_eq!(
            send(&mut ledger, "9", "bank", "10"),
            Err(TransferError::UnknownPlayer(PlayerId::new("9")))
        );

        assert_eq!(ledger, before);
    }

    #[test]
    fn lenient_amount_text_is_truncated_to_its_integer_prefix() {
        let mut ledger = ledger_with(&[("1", "P1", 1500)]);

        let rec = send(&mut ledger, "bank", "1", " 50.9 ").unwrap();
        assert_eq!(rec.amount, Money::new(50));
    }

    #[test]
    fn overflowing_credit_is_rejected_without_partial_debit() {
        let mut ledger = ledger_with(&[("1", "P1", 10), ("2", "Rich", i64::MAX)]);
        let before = ledger.clone();

        let err = send(&mut ledger, "1", "2", "5").unwrap_err();
        assert_eq!(err, TransferError::BalanceOverflow { name: "Rich".into() });
        assert!(err.is_validation());
        assert_eq!(ledger, before);
    }

    #[test]
    fn history_keeps_names_from_transfer_time() {
        let mut ledger = ledger_with(&[("1", "P1", 1500)]);
        send(&mut ledger, "1", "bank", "10").unwrap();

        ledger.player_mut(&PlayerId::new("1")).unwrap().name = "Renamed".into();

        assert_eq!(ledger.transactions()[0].from, "P1");
    }

    #[test]
    fn newest_transaction_is_at_the_head() {
        let mut ledger = ledger_with(&[("1", "P1", 1500)]);
        let mut ids = SequentialIds::new();

        handle(&mut ledger, &mut ids, "bank", "1", "10", Utc::now()).unwrap();
        handle(&mut ledger, &mut ids, "1", "bank", "20", Utc::now()).unwrap();

        let ids: Vec<&str> = ledger.transactions().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["2", "1"]);
    }
}
