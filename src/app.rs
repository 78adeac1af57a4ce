use std::io::{BufRead, BufWriter, Write, stdin, stdout};

use tracing::{info, warn};

use crate::{
    common::error::AppError,
    config::Config,
    domain::ids::UuidIds,
    io::{
        reader::read_commands,
        storage::{FileStore, KeyValueStore},
        writer,
    },
    logging,
    ui::{
        command::{Command, ExportTarget, HELP},
        render,
        session::Session,
        transfer_form::QUICK_AMOUNTS,
    },
    worker::processor::Outcome,
};

pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(|s| s.into()).collect();
    let config = Config::from_env()?.with_args(&args);
    logging::init(&config.log_filter);
    info!(data_dir = ?config.data_dir, starting_balance = %config.starting_balance, "opening wallet");

    let store = FileStore::new(&config.data_dir);
    let mut session = Session::open(store, Box::new(UuidIds), config.starting_balance);

    let stdin = stdin();
    let stdout = stdout();
    let mut out = BufWriter::new(stdout.lock());
    run_session(&mut session, stdin.lock(), &mut out)
}

/// Renders the board, then applies one command per input line until the
/// input ends or the user quits. Bad lines are reported and skipped.
pub fn run_session<S, R, W>(session: &mut Session<S>, input: R, out: &mut W) -> Result<(), AppError>
where
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    render::board(out, session.ledger())?;
    out.flush()?;

    for cmd in read_commands(input) {
        let keep_going = match cmd {
            Ok(cmd) => apply(session, cmd, out)?,
            Err(e) => {
                warn!(error = %e, "bad command");
                writeln!(out, "error: {e}")?;
                true
            }
        };
        out.flush()?;
        if !keep_going {
            break;
        }
    }
    Ok(())
}

/// Applies one command and renders its result. Returns false on quit.
fn apply<S, W>(session: &mut Session<S>, cmd: Command, out: &mut W) -> Result<bool, AppError>
where
    S: KeyValueStore,
    W: Write,
{
    match cmd {
        Command::AddPlayer {
            name,
            starting_balance,
        } => {
            let outcome = session.add_player(&name, starting_balance.as_deref());
            show(session, &outcome, out)?;
        }
        Command::RemovePlayer { id } => {
            let outcome = session.remove_player(&id);
            show(session, &outcome, out)?;
        }
        Command::OpenTransfer => {
            session.open_transfer();
            render::transfer_form(out, session.transfer_form())?;
        }
        Command::Select(selection) => {
            if session.initiate_transfer(&selection) {
                render::transfer_form(out, session.transfer_form())?;
            } else {
                writeln!(out, "no player or bank called {selection:?}")?;
            }
        }
        Command::SetFrom(selection) => {
            session.set_from(&selection);
            render::transfer_form(out, session.transfer_form())?;
        }
        Command::SetTo(selection) => {
            session.set_to(&selection);
            render::transfer_form(out, session.transfer_form())?;
        }
        Command::SetAmount(amount) => {
            session.set_amount(&amount);
            render::transfer_form(out, session.transfer_form())?;
        }
        Command::QuickAmount(amount) => {
            if session.quick_amount(amount) {
                render::transfer_form(out, session.transfer_form())?;
            } else {
                writeln!(out, "quick amount must be one of {QUICK_AMOUNTS:?}")?;
            }
        }
        Command::Confirm => {
            if !session.transfer_form().can_submit() {
                writeln!(out, "choose a sender, a different recipient and an amount first")?;
            } else {
                let outcome = session.confirm_transfer();
                show(session, &outcome, out)?;
            }
        }
        Command::Cancel => session.cancel_transfer(),
        Command::Send { from, to, amount } => {
            let outcome = session.send(&from, &to, &amount);
            show(session, &outcome, out)?;
        }
        Command::ShowPlayers => render::board(out, session.ledger())?,
        Command::ToggleHistory => {
            if session.toggle_history() {
                render::history(out, session.ledger().transactions())?;
            } else {
                writeln!(out, "history hidden")?;
            }
        }
        Command::Export(ExportTarget::Players) => {
            writer::write_players(&mut *out, session.ledger().players())?;
        }
        Command::Export(ExportTarget::History) => {
            writer::write_history(&mut *out, session.ledger().transactions())?;
        }
        Command::Help => writeln!(out, "{HELP}")?,
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

fn show<S, W>(session: &Session<S>, outcome: &Outcome, out: &mut W) -> Result<(), AppError>
where
    S: KeyValueStore,
    W: Write,
{
    render::outcome(out, session.ledger(), outcome)?;
    if session.history_visible() && outcome.transactions_changed() {
        render::history(out, session.ledger().transactions())?;
    }
    Ok(())
}
