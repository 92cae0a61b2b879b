//! Fair RPS command-line game
//!
//! Plays one round of N-move rock-paper-scissors against the computer. The
//! computer's HMAC is printed before the player chooses, and the key after,
//! so the player can check the computer did not cheat.

mod cli;
mod menu;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, VerifyArgs};
use fair_rps_core::{verify, GameError, GameSession, HmacSha256, WinnerResolver};
use menu::{parse_choice, render_menu, MenuChoice};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so they never mix with the game on stdout
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Some(Command::Verify(args)) => run_verify(&args),
        None => run_game(cli.moves, cli.json),
    }
}

fn run_game(labels: Vec<String>, json: bool) -> Result<ExitCode> {
    let resolver = match WinnerResolver::new(labels) {
        Ok(resolver) => resolver,
        Err(GameError::InvalidMoveSet(reason)) => {
            warn!(%reason, "rejected move list");
            println!("Invalid arguments. Please provide an odd number of unique moves.");
            println!("Example: fair-rps rock paper scissors");
            return Ok(ExitCode::FAILURE);
        }
        Err(err) => return Err(err.into()),
    };

    let session = GameSession::start(resolver).context("failed to start game session")?;
    println!("HMAC: {}", session.mac());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "{}Enter your move: ", render_menu(session.resolver().moves()))?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            debug!("stdin closed");
            return Ok(ExitCode::SUCCESS);
        };
        let line = line.context("failed to read move")?;

        match parse_choice(&line, session.resolver().moves().len()) {
            MenuChoice::Exit => {
                println!("Exiting the game...");
                return Ok(ExitCode::SUCCESS);
            }
            MenuChoice::Help => {
                let table = session.resolver().build_outcome_table();
                print!("{}", render::render_help_table(&table));
            }
            MenuChoice::Play(index) => {
                let label = session
                    .resolver()
                    .moves()
                    .by_index(index)
                    .map(|m| m.label().to_string())
                    .context("menu index out of range")?;
                let report = session.play(&label).map_err(GameError::from)?;

                if json {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                } else {
                    print!("{}", render::render_report(&report));
                    println!("HMAC: {}", report.reveal.mac());
                }
                return Ok(ExitCode::SUCCESS);
            }
            MenuChoice::Invalid => {
                println!("Invalid move. Please enter a valid move number.");
            }
        }
    }
}

fn run_verify(args: &VerifyArgs) -> Result<ExitCode> {
    if check_disclosure(args)? {
        println!("HMAC verified: '{}' was committed before you moved", args.committed_move);
        Ok(ExitCode::SUCCESS)
    } else {
        println!("HMAC mismatch: the disclosed key and move do not match the published HMAC");
        Ok(ExitCode::FAILURE)
    }
}

fn check_disclosure(args: &VerifyArgs) -> Result<bool> {
    let key = hex::decode(args.key.trim()).context("key is not valid hex")?;
    let mac = hex::decode(args.hmac.trim()).context("HMAC is not valid hex")?;
    Ok(verify(&HmacSha256, &key, &args.committed_move, &mac))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(key: &str, committed_move: &str, hmac: &str) -> VerifyArgs {
        VerifyArgs {
            key: key.to_string(),
            committed_move: committed_move.to_string(),
            hmac: hmac.to_string(),
        }
    }

    #[test]
    fn test_check_disclosure_of_real_round() {
        let resolver = WinnerResolver::new(["rock", "paper", "scissors"]).unwrap();
        let session = GameSession::start(resolver).unwrap();
        let published = session.mac().to_string();
        let report = session.play("rock").unwrap();
        let key = report.reveal.key().to_string();

        let honest = args(&key, report.computer_move.label(), &published);
        assert!(check_disclosure(&honest).unwrap());

        let forged = args(&key, "lizard", &published);
        assert!(!check_disclosure(&forged).unwrap());
    }

    #[test]
    fn test_check_disclosure_rejects_bad_hex() {
        assert!(check_disclosure(&args("zz", "rock", "00")).is_err());
        assert!(check_disclosure(&args("00", "rock", "not hex")).is_err());
    }
}
