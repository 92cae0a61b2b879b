//! Command-line arguments.

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "fair-rps",
    version,
    about = "Rock-paper-scissors with any odd number of moves and a provably fair computer",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Moves in circle order. Each move beats the (N-1)/2 moves before it.
    #[arg(value_name = "MOVE")]
    pub moves: Vec<String>,

    /// Print the round report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check a disclosed HMAC key against a published HMAC
    Verify(VerifyArgs),
}

#[derive(Debug, Args)]
pub struct VerifyArgs {
    /// Disclosed key, hex encoded
    #[arg(long)]
    pub key: String,

    /// The computer's move, exactly as printed
    #[arg(long = "move", value_name = "MOVE")]
    pub committed_move: String,

    /// HMAC published before the player moved, hex encoded
    #[arg(long)]
    pub hmac: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_moves() {
        let cli = Cli::try_parse_from(["fair-rps", "rock", "paper", "scissors"]).unwrap();

        assert!(cli.command.is_none());
        assert_eq!(cli.moves, ["rock", "paper", "scissors"]);
        assert!(!cli.json);
    }

    #[test]
    fn test_parse_json_flag() {
        let cli = Cli::try_parse_from(["fair-rps", "--json", "a", "b", "c"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.moves.len(), 3);
    }

    #[test]
    fn test_parse_verify() {
        let cli = Cli::try_parse_from([
            "fair-rps", "verify", "--key", "00ff", "--move", "rock", "--hmac", "abcd",
        ])
        .unwrap();

        match cli.command {
            Some(Command::Verify(args)) => {
                assert_eq!(args.key, "00ff");
                assert_eq!(args.committed_move, "rock");
                assert_eq!(args.hmac, "abcd");
            }
            other => panic!("expected verify, got {:?}", other),
        }
    }

    #[test]
    fn test_verify_requires_all_fields() {
        assert!(Cli::try_parse_from(["fair-rps", "verify", "--key", "00"]).is_err());
    }
}
