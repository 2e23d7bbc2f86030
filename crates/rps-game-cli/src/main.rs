//! RPS Game CLI
//!
//! Terminal front end: parses the move list, sets up logging and hands stdin
//! and stdout to the match runner.

use clap::Parser;
use rand::rngs::OsRng;
use rps_game_core::{io::StdinSource, MatchConfig, MatchEnd, MatchRunner};
use std::io;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Provably fair rock-paper-scissors with any odd number of moves.
///
/// Before each round the computer prints an HMAC of its move. The key is
/// revealed after you choose, so you can check the computer did not cheat.
#[derive(Parser, Debug)]
#[command(name = "rps-game", version)]
struct Args {
    /// Move labels in cyclic order; each move loses to the one after it.
    /// Needs an odd count of at least 3. Defaults to Rock Paper Scissors.
    #[arg(allow_hyphen_values = true)]
    moves: Vec<String>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let config = match MatchConfig::from_args(args.moves) {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid move set: {}", e);
            eprintln!("Error: {}", e);
            eprintln!("Example: rps-game Rock Paper Scissors Lizard Spock");
            return ExitCode::from(2);
        }
    };

    let runner = MatchRunner::new(config, OsRng, StdinSource, io::stdout());
    match runner.run() {
        Ok(report) => {
            if report.end == MatchEnd::Completed {
                info!(verdict = %report.summary().verdict, "Match complete");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Match aborted: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
