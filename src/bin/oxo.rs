//! oxo CLI - Tic-tac-toe solver and Q-table trainer
//!
//! - Train a Q-table by self-play and save it as CSV
//! - Solve positions with exhaustive minimax
//! - Play agents against each other

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Tic-tac-toe minimax solver and Q-table trainer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train a Q-table by self-play
    Train(Box<oxo::cli::commands::train::TrainArgs>),

    /// Solve a position with minimax
    Solve(oxo::cli::commands::solve::SolveArgs),

    /// Play two agents against each other
    Arena(oxo::cli::commands::arena::ArenaArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Train(args) => oxo::cli::commands::train::execute(*args),
        Commands::Solve(args) => oxo::cli::commands::solve::execute(args),
        Commands::Arena(args) => oxo::cli::commands::arena::execute(args),
    }
}
