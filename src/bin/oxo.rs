//! oxo CLI - Play against and analyze an exact tic-tac-toe engine

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Exact tic-tac-toe engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against the engine
    Play(oxo::cli::commands::play::PlayArgs),

    /// Compute the optimal move and exact scores for a position
    Analyze(oxo::cli::commands::analyze::AnalyzeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => oxo::cli::commands::play::execute(args),
        Commands::Analyze(args) => oxo::cli::commands::analyze::execute(args),
    }
}
