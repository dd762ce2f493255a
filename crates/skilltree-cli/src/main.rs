//! Command-line interface for SkillTree
//!
//! Replays insertion scripts against an in-memory skill hierarchy and prints
//! doubling ancestor tables and relationship queries.

use anyhow::Result;
use clap::{Parser, Subcommand};
use skilltree_cli::commands::{
    chain::{handle_chain_command, ChainArgs},
    query::{handle_query_command, QueryArgs},
    replay::{handle_replay_command, ReplayArgs},
};

#[derive(Parser)]
#[command(name = "skilltree")]
#[command(about = "SkillTree - append-only skill hierarchy inspector", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay an insertion script and print every node
    Replay(ReplayArgs),

    /// Build a chain and show the deepest node's ancestor table
    Chain(ChainArgs),

    /// Replay a script, then answer ancestor queries
    Query(QueryArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Replay(args) => handle_replay_command(args)?,
        Commands::Chain(args) => handle_chain_command(args)?,
        Commands::Query(args) => handle_query_command(args)?,
    }

    Ok(())
}
