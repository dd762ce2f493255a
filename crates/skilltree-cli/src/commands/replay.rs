// Script replay command
//
// Replays an insertion script and prints every node with its ancestor table.

use crate::commands::print_json;
use crate::report::{node_reports, NodeReport};
use crate::script::{replay, ReplayFailure, Script};
use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// Insertion script (TOML)
    pub script: PathBuf,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct ReplayReport<'a> {
    node_count: u64,
    nodes: Vec<NodeReport>,
    failures: &'a [ReplayFailure],
}

pub fn handle_replay_command(args: ReplayArgs) -> Result<()> {
    let script = Script::load(&args.script)?;
    let outcome = replay(&script)?;
    let nodes = node_reports(&outcome.index).context("Failed to collect nodes")?;

    if args.json {
        return print_json(&ReplayReport {
            node_count: outcome.index.node_count(),
            nodes,
            failures: &outcome.failures,
        });
    }

    for node in &nodes {
        println!("{}", node.render());
    }
    for failure in &outcome.failures {
        println!(
            "step {} (parent {}) refused: {}",
            failure.step, failure.parent, failure.error
        );
    }
    println!("{} nodes", outcome.index.node_count());
    Ok(())
}
