// Chain demonstration command
//
// Builds a single path of nodes and shows the deepest node's doubling table.

use crate::commands::print_json;
use crate::report::NodeReport;
use crate::script::{replay, Script};
use anyhow::{ensure, Context, Result};
use clap::Args;
use skilltree_core::{Identity, NodeId, MAX_CAPACITY_HINT};

#[derive(Args, Debug)]
pub struct ChainArgs {
    /// Number of nodes below the root
    #[arg(short, long, default_value = "9")]
    pub length: u64,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn handle_chain_command(args: ChainArgs) -> Result<()> {
    ensure!(args.length > 0, "chain length must be at least 1");
    ensure!(
        args.length <= MAX_CAPACITY_HINT as u64,
        "chain length must be at most {MAX_CAPACITY_HINT}"
    );

    let outcome = replay(&Script::chain(Identity::new("chain-builder"), args.length))?;
    let deepest = NodeId::new(args.length);
    let record = outcome
        .index
        .get(deepest)
        .context("Chain is shorter than requested")?;
    let report = NodeReport::new(record, outcome.index.descendant_count(deepest)?);

    if args.json {
        return print_json(&report);
    }
    println!("{}", report.render());
    for (distance, ancestor) in &report.ancestors {
        println!("  {distance:>6} up -> {ancestor}");
    }
    Ok(())
}
