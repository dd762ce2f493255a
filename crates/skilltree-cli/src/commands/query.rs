// Relationship query command
//
// Replays a script, then answers level-ancestor and common-ancestor questions.

use crate::script::{replay, Script};
use anyhow::{Context, Result};
use clap::Args;
use skilltree_core::NodeId;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Insertion script (TOML)
    pub script: PathBuf,

    /// Node to query from
    #[arg(short, long)]
    pub node: u64,

    /// Levels to climb from the node
    #[arg(short, long)]
    pub offset: Option<u64>,

    /// Second node for a lowest-common-ancestor query
    #[arg(long)]
    pub with: Option<u64>,
}

pub fn handle_query_command(args: QueryArgs) -> Result<()> {
    let script = Script::load(&args.script)?;
    let outcome = replay(&script)?;
    let index = &outcome.index;
    let node = NodeId::new(args.node);

    let summary = index.summary(node).context("Unknown query node")?;
    info!(node = %node, depth = summary.depth, "querying");

    if let Some(offset) = args.offset {
        let ancestor = index
            .ancestor_at_offset(node, offset)
            .with_context(|| format!("{node} has no ancestor {offset} levels up"))?;
        println!("{offset} levels above {node}: {ancestor}");
    }
    if let Some(other) = args.with {
        let other = NodeId::new(other);
        let lca = index
            .lowest_common_ancestor(node, other)
            .context("Common ancestor query failed")?;
        println!("lowest common ancestor of {node} and {other}: {lca}");
    }
    if args.offset.is_none() && args.with.is_none() {
        if node.is_root() {
            println!("{node} is the root");
            return Ok(());
        }
        let path: Vec<String> = index
            .path_to_root(node)?
            .iter()
            .map(ToString::to_string)
            .collect();
        println!("{node} -> {}", path.join(" -> "));
    }
    Ok(())
}
