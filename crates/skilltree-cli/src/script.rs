//! Insertion scripts
//!
//! A script is a TOML document with an optional `[index]` table (parsed as
//! [`IndexConfig`]) and an ordered list of `[[insert]]` steps:
//!
//! ```toml
//! [index]
//! controller = "common-colony"
//!
//! [[insert]]
//! parent = 0
//!
//! [[insert]]
//! parent = 1
//! caller = "other-colony"   # defaults to the controller
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use skilltree_core::{HierarchyError, Identity, IndexConfig, NodeId};
use skilltree_guards::ControllerGuard;
use skilltree_index::HierarchyIndex;
use std::path::Path;
use tracing::{debug, info, warn};

/// One requested insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InsertStep {
    /// Parent of the new node
    pub parent: NodeId,
    /// Caller presented to the access guard; the controller when omitted
    #[serde(default)]
    pub caller: Option<Identity>,
}

/// A parsed insertion script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    /// Index configuration
    #[serde(default)]
    pub index: IndexConfig,
    /// Insertions in execution order
    #[serde(default, rename = "insert")]
    pub inserts: Vec<InsertStep>,
}

impl Script {
    /// Parse and validate script text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let script: Script = toml::from_str(content).context("Invalid script TOML")?;
        script.index.validate().context("Invalid [index] table")?;
        Ok(script)
    }

    /// Read a script from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("In script {}", path.display()))
    }

    /// Script that builds a single chain of `length` nodes below the root.
    pub fn chain(controller: Identity, length: u64) -> Self {
        Self {
            index: IndexConfig::with_controller(controller),
            inserts: (0..length)
                .map(|parent| InsertStep {
                    parent: NodeId::new(parent),
                    caller: None,
                })
                .collect(),
        }
    }
}

/// An insertion the index refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayFailure {
    /// Zero-based position of the step in the script
    pub step: usize,
    /// Requested parent
    pub parent: NodeId,
    /// Why the index refused it
    pub error: HierarchyError,
}

/// Result of replaying a script.
#[derive(Debug)]
pub struct ReplayOutcome {
    /// The populated index
    pub index: HierarchyIndex<ControllerGuard>,
    /// Identifiers created, in step order
    pub created: Vec<NodeId>,
    /// Refused steps
    pub failures: Vec<ReplayFailure>,
}

/// Replay `script` against a freshly initialized index.
///
/// Refused steps are collected rather than aborting the replay; a refused
/// insertion leaves the index untouched, so later steps see the same tree.
pub fn replay(script: &Script) -> Result<ReplayOutcome> {
    let mut index = HierarchyIndex::controlled_by(script.index.clone());
    index.initialize().context("Failed to initialize hierarchy")?;

    let controller = script.index.controller.clone();
    let mut created = Vec::with_capacity(script.inserts.len());
    let mut failures = Vec::new();

    for (step, insert) in script.inserts.iter().enumerate() {
        let caller = insert.caller.as_ref().unwrap_or(&controller);
        match index.insert_child(insert.parent, caller) {
            Ok(id) => {
                debug!(step, node = %id, parent = %insert.parent, "replayed insertion");
                created.push(id);
            }
            Err(error) => {
                warn!(step, parent = %insert.parent, %error, "script step refused");
                failures.push(ReplayFailure {
                    step,
                    parent: insert.parent,
                    error,
                });
            }
        }
    }

    info!(
        nodes = index.node_count(),
        refused = failures.len(),
        "script replayed"
    );
    Ok(ReplayOutcome {
        index,
        created,
        failures,
    })
}
