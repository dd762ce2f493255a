//! # SkillTree Index - Skill Hierarchy
//!
//! **Purpose**: Index an append-only tree of skills, insert in logarithmic
//! time, and answer ancestor and descendant queries.
//!
//! # Architecture Constraints
//!
//! - YES Arena node store keyed by sequential identifier
//! - YES Doubling (binary-lifting) ancestor tables built from the parent's table
//! - YES Guarded, all-or-nothing insertion
//! - NO deletion or re-parenting
//! - NO persistence (in-memory only)
//!
//! ## Core Concepts
//!
//! - **Node Store** ([`NodeStore`]): owns every [`Node`], assigns identifiers
//! - **Ancestor tables** ([`build_ancestor_table`]): `ancestors[i]` is `2^i` levels up
//! - **Hierarchy Index** ([`HierarchyIndex`]): insertion and queries behind an
//!   [`AccessGuard`](skilltree_guards::AccessGuard)
//! - **Shared handle** ([`SharedHierarchy`]): single-writer locking for threads

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Doubling ancestor table construction
pub mod ancestors;

/// Public hierarchy index
pub mod index;

/// Level-ancestor, lowest-common-ancestor and descendant queries
pub mod lifting;

/// Node records
pub mod node;

/// Thread-safe handle
pub mod shared;

/// Node arena
pub mod store;

pub use ancestors::{build_ancestor_table, table_len, AncestorSource};
pub use index::HierarchyIndex;
pub use node::{Node, NodeSummary};
pub use shared::SharedHierarchy;
pub use store::NodeStore;

pub use skilltree_core::{HierarchyError, Identity, IndexConfig, NodeId, Result};
