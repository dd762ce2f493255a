//! # SkillTree Core - Foundation
//!
//! **Purpose**: Shared vocabulary for the skill hierarchy crates.
//!
//! # Architecture Constraints
//!
//! - YES Strongly typed identifiers (`NodeId`, `Identity`)
//! - YES Unified hierarchy error type
//! - YES Index configuration and validation
//! - NO tree storage or ancestor tables (that's `skilltree-index`)
//! - NO authorization decisions (that's `skilltree-guards`)

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Index configuration loaded from TOML
pub mod config;

/// Unified hierarchy error types
pub mod errors;

/// Node and caller identifiers
pub mod identifiers;

pub use config::{ConfigError, IndexConfig, MAX_CAPACITY_HINT};
pub use errors::{HierarchyError, Result};
pub use identifiers::{Identity, NodeId};
