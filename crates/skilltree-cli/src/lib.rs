//! Operator tooling for skill hierarchies
//!
//! Replays insertion scripts against a fresh index and renders the resulting
//! ancestor tables. Shared by the `skilltree` binary and its tests.

#![forbid(unsafe_code)]

pub mod commands;
pub mod report;
pub mod script;

pub use report::NodeReport;
pub use script::{replay, InsertStep, ReplayFailure, ReplayOutcome, Script};
