//! SkillTree Guards prelude.
//!
//! Curated re-exports for wiring a guard into an index.

pub use crate::controller::{AllowListGuard, ControllerGuard};
pub use crate::guard::{AccessGuard, FnGuard};
pub use crate::types::{GuardDecision, GuardViolation};
pub use skilltree_core::Identity;
