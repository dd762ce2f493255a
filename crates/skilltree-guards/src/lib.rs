//! # SkillTree Guards - Access Guard
//!
//! Decides which callers may mutate the skill hierarchy. The index consults an
//! [`AccessGuard`] as a read-only oracle before every insertion and never
//! mutates it.

#![forbid(unsafe_code)]

pub mod controller;
pub mod guard;
pub mod prelude;
pub mod types;

pub use controller::{AllowListGuard, ControllerGuard};
pub use guard::{AccessGuard, FnGuard};
pub use types::{GuardDecision, GuardViolation};
