//! Strongly typed identifiers for hierarchy nodes and mutating callers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a node in the skill hierarchy.
///
/// Identifiers are assigned sequentially by the node store and never reused.
/// `NodeId::ROOT` is reserved for the single depth-0 node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u64);

impl NodeId {
    /// The root node, created once at initialization.
    pub const ROOT: NodeId = NodeId(0);

    /// Create a node identifier from its raw value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Return the raw identifier.
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns `true` if this is the root identifier.
    pub const fn is_root(self) -> bool {
        self.0 == 0
    }

    /// Position of this node in an arena indexed by identifier.
    ///
    /// Returns `None` on targets where the identifier does not fit in `usize`.
    pub fn as_index(self) -> Option<usize> {
        usize::try_from(self.0).ok()
    }
}

impl From<u64> for NodeId {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<NodeId> for u64 {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Skill#{}", self.0)
    }
}

/// Identity of a caller attempting to mutate the hierarchy.
///
/// The index treats identities as opaque; only an access guard interprets them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    /// Create a new caller identity.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the underlying string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the identity string is empty or whitespace.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<String> for Identity {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Identity {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
