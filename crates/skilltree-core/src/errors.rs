//! Unified error type for hierarchy operations
//!
//! Every failure is reported synchronously as a distinct variant so callers can
//! tell an authorization refusal apart from bad input or a programming error.

use crate::identifiers::{Identity, NodeId};
use serde::{Deserialize, Serialize};

/// Errors produced by the node store and hierarchy index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum HierarchyError {
    /// The index has not created its root yet
    #[error("Hierarchy not initialized")]
    NotInitialized,

    /// The root was already created
    #[error("Hierarchy already initialized")]
    AlreadyInitialized,

    /// The access guard rejected the caller
    #[error("Caller {caller} is not authorized to mutate the hierarchy")]
    Unauthorized {
        /// Identity that attempted the mutation
        caller: Identity,
    },

    /// The requested parent does not exist
    #[error("Parent {parent} not found (node count {node_count})")]
    ParentNotFound {
        /// Parent identifier passed to the insertion
        parent: NodeId,
        /// Node count at the time of the request
        node_count: u64,
    },

    /// A queried node does not exist
    #[error("Node {node} not found (node count {node_count})")]
    NodeNotFound {
        /// Identifier that was looked up
        node: NodeId,
        /// Node count at the time of the request
        node_count: u64,
    },

    /// A positional query went past the end of a node's list
    #[error("Index {index} out of range for {node} (length {len})")]
    IndexOutOfRange {
        /// Node whose list was indexed
        node: NodeId,
        /// Requested position
        index: u64,
        /// Length of the list
        len: u64,
    },
}

impl HierarchyError {
    /// Create an unauthorized error for `caller`.
    pub fn unauthorized(caller: &Identity) -> Self {
        Self::Unauthorized {
            caller: caller.clone(),
        }
    }

    /// Create an out-of-range error from list coordinates.
    pub fn out_of_range(node: NodeId, index: u64, len: usize) -> Self {
        Self::IndexOutOfRange {
            node,
            index,
            len: len as u64,
        }
    }

    /// Returns `true` if retrying with the same caller can never succeed.
    pub fn is_authorization_failure(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

/// Standard Result type for hierarchy operations
pub type Result<T> = std::result::Result<T, HierarchyError>;
