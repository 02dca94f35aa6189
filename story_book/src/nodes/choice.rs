//! Choices - the labelled edges leaving a node.

use serde::{Deserialize, Serialize};

use super::NodeId;

/// A labelled link to another node.
///
/// The target is resolved at navigation time; it is not guaranteed to exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    #[serde(alias = "text")]
    pub label: String,
    #[serde(alias = "page")]
    pub target: NodeId,
}

impl Choice {
    /// Create a new choice.
    pub fn new(label: impl Into<String>, target: impl Into<NodeId>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }
}
