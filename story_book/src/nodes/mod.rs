//! Story node definitions.

mod choice;
mod node;

pub use choice::*;
pub use node::*;

use serde::{Deserialize, Serialize};

/// Opaque identifier of a story node.
///
/// Serialized in its native representation: numbers stay numbers and
/// strings stay strings, so `1` and `"1"` are different nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeId {
    Number(i64),
    Text(String),
}

impl NodeId {
    /// Build a textual identifier.
    pub fn text(id: impl Into<String>) -> Self {
        NodeId::Text(id.into())
    }
}

impl From<i64> for NodeId {
    fn from(id: i64) -> Self {
        NodeId::Number(id)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        NodeId::Text(id.to_owned())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        NodeId::Text(id)
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeId::Number(n) => write!(f, "{}", n),
            NodeId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// How a node continues, derived from its number of choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// No choices: an ending.
    Terminal,
    /// Exactly one choice: the reader can simply turn the page.
    Continuation,
    /// Two or more choices: the reader must pick one.
    Decision,
}

impl NodeKind {
    /// Classify a node by its choice count.
    pub fn from_choice_count(count: usize) -> Self {
        match count {
            0 => NodeKind::Terminal,
            1 => NodeKind::Continuation,
            _ => NodeKind::Decision,
        }
    }
}
