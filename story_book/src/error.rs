//! Errors raised while loading a story definition.

use thiserror::Error;

use crate::nodes::NodeId;

/// The story definition failed structural validation.
///
/// Fatal to initialization: no navigation is possible without a graph.
#[derive(Debug, Error)]
pub enum StoryError {
    #[error("story definition is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("story definition is not valid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("story definition must be a sequence of nodes or a table with a `pages`, `nodes` or `story` field")]
    UnexpectedShape,

    #[error("record {index} is not a story node: {reason}")]
    InvalidRecord { index: usize, reason: String },

    #[error("duplicate node id {0}")]
    DuplicateId(NodeId),

    #[error("story definition contains no nodes")]
    Empty,
}

/// Alias kept for callers that name the failure after its meaning.
pub type MalformedStoryError = StoryError;
