//! Error types of the reader core.

use story_book::NodeId;
use thiserror::Error;

/// Why a navigation request was rejected during validation.
///
/// A rejected request never touches navigation state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("node {0} does not exist")]
    NotFound(NodeId),

    #[error("cannot go back from the first page")]
    Underflow,

    #[error("going back leads to {expected}, not {requested}")]
    BackTargetMismatch { expected: NodeId, requested: NodeId },

    #[error("node {0} has not been visited in this session")]
    NotInHistory(NodeId),

    #[error("the current node has no choice {0}")]
    NoSuchChoice(usize),

    #[error("the current node has no single forward choice")]
    NoForwardChoice,
}

/// Failures of the durable history store.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("saved history under `{key}` is corrupt: {reason}")]
    Corrupt { key: String, reason: String },
}

/// Failures of the audio backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AudioError {
    #[error("cannot decode {0}")]
    Decode(String),

    #[error("audio resource unavailable: {0}")]
    Unavailable(String),
}

/// Invalid reader configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}
