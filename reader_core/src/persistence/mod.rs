//! Persistence - the only state that outlives a session.
//!
//! The core consumes [`PersistenceAdapter`]; [`HistoryStore`] implements it
//! over any [`KeyValueStore`] by writing the history as a JSON array of ids
//! under one fixed key.

mod store;

pub use store::*;

use crate::config::ReaderConfig;
use crate::error::PersistError;
use story_book::NodeId;

/// Durable storage for the history stack.
///
/// Both calls are synchronous. Failures are non-fatal to the caller: losing
/// the saved history only degrades to starting from the first node.
pub trait PersistenceAdapter {
    /// Write the full history, oldest entry first.
    fn save_history(&mut self, history: &[NodeId]) -> Result<(), PersistError>;

    /// Read the saved history, `None` if there is no saved session.
    fn load_history(&self) -> Result<Option<Vec<NodeId>>, PersistError>;
}

/// History persistence over a key-value store.
#[derive(Debug, Clone)]
pub struct HistoryStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> HistoryStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Store the history under the configured `history_key`.
    pub fn from_config(store: S, config: &ReaderConfig) -> Self {
        Self::new(store, config.history_key.clone())
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Forget the saved session.
    pub fn clear(&mut self) -> Result<(), PersistError> {
        self.store.remove(&self.key)
    }
}

impl<S: KeyValueStore> PersistenceAdapter for HistoryStore<S> {
    fn save_history(&mut self, history: &[NodeId]) -> Result<(), PersistError> {
        let content = serde_json::to_string(history)?;
        self.store.set(&self.key, &content)
    }

    fn load_history(&self) -> Result<Option<Vec<NodeId>>, PersistError> {
        let Some(content) = self.store.get(&self.key)? else {
            return Ok(None);
        };
        let history = serde_json::from_str(&content).map_err(|e| PersistError::Corrupt {
            key: self.key.clone(),
            reason: e.to_string(),
        })?;
        Ok(Some(history))
    }
}
