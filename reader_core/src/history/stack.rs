//! History stack - visited node ids, oldest first.

use std::collections::HashSet;

use crate::error::NavigationError;
use story_book::NodeId;

/// Ordered record of visited nodes.
///
/// Invariants: never empty, never two identical consecutive entries, and the
/// last entry is always the current node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryStack {
    entries: Vec<NodeId>,

    /// Every id ever recorded this session; never shrinks.
    visited: HashSet<NodeId>,
}

impl HistoryStack {
    /// Create a single-entry history.
    pub fn new(start: NodeId) -> Self {
        let mut visited = HashSet::new();
        visited.insert(start.clone());
        Self {
            entries: vec![start],
            visited,
        }
    }

    /// Rebuild a history from saved entries.
    ///
    /// Consecutive duplicates are collapsed. Returns `None` for an empty list.
    pub fn from_entries(entries: impl IntoIterator<Item = NodeId>) -> Option<Self> {
        let mut entries = entries.into_iter();
        let mut history = Self::new(entries.next()?);
        for id in entries {
            history.push(id);
        }
        Some(history)
    }

    /// Append an id unless it is already on top.
    ///
    /// Returns whether a new entry was added.
    pub fn push(&mut self, id: NodeId) -> bool {
        if self.top() == &id {
            return false;
        }
        self.visited.insert(id.clone());
        self.entries.push(id);
        true
    }

    /// Remove and return the top entry.
    pub fn pop(&mut self) -> Result<NodeId, NavigationError> {
        if self.entries.len() <= 1 {
            return Err(NavigationError::Underflow);
        }
        self.entries.pop().ok_or(NavigationError::Underflow)
    }

    /// Drop every entry after the first occurrence of `id`.
    ///
    /// Destructive: the branch taken after that point is discarded. Returns
    /// `false` and leaves the stack untouched if `id` was never visited.
    pub fn truncate_after(&mut self, id: &NodeId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.entries.truncate(index + 1);
                true
            }
            None => false,
        }
    }

    /// Replace the stack with a single entry, keeping the visited set.
    pub fn reset(&mut self, start: NodeId) {
        self.visited.insert(start.clone());
        self.entries.clear();
        self.entries.push(start);
    }

    /// The current node.
    pub fn top(&self) -> &NodeId {
        // Never empty: every constructor seeds one entry and pop keeps one.
        &self.entries[self.entries.len() - 1]
    }

    /// The entry below the top, i.e. where going back leads.
    pub fn previous(&self) -> Option<&NodeId> {
        self.entries.len().checked_sub(2).map(|i| &self.entries[i])
    }

    /// Index of the first occurrence of `id`.
    pub fn position(&self, id: &NodeId) -> Option<usize> {
        self.entries.iter().position(|entry| entry == id)
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[NodeId] {
        &self.entries
    }

    /// Number of distinct nodes ever recorded this session.
    pub fn unique_count(&self) -> usize {
        self.visited.len()
    }

    /// Check if a node was visited at any point this session.
    pub fn has_visited(&self, id: &NodeId) -> bool {
        self.visited.contains(id)
    }
}
