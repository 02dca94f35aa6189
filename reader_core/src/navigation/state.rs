//! Navigation state and transition bookkeeping.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::history::HistoryStack;
use story_book::NodeId;

/// What kind of move a navigation request is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavMode {
    /// Follow a choice; the target is pushed onto the history.
    Forward,
    /// Return to the previous history entry.
    Back,
    /// Return to an earlier visited node, discarding everything after it.
    Jump,
    /// Start over from the first node.
    Restart,
}

/// Whether the controller accepts navigation requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Idle,
    Transitioning,
}

/// The two timed halves of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionStage {
    /// The old page is animating out; the history is not yet changed.
    Exiting,
    /// The new page is animating in; input is still refused.
    Settling,
}

/// Result of a request that passed validation or hit the single-flight guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// A transition began.
    Started,
    /// Another transition was in flight; the request was dropped.
    Ignored,
}

/// A transition in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Transition {
    /// Node that becomes current when the exit stage ends.
    pub target: NodeId,
    pub mode: NavMode,
    pub stage: TransitionStage,
    /// Time left in the current stage.
    pub remaining: Duration,
}

/// Where the reader is and where they have been.
///
/// Owned by the navigation controller; everything else only reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub(crate) current: NodeId,
    pub(crate) history: HistoryStack,
    pub(crate) phase: Phase,
}

impl NavigationState {
    /// Idle state positioned at the top of `history`.
    pub(crate) fn new(history: HistoryStack) -> Self {
        Self {
            current: history.top().clone(),
            history,
            phase: Phase::Idle,
        }
    }

    pub fn current(&self) -> &NodeId {
        &self.current
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }
}
