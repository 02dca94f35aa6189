//! Navigation events - the contract with the render surface.
//!
//! Within a transition the surface sees `Exit` before the history changes and
//! `Enter` after it, each carrying the then-current node, followed by
//! `Settled` once input is accepted again. The core never waits on the surface.

use serde::{Deserialize, Serialize};

use story_book::StoryNode;

/// Derived control state, recomputed whenever a transition settles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlState {
    pub can_go_back: bool,
    pub can_go_forward: bool,
    /// Share of story nodes visited this session, in `[0, 1]`.
    pub progress: f32,
}

/// Signals emitted to the render surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NavigationEvent {
    /// The current node is about to be left.
    Exit(StoryNode),
    /// A node became current.
    Enter(StoryNode),
    /// The transition finished; controls may be re-enabled.
    Settled(ControlState),
}

impl NavigationEvent {
    /// The node carried by an exit or enter signal.
    pub fn node(&self) -> Option<&StoryNode> {
        match self {
            NavigationEvent::Exit(node) | NavigationEvent::Enter(node) => Some(node),
            NavigationEvent::Settled(_) => None,
        }
    }
}

/// Consumer of navigation events.
pub trait RenderSurface {
    fn emit(&mut self, event: NavigationEvent);
}

/// Recording surface.
impl RenderSurface for Vec<NavigationEvent> {
    fn emit(&mut self, event: NavigationEvent) {
        self.push(event);
    }
}
