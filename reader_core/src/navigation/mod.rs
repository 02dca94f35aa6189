//! Navigation - the transition state machine.
//!
//! A request moves through these steps:
//! 1. **Guard**: dropped silently while another transition is in flight
//! 2. **Validate**: rejected, without side effects, if the target is unusable
//! 3. **Exit**: the surface gets `Exit` and audio stops immediately
//! 4. **Mutate**: after the exit delay the history changes, is saved, the new
//!    node's audio starts and the surface gets `Enter`
//! 5. **Settle**: after the settle delay the controller is idle again and the
//!    surface gets the recomputed controls
//!
//! The host drives the delays through [`NavigationController::advance`].

mod state;

pub use state::*;

use std::time::Duration;
use tracing::{debug, info, warn};

use crate::audio::{AudioBackend, AudioController};
use crate::config::ReaderConfig;
use crate::error::NavigationError;
use crate::events::{ControlState, NavigationEvent, RenderSurface};
use crate::history::HistoryStack;
use crate::persistence::PersistenceAdapter;
use story_book::{NodeId, StoryGraph, StoryNode};

/// Orchestrates every move through the story.
pub struct NavigationController<P, B, R> {
    graph: StoryGraph,
    state: NavigationState,
    transition: Option<Transition>,
    persistence: P,
    audio: AudioController<B>,
    surface: R,
    config: ReaderConfig,
}

impl<P, B, R> NavigationController<P, B, R>
where
    P: PersistenceAdapter,
    B: AudioBackend,
    R: RenderSurface,
{
    /// Start a reading session.
    ///
    /// Resumes from the saved history when it is usable, otherwise starts at
    /// the first node. The current node is then entered, its audio started,
    /// and the initial controls published.
    pub fn start(
        graph: StoryGraph,
        persistence: P,
        backend: B,
        surface: R,
        config: ReaderConfig,
    ) -> Self {
        let history = resume_history(&graph, &persistence)
            .unwrap_or_else(|| HistoryStack::new(graph.first_node_id().clone()));
        let audio = AudioController::new(backend, &config);

        let mut controller = Self {
            graph,
            state: NavigationState::new(history),
            transition: None,
            persistence,
            audio,
            surface,
            config,
        };

        info!(
            node = %controller.state.current,
            depth = controller.state.history.len(),
            "Reader session started"
        );
        controller.enter_current();
        controller.publish_controls();
        controller
    }

    /// Request a move.
    ///
    /// Returns `Ignored` while a transition is in flight. Validation errors
    /// leave the state, the audio, the store and the surface untouched.
    pub fn navigate(
        &mut self,
        target: NodeId,
        mode: NavMode,
    ) -> Result<NavOutcome, NavigationError> {
        if !self.state.is_idle() {
            debug!(%target, ?mode, "Transition in flight, request dropped");
            return Ok(NavOutcome::Ignored);
        }
        if let Err(e) = self.validate(&target, mode) {
            debug!(%target, ?mode, error = %e, "Navigation rejected");
            return Err(e);
        }

        let target = match mode {
            NavMode::Restart => self.graph.first_node_id().clone(),
            _ => target,
        };
        debug!(from = %self.state.current, to = %target, ?mode, "Transition started");

        self.state.phase = Phase::Transitioning;
        self.transition = Some(Transition {
            target,
            mode,
            stage: TransitionStage::Exiting,
            remaining: self.config.exit_delay(),
        });

        let leaving = self.current_node().clone();
        self.surface.emit(NavigationEvent::Exit(leaving));
        self.audio.stop();

        Ok(NavOutcome::Started)
    }

    /// Follow the current node's choice at `index`.
    pub fn choose(&mut self, index: usize) -> Result<NavOutcome, NavigationError> {
        if !self.state.is_idle() {
            return Ok(NavOutcome::Ignored);
        }
        let target = self
            .current_node()
            .choices
            .get(index)
            .map(|choice| choice.target.clone())
            .ok_or(NavigationError::NoSuchChoice(index))?;
        self.navigate(target, NavMode::Forward)
    }

    /// Turn the page of a continuation node.
    pub fn go_forward(&mut self) -> Result<NavOutcome, NavigationError> {
        if !self.state.is_idle() {
            return Ok(NavOutcome::Ignored);
        }
        let target = self
            .current_node()
            .forward_choice()
            .map(|choice| choice.target.clone())
            .ok_or(NavigationError::NoForwardChoice)?;
        self.navigate(target, NavMode::Forward)
    }

    /// Return to the previous history entry.
    pub fn go_back(&mut self) -> Result<NavOutcome, NavigationError> {
        if !self.state.is_idle() {
            return Ok(NavOutcome::Ignored);
        }
        let target = self
            .state
            .history
            .previous()
            .cloned()
            .ok_or(NavigationError::Underflow)?;
        self.navigate(target, NavMode::Back)
    }

    /// Return to an earlier visited node, discarding the branch after it.
    pub fn jump_to(&mut self, target: NodeId) -> Result<NavOutcome, NavigationError> {
        self.navigate(target, NavMode::Jump)
    }

    /// Start over from the first node.
    pub fn restart(&mut self) -> Result<NavOutcome, NavigationError> {
        let first = self.graph.first_node_id().clone();
        self.navigate(first, NavMode::Restart)
    }

    /// Let `elapsed` time pass, firing any stage whose delay runs out.
    ///
    /// A single call may run a transition all the way back to idle.
    pub fn advance(&mut self, elapsed: Duration) {
        let mut budget = elapsed;
        while let Some(transition) = self.transition.as_mut() {
            if budget < transition.remaining {
                transition.remaining -= budget;
                return;
            }
            budget -= transition.remaining;
            let stage = transition.stage;
            match stage {
                TransitionStage::Exiting => self.complete_exit(),
                TransitionStage::Settling => self.complete_settle(),
            }
        }
    }

    /// Run the transition in flight to completion.
    pub fn finish_transition(&mut self) {
        while let Some(remaining) = self.transition.as_ref().map(|t| t.remaining) {
            self.advance(remaining);
        }
    }

    /// Time until the current transition returns to idle.
    pub fn remaining_time(&self) -> Option<Duration> {
        self.transition.as_ref().map(|t| match t.stage {
            TransitionStage::Exiting => t.remaining + self.config.settle_delay(),
            TransitionStage::Settling => t.remaining,
        })
    }

    /// Apply a mute preference change to the current node's audio.
    ///
    /// During the exit stage the node being left stays silent; an unmute
    /// takes effect when the next node is entered.
    pub fn set_muted(&mut self, muted: bool) {
        match self.stage() {
            Some(TransitionStage::Exiting) => self.audio.set_muted_deferred(muted),
            _ => self.audio.set_muted(muted, &self.graph[&self.state.current]),
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.state.is_idle() && self.state.history.len() > 1
    }

    /// Only continuation nodes can be turned with a single control.
    pub fn can_go_forward(&self) -> bool {
        self.state.is_idle() && self.current_node().forward_choice().is_some()
    }

    /// Share of the story visited this session, in `[0, 1]`.
    ///
    /// Never decreases within a session: back, jump and restart keep the
    /// visited set.
    pub fn progress(&self) -> f32 {
        let total = self.graph.len();
        if total == 0 {
            return 0.0;
        }
        (self.state.history.unique_count() as f32 / total as f32).clamp(0.0, 1.0)
    }

    pub fn controls(&self) -> ControlState {
        ControlState {
            can_go_back: self.can_go_back(),
            can_go_forward: self.can_go_forward(),
            progress: self.progress(),
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Stage of the transition in flight, if any.
    pub fn stage(&self) -> Option<TransitionStage> {
        self.transition.as_ref().map(|t| t.stage)
    }

    pub fn current_node_id(&self) -> &NodeId {
        &self.state.current
    }

    pub fn current_node(&self) -> &StoryNode {
        &self.graph[&self.state.current]
    }

    pub fn history(&self) -> &HistoryStack {
        &self.state.history
    }

    pub fn graph(&self) -> &StoryGraph {
        &self.graph
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    pub fn audio(&self) -> &AudioController<B> {
        &self.audio
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut R {
        &mut self.surface
    }

    /// Check a request against the graph and the history.
    fn validate(&self, target: &NodeId, mode: NavMode) -> Result<(), NavigationError> {
        if mode == NavMode::Back {
            let previous = self
                .state
                .history
                .previous()
                .ok_or(NavigationError::Underflow)?;
            if previous != target {
                return Err(NavigationError::BackTargetMismatch {
                    expected: previous.clone(),
                    requested: target.clone(),
                });
            }
            return Ok(());
        }

        if !self.graph.contains(target) {
            return Err(NavigationError::NotFound(target.clone()));
        }
        if mode == NavMode::Jump && !self.state.history.contains(target) {
            return Err(NavigationError::NotInHistory(target.clone()));
        }
        Ok(())
    }

    /// End of the exit stage: mutate the history and enter the new node.
    fn complete_exit(&mut self) {
        let Some(transition) = self.transition.as_mut() else {
            return;
        };
        transition.stage = TransitionStage::Settling;
        transition.remaining = self.config.settle_delay();
        let target = transition.target.clone();
        let mode = transition.mode;

        let history = &mut self.state.history;
        match mode {
            NavMode::Forward => {
                history.push(target);
            }
            NavMode::Back => {
                if let Err(e) = history.pop() {
                    warn!(error = %e, "Back transition found nothing to pop");
                }
            }
            NavMode::Jump => {
                history.truncate_after(&target);
            }
            NavMode::Restart => {
                info!(node = %target, "Story restarted");
                history.reset(target);
            }
        }
        self.state.current = history.top().clone();

        if let Err(e) = self.persistence.save_history(self.state.history.entries()) {
            warn!(error = %e, "Failed to save reading history");
        }
        self.enter_current();
    }

    /// End of the settle stage: accept input again.
    fn complete_settle(&mut self) {
        self.transition = None;
        self.state.phase = Phase::Idle;
        debug!(node = %self.state.current, "Transition settled");
        self.publish_controls();
    }

    fn enter_current(&mut self) {
        let node = &self.graph[&self.state.current];
        self.audio.play_for_node(node);
        self.surface.emit(NavigationEvent::Enter(node.clone()));
    }

    fn publish_controls(&mut self) {
        let controls = self.controls();
        self.surface.emit(NavigationEvent::Settled(controls));
    }
}

/// Saved history, if present and consistent with the graph.
fn resume_history<P: PersistenceAdapter>(
    graph: &StoryGraph,
    persistence: &P,
) -> Option<HistoryStack> {
    let entries = match persistence.load_history() {
        Ok(Some(entries)) => entries,
        Ok(None) => return None,
        Err(e) => {
            warn!(error = %e, "Saved history unreadable, starting from the first node");
            return None;
        }
    };

    if let Some(missing) = entries.iter().find(|id| !graph.contains(id)) {
        warn!(node = %missing, "Saved history names an unknown node, starting from the first node");
        return None;
    }
    HistoryStack::from_entries(entries)
}
