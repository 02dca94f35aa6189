//! Audio - at most one clip playing, always tied to the current node.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::ReaderConfig;
use crate::error::AudioError;
use story_book::{NodeId, StoryNode};

/// Handle of a clip started on the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClipId(pub Uuid);

impl ClipId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ClipId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ClipId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Platform audio output.
pub trait AudioBackend {
    /// Start playing `source` under the given handle.
    fn play(&mut self, clip: ClipId, source: &str, looping: bool) -> Result<(), AudioError>;

    /// Pause the clip, rewind it and release its handle.
    fn stop(&mut self, clip: ClipId);
}

/// The clip currently playing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveClip {
    pub id: ClipId,
    pub node: NodeId,
    pub source: String,
}

/// Enforces the one-clip policy and the mute contract over a backend.
#[derive(Debug)]
pub struct AudioController<B> {
    backend: B,
    muted: bool,
    active: Option<ActiveClip>,
    sound_dir: String,
    looping: bool,
}

impl<B: AudioBackend> AudioController<B> {
    pub fn new(backend: B, config: &ReaderConfig) -> Self {
        Self {
            backend,
            muted: config.muted,
            active: None,
            sound_dir: config.sound_dir.clone(),
            looping: config.loop_sounds,
        }
    }

    /// Switch playback to the given node.
    ///
    /// The previous clip is always stopped first. Nothing new starts if the
    /// node has no sound or audio is muted. A backend failure is logged and
    /// leaves no clip active.
    pub fn play_for_node(&mut self, node: &StoryNode) {
        self.stop();
        if self.muted {
            return;
        }
        let Some(sound) = node.sound.as_deref() else {
            return;
        };

        let source = self.source_for(sound);
        let clip = ClipId::new();
        match self.backend.play(clip, &source, self.looping) {
            Ok(()) => {
                debug!(node = %node.id, %clip, %source, "Started node audio");
                self.active = Some(ActiveClip {
                    id: clip,
                    node: node.id.clone(),
                    source,
                });
            }
            Err(e) => warn!(node = %node.id, %source, error = %e, "Failed to start node audio"),
        }
    }

    /// Stop the active clip, if any.
    pub fn stop(&mut self) {
        if let Some(clip) = self.active.take() {
            self.backend.stop(clip.id);
        }
    }

    /// Apply a mute preference change.
    ///
    /// Muting stops the active clip; unmuting restarts the current node's clip.
    pub fn set_muted(&mut self, muted: bool, current: &StoryNode) {
        if muted == self.muted {
            return;
        }
        self.muted = muted;
        if muted {
            self.stop();
        } else {
            self.play_for_node(current);
        }
    }

    /// Apply a mute preference change without starting any clip.
    ///
    /// Muting still stops the active clip. Used while no node is current.
    pub fn set_muted_deferred(&mut self, muted: bool) {
        self.muted = muted;
        if muted {
            self.stop();
        }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn active(&self) -> Option<&ActiveClip> {
        self.active.as_ref()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    fn source_for(&self, sound: &str) -> String {
        if self.sound_dir.is_empty() {
            sound.to_string()
        } else {
            format!("{}/{}", self.sound_dir.trim_end_matches('/'), sound)
        }
    }
}
