//! Recording fakes shared by the unit tests.

use std::collections::HashSet;

use crate::audio::{AudioBackend, ClipId};
use crate::error::{AudioError, PersistError};
use crate::persistence::KeyValueStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    Play(ClipId, String, bool),
    Stop(ClipId),
}

/// Audio backend that records every call.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    pub calls: Vec<BackendCall>,
    pub failing_sources: HashSet<String>,
}

impl RecordingBackend {
    /// Clips started and not yet stopped.
    pub fn playing(&self) -> Vec<ClipId> {
        let mut playing = Vec::new();
        for call in &self.calls {
            match call {
                BackendCall::Play(clip, _, _) => playing.push(*clip),
                BackendCall::Stop(clip) => playing.retain(|c| c != clip),
            }
        }
        playing
    }
}

impl AudioBackend for RecordingBackend {
    fn play(&mut self, clip: ClipId, source: &str, looping: bool) -> Result<(), AudioError> {
        if self.failing_sources.contains(source) {
            return Err(AudioError::Decode(source.to_string()));
        }
        self.calls
            .push(BackendCall::Play(clip, source.to_string(), looping));
        Ok(())
    }

    fn stop(&mut self, clip: ClipId) {
        self.calls.push(BackendCall::Stop(clip));
    }
}

/// Store whose writes always fail; reads return the seeded value.
#[derive(Debug, Default)]
pub struct FailingStore {
    pub seeded: Option<String>,
    pub write_attempts: usize,
}

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, PersistError> {
        Ok(self.seeded.clone())
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), PersistError> {
        self.write_attempts += 1;
        Err(PersistError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only storage",
        )))
    }

    fn remove(&mut self, _key: &str) -> Result<(), PersistError> {
        Ok(())
    }
}
