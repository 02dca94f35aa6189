//! Story node definition.

use serde::{Deserialize, Serialize};

use super::{Choice, NodeId, NodeKind};

/// A single unit of story content.
///
/// Every optional part of a record is normalized at load time: absent lists
/// become empty, so downstream code never re-checks for existence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryNode {
    pub id: NodeId,

    /// Printed page number, for display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    #[serde(default)]
    pub images: Vec<String>,

    /// Text blocks shown on the page.
    #[serde(default)]
    pub scenes: Vec<String>,

    /// Sound reference, relative to the reader's sound directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,

    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl StoryNode {
    /// Create an empty node with the given id.
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            page: None,
            images: Vec::new(),
            scenes: Vec::new(),
            sound: None,
            choices: Vec::new(),
        }
    }

    /// Set the display page number.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Add an image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.images.push(image.into());
        self
    }

    /// Add a text block.
    pub fn with_scene(mut self, scene: impl Into<String>) -> Self {
        self.scenes.push(scene.into());
        self
    }

    /// Set the sound reference.
    pub fn with_sound(mut self, sound: impl Into<String>) -> Self {
        self.sound = Some(sound.into());
        self
    }

    /// Add an outgoing choice.
    pub fn with_choice(mut self, label: impl Into<String>, target: impl Into<NodeId>) -> Self {
        self.choices.push(Choice::new(label, target));
        self
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::from_choice_count(self.choices.len())
    }

    /// Check if this node is an ending.
    pub fn is_terminal(&self) -> bool {
        self.choices.is_empty()
    }

    /// The only choice of a continuation node.
    ///
    /// Decision nodes return `None`: they need an explicit reader choice.
    pub fn forward_choice(&self) -> Option<&Choice> {
        match self.kind() {
            NodeKind::Continuation => self.choices.first(),
            _ => None,
        }
    }
}
