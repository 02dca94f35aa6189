//! The story graph - immutable lookup over every node of a story.

mod definition;

pub use definition::CONTAINER_FIELDS;

use serde_json::Value;
use std::collections::HashMap;

use crate::error::StoryError;
use crate::nodes::{Choice, NodeId, StoryNode};

/// Mapping from node id to node, built once from a story definition.
///
/// Never mutated after construction. Cycles are legal: revisiting a node is
/// expected in branching stories.
#[derive(Debug, Clone)]
pub struct StoryGraph {
    nodes: HashMap<NodeId, StoryNode>,

    /// Node ids in definition order; the first one is the entry point.
    order: Vec<NodeId>,
}

impl StoryGraph {
    /// Build a graph from already-parsed nodes.
    ///
    /// Fails on duplicate ids and on an empty node list.
    pub fn from_nodes(nodes: impl IntoIterator<Item = StoryNode>) -> Result<Self, StoryError> {
        let mut by_id = HashMap::new();
        let mut order = Vec::new();

        for node in nodes {
            if by_id.contains_key(&node.id) {
                return Err(StoryError::DuplicateId(node.id));
            }
            order.push(node.id.clone());
            by_id.insert(node.id.clone(), node);
        }

        if order.is_empty() {
            return Err(StoryError::Empty);
        }

        Ok(Self {
            nodes: by_id,
            order,
        })
    }

    /// Build a graph from a structured definition (flat or nested).
    pub fn load(definition: Value) -> Result<Self, StoryError> {
        let records = definition::node_records(definition)?;
        Self::from_nodes(definition::parse_nodes(records)?)
    }

    /// Build a graph from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, StoryError> {
        Self::load(serde_json::from_str(text)?)
    }

    /// Build a graph from TOML text with a `[[pages]]` (or `nodes`/`story`) array.
    pub fn from_toml_str(text: &str) -> Result<Self, StoryError> {
        Self::load(toml::from_str(text)?)
    }

    /// Look up a node by id.
    pub fn get(&self, id: &NodeId) -> Option<&StoryNode> {
        self.nodes.get(id)
    }

    /// Check if a node exists.
    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// The entry point: the first node in definition order.
    pub fn first_node_id(&self) -> &NodeId {
        &self.order[0]
    }

    /// Get the total number of nodes.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate over nodes in definition order.
    pub fn nodes(&self) -> impl Iterator<Item = &StoryNode> {
        self.order.iter().filter_map(|id| self.nodes.get(id))
    }

    /// Choices whose target is not in the graph, with the node they leave from.
    ///
    /// Diagnostic only: such choices simply have no effect when followed.
    pub fn dangling_targets(&self) -> Vec<(&NodeId, &Choice)> {
        self.nodes()
            .flat_map(|node| node.choices.iter().map(move |choice| (&node.id, choice)))
            .filter(|(_, choice)| !self.contains(&choice.target))
            .collect()
    }
}

/// Panics if the node is not in the graph; use [`StoryGraph::get`] for untrusted ids.
impl std::ops::Index<&NodeId> for StoryGraph {
    type Output = StoryNode;

    fn index(&self, id: &NodeId) -> &StoryNode {
        &self.nodes[id]
    }
}
