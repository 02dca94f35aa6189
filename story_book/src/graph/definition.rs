//! Story definition normalization.
//!
//! Stories arrive either as a flat sequence of node records or nested under a
//! container field. Both shapes are flattened here into one list of records,
//! and nowhere else.

use serde_json::Value;

use crate::error::StoryError;
use crate::nodes::StoryNode;

/// Container fields that may hold the node sequence, checked in order.
pub const CONTAINER_FIELDS: [&str; 3] = ["pages", "nodes", "story"];

/// Flatten a definition into its node records.
pub(crate) fn node_records(root: Value) -> Result<Vec<Value>, StoryError> {
    match root {
        Value::Array(records) => Ok(records),
        Value::Object(mut fields) => CONTAINER_FIELDS
            .iter()
            .find_map(|field| match fields.remove(*field) {
                Some(Value::Array(records)) => Some(records),
                _ => None,
            })
            .ok_or(StoryError::UnexpectedShape),
        _ => Err(StoryError::UnexpectedShape),
    }
}

/// Parse every record into a node, reporting the first one that is not node-shaped.
pub(crate) fn parse_nodes(records: Vec<Value>) -> Result<Vec<StoryNode>, StoryError> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            serde_json::from_value(record).map_err(|e| StoryError::InvalidRecord {
                index,
                reason: e.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flat_sequence() {
        let records = node_records(json!([{"id": 1}, {"id": 2}])).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_nested_under_container() {
        for field in CONTAINER_FIELDS {
            let records = node_records(json!({ field: [{"id": 1}] })).unwrap();
            assert_eq!(records.len(), 1, "field {}", field);
        }
    }

    #[test]
    fn test_unexpected_shapes() {
        assert!(matches!(node_records(json!(5)), Err(StoryError::UnexpectedShape)));
        assert!(matches!(
            node_records(json!({"chapters": []})),
            Err(StoryError::UnexpectedShape)
        ));
        assert!(matches!(
            node_records(json!({"pages": "not a list"})),
            Err(StoryError::UnexpectedShape)
        ));
    }

    #[test]
    fn test_record_must_be_node_shaped() {
        let err = parse_nodes(vec![json!({"id": 1}), json!("page two")]).unwrap_err();
        assert!(matches!(err, StoryError::InvalidRecord { index: 1, .. }));

        let err = parse_nodes(vec![json!({"scenes": ["no id"]})]).unwrap_err();
        assert!(matches!(err, StoryError::InvalidRecord { index: 0, .. }));
    }
}
