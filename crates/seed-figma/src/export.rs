//! Export payload loading and root resolution.

use crate::error::{FigmaError, Result};
use crate::node::Node;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Top-level payload of a design-tool export.
///
/// Exports come in several shapes: a single-node response carries the tree
/// under `node`, a file response under `document`, and a bare node is the
/// tree itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<Node>,
    /// The payload read as a node in its own right.
    #[serde(flatten)]
    pub body: Node,
}

impl ExportPayload {
    /// Parse a payload from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Parse a payload from JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Self::from_value(serde_json::from_slice(bytes)?)
    }

    /// Build a payload from an already parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        if !value.is_object() {
            return Err(FigmaError::invalid(format!(
                "expected a JSON object, found {}",
                json_kind(&value)
            )));
        }
        let payload: Self = serde_json::from_value(value)?;
        debug!(
            has_node = payload.node.is_some(),
            has_document = payload.document.is_some(),
            "loaded export payload"
        );
        Ok(payload)
    }

    /// The tree root: `node`, else `document`, else the payload itself.
    pub fn root(&self) -> &Node {
        self.node
            .as_ref()
            .or(self.document.as_ref())
            .unwrap_or(&self.body)
    }
}

impl From<Node> for ExportPayload {
    fn from(body: Node) -> Self {
        Self {
            node: None,
            document: None,
            body,
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeType;

    #[test]
    fn test_root_prefers_node() {
        let payload = ExportPayload::from_json_str(
            r#"{
                "name": "payload",
                "node": { "type": "FRAME", "name": "from node" },
                "document": { "type": "DOCUMENT", "name": "from document" }
            }"#,
        )
        .unwrap();
        assert_eq!(payload.root().name, "from node");
    }

    #[test]
    fn test_root_falls_back_to_document() {
        let payload = ExportPayload::from_json_str(
            r#"{ "name": "file", "document": { "type": "DOCUMENT", "name": "doc" } }"#,
        )
        .unwrap();
        assert_eq!(payload.root().name, "doc");
        assert_eq!(payload.root().node_type, NodeType::Document);
    }

    #[test]
    fn test_root_falls_back_to_self() {
        let payload = ExportPayload::from_slice(
            br#"{ "type": "FRAME", "name": "bare", "children": [{ "type": "INSTANCE", "name": "Button" }] }"#,
        )
        .unwrap();
        let root = payload.root();
        assert_eq!(root.name, "bare");
        assert_eq!(root.children().len(), 1);
    }

    #[test]
    fn test_non_object_payload_is_rejected() {
        let err = ExportPayload::from_json_str("[1, 2]").unwrap_err();
        assert!(matches!(err, FigmaError::InvalidExport(_)));
        assert_eq!(err.to_string(), "invalid export: expected a JSON object, found an array");
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let err = ExportPayload::from_json_str("{ \"name\": ").unwrap_err();
        assert!(matches!(err, FigmaError::Json(_)));
    }

    #[test]
    fn test_from_node() {
        let payload = ExportPayload::from(Node::instance("Button"));
        assert!(payload.root().is_instance());
    }
}
