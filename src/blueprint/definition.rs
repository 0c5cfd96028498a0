use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The canonical definition of an action blueprint: its nodes, the visual edges
/// between them, and the forms they are bound to.
#[derive(Debug, Clone, Default)]
pub struct BlueprintDefinition {
    pub nodes: Vec<NodeDefinition>,
    pub edges: Vec<EdgeDefinition>,
    pub forms: Vec<Form>,
}

/// A single form node of the blueprint.
///
/// `prerequisites` is the authoritative list of upstream nodes; the visual
/// edge list is never consulted for dependency logic.
#[derive(Debug, Clone)]
pub struct NodeDefinition {
    pub id: String,
    pub name: String,
    pub node_type: String,
    pub position: Position,
    pub form_reference: String,
    pub prerequisites: Vec<String>,
}

/// Canvas coordinates of a node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Defines a display-only connection between two nodes.
#[derive(Debug, Clone)]
pub struct EdgeDefinition {
    pub source: String,
    pub target: String,
}

/// A reusable field-schema definition bound to one or more nodes.
#[derive(Debug, Clone)]
pub struct Form {
    pub id: String,
    pub name: String,
    pub field_schema: FieldSchema,
}

#[derive(Debug, Clone, Default)]
pub struct FieldSchema {
    /// Field metadata keyed by field name, in document order.
    pub properties: Map<String, Value>,
    pub required: Vec<String>,
}

impl Form {
    /// The form's field keys in document order.
    pub fn fields(&self) -> Vec<String> {
        self.field_schema.properties.keys().cloned().collect()
    }
}
