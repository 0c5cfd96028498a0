//! Runtime graph state and its field-mapping transitions.
//!
//! Every transition produces a new [`GraphState`] behind a fresh `Arc`, copying
//! only the levels it touches (state, touched node, touched mapping table).
//! Untouched nodes, the edge list and the global data stay pointer-identical to
//! the previous state, so callers can skip work with `Arc::ptr_eq`.

mod reducer;
mod store;

pub use reducer::{GraphAction, GraphPayload, reduce};
pub use store::{GraphStore, StorePhase};

use crate::blueprint::Position;
use crate::global::GlobalData;
use crate::resolver::DependencyData;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Field mappings of one node, keyed by form field name in insertion order.
pub type FieldMappings = IndexMap<String, FieldMapping>;

/// Assignment of a form field to a data source.
///
/// `value` is a dotted path `<origin>.<field>` where the origin is a dependency
/// node ID or one of the global tokens `action` / `organization`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldMapping {
    pub label: String,
    pub value: String,
    pub source: String,
}

impl FieldMapping {
    pub fn new(
        label: impl Into<String>,
        value: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            source: source.into(),
        }
    }
}

impl fmt::Display for FieldMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.source, self.label)
    }
}

/// A rendered blueprint node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: Arc<str>,
    pub position: Position,
    #[serde(rename = "type")]
    pub node_type: Arc<str>,
    pub data: GraphNodeData,
}

/// Everything except `field_mappings` is fixed once the node is mapped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNodeData {
    pub label: Arc<str>,
    pub form_fields: Arc<[String]>,
    pub form_id: Arc<str>,
    pub dependency_data: Arc<DependencyData>,
    pub field_mappings: Arc<FieldMappings>,
}

impl GraphNode {
    /// Shallow copy of this node carrying a new mapping table. Every other
    /// attribute shares its allocation with `self`.
    pub fn with_field_mappings(&self, field_mappings: FieldMappings) -> GraphNode {
        GraphNode {
            id: Arc::clone(&self.id),
            position: self.position,
            node_type: Arc::clone(&self.node_type),
            data: GraphNodeData {
                label: Arc::clone(&self.data.label),
                form_fields: Arc::clone(&self.data.form_fields),
                form_id: Arc::clone(&self.data.form_id),
                dependency_data: Arc::clone(&self.data.dependency_data),
                field_mappings: Arc::new(field_mappings),
            },
        }
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.data.form_fields.iter().any(|f| f == field)
    }

    pub fn mapping(&self, field: &str) -> Option<&FieldMapping> {
        self.data.field_mappings.get(field)
    }
}

/// Display-only connection between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

/// The single session-wide state value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphState {
    pub nodes: Vec<Arc<GraphNode>>,
    pub edges: Arc<[GraphEdge]>,
    pub global_data: Arc<GlobalData>,
}

impl GraphState {
    pub fn node(&self, node_id: &str) -> Option<&Arc<GraphNode>> {
        self.nodes.iter().find(|node| &*node.id == node_id)
    }
}
