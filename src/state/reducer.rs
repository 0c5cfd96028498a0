use super::{FieldMapping, FieldMappings, GraphEdge, GraphNode, GraphState};
use crate::global::GlobalData;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A state transition request.
///
/// Serialized as `{"type": ..., "payload": ...}`. Any unrecognised `type`
/// deserializes to [`GraphAction::Unknown`], which leaves the state untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GraphAction {
    Initialize(GraphPayload),
    #[serde(rename_all = "camelCase")]
    SetFieldMapping {
        node_id: String,
        field_name: String,
        mapping: FieldMapping,
    },
    #[serde(rename_all = "camelCase")]
    RemoveFieldMapping { node_id: String, field_name: String },
    #[serde(other)]
    Unknown,
}

/// Initialization payload. Fields left as `None` keep their previous value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes: Option<Vec<GraphNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edges: Option<Vec<GraphEdge>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_data: Option<GlobalData>,
}

impl GraphPayload {
    pub fn new(nodes: Vec<GraphNode>, edges: Vec<GraphEdge>, global_data: GlobalData) -> Self {
        Self {
            nodes: Some(nodes),
            edges: Some(edges),
            global_data: Some(global_data),
        }
    }
}

/// Applies `action` to `state` and returns the next state.
///
/// Returns the very same `Arc` when nothing can change: unknown actions and
/// mapping transitions addressed to a node that does not exist.
pub fn reduce(state: &Arc<GraphState>, action: GraphAction) -> Arc<GraphState> {
    match action {
        GraphAction::Initialize(payload) => initialize(state, payload),
        GraphAction::SetFieldMapping {
            node_id,
            field_name,
            mapping,
        } => update_field_mappings(state, &node_id, |current| {
            let mut next = current.clone();
            next.insert(field_name.clone(), mapping.clone());
            next
        }),
        GraphAction::RemoveFieldMapping {
            node_id,
            field_name,
        } => update_field_mappings(state, &node_id, |current| {
            let mut next = current.clone();
            next.shift_remove(&field_name);
            next
        }),
        GraphAction::Unknown => Arc::clone(state),
    }
}

fn initialize(state: &Arc<GraphState>, payload: GraphPayload) -> Arc<GraphState> {
    Arc::new(GraphState {
        nodes: match payload.nodes {
            Some(nodes) => nodes.into_iter().map(Arc::new).collect(),
            None => state.nodes.clone(),
        },
        edges: match payload.edges {
            Some(edges) => edges.into(),
            None => Arc::clone(&state.edges),
        },
        global_data: match payload.global_data {
            Some(global_data) => Arc::new(global_data),
            None => Arc::clone(&state.global_data),
        },
    })
}

/// Rebuilds every node whose ID matches with the table produced by `edit`.
/// All other nodes are shared with `state`.
fn update_field_mappings<F>(state: &Arc<GraphState>, node_id: &str, edit: F) -> Arc<GraphState>
where
    F: Fn(&FieldMappings) -> FieldMappings,
{
    if state.node(node_id).is_none() {
        return Arc::clone(state);
    }

    let nodes = state
        .nodes
        .iter()
        .map(|node| {
            if &*node.id == node_id {
                Arc::new(node.with_field_mappings(edit(&node.data.field_mappings)))
            } else {
                Arc::clone(node)
            }
        })
        .collect();

    Arc::new(GraphState {
        nodes,
        edges: Arc::clone(&state.edges),
        global_data: Arc::clone(&state.global_data),
    })
}
