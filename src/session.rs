//! The editor session: one graph store plus the prefill commands a shell issues.
//!
//! A session is created per editor instance and passed by reference to whatever
//! drives it. It owns the only [`GraphStore`], so every transition goes through
//! it one at a time.

use crate::blueprint::IntoBlueprint;
use crate::error::{ProviderError, SessionError};
use crate::mapper::{map_edges, map_nodes};
use crate::provider::{BlueprintProvider, GlobalDataProvider};
use crate::sections::{DataOption, DataSection, build_data_sections};
use crate::state::{FieldMapping, GraphAction, GraphNode, GraphPayload, GraphState, GraphStore};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, warn};

/// The field the picker is currently open for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSelection {
    pub node_id: String,
    pub field: String,
}

/// One form field of the selected node together with its current mapping.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldRow {
    pub field: String,
    pub mapping: Option<FieldMapping>,
}

/// Read-only view of a node's fields and mappings, in form order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeMappingView {
    pub node_id: String,
    pub label: String,
    pub fields: Vec<FieldRow>,
}

impl NodeMappingView {
    fn of(node: &GraphNode) -> Self {
        Self {
            node_id: node.id.to_string(),
            label: node.data.label.to_string(),
            fields: node
                .data
                .form_fields
                .iter()
                .map(|field| FieldRow {
                    field: field.clone(),
                    mapping: node.mapping(field).cloned(),
                })
                .collect(),
        }
    }

    pub fn mapped_count(&self) -> usize {
        self.fields.iter().filter(|row| row.mapping.is_some()).count()
    }
}

/// Options offered for one field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldPicker {
    pub node_id: String,
    pub field: String,
    pub sections: Vec<DataSection>,
}

impl FieldPicker {
    /// Looks an option up by its `value` path across all sections.
    pub fn find_option(&self, value: &str) -> Option<&DataOption> {
        self.sections
            .iter()
            .find_map(|section| section.find_option(value))
    }
}

#[derive(Debug, Default)]
pub struct EditorSession {
    store: GraphStore,
    selection: Option<FieldSelection>,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    pub fn state(&self) -> Arc<GraphState> {
        self.store.state()
    }

    pub fn selection(&self) -> Option<&FieldSelection> {
        self.selection.as_ref()
    }

    /// Fetches the blueprint and the global data concurrently and initializes
    /// the store once both have arrived.
    ///
    /// If either fetch fails the error is returned and the store keeps its
    /// previous state.
    pub async fn load<B, G>(&mut self, blueprints: &B, globals: &G) -> Result<(), SessionError>
    where
        B: BlueprintProvider + ?Sized,
        G: GlobalDataProvider + ?Sized,
    {
        if self.store.is_ready() {
            warn!("Reloading a session that is already initialized");
        }

        let (graph, global_data) =
            tokio::try_join!(blueprints.fetch_blueprint(), globals.fetch_global_data())
                .inspect_err(|e| error!(error = %e, "Failed to load blueprint session data"))?;

        let blueprint = graph.into_blueprint().map_err(ProviderError::from)?;
        info!(
            nodes = blueprint.nodes.len(),
            edges = blueprint.edges.len(),
            forms = blueprint.forms.len(),
            "Blueprint fetched"
        );

        let nodes = map_nodes(&blueprint.forms, &blueprint.nodes);
        let edges = map_edges(&blueprint.edges);
        self.selection = None;
        self.store.dispatch(GraphAction::Initialize(GraphPayload::new(
            nodes,
            edges,
            global_data,
        )));
        Ok(())
    }

    /// Opens the field-mapping view of a node.
    pub fn select_node(&self, node_id: &str) -> Result<NodeMappingView, SessionError> {
        let state = self.ready_state()?;
        let node = find_node(&state, node_id)?;
        Ok(NodeMappingView::of(node))
    }

    /// Opens the data-source picker for one field of a node.
    pub fn select_field(
        &mut self,
        node_id: &str,
        field: &str,
    ) -> Result<FieldPicker, SessionError> {
        let state = self.ready_state()?;
        let node = find_node(&state, node_id)?;
        if !node.has_field(field) {
            return Err(SessionError::FieldNotFound {
                node_id: node_id.to_string(),
                field: field.to_string(),
            });
        }

        let sections = build_data_sections(&node.data.dependency_data, &state.global_data);
        self.selection = Some(FieldSelection {
            node_id: node_id.to_string(),
            field: field.to_string(),
        });
        Ok(FieldPicker {
            node_id: node_id.to_string(),
            field: field.to_string(),
            sections,
        })
    }

    /// Maps the selected field to `option` and closes the picker.
    ///
    /// Without an open picker nothing happens. Returns `true` if the state
    /// changed.
    pub fn pick_option(&mut self, option: &DataOption) -> bool {
        let Some(selection) = self.selection.take() else {
            warn!(value = %option.value, "Ignoring option pick without a selected field");
            return false;
        };
        self.store.dispatch(GraphAction::SetFieldMapping {
            node_id: selection.node_id,
            field_name: selection.field,
            mapping: FieldMapping::new(&option.label, &option.value, &option.source),
        })
    }

    /// Closes the picker without mapping anything.
    pub fn close_picker(&mut self) {
        self.selection = None;
    }

    /// Removes the mapping of `field` on `node_id`. Returns `true` if the state
    /// changed.
    pub fn remove_mapping(&mut self, node_id: &str, field: &str) -> bool {
        self.store.dispatch(GraphAction::RemoveFieldMapping {
            node_id: node_id.to_string(),
            field_name: field.to_string(),
        })
    }

    fn ready_state(&self) -> Result<Arc<GraphState>, SessionError> {
        if !self.store.is_ready() {
            return Err(SessionError::NotReady);
        }
        Ok(self.store.state())
    }
}

fn find_node<'s>(state: &'s GraphState, node_id: &str) -> Result<&'s GraphNode, SessionError> {
    state
        .node(node_id)
        .map(Arc::as_ref)
        .ok_or_else(|| SessionError::NodeNotFound(node_id.to_string()))
}
