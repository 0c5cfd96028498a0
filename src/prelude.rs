//! Prelude module for convenient imports
//!
//! Re-exports the types needed to load a blueprint, resolve dependencies and
//! edit field mappings.
//!
//! # Example
//!
//! ```rust,no_run
//! use prefill::prelude::*;
//!
//! # fn run_example(blueprint: BlueprintDefinition) {
//! let nodes = map_nodes(&blueprint.forms, &blueprint.nodes);
//! let edges = map_edges(&blueprint.edges);
//!
//! let mut store = GraphStore::new();
//! store.dispatch(GraphAction::Initialize(GraphPayload::new(
//!     nodes,
//!     edges,
//!     GlobalData::default(),
//! )));
//! # }
//! ```

// Loading
pub use crate::api::BlueprintGraphDto;
pub use crate::blueprint::{
    BlueprintDefinition, EdgeDefinition, FieldSchema, Form, IntoBlueprint, NodeDefinition,
    Position,
};
pub use crate::config::EditorConfig;
pub use crate::global::{ActionProperties, ClientOrganizationProperties, GlobalData};
pub use crate::provider::{
    BlueprintProvider, FileBlueprintProvider, FileGlobalDataProvider, GlobalDataProvider,
    StaticBlueprintProvider, StaticGlobalDataProvider,
};

// Resolution and mapping
pub use crate::mapper::{map_edges, map_nodes};
pub use crate::resolver::{DependencyData, DependencyForm, DependencyResolver, resolve_dependencies};

// State
pub use crate::state::{
    FieldMapping, FieldMappings, GraphAction, GraphEdge, GraphNode, GraphNodeData, GraphPayload,
    GraphState, GraphStore, StorePhase, reduce,
};

// Picker
pub use crate::sections::{
    DataOption, DataSection, SectionContent, SectionKind, build_data_sections, format_field_label,
};
pub use crate::session::{EditorSession, FieldPicker, FieldSelection, NodeMappingView};

// Error types
pub use crate::error::{BlueprintConversionError, ConfigError, ProviderError, SessionError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
