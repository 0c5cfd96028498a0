//! # Prefill - Form Dependency Resolution and Field Mapping
//!
//! **Prefill** powers the data side of an action blueprint editor. A blueprint is
//! a directed graph of form nodes; each node declares the upstream nodes it
//! depends on through its `prerequisites`. Prefill works out, for every node,
//! which upstream forms it can draw values from, and keeps track of which form
//! field is populated from which data source.
//!
//! ## Core Workflow
//!
//! 1.  **Fetch**: A [`BlueprintProvider`](provider::BlueprintProvider) returns the raw graph
//!     payload and a [`GlobalDataProvider`](provider::GlobalDataProvider) returns the
//!     workflow-wide properties. Both are fetched concurrently.
//! 2.  **Convert**: The payload is turned into a canonical
//!     [`BlueprintDefinition`](blueprint::BlueprintDefinition) through the
//!     [`IntoBlueprint`](blueprint::IntoBlueprint) trait.
//! 3.  **Map**: [`map_nodes`](mapper::map_nodes) resolves the direct and transitive
//!     dependencies of every node and produces renderable graph nodes.
//! 4.  **Edit**: The [`GraphStore`](state::GraphStore) applies field-mapping
//!     transitions. [`build_data_sections`](sections::build_data_sections) lists the
//!     data sources a field can be mapped to.
//!
//! [`EditorSession`](session::EditorSession) ties these steps together.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use prefill::prelude::*;
//!
//! # async fn run() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let blueprints = FileBlueprintProvider::new("data/blueprint.json");
//! let globals = StaticGlobalDataProvider::default();
//!
//! let mut session = EditorSession::new();
//! session.load(&blueprints, &globals).await?;
//!
//! // Open the picker for the `email` field of a node and map it to the
//! // action category.
//! let picker = session.select_field("form-d", "email")?;
//! for section in &picker.sections {
//!     println!("{} ({} options)", section.title(), section.options().len());
//! }
//! if let Some(option) = picker.find_option("action.category").cloned() {
//!     session.pick_option(&option);
//! }
//!
//! let view = session.select_node("form-d")?;
//! for row in &view.fields {
//!     match &row.mapping {
//!         Some(mapping) => println!("{} <- {}", row.field, mapping),
//!         None => println!("{} (unmapped)", row.field),
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod blueprint;
pub mod config;
pub mod error;
pub mod global;
pub mod mapper;
pub mod prelude;
pub mod provider;
pub mod resolver;
pub mod sections;
pub mod session;
pub mod state;
