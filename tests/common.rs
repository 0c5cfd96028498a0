//! Common test utilities for building blueprints, forms and global data.
use prefill::prelude::*;
use serde_json::{Map, Value, json};
use std::sync::Arc;

/// Builds a form whose field schema lists `fields` in order.
#[allow(dead_code)]
pub fn form(id: &str, name: &str, fields: &[&str]) -> Form {
    let properties: Map<String, Value> = fields
        .iter()
        .map(|field| (field.to_string(), json!({ "type": "string" })))
        .collect();
    Form {
        id: id.to_string(),
        name: name.to_string(),
        field_schema: FieldSchema {
            properties,
            required: vec![],
        },
    }
}

/// Builds a form node bound to `form_id` with the given prerequisites.
#[allow(dead_code)]
pub fn node(id: &str, name: &str, form_id: &str, prerequisites: &[&str]) -> NodeDefinition {
    NodeDefinition {
        id: id.to_string(),
        name: name.to_string(),
        node_type: "form".to_string(),
        position: Position::default(),
        form_reference: form_id.to_string(),
        prerequisites: prerequisites.iter().map(|p| p.to_string()).collect(),
    }
}

/// Three forms: a user profile, an address form and a form without fields.
#[allow(dead_code)]
pub fn create_forms() -> Vec<Form> {
    vec![
        form("form1", "User Profile Form", &["name", "email", "phone"]),
        form("form2", "Address Form", &["street", "city", "zipCode"]),
        form("form3", "Empty Form", &[]),
    ]
}

/// `node1 <- node2 <- node3`, with node3 also depending on node1 directly.
#[allow(dead_code)]
pub fn create_nodes() -> Vec<NodeDefinition> {
    vec![
        node("node1", "User Registration", "form1", &[]),
        node("node2", "Address Collection", "form2", &["node1"]),
        node("node3", "Final Step", "form3", &["node1", "node2"]),
    ]
}

/// Same chain as [`create_nodes`] plus `node4` depending on `node3` only.
#[allow(dead_code)]
pub fn create_chain_nodes() -> Vec<NodeDefinition> {
    let mut nodes = create_nodes();
    nodes.push(node("node4", "Deep Dependency", "form1", &["node3"]));
    nodes
}

#[allow(dead_code)]
pub fn create_global_data() -> GlobalData {
    GlobalData {
        action_properties: ActionProperties {
            name: "Onboard Customer 0".to_string(),
            category: "Category 4".to_string(),
            tenant_id: "1".to_string(),
        },
        client_organization_properties: ClientOrganizationProperties {
            organization_name: "Acme Corporation".to_string(),
            organization_email: "contact@acme.com".to_string(),
            primary_contact: "John Smith".to_string(),
        },
    }
}

/// A store initialized with the standard fixture graph.
#[allow(dead_code)]
pub fn create_ready_store() -> GraphStore {
    let forms = create_forms();
    let nodes = create_nodes();
    let edges = vec![
        EdgeDefinition {
            source: "node1".to_string(),
            target: "node2".to_string(),
        },
        EdgeDefinition {
            source: "node2".to_string(),
            target: "node3".to_string(),
        },
    ];

    let mut store = GraphStore::new();
    store.dispatch(GraphAction::Initialize(GraphPayload::new(
        map_nodes(&forms, &nodes),
        map_edges(&edges),
        create_global_data(),
    )));
    store
}

#[allow(dead_code)]
pub fn email_mapping() -> FieldMapping {
    FieldMapping::new("Email", "action.category", "Action Properties")
}

/// IDs of a list of dependency snapshots, in order.
#[allow(dead_code)]
pub fn ids(forms: &[DependencyForm]) -> Vec<&str> {
    forms.iter().map(|f| f.node_id.as_str()).collect()
}

/// Asserts two states share every node except the ones listed in `touched`.
#[allow(dead_code)]
pub fn assert_shared_except(before: &GraphState, after: &GraphState, touched: &[&str]) {
    assert_eq!(before.nodes.len(), after.nodes.len());
    for (old, new) in before.nodes.iter().zip(&after.nodes) {
        if touched.contains(&&*old.id) {
            assert!(!Arc::ptr_eq(old, new), "node '{}' should be rebuilt", old.id);
        } else {
            assert!(Arc::ptr_eq(old, new), "node '{}' should be shared", old.id);
        }
    }
    assert!(Arc::ptr_eq(&before.edges, &after.edges));
    assert!(Arc::ptr_eq(&before.global_data, &after.global_data));
}

/// The blueprint provider payload used by end-to-end tests.
#[allow(dead_code)]
pub const BLUEPRINT_JSON: &str = r#"{
  "$schema": "https://example.com/schemas/action-blueprint-graph.json",
  "id": "bp_01",
  "tenant_id": "1",
  "name": "Onboard Customer",
  "description": "Automated test action",
  "category": "Category 4",
  "nodes": [
    {
      "id": "form-a",
      "type": "form",
      "position": { "x": 0, "y": 0 },
      "data": {
        "id": "bp_c_a",
        "component_key": "form-a",
        "component_type": "form",
        "component_id": "f_1",
        "name": "Form A",
        "prerequisites": [],
        "approval_required": false,
        "sla_duration": { "number": 0, "unit": "minutes" }
      }
    },
    {
      "id": "form-b",
      "type": "form",
      "position": { "x": 300, "y": 0 },
      "data": {
        "id": "bp_c_b",
        "component_key": "form-b",
        "component_type": "form",
        "component_id": "f_2",
        "name": "Form B",
        "prerequisites": ["form-a"],
        "approval_required": false
      }
    },
    {
      "id": "form-d",
      "type": "form",
      "position": { "x": 600, "y": 0 },
      "data": {
        "id": "bp_c_d",
        "component_key": "form-d",
        "component_type": "form",
        "component_id": "f_1",
        "name": "Form D",
        "prerequisites": ["form-b"],
        "approval_required": true
      }
    }
  ],
  "edges": [
    { "source": "form-a", "target": "form-b" },
    { "source": "form-b", "target": "form-d" }
  ],
  "forms": [
    {
      "id": "f_1",
      "name": "test form",
      "description": "test",
      "is_reusable": false,
      "field_schema": {
        "type": "object",
        "properties": {
          "id": { "avantos_type": "short-text", "type": "string" },
          "name": { "avantos_type": "short-text", "type": "string" },
          "email": { "avantos_type": "short-text", "format": "email", "type": "string" }
        },
        "required": ["id", "name", "email"]
      },
      "ui_schema": { "type": "VerticalLayout", "elements": [] },
      "dynamic_field_config": {}
    },
    {
      "id": "f_2",
      "name": "address form",
      "field_schema": {
        "type": "object",
        "properties": {
          "street": { "type": "string" },
          "city": { "type": "string" }
        },
        "required": []
      }
    }
  ]
}"#;
