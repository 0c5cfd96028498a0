//! Integration tests for Prefill
//!
//! End-to-end tests that load a provider payload, resolve dependencies and edit
//! field mappings through a session.
//!
mod common;
use common::*;
use prefill::prelude::*;
use std::sync::Arc;

#[cfg(test)]
mod integration_tests {
    use super::*;

    /// A payload format whose conversion always fails.
    struct BrokenExport;

    impl IntoBlueprint for BrokenExport {
        fn into_blueprint(
            self,
        ) -> std::result::Result<BlueprintDefinition, BlueprintConversionError> {
            Err(BlueprintConversionError::Validation(
                "export has no nodes section".to_string(),
            ))
        }
    }

    fn parse_blueprint() -> BlueprintDefinition {
        let dto: BlueprintGraphDto =
            serde_json::from_str(BLUEPRINT_JSON).expect("Failed to parse blueprint payload");
        dto.into_blueprint().expect("Failed to convert blueprint")
    }

    #[test]
    fn test_payload_conversion() {
        let blueprint = parse_blueprint();

        assert_eq!(blueprint.nodes.len(), 3);
        assert_eq!(blueprint.edges.len(), 2);
        assert_eq!(blueprint.forms.len(), 2);

        let form_b = &blueprint.nodes[1];
        assert_eq!(form_b.name, "Form B");
        assert_eq!(form_b.form_reference, "f_2");
        assert_eq!(form_b.prerequisites, ["form-a"]);
        assert_eq!(form_b.position, Position { x: 300.0, y: 0.0 });

        // Field order follows the schema document, not key order.
        assert_eq!(blueprint.forms[0].fields(), ["id", "name", "email"]);
    }

    #[test]
    fn test_null_prerequisites_become_empty() {
        let dto: BlueprintGraphDto = serde_json::from_str(
            r#"{
                "nodes": [
                    { "id": "n", "type": "form", "position": { "x": 1, "y": 2 },
                      "data": { "component_id": "f", "name": "N", "prerequisites": null } }
                ],
                "edges": [],
                "forms": []
            }"#,
        )
        .unwrap();

        let blueprint = dto.into_blueprint().unwrap();
        assert!(blueprint.nodes[0].prerequisites.is_empty());
    }

    #[test]
    fn test_forms_without_properties_have_no_fields() {
        let dto: BlueprintGraphDto = serde_json::from_str(
            r#"{ "forms": [ { "id": "f", "name": "Bare", "field_schema": { "type": "object" } } ] }"#,
        )
        .unwrap();

        let blueprint = dto.into_blueprint().unwrap();
        assert!(blueprint.forms[0].fields().is_empty());
    }

    #[test]
    fn test_payload_to_graph_pipeline() {
        let blueprint = parse_blueprint();

        let nodes = map_nodes(&blueprint.forms, &blueprint.nodes);
        let edges = map_edges(&blueprint.edges);

        let form_d = &nodes[2].data;
        assert_eq!(&*form_d.label, "Form D");
        assert_eq!(ids(&form_d.dependency_data.direct_dependencies), ["form-b"]);
        assert_eq!(
            ids(&form_d.dependency_data.transitive_dependencies),
            ["form-a"]
        );
        assert_eq!(
            form_d.dependency_data.direct_dependencies[0].form_fields,
            ["street", "city"]
        );
        assert_eq!(edges[0].id, "form-a-form-b-0");
    }

    #[test]
    fn test_conversion_failure_is_reported() {
        let err = BrokenExport.into_blueprint().unwrap_err();
        let err = ProviderError::from(err);

        assert!(matches!(err, ProviderError::Conversion(_)));
        assert_eq!(
            err.to_string(),
            "Invalid blueprint data: export has no nodes section"
        );
    }

    #[test]
    fn test_dto_round_trips_through_static_provider() {
        let dto: BlueprintGraphDto = serde_json::from_str(BLUEPRINT_JSON).unwrap();
        let provider = StaticBlueprintProvider::from_dto(&dto).unwrap();

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap();
        let fetched = runtime.block_on(provider.fetch_blueprint()).unwrap();

        let blueprint = fetched.into_blueprint().unwrap();
        assert_eq!(blueprint.forms[0].fields(), ["id", "name", "email"]);
        assert_eq!(blueprint.nodes[2].prerequisites, ["form-b"]);
    }

    #[tokio::test]
    async fn test_full_prefill_workflow() {
        let mut session = EditorSession::new();
        session
            .load(
                &StaticBlueprintProvider::ok(BLUEPRINT_JSON),
                &StaticGlobalDataProvider::new(create_global_data()),
            )
            .await
            .expect("Failed to load session");
        let initial = session.state();

        // Map form-d.email to form-a.email, then form-d.name to the action name.
        let picker = session.select_field("form-d", "email").unwrap();
        let option = picker.find_option("form-a.email").unwrap().clone();
        assert!(session.pick_option(&option));

        let picker = session.select_field("form-d", "name").unwrap();
        let option = picker.find_option("action.name").unwrap().clone();
        assert_eq!(option.label, "Name");
        assert!(session.pick_option(&option));

        let view = session.select_node("form-d").unwrap();
        assert_eq!(view.mapped_count(), 2);
        let rendered: Vec<String> = view
            .fields
            .iter()
            .map(|row| match &row.mapping {
                Some(mapping) => format!("{}: {}", row.field, mapping),
                None => row.field.clone(),
            })
            .collect();
        assert_eq!(
            rendered,
            ["id", "name: Action Properties.Name", "email: Form A.email"]
        );

        // Form A and Form B were never touched.
        let current = session.state();
        assert_shared_except(&initial, &current, &["form-d"]);

        assert!(session.remove_mapping("form-d", "email"));
        assert!(session.remove_mapping("form-d", "name"));
        assert_eq!(*session.state(), *initial);
        assert!(Arc::ptr_eq(
            initial.node("form-a").unwrap(),
            session.state().node("form-a").unwrap()
        ));
    }

    #[tokio::test]
    async fn test_reload_replaces_graph_and_clears_selection() {
        let mut session = EditorSession::new();
        let globals = StaticGlobalDataProvider::new(create_global_data());
        session
            .load(&StaticBlueprintProvider::ok(BLUEPRINT_JSON), &globals)
            .await
            .unwrap();
        session.select_field("form-b", "city").unwrap();

        session
            .load(&StaticBlueprintProvider::ok(r#"{ "nodes": [] }"#), &globals)
            .await
            .unwrap();

        assert!(session.selection().is_none());
        assert!(session.state().nodes.is_empty());
        assert!(session.store().is_ready());
    }
}
