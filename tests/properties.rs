//! Property tests for dependency resolution and mapping transitions.
mod common;
use common::*;
use prefill::prelude::*;
use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;

/// Random graphs of up to 12 nodes. Prerequisites may point anywhere,
/// including at the node itself and at IDs that do not exist.
fn arb_nodes() -> impl Strategy<Value = Vec<NodeDefinition>> {
    (1usize..12).prop_flat_map(|count| {
        prop::collection::vec(prop::collection::vec(0usize..count + 2, 0..4), count).prop_map(
            move |prereqs| {
                prereqs
                    .into_iter()
                    .enumerate()
                    .map(|(i, targets)| {
                        let ids: Vec<String> = targets.iter().map(|t| format!("n{}", t)).collect();
                        let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
                        node(&format!("n{}", i), &format!("Node {}", i), "form1", &refs)
                    })
                    .collect()
            },
        )
    })
}

proptest! {
    #[test]
    fn resolution_terminates_and_lists_are_disjoint(nodes in arb_nodes()) {
        let forms = create_forms();
        let resolver = DependencyResolver::new(&nodes, &forms);

        for target in &nodes {
            let deps = resolver.resolve(target);
            let direct: HashSet<_> = ids(&deps.direct_dependencies).into_iter().collect();
            let transitive = ids(&deps.transitive_dependencies);

            prop_assert_eq!(direct.len(), deps.direct_dependencies.len());
            prop_assert_eq!(
                transitive.iter().collect::<HashSet<_>>().len(),
                transitive.len()
            );
            prop_assert!(transitive.iter().all(|id| !direct.contains(id)));
        }
    }

    #[test]
    fn direct_dependencies_follow_prerequisites(nodes in arb_nodes()) {
        let forms = create_forms();

        for target in &nodes {
            let deps = resolve_dependencies(target, &nodes, &forms);
            let mut seen = HashSet::new();
            let expected: Vec<&str> = target
                .prerequisites
                .iter()
                .map(String::as_str)
                .filter(|id| seen.insert(*id))
                .collect();
            prop_assert_eq!(ids(&deps.direct_dependencies), expected);
        }
    }

    #[test]
    fn set_then_remove_restores_the_node(
        nodes in arb_nodes(),
        pick in any::<prop::sample::Index>(),
        field in "[a-z_]{1,12}",
    ) {
        let forms = create_forms();
        let mut store = GraphStore::new();
        store.dispatch(GraphAction::Initialize(GraphPayload::new(
            map_nodes(&forms, &nodes),
            vec![],
            create_global_data(),
        )));
        let before = store.state();
        let target = before.nodes[pick.index(before.nodes.len())].id.to_string();

        store.dispatch(GraphAction::SetFieldMapping {
            node_id: target.clone(),
            field_name: field.clone(),
            mapping: email_mapping(),
        });
        store.dispatch(GraphAction::RemoveFieldMapping {
            node_id: target.clone(),
            field_name: field,
        });
        let after = store.state();

        prop_assert_eq!(&*before, &*after);
        prop_assert!(Arc::ptr_eq(&before.edges, &after.edges));
        prop_assert!(Arc::ptr_eq(&before.global_data, &after.global_data));
        // Every node that does not carry the target's ID is the same allocation.
        for (old, new) in before.nodes.iter().zip(&after.nodes) {
            if *old.id != *target {
                prop_assert!(Arc::ptr_eq(old, new));
            }
        }
    }

    #[test]
    fn format_field_label_keeps_segment_count(key in "[a-z0-9_]{0,24}") {
        let label = format_field_label(&key);
        prop_assert_eq!(label.split(' ').count(), key.split('_').count());
        prop_assert_eq!(label.to_lowercase(), key.replace('_', " "));
    }
}
