use crate::blueprint::{EdgeDefinition, Form, NodeDefinition};
use crate::resolver::DependencyResolver;
use crate::state::{GraphEdge, GraphNode, GraphNodeData};
use std::sync::Arc;

/// Turns blueprint nodes into renderable graph nodes, in input order.
///
/// Each node carries its own form's fields, its resolved dependencies and an
/// empty field-mapping table.
pub fn map_nodes(forms: &[Form], nodes: &[NodeDefinition]) -> Vec<GraphNode> {
    let resolver = DependencyResolver::new(nodes, forms);
    nodes
        .iter()
        .map(|node| GraphNode {
            id: node.id.as_str().into(),
            position: node.position,
            node_type: node.node_type.as_str().into(),
            data: GraphNodeData {
                label: node.name.as_str().into(),
                form_fields: resolver.form_fields(&node.form_reference).into(),
                form_id: node.form_reference.as_str().into(),
                dependency_data: Arc::new(resolver.resolve(node)),
                field_mappings: Arc::default(),
            },
        })
        .collect()
}

/// Turns blueprint edges into graph edges with IDs of the form
/// `<source>-<target>-<index>`, unique even for repeated pairs.
pub fn map_edges(edges: &[EdgeDefinition]) -> Vec<GraphEdge> {
    edges
        .iter()
        .enumerate()
        .map(|(index, edge)| GraphEdge {
            id: format!("{}-{}-{}", edge.source, edge.target, index),
            source: edge.source.clone(),
            target: edge.target.clone(),
        })
        .collect()
}
