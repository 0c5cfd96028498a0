//! Upstream dependency resolution for blueprint nodes.
//!
//! A node's dependencies come exclusively from its `prerequisites` list. Direct
//! dependencies keep prerequisite order; transitive ones are discovered with a
//! breadth-first walk guarded by a visited set, so cyclic prerequisite graphs
//! terminate and every node is reported at most once.

use crate::blueprint::{Form, NodeDefinition};
use ahash::{AHashMap, AHashSet};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, warn};

/// Snapshot of one upstream node, captured at resolution time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyForm {
    pub node_id: String,
    pub node_name: String,
    pub form_id: String,
    pub form_fields: Vec<String>,
}

/// All upstream forms of a node, split by how they are reached.
///
/// A node ID listed in `direct_dependencies` never reappears in
/// `transitive_dependencies`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyData {
    pub direct_dependencies: Vec<DependencyForm>,
    pub transitive_dependencies: Vec<DependencyForm>,
}

impl DependencyData {
    pub fn is_empty(&self) -> bool {
        self.direct_dependencies.is_empty() && self.transitive_dependencies.is_empty()
    }
}

/// Resolves dependencies against one blueprint.
///
/// Nodes and forms are indexed once so resolving every node of a graph does not
/// rescan the input slices. When IDs are duplicated the first occurrence wins.
pub struct DependencyResolver<'a> {
    nodes: AHashMap<&'a str, &'a NodeDefinition>,
    forms: AHashMap<&'a str, &'a Form>,
}

impl<'a> DependencyResolver<'a> {
    pub fn new(nodes: &'a [NodeDefinition], forms: &'a [Form]) -> Self {
        let mut node_index = AHashMap::with_capacity(nodes.len());
        for node in nodes {
            node_index.entry(node.id.as_str()).or_insert(node);
        }
        let mut form_index = AHashMap::with_capacity(forms.len());
        for form in forms {
            form_index.entry(form.id.as_str()).or_insert(form);
        }
        Self {
            nodes: node_index,
            forms: form_index,
        }
    }

    /// Field keys of a form, or an empty list if the form is unknown.
    pub fn form_fields(&self, form_id: &str) -> Vec<String> {
        self.forms
            .get(form_id)
            .map(|form| form.fields())
            .unwrap_or_default()
    }

    pub fn resolve(&self, target: &NodeDefinition) -> DependencyData {
        let direct_ids: Vec<&str> = target
            .prerequisites
            .iter()
            .map(String::as_str)
            .unique()
            .collect();

        let direct_dependencies = direct_ids.iter().map(|id| self.snapshot(id)).collect();
        let transitive_dependencies = self.walk_transitive(&direct_ids);

        let data = DependencyData {
            direct_dependencies,
            transitive_dependencies,
        };
        debug!(
            node_id = %target.id,
            direct = data.direct_dependencies.len(),
            transitive = data.transitive_dependencies.len(),
            "Resolved node dependencies"
        );
        data
    }

    /// Breadth-first walk from the direct prerequisites. Anything already
    /// visited, direct ones included, is skipped.
    fn walk_transitive(&self, direct_ids: &[&str]) -> Vec<DependencyForm> {
        let mut visited: AHashSet<&str> = direct_ids.iter().copied().collect();
        let mut queue: VecDeque<&str> = direct_ids.iter().copied().collect();
        let mut found = Vec::new();

        while let Some(current) = queue.pop_front() {
            let Some(node) = self.nodes.get(current) else {
                continue;
            };
            for prerequisite in &node.prerequisites {
                if visited.insert(prerequisite.as_str()) {
                    found.push(self.snapshot(prerequisite));
                    queue.push_back(prerequisite.as_str());
                }
            }
        }
        found
    }

    /// Captures an upstream node. Unknown nodes or forms degrade to a
    /// placeholder with blank name and no fields.
    fn snapshot(&self, node_id: &str) -> DependencyForm {
        let Some(node) = self.nodes.get(node_id) else {
            warn!(node_id, "Prerequisite references an unknown node");
            return DependencyForm {
                node_id: node_id.to_string(),
                ..Default::default()
            };
        };

        if !self.forms.contains_key(node.form_reference.as_str()) {
            warn!(
                node_id,
                form_id = %node.form_reference,
                "Prerequisite node references an unknown form"
            );
        }

        DependencyForm {
            node_id: node_id.to_string(),
            node_name: node.name.clone(),
            form_id: node.form_reference.clone(),
            form_fields: self.form_fields(&node.form_reference),
        }
    }
}

/// Resolves the direct and transitive dependencies of `target` within `nodes`.
///
/// Prefer [`DependencyResolver`] when resolving many nodes of the same graph.
pub fn resolve_dependencies(
    target: &NodeDefinition,
    nodes: &[NodeDefinition],
    forms: &[Form],
) -> DependencyData {
    DependencyResolver::new(nodes, forms).resolve(target)
}
