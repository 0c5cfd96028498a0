use super::definition::{BlueprintDefinition, EdgeDefinition, FieldSchema, Form, NodeDefinition};
use crate::api::BlueprintGraphDto;
use crate::error::BlueprintConversionError;

/// A trait for payload formats that can be converted into a `BlueprintDefinition`.
///
/// The blueprint provider's own wire format implements this out of the box. Other
/// sources (exports from another editor, hand-written fixtures) implement it to
/// feed the same mapping pipeline.
///
/// # Example
///
/// ```rust,no_run
/// use prefill::blueprint::{BlueprintDefinition, IntoBlueprint, NodeDefinition, Position};
/// use prefill::error::BlueprintConversionError;
///
/// struct Checklist { steps: Vec<String> }
///
/// impl IntoBlueprint for Checklist {
///     fn into_blueprint(self) -> Result<BlueprintDefinition, BlueprintConversionError> {
///         let mut nodes: Vec<NodeDefinition> = Vec::new();
///         for (index, step) in self.steps.into_iter().enumerate() {
///             let prerequisites = nodes.last().map(|n| vec![n.id.clone()]).unwrap_or_default();
///             nodes.push(NodeDefinition {
///                 id: format!("step-{index}"),
///                 name: step,
///                 node_type: "form".to_string(),
///                 position: Position::default(),
///                 form_reference: String::new(),
///                 prerequisites,
///             });
///         }
///         Ok(BlueprintDefinition { nodes, ..Default::default() })
///     }
/// }
/// ```
pub trait IntoBlueprint {
    /// Consumes the payload and converts it into the canonical blueprint definition.
    fn into_blueprint(self) -> Result<BlueprintDefinition, BlueprintConversionError>;
}

impl IntoBlueprint for BlueprintGraphDto {
    fn into_blueprint(self) -> Result<BlueprintDefinition, BlueprintConversionError> {
        let nodes = self
            .nodes
            .into_iter()
            .map(|node| NodeDefinition {
                id: node.id,
                name: node.data.name,
                node_type: node.node_type,
                position: node.position,
                form_reference: node.data.component_id,
                prerequisites: node.data.prerequisites.unwrap_or_default(),
            })
            .collect();

        let edges = self
            .edges
            .into_iter()
            .map(|edge| EdgeDefinition {
                source: edge.source,
                target: edge.target,
            })
            .collect();

        let forms = self
            .forms
            .into_iter()
            .map(|form| Form {
                id: form.id,
                name: form.name,
                field_schema: FieldSchema {
                    properties: form.field_schema.properties.unwrap_or_default(),
                    required: form.field_schema.required,
                },
            })
            .collect();

        Ok(BlueprintDefinition {
            nodes,
            edges,
            forms,
        })
    }
}

impl IntoBlueprint for BlueprintDefinition {
    fn into_blueprint(self) -> Result<BlueprintDefinition, BlueprintConversionError> {
        Ok(self)
    }
}
