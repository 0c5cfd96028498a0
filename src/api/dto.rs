use crate::blueprint::Position;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Complete blueprint graph payload as returned by the blueprint provider.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BlueprintGraphDto {
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub tenant_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub nodes: Vec<NodeDto>,
    #[serde(default)]
    pub edges: Vec<EdgeDto>,
    #[serde(default)]
    pub forms: Vec<FormDto>,
}

/// Graph node with its layout information and form binding
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NodeDto {
    pub id: String,
    #[serde(rename = "type", default)]
    pub node_type: String,
    #[serde(default)]
    pub position: Position,
    pub data: NodeDataDto,
}

/// Node payload. `component_id` references the form bound to this node.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NodeDataDto {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub component_key: String,
    #[serde(default)]
    pub component_type: String,
    #[serde(default)]
    pub component_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub prerequisites: Option<Vec<String>>,
    #[serde(default)]
    pub approval_required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sla_duration: Option<SlaDurationDto>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SlaDurationDto {
    pub number: u32,
    pub unit: String,
}

/// Visual edge between two nodes. Not used for dependency resolution.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EdgeDto {
    pub source: String,
    pub target: String,
}

/// Reusable form definition
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FormDto {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_reusable: bool,
    #[serde(default)]
    pub field_schema: FieldSchemaDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui_schema: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_field_config: Option<Map<String, Value>>,
}

/// JSON-schema style description of a form's fields
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FieldSchemaDto {
    #[serde(rename = "type", default)]
    pub schema_type: String,
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
    #[serde(default)]
    pub required: Vec<String>,
}
