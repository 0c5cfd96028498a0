use serde::{Deserialize, Serialize};

/// Workflow-wide values that any form field can be prefilled from.
///
/// Fetched once per session; the `Default` value (all blank strings) is what the
/// graph state holds before the first load completes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalData {
    pub action_properties: ActionProperties,
    pub client_organization_properties: ClientOrganizationProperties,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionProperties {
    pub name: String,
    pub category: String,
    pub tenant_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientOrganizationProperties {
    pub organization_name: String,
    pub organization_email: String,
    pub primary_contact: String,
}

impl ActionProperties {
    /// Property keys paired with their values, in declaration order.
    pub fn entries(&self) -> [(&'static str, &str); 3] {
        [
            ("name", self.name.as_str()),
            ("category", self.category.as_str()),
            ("tenant_id", self.tenant_id.as_str()),
        ]
    }
}

impl ClientOrganizationProperties {
    /// Property keys paired with their values, in declaration order.
    pub fn entries(&self) -> [(&'static str, &str); 3] {
        [
            ("organization_name", self.organization_name.as_str()),
            ("organization_email", self.organization_email.as_str()),
            ("primary_contact", self.primary_contact.as_str()),
        ]
    }
}
