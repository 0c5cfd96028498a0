//! Selectable data sources for the field picker.

use crate::global::GlobalData;
use crate::resolver::{DependencyData, DependencyForm};
use crate::state::FieldMapping;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

pub const ACTION_PROPERTIES_TITLE: &str = "Action Properties";
pub const CLIENT_ORGANIZATION_PROPERTIES_TITLE: &str = "Client Organization Properties";

const ACTION_PREFIX: &str = "action";
const ORGANIZATION_PREFIX: &str = "organization";

/// A selectable data source. Picking one stores it verbatim as the field's mapping.
pub type DataOption = FieldMapping;

/// Discriminant of a [`DataSection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Global,
    Direct,
    Transitive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionContent {
    pub title: String,
    pub options: Vec<DataOption>,
}

/// A titled group of options, tagged by where its data comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DataSection {
    Global(SectionContent),
    Direct(SectionContent),
    Transitive(SectionContent),
}

impl DataSection {
    pub fn kind(&self) -> SectionKind {
        match self {
            DataSection::Global(_) => SectionKind::Global,
            DataSection::Direct(_) => SectionKind::Direct,
            DataSection::Transitive(_) => SectionKind::Transitive,
        }
    }

    pub fn content(&self) -> &SectionContent {
        match self {
            DataSection::Global(content)
            | DataSection::Direct(content)
            | DataSection::Transitive(content) => content,
        }
    }

    pub fn title(&self) -> &str {
        &self.content().title
    }

    pub fn options(&self) -> &[DataOption] {
        &self.content().options
    }

    /// Finds the option whose `value` path matches.
    pub fn find_option(&self, value: &str) -> Option<&DataOption> {
        self.options().iter().find(|option| option.value == value)
    }
}

/// Formats a snake_case key as a label: every underscore-separated segment gets
/// an upper-cased first character, the rest of the segment is left alone.
///
/// `"client_organization_properties"` becomes `"Client Organization Properties"`,
/// `"_"` becomes `" "`.
pub fn format_field_label(key: &str) -> String {
    key.split('_').map(capitalize_first).join(" ")
}

fn capitalize_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Builds the picker sections for a node.
///
/// Order is fixed: action properties, client organization properties, one
/// section per direct dependency, then one per transitive dependency. Sections
/// without options are kept.
pub fn build_data_sections(
    dependency_data: &DependencyData,
    global_data: &GlobalData,
) -> Vec<DataSection> {
    let mut sections = Vec::with_capacity(
        2 + dependency_data.direct_dependencies.len()
            + dependency_data.transitive_dependencies.len(),
    );

    sections.push(DataSection::Global(global_section(
        ACTION_PROPERTIES_TITLE,
        ACTION_PREFIX,
        global_data.action_properties.entries().map(|(key, _)| key),
    )));
    sections.push(DataSection::Global(global_section(
        CLIENT_ORGANIZATION_PROPERTIES_TITLE,
        ORGANIZATION_PREFIX,
        global_data
            .client_organization_properties
            .entries()
            .map(|(key, _)| key),
    )));

    sections.extend(
        dependency_data
            .direct_dependencies
            .iter()
            .map(|form| DataSection::Direct(dependency_section(form))),
    );
    sections.extend(
        dependency_data
            .transitive_dependencies
            .iter()
            .map(|form| DataSection::Transitive(dependency_section(form))),
    );

    sections
}

fn global_section<'k>(
    title: &str,
    prefix: &str,
    keys: impl IntoIterator<Item = &'k str>,
) -> SectionContent {
    SectionContent {
        title: title.to_string(),
        options: keys
            .into_iter()
            .map(|key| DataOption {
                label: format_field_label(key),
                value: format!("{}.{}", prefix, key),
                source: title.to_string(),
            })
            .collect(),
    }
}

/// Dependency field labels are the raw field keys.
fn dependency_section(form: &DependencyForm) -> SectionContent {
    SectionContent {
        title: form.node_name.clone(),
        options: form
            .form_fields
            .iter()
            .map(|field| DataOption {
                label: field.clone(),
                value: format!("{}.{}", form.node_id, field),
                source: form.node_name.clone(),
            })
            .collect(),
    }
}
