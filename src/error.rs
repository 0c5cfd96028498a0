use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while fetching the blueprint graph or the global workflow data.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Could not read '{}': {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {what} JSON: {source}")]
    Parse {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to fetch action blueprint graph: provider answered with status {status}")]
    Status { status: u16 },

    #[error(transparent)]
    Conversion(#[from] BlueprintConversionError),
}

/// Errors that can occur when converting a provider payload into a `BlueprintDefinition`.
#[derive(Error, Debug, Clone)]
pub enum BlueprintConversionError {
    #[error("Invalid blueprint data: {0}")]
    Validation(String),
}

/// Errors surfaced by the editor session commands.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("The graph has not been loaded yet")]
    NotReady,

    #[error("Node '{0}' does not exist in the blueprint graph")]
    NodeNotFound(String),

    #[error("Node '{node_id}' has no form field named '{field}'")]
    FieldNotFound { node_id: String, field: String },
}

/// Errors that can occur while loading an `EditorConfig`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file '{}': {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
