use super::{BlueprintProvider, GlobalDataProvider, STATUS_OK};
use super::{decode_blueprint_response, decode_global_data};
use crate::api::BlueprintGraphDto;
use crate::error::ProviderError;
use crate::global::GlobalData;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads the blueprint graph from a JSON file.
#[derive(Debug, Clone)]
pub struct FileBlueprintProvider {
    path: PathBuf,
}

impl FileBlueprintProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl BlueprintProvider for FileBlueprintProvider {
    async fn fetch_blueprint(&self) -> Result<BlueprintGraphDto, ProviderError> {
        let body = read_to_string(&self.path).await?;
        debug!(path = %self.path.display(), bytes = body.len(), "Read blueprint file");
        decode_blueprint_response(STATUS_OK, &body)
    }
}

/// Reads the global workflow data from a JSON file.
#[derive(Debug, Clone)]
pub struct FileGlobalDataProvider {
    path: PathBuf,
}

impl FileGlobalDataProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl GlobalDataProvider for FileGlobalDataProvider {
    async fn fetch_global_data(&self) -> Result<GlobalData, ProviderError> {
        let body = read_to_string(&self.path).await?;
        decode_global_data(&body)
    }
}

async fn read_to_string(path: &Path) -> Result<String, ProviderError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ProviderError::Io {
            path: path.to_path_buf(),
            source,
        })
}
