//! Data providers consulted when a session loads.
//!
//! The blueprint provider hands back the raw graph payload unmodified; the
//! global data provider hands back the workflow-wide properties. Both are
//! fetched concurrently by [`crate::session::EditorSession::load`].

mod file;
mod fixed;

pub use file::{FileBlueprintProvider, FileGlobalDataProvider};
pub use fixed::{
    DEFAULT_GLOBAL_DATA_DELAY, StaticBlueprintProvider, StaticGlobalDataProvider, sample_global_data,
};

use crate::api::BlueprintGraphDto;
use crate::error::ProviderError;
use crate::global::GlobalData;
use async_trait::async_trait;

/// Status a blueprint response must carry to be accepted.
pub const STATUS_OK: u16 = 200;

#[async_trait]
pub trait BlueprintProvider: Send + Sync {
    /// Fetches the complete blueprint graph.
    async fn fetch_blueprint(&self) -> Result<BlueprintGraphDto, ProviderError>;
}

#[async_trait]
pub trait GlobalDataProvider: Send + Sync {
    /// Fetches the global workflow properties.
    async fn fetch_global_data(&self) -> Result<GlobalData, ProviderError>;
}

/// Decodes a blueprint response body. Any status other than [`STATUS_OK`] is a
/// hard failure; the body is not looked at in that case.
pub fn decode_blueprint_response(
    status: u16,
    body: &str,
) -> Result<BlueprintGraphDto, ProviderError> {
    if status != STATUS_OK {
        return Err(ProviderError::Status { status });
    }
    serde_json::from_str(body).map_err(|source| ProviderError::Parse {
        what: "blueprint graph",
        source,
    })
}

pub(crate) fn decode_global_data(body: &str) -> Result<GlobalData, ProviderError> {
    serde_json::from_str(body).map_err(|source| ProviderError::Parse {
        what: "global data",
        source,
    })
}
