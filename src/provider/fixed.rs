use super::{BlueprintProvider, GlobalDataProvider, STATUS_OK, decode_blueprint_response};
use crate::api::BlueprintGraphDto;
use crate::error::ProviderError;
use crate::global::{ActionProperties, ClientOrganizationProperties, GlobalData};
use async_trait::async_trait;
use std::time::Duration;

/// Simulated latency of the default global data provider.
pub const DEFAULT_GLOBAL_DATA_DELAY: Duration = Duration::from_millis(100);

/// Serves a canned blueprint response: a status code and a JSON body.
#[derive(Debug, Clone)]
pub struct StaticBlueprintProvider {
    status: u16,
    body: String,
}

impl StaticBlueprintProvider {
    /// A successful response carrying `body`.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::with_status(STATUS_OK, body)
    }

    pub fn with_status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A successful response carrying an already-built payload.
    pub fn from_dto(dto: &BlueprintGraphDto) -> Result<Self, ProviderError> {
        let body = serde_json::to_string(dto).map_err(|source| ProviderError::Parse {
            what: "blueprint graph",
            source,
        })?;
        Ok(Self::ok(body))
    }
}

#[async_trait]
impl BlueprintProvider for StaticBlueprintProvider {
    async fn fetch_blueprint(&self) -> Result<BlueprintGraphDto, ProviderError> {
        decode_blueprint_response(self.status, &self.body)
    }
}

/// Serves fixed global data after a simulated delay.
#[derive(Debug, Clone)]
pub struct StaticGlobalDataProvider {
    data: GlobalData,
    delay: Duration,
}

impl StaticGlobalDataProvider {
    pub fn new(data: GlobalData) -> Self {
        Self {
            data,
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Default for StaticGlobalDataProvider {
    fn default() -> Self {
        Self::new(sample_global_data()).with_delay(DEFAULT_GLOBAL_DATA_DELAY)
    }
}

#[async_trait]
impl GlobalDataProvider for StaticGlobalDataProvider {
    async fn fetch_global_data(&self) -> Result<GlobalData, ProviderError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(self.data.clone())
    }
}

/// Global data used when no global data source is configured.
pub fn sample_global_data() -> GlobalData {
    GlobalData {
        action_properties: ActionProperties {
            name: "Onboard Customer 0".to_string(),
            category: "Category 4".to_string(),
            tenant_id: "1".to_string(),
        },
        client_organization_properties: ClientOrganizationProperties {
            organization_name: "Acme Corporation".to_string(),
            organization_email: "contact@acme.com".to_string(),
            primary_contact: "John Smith".to_string(),
        },
    }
}
