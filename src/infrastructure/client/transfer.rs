use super::{ApiClient, TransferClient};
use crate::domain::config::GlobusConfig;
use crate::domain::error::{GlobusCliError, GlobusResult};
use crate::domain::response::GlobusResponse;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use uuid::Uuid;

/// Transfer API client over HTTPS
#[derive(Debug, Clone)]
pub struct HttpTransferClient {
    api: ApiClient,
}

impl HttpTransferClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Build a client from configuration, requiring a Transfer token
    pub fn from_config(config: &GlobusConfig) -> GlobusResult<Self> {
        let token = config
            .tokens
            .transfer()
            .ok_or(GlobusCliError::AuthenticationMissing)?;
        let api = ApiClient::new(
            "Transfer",
            &config.environment.transfer_url,
            token,
            Duration::from_millis(config.global.timeout_ms),
        )?;
        Ok(Self::new(api))
    }
}

#[async_trait]
impl TransferClient for HttpTransferClient {
    async fn create_bookmark(&self, data: &Value) -> GlobusResult<GlobusResponse> {
        self.api.post("bookmark", data).await
    }

    async fn get_bookmark(&self, bookmark_id: &Uuid) -> GlobusResult<GlobusResponse> {
        self.api.get(&format!("bookmark/{bookmark_id}")).await
    }

    async fn update_bookmark(
        &self,
        bookmark_id: &Uuid,
        data: &Value,
    ) -> GlobusResult<GlobusResponse> {
        self.api.put(&format!("bookmark/{bookmark_id}"), data).await
    }

    async fn delete_bookmark(&self, bookmark_id: &Uuid) -> GlobusResult<GlobusResponse> {
        self.api.delete(&format!("bookmark/{bookmark_id}")).await
    }

    async fn bookmark_list(&self) -> GlobusResult<GlobusResponse> {
        self.api.get("bookmark_list").await
    }

    async fn get_endpoint(&self, endpoint_id: &Uuid) -> GlobusResult<GlobusResponse> {
        self.api.get(&format!("endpoint/{endpoint_id}")).await
    }

    async fn endpoint_server_list(&self, endpoint_id: &Uuid) -> GlobusResult<GlobusResponse> {
        self.api.get(&format!("endpoint/{endpoint_id}/server_list")).await
    }
}
