// Service clients - Transfer and Timer REST APIs
pub mod http;
pub mod timer;
pub mod transfer;

use crate::domain::error::{GlobusCliError, GlobusResult};
use crate::domain::response::GlobusResponse;
use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

pub use http::ApiClient;
pub use timer::HttpTimerClient;
pub use transfer::HttpTransferClient;

/// Servers attached to an endpoint
#[derive(Debug, Clone, PartialEq)]
pub enum ServerList {
    /// S3-backed endpoints have no server list
    S3,
    Servers(GlobusResponse),
}

/// Globus Transfer API operations used by the CLI
#[async_trait]
pub trait TransferClient: Send + Sync {
    async fn create_bookmark(&self, data: &Value) -> GlobusResult<GlobusResponse>;

    async fn get_bookmark(&self, bookmark_id: &Uuid) -> GlobusResult<GlobusResponse>;

    async fn update_bookmark(&self, bookmark_id: &Uuid, data: &Value)
        -> GlobusResult<GlobusResponse>;

    async fn delete_bookmark(&self, bookmark_id: &Uuid) -> GlobusResult<GlobusResponse>;

    /// All bookmarks of the current user, as a `DATA` list document
    async fn bookmark_list(&self) -> GlobusResult<GlobusResponse>;

    async fn get_endpoint(&self, endpoint_id: &Uuid) -> GlobusResult<GlobusResponse>;

    async fn endpoint_server_list(&self, endpoint_id: &Uuid) -> GlobusResult<GlobusResponse>;

    /// Fetch an endpoint together with its servers.
    ///
    /// Shares have no servers and are rejected with a usage error. S3
    /// endpoints are detected from the endpoint document and skip the second
    /// request.
    async fn get_endpoint_w_server_list(
        &self,
        endpoint_id: &Uuid,
    ) -> GlobusResult<(GlobusResponse, ServerList)> {
        let endpoint = self.get_endpoint(endpoint_id).await?;

        let host_endpoint_id = endpoint
            .get_str("host_endpoint_id")
            .filter(|id| !id.is_empty());
        if let Some(host_endpoint_id) = host_endpoint_id {
            let display_name = endpoint
                .get_str("display_name")
                .or_else(|| endpoint.get_str("canonical_name"))
                .unwrap_or_default();
            return Err(GlobusCliError::Usage(format!(
                "{endpoint_id} ({display_name}) is a share and does not have servers.\n\
                 To see details of the share, use\n    \
                 globus endpoint show {endpoint_id}\n\
                 To list the servers on the share's host endpoint, use\n    \
                 globus endpoint server list {host_endpoint_id}"
            )));
        }

        if endpoint.get_str("s3_url").is_some_and(|url| !url.is_empty()) {
            return Ok((endpoint, ServerList::S3));
        }

        let servers = self.endpoint_server_list(endpoint_id).await?;
        Ok((endpoint, ServerList::Servers(servers)))
    }
}

/// Globus Timer API operations used by the CLI
#[async_trait]
pub trait TimerClient: Send + Sync {
    /// Delete a job, returning the deleted job document
    async fn delete_job(&self, job_id: &Uuid) -> GlobusResult<GlobusResponse>;
}
