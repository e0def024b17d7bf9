use super::{ApiClient, TimerClient};
use crate::domain::config::GlobusConfig;
use crate::domain::error::{GlobusCliError, GlobusResult};
use crate::domain::response::GlobusResponse;
use async_trait::async_trait;
use std::time::Duration;
use uuid::Uuid;

/// Timer API client over HTTPS
#[derive(Debug, Clone)]
pub struct HttpTimerClient {
    api: ApiClient,
}

impl HttpTimerClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn from_config(config: &GlobusConfig) -> GlobusResult<Self> {
        let token = config
            .tokens
            .timer()
            .ok_or(GlobusCliError::AuthenticationMissing)?;
        let api = ApiClient::new(
            "Timer",
            &config.environment.timer_url,
            token,
            Duration::from_millis(config.global.timeout_ms),
        )?;
        Ok(Self::new(api))
    }
}

#[async_trait]
impl TimerClient for HttpTimerClient {
    async fn delete_job(&self, job_id: &Uuid) -> GlobusResult<GlobusResponse> {
        self.api.delete(&format!("jobs/{job_id}")).await
    }
}
