use crate::domain::error::{GlobusCliError, GlobusResult};
use crate::domain::response::GlobusResponse;
use reqwest::{Method, StatusCode};
use serde_json::Value;
use std::time::Duration;

/// Authenticated JSON client for one Globus service
#[derive(Debug, Clone)]
pub struct ApiClient {
    service: &'static str,
    base_url: String,
    token: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(
        service: &'static str,
        base_url: &str,
        token: &str,
        timeout: Duration,
    ) -> GlobusResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("globus-cli/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let mut base_url = base_url.trim().to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Ok(Self {
            service,
            base_url,
            token: token.to_string(),
            http,
        })
    }

    pub fn service(&self) -> &'static str {
        self.service
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get(&self, path: &str) -> GlobusResult<GlobusResponse> {
        self.request(Method::GET, path, None).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> GlobusResult<GlobusResponse> {
        self.request(Method::POST, path, Some(body)).await
    }

    pub async fn put(&self, path: &str, body: &Value) -> GlobusResult<GlobusResponse> {
        self.request(Method::PUT, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> GlobusResult<GlobusResponse> {
        self.request(Method::DELETE, path, None).await
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> GlobusResult<GlobusResponse> {
        let url = self.url(path);
        tracing::debug!(service = self.service, %method, %url, "sending request");

        let mut request = self
            .http
            .request(method.clone(), &url)
            .bearer_auth(&self.token);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        tracing::debug!(service = self.service, %method, %url, status = status.as_u16(), "received response");

        if !status.is_success() {
            return Err(service_error(self.service, status, &text));
        }

        if text.trim().is_empty() {
            return Ok(GlobusResponse::new(Value::Object(Default::default())));
        }
        let data: Value = serde_json::from_str(&text)?;
        Ok(GlobusResponse::new(data))
    }
}

/// Build a service error from a non-2xx response body.
///
/// Transfer reports `{"code", "message"}`, Timer reports `{"detail"}`; any
/// other body is surfaced verbatim.
pub fn service_error(service: &str, status: StatusCode, body: &str) -> GlobusCliError {
    let parsed: Option<Value> = serde_json::from_str(body).ok();
    let doc = parsed.as_ref();

    let code = doc
        .and_then(|d| d.get("code"))
        .and_then(Value::as_str)
        .unwrap_or("Error")
        .to_string();

    let message = doc
        .and_then(|d| d.get("message").or_else(|| d.get("detail")))
        .map(|m| match m {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            } else {
                trimmed.to_string()
            }
        });

    GlobusCliError::Service {
        service: service.to_string(),
        status: status.as_u16(),
        code,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new("Transfer", base, "token", Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_url_join() {
        assert_eq!(
            client("https://transfer.api.globus.org/v0.10").url("bookmark/abc"),
            "https://transfer.api.globus.org/v0.10/bookmark/abc"
        );
        assert_eq!(
            client("https://transfer.api.globus.org/v0.10/").url("/bookmark_list"),
            "https://transfer.api.globus.org/v0.10/bookmark_list"
        );
    }

    #[test]
    fn test_transfer_error_body() {
        let err = service_error(
            "Transfer",
            StatusCode::NOT_FOUND,
            r#"{"code": "BookmarkNotFound", "message": "Bookmark 'x' not found", "request_id": "r"}"#,
        );
        assert_eq!(
            err.to_string(),
            "Transfer API error (HTTP 404, BookmarkNotFound): Bookmark 'x' not found"
        );
    }

    #[test]
    fn test_timer_error_body() {
        let err = service_error("Timer", StatusCode::FORBIDDEN, r#"{"detail": "not allowed"}"#);
        assert!(matches!(
            err,
            GlobusCliError::Service { status: 403, ref message, .. } if message == "not allowed"
        ));
    }

    #[test]
    fn test_non_json_error_body() {
        let err = service_error("Transfer", StatusCode::BAD_GATEWAY, "upstream down");
        assert!(err.to_string().ends_with("upstream down"));

        let err = service_error("Transfer", StatusCode::BAD_GATEWAY, "");
        assert!(err.to_string().ends_with("Bad Gateway"));
    }
}
