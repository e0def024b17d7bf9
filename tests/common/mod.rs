//! In-memory service clients shared by the integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use globus_cli::cli::args::OutputFormat;
use globus_cli::cli::output::ConsoleWriter;
use globus_cli::{GlobusCliError, GlobusResponse, GlobusResult, TimerClient, TransferClient};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

pub const GO_EP1_ID: &str = "ddb59aef-6d04-11e5-ba46-22000b92c6ec";
pub const BOOKMARK_ID: &str = "0a5a2f6e-2d7b-11ed-8c32-0242ac110002";
pub const JOB_ID: &str = "4a5f2e19-8e0a-4d2c-8c0b-8d6b3b1f2f61";

pub fn uuid(id: &str) -> Uuid {
    Uuid::parse_str(id).unwrap()
}

/// Canned Transfer responses keyed by `METHOD path`
#[derive(Default)]
pub struct MockTransferClient {
    responses: HashMap<String, Value>,
    calls: Mutex<Vec<(String, Option<Value>)>>,
}

impl MockTransferClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, route: &str, response: Value) -> Self {
        self.responses.insert(route.to_string(), response);
        self
    }

    pub fn calls(&self) -> Vec<(String, Option<Value>)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn routes_called(&self) -> Vec<String> {
        self.calls().into_iter().map(|(route, _)| route).collect()
    }

    fn respond(&self, route: String, body: Option<&Value>) -> GlobusResult<GlobusResponse> {
        self.calls.lock().unwrap().push((route.clone(), body.cloned()));
        self.responses
            .get(&route)
            .cloned()
            .map(GlobusResponse::new)
            .ok_or_else(|| GlobusCliError::Service {
                service: "Transfer".to_string(),
                status: 404,
                code: "ClientError.NotFound".to_string(),
                message: format!("no canned response for {route}"),
            })
    }
}

#[async_trait]
impl TransferClient for MockTransferClient {
    async fn create_bookmark(&self, data: &Value) -> GlobusResult<GlobusResponse> {
        self.respond("POST bookmark".to_string(), Some(data))
    }

    async fn get_bookmark(&self, bookmark_id: &Uuid) -> GlobusResult<GlobusResponse> {
        self.respond(format!("GET bookmark/{bookmark_id}"), None)
    }

    async fn update_bookmark(
        &self,
        bookmark_id: &Uuid,
        data: &Value,
    ) -> GlobusResult<GlobusResponse> {
        self.respond(format!("PUT bookmark/{bookmark_id}"), Some(data))
    }

    async fn delete_bookmark(&self, bookmark_id: &Uuid) -> GlobusResult<GlobusResponse> {
        self.respond(format!("DELETE bookmark/{bookmark_id}"), None)
    }

    async fn bookmark_list(&self) -> GlobusResult<GlobusResponse> {
        self.respond("GET bookmark_list".to_string(), None)
    }

    async fn get_endpoint(&self, endpoint_id: &Uuid) -> GlobusResult<GlobusResponse> {
        self.respond(format!("GET endpoint/{endpoint_id}"), None)
    }

    async fn endpoint_server_list(&self, endpoint_id: &Uuid) -> GlobusResult<GlobusResponse> {
        self.respond(format!("GET endpoint/{endpoint_id}/server_list"), None)
    }
}

/// Timer client returning one canned deleted-job document
pub struct MockTimerClient {
    pub deleted_job: Value,
}

#[async_trait]
impl TimerClient for MockTimerClient {
    async fn delete_job(&self, job_id: &Uuid) -> GlobusResult<GlobusResponse> {
        if job_id.to_string() == JOB_ID {
            Ok(GlobusResponse::new(self.deleted_job.clone()))
        } else {
            Err(GlobusCliError::Service {
                service: "Timer".to_string(),
                status: 404,
                code: "Error".to_string(),
                message: "Job not found".to_string(),
            })
        }
    }
}

pub fn writer(format: OutputFormat) -> ConsoleWriter<Vec<u8>> {
    ConsoleWriter::new(format, None, Vec::new())
}

pub fn output(writer: ConsoleWriter<Vec<u8>>) -> String {
    String::from_utf8(writer.into_inner()).unwrap()
}
