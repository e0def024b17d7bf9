use crate::core::endpoint_type::{format_expected, EndpointType};
use thiserror::Error;

/// Globus CLI unified error type
#[derive(Error, Debug)]
pub enum GlobusCliError {
    #[error("No Authentication provided.")]
    AuthenticationMissing,

    #[error("{0}")]
    Usage(String),

    #[error(
        "'{command_path}' expected {endpoint_id} to be a {}. Instead, found it was of type '{actual}'.",
        format_expected(.expected)
    )]
    WrongEndpointType {
        command_path: String,
        endpoint_id: String,
        actual: EndpointType,
        expected: Vec<EndpointType>,
    },

    #[error(
        "'{command_path}' expected {endpoint_id} to be a collection ID. Instead, found it was of type '{actual}'."
    )]
    ExpectedCollection {
        command_path: String,
        endpoint_id: String,
        actual: EndpointType,
        expected: Vec<EndpointType>,
    },

    #[error("{service} API error (HTTP {status}, {code}): {message}")]
    Service {
        service: String,
        status: u16,
        code: String,
        message: String,
    },

    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Output error: {0}")]
    Output(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GlobusCliError {
    /// Endpoint type found on an endpoint that failed a type assertion
    pub fn actual_endpoint_type(&self) -> Option<EndpointType> {
        match self {
            Self::WrongEndpointType { actual, .. } | Self::ExpectedCollection { actual, .. } => {
                Some(*actual)
            }
            _ => None,
        }
    }
}

impl From<serde_json::Error> for GlobusCliError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidResponse(err.to_string())
    }
}

pub type GlobusResult<T> = Result<T, GlobusCliError>;
