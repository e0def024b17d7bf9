use serde::Serialize;
use serde_json::Value;

use crate::domain::response::lookup;

/// Kind of endpoint or collection, as derived from an endpoint document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointType {
    MappedCollection,
    GuestCollection,
    Share,
    S3Endpoint,
    Gcp,
    Other,
}

impl EndpointType {
    pub const ALL: [EndpointType; 6] = [
        EndpointType::MappedCollection,
        EndpointType::GuestCollection,
        EndpointType::Share,
        EndpointType::S3Endpoint,
        EndpointType::Gcp,
        EndpointType::Other,
    ];

    /// Collection types hosted on a Globus Connect Server v5 endpoint
    pub const GCSV5_COLLECTIONS: [EndpointType; 2] =
        [EndpointType::GuestCollection, EndpointType::MappedCollection];

    pub fn nice_name(&self) -> &'static str {
        match self {
            EndpointType::MappedCollection => "Mapped Collection",
            EndpointType::GuestCollection => "Guest Collection",
            EndpointType::Share => "Shared Endpoint",
            EndpointType::S3Endpoint => "S3 Endpoint",
            EndpointType::Gcp => "Globus Connect Personal",
            EndpointType::Other => "Non-GCSv5 Endpoint",
        }
    }

    /// Classify an endpoint document.
    ///
    /// Rules are evaluated in order and the first match wins. The order is
    /// part of the Transfer API contract: an S3 endpoint is reported as such
    /// even if it also carries GCSv5 or sharing fields.
    pub fn determine(doc: &Value) -> EndpointType {
        CLASSIFICATION_RULES
            .iter()
            .find(|(matches, _)| matches(doc))
            .map(|(_, ep_type)| *ep_type)
            .unwrap_or(EndpointType::Other)
    }
}

impl std::fmt::Display for EndpointType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.nice_name())
    }
}

type Rule = (fn(&Value) -> bool, EndpointType);

const CLASSIFICATION_RULES: [Rule; 5] = [
    (is_s3, EndpointType::S3Endpoint),
    (is_globus_connect, EndpointType::Gcp),
    (is_gcsv5_guest, EndpointType::GuestCollection),
    (is_gcsv5_mapped, EndpointType::MappedCollection),
    (has_host_endpoint, EndpointType::Share),
];

fn present(doc: &Value, key: &str) -> bool {
    match lookup(doc, key) {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

fn is_s3(doc: &Value) -> bool {
    present(doc, "s3_url")
}

fn is_globus_connect(doc: &Value) -> bool {
    lookup(doc, "is_globus_connect").and_then(Value::as_bool) == Some(true)
}

fn has_host_endpoint(doc: &Value) -> bool {
    present(doc, "host_endpoint_id")
}

fn is_gcsv5(doc: &Value) -> bool {
    lookup(doc, "gcs_version")
        .and_then(Value::as_str)
        .and_then(|version| version.split('.').next())
        .is_some_and(|major| major == "5")
}

fn is_gcsv5_guest(doc: &Value) -> bool {
    is_gcsv5(doc) && has_host_endpoint(doc)
}

fn is_gcsv5_mapped(doc: &Value) -> bool {
    is_gcsv5(doc) && !has_host_endpoint(doc)
}

/// Human readable rendering of an expected type set
pub fn format_expected(expected: &[EndpointType]) -> String {
    match expected {
        [] => "nothing".to_string(),
        [single] => single.nice_name().to_string(),
        [init @ .., last] => {
            let head: Vec<_> = init.iter().map(EndpointType::nice_name).collect();
            format!("{} or {}", head.join(", "), last.nice_name())
        }
    }
}
