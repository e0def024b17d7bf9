use crate::core::endpoint_type::EndpointType;
use crate::domain::error::{GlobusCliError, GlobusResult};
use crate::domain::response::GlobusResponse;
use crate::infrastructure::client::TransferClient;
use uuid::Uuid;

/// Error raised by a failed endpoint type assertion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EndpointErrorKind {
    #[default]
    WrongType,
    ExpectedCollection,
}

/// An endpoint or collection document, fetched once and classified
#[derive(Debug, Clone)]
pub struct Endpointish {
    endpoint_id: Uuid,
    data: GlobusResponse,
    ep_type: EndpointType,
}

impl Endpointish {
    /// Fetch the endpoint document and classify it
    pub async fn new(client: &dyn TransferClient, endpoint_id: Uuid) -> GlobusResult<Self> {
        let data = client.get_endpoint(&endpoint_id).await?;
        Ok(Self::from_response(endpoint_id, data))
    }

    pub fn from_response(endpoint_id: Uuid, data: GlobusResponse) -> Self {
        let ep_type = EndpointType::determine(data.data());
        tracing::debug!(%endpoint_id, %ep_type, "classified endpoint");
        Self {
            endpoint_id,
            data,
            ep_type,
        }
    }

    pub fn endpoint_id(&self) -> Uuid {
        self.endpoint_id
    }

    pub fn ep_type(&self) -> EndpointType {
        self.ep_type
    }

    pub fn data(&self) -> &GlobusResponse {
        &self.data
    }

    /// Fail unless the endpoint is one of `expected`
    pub fn assert_ep_type(
        &self,
        command_path: &str,
        expected: &[EndpointType],
        kind: EndpointErrorKind,
    ) -> GlobusResult<()> {
        if expected.contains(&self.ep_type) {
            return Ok(());
        }

        let command_path = command_path.to_string();
        let endpoint_id = self.endpoint_id.to_string();
        let actual = self.ep_type;
        let expected = expected.to_vec();
        Err(match kind {
            EndpointErrorKind::WrongType => GlobusCliError::WrongEndpointType {
                command_path,
                endpoint_id,
                actual,
                expected,
            },
            EndpointErrorKind::ExpectedCollection => GlobusCliError::ExpectedCollection {
                command_path,
                endpoint_id,
                actual,
                expected,
            },
        })
    }

    pub fn assert_is_gcsv5_collection(&self, command_path: &str) -> GlobusResult<()> {
        self.assert_ep_type(
            command_path,
            &EndpointType::GCSV5_COLLECTIONS,
            EndpointErrorKind::ExpectedCollection,
        )
    }

    /// ID of the endpoint hosting this collection
    pub fn get_collection_endpoint_id(&self, command_path: &str) -> GlobusResult<String> {
        self.assert_is_gcsv5_collection(command_path)?;
        self.data
            .get_str("owner_id")
            .map(str::to_string)
            .ok_or_else(|| {
                GlobusCliError::InvalidResponse(format!(
                    "collection {} has no owner_id",
                    self.endpoint_id
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const EP_ID: &str = "ddb59aef-6d04-11e5-ba46-22000b92c6ec";

    fn endpointish(doc: serde_json::Value) -> Endpointish {
        Endpointish::from_response(Uuid::parse_str(EP_ID).unwrap(), GlobusResponse::new(doc))
    }

    #[test]
    fn test_assert_ep_type_accepts_member() {
        let ep = endpointish(json!({"host_endpoint_id": "abc"}));
        assert!(ep
            .assert_ep_type(
                "globus test",
                &[EndpointType::Gcp, EndpointType::Share],
                EndpointErrorKind::WrongType
            )
            .is_ok());
    }

    #[test]
    fn test_assert_ep_type_error_carries_context() {
        let ep = endpointish(json!({"is_globus_connect": true}));
        let err = ep
            .assert_ep_type("globus test", &[EndpointType::Share], EndpointErrorKind::WrongType)
            .unwrap_err();

        match &err {
            GlobusCliError::WrongEndpointType {
                command_path,
                endpoint_id,
                actual,
                expected,
            } => {
                assert_eq!(command_path, "globus test");
                assert_eq!(endpoint_id, EP_ID);
                assert_eq!(*actual, EndpointType::Gcp);
                assert_eq!(expected, &vec![EndpointType::Share]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("Globus Connect Personal"));
    }

    #[test]
    fn test_collection_endpoint_id() {
        let ep = endpointish(json!({"gcs_version": "5.4.1", "owner_id": "owner-ep"}));
        assert_eq!(ep.get_collection_endpoint_id("globus test").unwrap(), "owner-ep");
    }

    #[test]
    fn test_collection_endpoint_id_rejects_share() {
        let ep = endpointish(json!({"host_endpoint_id": "abc", "owner_id": "owner-ep"}));
        let err = ep.get_collection_endpoint_id("globus test").unwrap_err();
        assert!(matches!(err, GlobusCliError::ExpectedCollection { .. }));
        assert!(err.to_string().contains("to be a collection ID"));
    }
}
