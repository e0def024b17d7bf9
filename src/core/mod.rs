// Core module - Endpoint classification and text field specifications
pub mod endpoint_type;
pub mod endpointish;
pub mod fields;

pub use endpoint_type::EndpointType;
pub use endpointish::{EndpointErrorKind, Endpointish};
pub use fields::{Field, FieldSource};
