//! Globus CLI Library
//!
//! Command line client for the Globus Transfer and Timer services: bookmark
//! management, endpoint server listing, timer job deletion and endpoint type
//! introspection.

pub mod cli;
pub mod core;
pub mod domain;
pub mod infrastructure;

pub use crate::domain::error::{GlobusCliError, GlobusResult};
pub use crate::domain::config::GlobusConfig;
pub use crate::domain::response::GlobusResponse;
pub use crate::core::{EndpointType, Endpointish};
pub use crate::infrastructure::client::{ServerList, TimerClient, TransferClient};
