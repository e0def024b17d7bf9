// Domain module - Configuration, errors and API payloads
pub mod config;
pub mod error;
pub mod response;
