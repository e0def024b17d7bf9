// Infrastructure module - External dependencies and adapters
pub mod client;
pub mod logging;
pub mod config;
