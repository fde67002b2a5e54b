//! Infrastructure: configuration, logging and outbound clients

pub mod client;
pub mod config;
pub mod logging;
