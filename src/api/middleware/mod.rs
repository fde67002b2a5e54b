//! HTTP middleware: bearer auth, request logging and panic recovery

pub mod auth;
pub mod panic;
pub mod request_log;
