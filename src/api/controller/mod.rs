//! Controllers: connect routes to domain services

pub mod chat;
pub mod system;
