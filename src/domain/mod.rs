//! Domain layer: request translation, auth and system services

pub mod auth;
pub mod chat;
pub mod system;
