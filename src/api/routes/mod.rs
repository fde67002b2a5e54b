//! API route declarations

pub mod chat_routes;
pub mod system_routes;
