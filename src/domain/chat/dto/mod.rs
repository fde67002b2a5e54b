pub mod backend_chat;
pub mod chat_completion_request;
pub mod chat_completion_response;
