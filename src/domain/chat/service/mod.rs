pub mod chat_completion_service;
pub mod request_translator;
pub mod response_translator;
