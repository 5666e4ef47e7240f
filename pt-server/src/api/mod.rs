pub mod error;
pub mod message_response;
pub mod projects;
