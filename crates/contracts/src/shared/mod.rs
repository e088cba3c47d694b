pub mod error_message;
pub mod layout;
pub mod schema;
