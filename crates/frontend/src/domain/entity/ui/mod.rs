pub mod details;
pub mod form;
pub mod import;
pub mod list;
