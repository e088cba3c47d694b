//! Pages for schema-described entities
//!
//! A single generic implementation serves every entity; the schema looked
//! up from the route's `:slug` decides what is fetched and rendered.

pub mod entity;
