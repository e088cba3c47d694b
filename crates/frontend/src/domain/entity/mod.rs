//! Entity pages
//!
//! MVVM split:
//! - model.rs: REST calls against `schema.endpoint`
//! - dispatcher.rs: executes schema actions for a page
//! - ui/*/view_model.rs: page state and commands
//! - ui/*/mod.rs: Leptos components wiring a view model into a layout

pub mod dispatcher;
pub mod model;
pub mod ui;
