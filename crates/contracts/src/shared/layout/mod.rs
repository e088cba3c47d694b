//! Interaction state of the generic layouts
//!
//! Layout components in the frontend keep their signals thin and delegate
//! every decision (what the body shows, where focus moves, whether submit
//! is enabled) to the pure functions here.

pub mod canvas;
pub mod dashboard;
pub mod detail;
pub mod document;
pub mod form;
pub mod keyboard;
pub mod list;
pub mod sections;
pub mod split;
pub mod wizard;
