//! Shared contracts for the business workspace.
//!
//! Everything here is target-independent: the frontend (wasm) and the
//! backend (native) both depend on it, and all layout logic is tested here.

pub mod domain;
pub mod shared;
