//! Generic layouts
//!
//! Entity layouts (`ListLayout`, `DetailLayout`, `FormLayout`) render any
//! `EntitySchema`. The rest take small ad-hoc configs. Every layout shows
//! a skeleton while `loading` is set, before any interactive chrome.

pub mod actions;
pub mod canvas;
pub mod cells;
pub mod dashboard;
pub mod detail;
pub mod document;
pub mod empty;
pub mod error;
pub mod form;
pub mod list;
pub mod settings;
pub mod split;
pub mod wizard;
pub mod workspace;

pub use actions::{ActionArgs, OnAction};
pub use cells::FieldRows;
pub use canvas::{CanvasLayout, CanvasLayoutConfig};
pub use dashboard::{DashboardLayout, DashboardLayoutConfig};
pub use detail::DetailLayout;
pub use document::{DocumentLayout, DocumentLayoutConfig};
pub use empty::EmptyLayout;
pub use error::ErrorLayout;
pub use form::FormLayout;
pub use list::{CellEdit, ListLayout};
pub use settings::SettingsLayout;
pub use split::{SplitLayout, SplitLayoutConfig};
pub use wizard::{WizardLayout, WizardLayoutConfig};
pub use workspace::WorkspaceLayout;
