//! Declarative entity schemas
//!
//! Each business entity is described once as a static `EntitySchema`;
//! generic layouts render lists, detail pages and forms from it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::shared::schema::{registry, Record};
//!
//! let schema = registry().get("tasks").unwrap();
//! let record = Record::from_json(schema, &json)?;
//! println!("{}", schema.title_of(&record));
//! ```

mod action;
mod descriptor;
mod field_type;
mod linter;
mod registry;
mod types;
mod validation;
mod value;

pub use action::{
    interpolate_id, ActionDef, ActionDispatcher, ActionError, ActionHandler, ActionPayload,
    ActionScope, HttpMethod, PathSpec,
};
pub use descriptor::{
    ActionDescriptor, FieldDescriptor, LintRegistryResponse, OptionDescriptor,
    PermissionsDescriptor, SchemaDescriptor, SchemaSummary,
};
pub use field_type::FieldType;
pub use linter::{lint_registry, lint_schema, SchemaIssue, SchemaLintReport, Severity};
pub use registry::{registry, SchemaRegistry};
pub use types::{
    BusinessModule, CalendarView, DefaultValue, DetailLayoutConfig, DetailTab, DisplayConfig,
    DisplayProjection, EntityIdentity, EntitySchema, FieldDef, FieldDisplay, FilterOp,
    FilterValue, FiltersConfig, FormLayoutConfig, FormSection, GridView, KanbanView,
    LayoutsConfig, ListLayoutConfig, Permissions, QueryFragment, QuickFilter, RelationKind,
    Relationship, SearchConfig, SelectOption, SortSpec, StatDef, StatKind, Subpage, TabContent,
    TableView, ViewType, ViewsConfig,
};
pub use validation::{TextFormat, ValidationRules};
pub use value::{format_money, format_number, EntityRecord, FieldValue, Record, RecordError};
