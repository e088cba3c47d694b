//! Core schema types for business entities
//!
//! All types use 'static lifetimes: every schema is a compile-time constant
//! declared once per entity and never mutated at runtime.

use super::action::{ActionDef, ActionScope};
use super::field_type::FieldType;
use super::validation::{TextFormat, ValidationRules};
use super::value::EntityRecord;

// ============================================================================
// Entity-level
// ============================================================================

/// Declarative descriptor of one business-object type
#[derive(Debug, Clone, Copy)]
pub struct EntitySchema {
    pub identity: EntityIdentity,
    /// REST endpoint, e.g. `/api/tasks`
    pub endpoint: &'static str,
    pub fields: &'static [FieldDef],
    pub display: DisplayConfig,
    pub search: SearchConfig,
    pub filters: FiltersConfig,
    pub layouts: LayoutsConfig,
    pub views: ViewsConfig,
    pub actions: &'static [ActionDef],
    pub relationships: &'static [Relationship],
    pub permissions: Permissions,
    pub subpages: &'static [Subpage],
}

impl EntitySchema {
    pub fn slug(&self) -> &'static str {
        self.identity.slug
    }

    /// Look up a field by key
    pub fn field(&self, key: &str) -> Option<&'static FieldDef> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn has_field(&self, key: &str) -> bool {
        self.field(key).is_some()
    }

    /// Columns of the table view, falling back to every `in_table` field
    pub fn table_columns(&self) -> Vec<&'static FieldDef> {
        match self.views.table {
            Some(table) if !table.columns.is_empty() => table
                .columns
                .iter()
                .filter_map(|key| self.field(key))
                .collect(),
            _ => self.fields.iter().filter(|f| f.display.in_table).collect(),
        }
    }

    /// Form fields in section order; fields not placed in any section go last
    pub fn form_fields(&self) -> Vec<&'static FieldDef> {
        let mut out: Vec<&'static FieldDef> = self
            .layouts
            .form
            .sections
            .iter()
            .flat_map(|s| s.fields.iter())
            .filter_map(|key| self.field(key))
            .filter(|f| f.display.in_form)
            .collect();
        for field in self.fields.iter().filter(|f| f.display.in_form) {
            if !out.iter().any(|f| f.key == field.key) {
                out.push(field);
            }
        }
        out
    }

    pub fn detail_fields(&self) -> Vec<&'static FieldDef> {
        self.fields.iter().filter(|f| f.display.in_detail).collect()
    }

    pub fn actions_for(&self, scope: ActionScope) -> Vec<&'static ActionDef> {
        self.actions.iter().filter(|a| a.scope == scope).collect()
    }

    pub fn action(&self, id: &str) -> Option<&'static ActionDef> {
        self.actions.iter().find(|a| a.id == id)
    }

    pub fn subpage(&self, id: &str) -> Option<&'static Subpage> {
        self.subpages.iter().find(|s| s.id == id)
    }

    pub fn title_of(&self, record: &dyn EntityRecord) -> String {
        self.display
            .title
            .resolve(self, record)
            .unwrap_or_else(|| record.record_id())
    }

    pub fn subtitle_of(&self, record: &dyn EntityRecord) -> Option<String> {
        self.display.subtitle.and_then(|p| p.resolve(self, record))
    }

    pub fn badge_of(&self, record: &dyn EntityRecord) -> Option<String> {
        self.display.badge.and_then(|p| p.resolve(self, record))
    }

    pub fn image_of(&self, record: &dyn EntityRecord) -> Option<String> {
        self.display.image.and_then(|p| p.resolve(self, record))
    }
}

/// Business area an entity belongs to (drives navigation grouping)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BusinessModule {
    Productions,
    Events,
    Finance,
    Hr,
    Crm,
    Operations,
}

impl BusinessModule {
    pub const ALL: [BusinessModule; 6] = [
        Self::Productions,
        Self::Events,
        Self::Finance,
        Self::Hr,
        Self::Crm,
        Self::Operations,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Productions => "productions",
            Self::Events => "events",
            Self::Finance => "finance",
            Self::Hr => "hr",
            Self::Crm => "crm",
            Self::Operations => "operations",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Productions => "Productions",
            Self::Events => "Events",
            Self::Finance => "Finance",
            Self::Hr => "People",
            Self::Crm => "CRM",
            Self::Operations => "Operations",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityIdentity {
    pub name: &'static str,
    pub plural_name: &'static str,
    /// Route segment, e.g. `tasks`
    pub slug: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub module: BusinessModule,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permissions {
    pub create: bool,
    pub read: bool,
    pub update: bool,
    pub delete: bool,
}

impl Permissions {
    pub const ALL: Self = Self {
        create: true,
        read: true,
        update: true,
        delete: true,
    };

    pub const READ_ONLY: Self = Self {
        create: false,
        read: true,
        update: false,
        delete: false,
    };
}

// ============================================================================
// Field-level
// ============================================================================

/// Metadata for a single field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDef {
    pub key: &'static str,
    pub label: &'static str,
    pub field_type: FieldType,
    pub validation: ValidationRules,
    pub display: FieldDisplay,
    pub options: &'static [SelectOption],
    /// Target entity slug for `Relation` fields
    pub relation: Option<&'static str>,
    pub default: Option<DefaultValue>,
    pub placeholder: Option<&'static str>,
    pub help: Option<&'static str>,
}

impl FieldDef {
    pub const fn new(key: &'static str, label: &'static str, field_type: FieldType) -> Self {
        let validation = match field_type {
            FieldType::Email => ValidationRules {
                format: Some(TextFormat::Email),
                ..ValidationRules::none()
            },
            FieldType::Url => ValidationRules {
                format: Some(TextFormat::Url),
                ..ValidationRules::none()
            },
            FieldType::Phone => ValidationRules {
                format: Some(TextFormat::Phone),
                ..ValidationRules::none()
            },
            _ => ValidationRules::none(),
        };
        Self {
            key,
            label,
            field_type,
            validation,
            display: FieldDisplay::DEFAULT,
            options: &[],
            relation: None,
            default: None,
            placeholder: None,
            help: None,
        }
    }

    pub const fn required(mut self) -> Self {
        self.validation.required = true;
        self
    }

    pub const fn options(mut self, options: &'static [SelectOption]) -> Self {
        self.options = options;
        self
    }

    pub const fn relation(mut self, target: &'static str) -> Self {
        self.relation = Some(target);
        self
    }

    pub const fn default_value(mut self, value: DefaultValue) -> Self {
        self.default = Some(value);
        self
    }

    pub const fn placeholder(mut self, text: &'static str) -> Self {
        self.placeholder = Some(text);
        self
    }

    pub const fn help(mut self, text: &'static str) -> Self {
        self.help = Some(text);
        self
    }

    pub const fn range(mut self, min: f64, max: f64) -> Self {
        self.validation.min = Some(min);
        self.validation.max = Some(max);
        self
    }

    pub const fn min(mut self, min: f64) -> Self {
        self.validation.min = Some(min);
        self
    }

    pub const fn max_length(mut self, max: usize) -> Self {
        self.validation.max_length = Some(max);
        self
    }

    pub const fn sortable(mut self) -> Self {
        self.display.sortable = true;
        self
    }

    pub const fn width(mut self, px: u32) -> Self {
        self.display.width = Some(px);
        self
    }

    pub const fn hide_in_table(mut self) -> Self {
        self.display.in_table = false;
        self
    }

    pub const fn hide_in_form(mut self) -> Self {
        self.display.in_form = false;
        self
    }

    pub const fn hide_in_detail(mut self) -> Self {
        self.display.in_detail = false;
        self
    }

    /// Look up the option for a stored select value
    pub fn option(&self, value: &str) -> Option<&'static SelectOption> {
        self.options.iter().find(|o| o.value == value)
    }

    pub fn option_label<'a>(&self, value: &'a str) -> &'a str {
        match self.option(value) {
            Some(opt) => opt.label,
            None => value,
        }
    }

    pub fn is_optional(&self) -> bool {
        !self.validation.required
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDisplay {
    pub in_table: bool,
    pub in_form: bool,
    pub in_detail: bool,
    pub sortable: bool,
    pub width: Option<u32>,
}

impl FieldDisplay {
    pub const DEFAULT: Self = Self {
        in_table: true,
        in_form: true,
        in_detail: true,
        sortable: false,
        width: None,
    };
}

impl Default for FieldDisplay {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
    /// Badge colour token: `primary`, `success`, `warning`, `error`, `neutral`
    pub color: Option<&'static str>,
}

impl SelectOption {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self {
            value,
            label,
            color: None,
        }
    }

    pub const fn colored(value: &'static str, label: &'static str, color: &'static str) -> Self {
        Self {
            value,
            label,
            color: Some(color),
        }
    }
}

/// Default value seeded into create forms
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    Text(&'static str),
    Number(f64),
    Bool(bool),
    /// A single select option key
    Option(&'static str),
    /// Several option keys or tags
    Options(&'static [&'static str]),
    /// Current date at form creation
    Today,
    /// Current timestamp at form creation
    Now,
}

impl DefaultValue {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Number(_) => "number",
            Self::Bool(_) => "bool",
            Self::Option(_) => "option",
            Self::Options(_) => "options",
            Self::Today => "today",
            Self::Now => "now",
        }
    }

    /// Whether this default may seed a field of the given type
    pub fn fits(&self, field_type: FieldType) -> bool {
        match self {
            Self::Text(_) => field_type.is_textual() && field_type != FieldType::Select,
            Self::Number(_) => field_type.is_numeric(),
            Self::Bool(_) => field_type == FieldType::Switch,
            Self::Option(_) => field_type == FieldType::Select,
            Self::Options(_) => field_type.is_list(),
            Self::Today => field_type.is_temporal(),
            Self::Now => field_type == FieldType::DateTime,
        }
    }
}

// ============================================================================
// Display projections
// ============================================================================

/// A record projection: either a field key or a pure function of the record
#[derive(Debug, Clone, Copy)]
pub enum DisplayProjection {
    Field(&'static str),
    Compute(fn(&dyn EntityRecord) -> Option<String>),
}

impl DisplayProjection {
    /// Resolve to display text; empty results count as absent
    pub fn resolve(&self, schema: &EntitySchema, record: &dyn EntityRecord) -> Option<String> {
        let text = match self {
            Self::Field(key) => {
                let value = record.field_value(key)?;
                match schema.field(key) {
                    Some(field) => value.display(field),
                    None => value.to_plain_string(),
                }
            }
            Self::Compute(f) => f(record)?,
        };
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }

    pub fn field_key(&self) -> Option<&'static str> {
        match self {
            Self::Field(key) => Some(*key),
            Self::Compute(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DisplayConfig {
    pub title: DisplayProjection,
    pub subtitle: Option<DisplayProjection>,
    pub badge: Option<DisplayProjection>,
    pub image: Option<DisplayProjection>,
}

// ============================================================================
// Search & filters
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub fields: &'static [&'static str],
    pub placeholder: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickFilter {
    pub id: &'static str,
    pub label: &'static str,
    pub field: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiltersConfig {
    pub quick: &'static [QuickFilter],
    pub advanced: &'static [&'static str],
}

impl FiltersConfig {
    pub const NONE: Self = Self {
        quick: &[],
        advanced: &[],
    };
}

// ============================================================================
// Layouts
// ============================================================================

/// View modes a list can render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewType {
    #[default]
    Table,
    Kanban,
    Calendar,
    Grid,
}

impl ViewType {
    pub const ALL: [ViewType; 4] = [Self::Table, Self::Kanban, Self::Calendar, Self::Grid];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Kanban => "kanban",
            Self::Calendar => "calendar",
            Self::Grid => "grid",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Table => "Table",
            Self::Kanban => "Board",
            Self::Calendar => "Calendar",
            Self::Grid => "Grid",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Table => "list",
            Self::Kanban => "columns",
            Self::Calendar => "calendar",
            Self::Grid => "grid",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutsConfig {
    pub list: ListLayoutConfig,
    pub detail: DetailLayoutConfig,
    pub form: FormLayoutConfig,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListLayoutConfig {
    pub default_view: ViewType,
    pub page_size: usize,
    pub stats: &'static [StatDef],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatDef {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub kind: StatKind,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatKind {
    /// Number of records
    Count,
    /// Sum of a numeric field
    Sum { field: &'static str },
    /// Number of records whose select field equals a value
    CountWhere {
        field: &'static str,
        value: &'static str,
    },
}

impl StatKind {
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Count => None,
            Self::Sum { field } | Self::CountWhere { field, .. } => Some(*field),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailLayoutConfig {
    pub tabs: &'static [DetailTab],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailTab {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub content: TabContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabContent {
    /// Label/value rows for the listed fields
    Fields(&'static [&'static str]),
    /// Records of a `has_many` relationship
    Related(&'static str),
    /// Section rendered by the page through `render_tab`
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLayoutConfig {
    pub sections: &'static [FormSection],
    pub columns: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSection {
    pub id: &'static str,
    pub title: &'static str,
    pub description: Option<&'static str>,
    pub fields: &'static [&'static str],
}

// ============================================================================
// Views
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewsConfig {
    pub table: Option<TableView>,
    pub kanban: Option<KanbanView>,
    pub calendar: Option<CalendarView>,
    pub grid: Option<GridView>,
}

impl ViewsConfig {
    /// View types this schema declares, table first
    pub fn available(&self) -> Vec<ViewType> {
        let mut out = Vec::new();
        if self.table.is_some() {
            out.push(ViewType::Table);
        }
        if self.kanban.is_some() {
            out.push(ViewType::Kanban);
        }
        if self.calendar.is_some() {
            out.push(ViewType::Calendar);
        }
        if self.grid.is_some() {
            out.push(ViewType::Grid);
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableView {
    pub columns: &'static [&'static str],
    pub default_sort: Option<SortSpec>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: &'static str,
    pub ascending: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KanbanView {
    /// Select field whose options become columns
    pub group_by: &'static str,
    pub card_title: &'static str,
    pub card_subtitle: Option<&'static str>,
    /// Option value → colour token overrides
    pub color_map: &'static [(&'static str, &'static str)],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarView {
    pub start_field: &'static str,
    pub end_field: Option<&'static str>,
    pub title_field: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridView {
    pub title_field: &'static str,
    pub subtitle_field: Option<&'static str>,
    pub image_field: Option<&'static str>,
}

// ============================================================================
// Relationships & subpages
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    BelongsTo,
    HasMany,
}

impl RelationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BelongsTo => "belongs_to",
            Self::HasMany => "has_many",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relationship {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: RelationKind,
    /// Target entity slug
    pub target: &'static str,
    /// `BelongsTo`: field on this entity; `HasMany`: field on the target
    pub foreign_key: &'static str,
}

/// Named pre-filtered list view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Subpage {
    pub id: &'static str,
    pub label: &'static str,
    pub filter: QueryFragment,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryFragment {
    pub field: &'static str,
    pub op: FilterOp,
    pub value: FilterValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    Ne,
    Gte,
    Lte,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterValue {
    Text(&'static str),
    Number(f64),
    Bool(bool),
    Today,
}
