//! Schema self-consistency checks
//!
//! Every field key a schema references outside of `fields` (views, form
//! sections, detail tabs, search, filters, display projections, subpages,
//! relationships, stats) must resolve to a declared field, and every
//! default value must fit its field's type.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::field_type::FieldType;
use super::registry::SchemaRegistry;
use super::types::{DefaultValue, EntitySchema, FieldDef, RelationKind, TabContent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaIssue {
    pub severity: Severity,
    /// Path inside the schema, e.g. `views.table.columns`
    pub location: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaLintReport {
    pub slug: String,
    pub errors: Vec<SchemaIssue>,
    pub warnings: Vec<SchemaIssue>,
}

impl SchemaLintReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

struct Linter<'a> {
    schema: &'a EntitySchema,
    registry: Option<&'a SchemaRegistry>,
    errors: Vec<SchemaIssue>,
    warnings: Vec<SchemaIssue>,
}

impl<'a> Linter<'a> {
    fn error(&mut self, location: impl Into<String>, message: impl Into<String>) {
        self.errors.push(SchemaIssue {
            severity: Severity::Error,
            location: location.into(),
            message: message.into(),
        });
    }

    fn warn(&mut self, location: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(SchemaIssue {
            severity: Severity::Warning,
            location: location.into(),
            message: message.into(),
        });
    }

    fn field_ref(&mut self, location: &str, key: &str) {
        if !self.schema.has_field(key) {
            self.error(location, format!("unknown field '{}'", key));
        }
    }

    fn field_refs(&mut self, location: &str, keys: &[&str]) {
        for key in keys {
            self.field_ref(location, key);
        }
    }

    /// Field must exist and satisfy `pred`
    fn typed_ref(&mut self, location: &str, key: &str, what: &str, pred: fn(FieldType) -> bool) {
        match self.schema.field(key) {
            None => self.error(location, format!("unknown field '{}'", key)),
            Some(f) if !pred(f.field_type) => self.error(
                location,
                format!("field '{}' is {}, expected {}", key, f.field_type.as_str(), what),
            ),
            Some(_) => {}
        }
    }

    fn entity_ref(&mut self, location: &str, slug: &str) {
        if let Some(registry) = self.registry {
            if !registry.contains(slug) {
                self.error(location, format!("unknown entity '{}'", slug));
            }
        }
    }

    fn check_fields(&mut self) {
        let mut seen = HashSet::new();
        for field in self.schema.fields {
            let loc = format!("fields.{}", field.key);
            if !seen.insert(field.key) {
                self.error(&loc, "duplicate field key");
            }
            if field.field_type.requires_options() && field.options.is_empty() {
                self.error(&loc, "select field without options");
            }
            match (field.field_type, field.relation) {
                (FieldType::Relation, None) => self.error(&loc, "relation field without target"),
                (FieldType::Relation, Some(target)) => self.entity_ref(&loc, target),
                (_, Some(_)) => self.warn(&loc, "relation target on a non-relation field"),
                _ => {}
            }
            if let Some(default) = field.default {
                self.check_default(&loc, field, default);
            }
            if !field.display.in_table && !field.display.in_form && !field.display.in_detail {
                self.warn(&loc, "field is hidden everywhere");
            }
        }
    }

    fn check_default(&mut self, loc: &str, field: &FieldDef, default: DefaultValue) {
        if !default.fits(field.field_type) {
            self.error(
                loc,
                format!(
                    "default of kind {} does not fit type {}",
                    default.kind(),
                    field.field_type.as_str()
                ),
            );
            return;
        }
        let keys: Vec<&str> = match default {
            DefaultValue::Option(key) => vec![key],
            DefaultValue::Options(keys) if field.field_type == FieldType::MultiSelect => keys.to_vec(),
            _ => Vec::new(),
        };
        for key in keys {
            if field.option(key).is_none() {
                self.error(loc, format!("default '{}' is not an option", key));
            }
        }
    }

    fn check_views(&mut self) {
        let views = self.schema.views;
        if let Some(table) = views.table {
            if table.columns.is_empty() {
                self.warn("views.table.columns", "table view has no columns");
            }
            self.field_refs("views.table.columns", table.columns);
            if let Some(sort) = table.default_sort {
                self.field_ref("views.table.default_sort", sort.field);
            }
        }
        if let Some(kanban) = views.kanban {
            self.typed_ref("views.kanban.group_by", kanban.group_by, "select", |t| {
                t == FieldType::Select
            });
            self.field_ref("views.kanban.card_title", kanban.card_title);
            if let Some(sub) = kanban.card_subtitle {
                self.field_ref("views.kanban.card_subtitle", sub);
            }
            if let Some(group) = self.schema.field(kanban.group_by) {
                for (value, _) in kanban.color_map {
                    if group.option(value).is_none() {
                        self.error(
                            "views.kanban.color_map",
                            format!("'{}' is not an option of '{}'", value, group.key),
                        );
                    }
                }
            }
        }
        if let Some(calendar) = views.calendar {
            let is_temporal: fn(FieldType) -> bool = |t| t.is_temporal();
            self.typed_ref("views.calendar.start_field", calendar.start_field, "date", is_temporal);
            if let Some(end) = calendar.end_field {
                self.typed_ref("views.calendar.end_field", end, "date", is_temporal);
            }
            self.field_ref("views.calendar.title_field", calendar.title_field);
        }
        if let Some(grid) = views.grid {
            self.field_ref("views.grid.title_field", grid.title_field);
            if let Some(sub) = grid.subtitle_field {
                self.field_ref("views.grid.subtitle_field", sub);
            }
            if let Some(image) = grid.image_field {
                self.field_ref("views.grid.image_field", image);
            }
        }
        if !views.available().contains(&self.schema.layouts.list.default_view) {
            self.error(
                "layouts.list.default_view",
                format!(
                    "default view '{}' is not declared in views",
                    self.schema.layouts.list.default_view.as_str()
                ),
            );
        }
    }

    fn check_layouts(&mut self) {
        let layouts = self.schema.layouts;
        for section in layouts.form.sections {
            self.field_refs(&format!("layouts.form.sections.{}", section.id), section.fields);
        }
        let mut tab_ids = HashSet::new();
        for tab in layouts.detail.tabs {
            let loc = format!("layouts.detail.tabs.{}", tab.id);
            if !tab_ids.insert(tab.id) {
                self.error(&loc, "duplicate tab id");
            }
            match tab.content {
                TabContent::Fields(keys) => self.field_refs(&loc, keys),
                TabContent::Related(name) => {
                    let found = self
                        .schema
                        .relationships
                        .iter()
                        .any(|r| r.name == name && r.kind == RelationKind::HasMany);
                    if !found {
                        self.error(&loc, format!("unknown has_many relationship '{}'", name));
                    }
                }
                TabContent::Custom => {}
            }
        }
        for stat in layouts.list.stats {
            if let Some(key) = stat.kind.field() {
                self.field_ref(&format!("layouts.list.stats.{}", stat.id), key);
            }
        }
        if layouts.list.page_size == 0 {
            self.error("layouts.list.page_size", "page size must be positive");
        }
    }

    fn check_search_and_filters(&mut self) {
        self.field_refs("search.fields", self.schema.search.fields);
        for quick in self.schema.filters.quick {
            let loc = format!("filters.quick.{}", quick.id);
            match self.schema.field(quick.field) {
                None => self.error(&loc, format!("unknown field '{}'", quick.field)),
                Some(f) if f.field_type == FieldType::Select && f.option(quick.value).is_none() => {
                    self.error(&loc, format!("'{}' is not an option of '{}'", quick.value, f.key))
                }
                Some(_) => {}
            }
        }
        self.field_refs("filters.advanced", self.schema.filters.advanced);
        for subpage in self.schema.subpages {
            self.field_ref(&format!("subpages.{}", subpage.id), subpage.filter.field);
        }
    }

    fn check_display(&mut self) {
        let display = self.schema.display;
        let projections = [
            ("display.title", Some(display.title)),
            ("display.subtitle", display.subtitle),
            ("display.badge", display.badge),
            ("display.image", display.image),
        ];
        for (loc, projection) in projections {
            if let Some(key) = projection.and_then(|p| p.field_key()) {
                self.field_ref(loc, key);
            }
        }
    }

    fn check_relationships(&mut self) {
        for rel in self.schema.relationships {
            let loc = format!("relationships.{}", rel.name);
            self.entity_ref(&loc, rel.target);
            match rel.kind {
                RelationKind::BelongsTo => self.field_ref(&loc, rel.foreign_key),
                RelationKind::HasMany => {
                    let target = self.registry.and_then(|r| r.get(rel.target));
                    if let Some(target) = target {
                        if !target.has_field(rel.foreign_key) {
                            self.error(
                                &loc,
                                format!(
                                    "'{}' has no field '{}'",
                                    rel.target, rel.foreign_key
                                ),
                            );
                        }
                    }
                }
            }
        }
    }

    fn check_actions(&mut self) {
        let mut ids = HashSet::new();
        for action in self.schema.actions {
            if !ids.insert(action.id) {
                self.error(format!("actions.{}", action.id), "duplicate action id");
            }
        }
    }
}

/// Lint one schema. Cross-entity references are only checked when a
/// registry is given.
pub fn lint_schema(schema: &EntitySchema, registry: Option<&SchemaRegistry>) -> SchemaLintReport {
    let mut linter = Linter {
        schema,
        registry,
        errors: Vec::new(),
        warnings: Vec::new(),
    };
    linter.check_fields();
    linter.check_views();
    linter.check_layouts();
    linter.check_search_and_filters();
    linter.check_display();
    linter.check_relationships();
    linter.check_actions();

    SchemaLintReport {
        slug: schema.slug().to_string(),
        errors: linter.errors,
        warnings: linter.warnings,
    }
}

/// Lint every schema of a registry, plus registry-level duplicate slugs
pub fn lint_registry(registry: &SchemaRegistry) -> Vec<SchemaLintReport> {
    let duplicates = registry.duplicate_slugs();
    let mut reports: Vec<SchemaLintReport> = registry
        .list()
        .into_iter()
        .map(|schema| lint_schema(schema, Some(registry)))
        .collect();
    for report in reports.iter_mut() {
        if duplicates.contains(&report.slug.as_str()) {
            report.errors.push(SchemaIssue {
                severity: Severity::Error,
                location: "identity.slug".to_string(),
                message: "slug registered more than once".to_string(),
            });
        }
    }
    reports
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::schema::types::*;

    const STATUS_OPTIONS: &[SelectOption] = &[
        SelectOption::new("open", "Open"),
        SelectOption::new("closed", "Closed"),
    ];

    static BROKEN: EntitySchema = EntitySchema {
        identity: EntityIdentity {
            name: "Ticket",
            plural_name: "Tickets",
            slug: "tickets",
            icon: "ticket",
            description: "",
            module: BusinessModule::Operations,
        },
        endpoint: "/api/tickets",
        fields: &[
            FieldDef::new("title", "Title", FieldType::Text).required(),
            FieldDef::new("status", "Status", FieldType::Select)
                .options(STATUS_OPTIONS)
                .default_value(DefaultValue::Option("pending")),
            FieldDef::new("priority", "Priority", FieldType::Number)
                .default_value(DefaultValue::Text("high")),
            FieldDef::new("owner_id", "Owner", FieldType::Relation).relation("ghosts"),
            FieldDef::new("kind", "Kind", FieldType::Select),
            FieldDef::new("title", "Title again", FieldType::Text),
        ],
        display: DisplayConfig {
            title: DisplayProjection::Field("title"),
            subtitle: Some(DisplayProjection::Field("summary")),
            badge: None,
            image: None,
        },
        search: SearchConfig {
            fields: &["title", "body"],
            placeholder: None,
        },
        filters: FiltersConfig {
            quick: &[QuickFilter {
                id: "stale",
                label: "Stale",
                field: "status",
                value: "stale",
            }],
            advanced: &["created_at"],
        },
        layouts: LayoutsConfig {
            list: ListLayoutConfig {
                default_view: ViewType::Calendar,
                page_size: 25,
                stats: &[],
            },
            detail: DetailLayoutConfig {
                tabs: &[DetailTab {
                    id: "main",
                    label: "Main",
                    icon: "info",
                    content: TabContent::Fields(&["title", "assignee"]),
                }],
            },
            form: FormLayoutConfig {
                sections: &[FormSection {
                    id: "general",
                    title: "General",
                    description: None,
                    fields: &["title", "due_date"],
                }],
                columns: 2,
            },
        },
        views: ViewsConfig {
            table: Some(TableView {
                columns: &["title", "status", "estimate"],
                default_sort: None,
            }),
            kanban: Some(KanbanView {
                group_by: "status",
                card_title: "title",
                card_subtitle: None,
                color_map: &[("open", "primary"), ("archived", "neutral")],
            }),
            calendar: None,
            grid: None,
        },
        actions: &[],
        relationships: &[],
        permissions: Permissions::ALL,
        subpages: &[],
    };

    fn locations(report: &SchemaLintReport) -> Vec<&str> {
        report.errors.iter().map(|e| e.location.as_str()).collect()
    }

    #[test]
    fn reports_every_unknown_reference() {
        let registry = SchemaRegistry::builtin();
        let report = lint_schema(&BROKEN, Some(&registry));
        let locs = locations(&report);

        for expected in [
            "fields.title",
            "fields.status",
            "fields.priority",
            "fields.owner_id",
            "fields.kind",
            "views.table.columns",
            "views.kanban.color_map",
            "layouts.list.default_view",
            "layouts.form.sections.general",
            "layouts.detail.tabs.main",
            "search.fields",
            "filters.quick.stale",
            "filters.advanced",
            "display.subtitle",
        ] {
            assert!(locs.contains(&expected), "missing error at {expected}: {locs:?}");
        }
        assert!(!report.is_valid());
    }

    #[test]
    fn relation_targets_unchecked_without_registry() {
        let report = lint_schema(&BROKEN, None);
        assert!(!report
            .errors
            .iter()
            .any(|e| e.message.contains("unknown entity")));
    }

    #[test]
    fn every_shipped_schema_is_consistent() {
        let registry = SchemaRegistry::builtin();
        for report in lint_registry(&registry) {
            assert!(
                report.is_valid(),
                "{} has lint errors: {:#?}",
                report.slug,
                report.errors
            );
        }
    }

    #[test]
    fn every_shipped_default_fits_its_field() {
        for schema in crate::domain::ALL_SCHEMAS {
            for field in schema.fields {
                if let Some(default) = field.default {
                    assert!(
                        default.fits(field.field_type),
                        "{}.{} default {:?}",
                        schema.slug(),
                        field.key,
                        default
                    );
                }
            }
        }
    }

    #[test]
    fn duplicate_slugs_are_reported() {
        use crate::domain::a002_task::schema::TASK_SCHEMA;
        let registry = SchemaRegistry::new(&[&TASK_SCHEMA, &TASK_SCHEMA]);
        let reports = lint_registry(&registry);
        assert!(reports
            .iter()
            .all(|r| r.errors.iter().any(|e| e.location == "identity.slug")));
    }
}
