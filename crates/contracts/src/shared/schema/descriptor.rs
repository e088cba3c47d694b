//! Owned, serialisable projections of static schemas for API responses

use serde::{Deserialize, Serialize};

use super::action::ActionDef;
use super::field_type::FieldType;
use super::linter::SchemaLintReport;
use super::types::{EntitySchema, FieldDef, Permissions, SelectOption, ViewType};

/// Summary information about a schema for listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaSummary {
    pub slug: String,
    pub name: String,
    pub plural_name: String,
    /// Business module key, e.g. `finance`
    pub module: String,
    pub endpoint: String,
    pub field_count: usize,
}

impl From<&EntitySchema> for SchemaSummary {
    fn from(schema: &EntitySchema) -> Self {
        Self {
            slug: schema.slug().to_string(),
            name: schema.identity.name.to_string(),
            plural_name: schema.identity.plural_name.to_string(),
            module: schema.identity.module.as_str().to_string(),
            endpoint: schema.endpoint.to_string(),
            field_count: schema.fields.len(),
        }
    }
}

/// Owned version of EntitySchema for API responses.
/// Function-valued parts (computed projections, computed paths) are not carried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaDescriptor {
    pub slug: String,
    pub name: String,
    pub plural_name: String,
    pub icon: String,
    pub description: String,
    pub module: String,
    pub endpoint: String,
    pub fields: Vec<FieldDescriptor>,
    /// Declared view types, table first
    pub views: Vec<String>,
    pub default_view: String,
    pub page_size: usize,
    pub permissions: PermissionsDescriptor,
    pub actions: Vec<ActionDescriptor>,
}

impl From<&EntitySchema> for SchemaDescriptor {
    fn from(schema: &EntitySchema) -> Self {
        Self {
            slug: schema.slug().to_string(),
            name: schema.identity.name.to_string(),
            plural_name: schema.identity.plural_name.to_string(),
            icon: schema.identity.icon.to_string(),
            description: schema.identity.description.to_string(),
            module: schema.identity.module.as_str().to_string(),
            endpoint: schema.endpoint.to_string(),
            fields: schema.fields.iter().map(|f| f.into()).collect(),
            views: schema
                .views
                .available()
                .iter()
                .map(|v: &ViewType| v.as_str().to_string())
                .collect(),
            default_view: schema.layouts.list.default_view.as_str().to_string(),
            page_size: schema.layouts.list.page_size,
            permissions: schema.permissions.into(),
            actions: schema.actions.iter().map(|a| a.into()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub key: String,
    pub label: String,
    pub field_type: FieldType,
    pub required: bool,
    pub in_table: bool,
    pub in_form: bool,
    pub in_detail: bool,
    pub sortable: bool,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub options: Vec<OptionDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relation: Option<String>,
}

impl From<&FieldDef> for FieldDescriptor {
    fn from(field: &FieldDef) -> Self {
        Self {
            key: field.key.to_string(),
            label: field.label.to_string(),
            field_type: field.field_type,
            required: field.validation.required,
            in_table: field.display.in_table,
            in_form: field.display.in_form,
            in_detail: field.display.in_detail,
            sortable: field.display.sortable,
            options: field.options.iter().map(|o| o.into()).collect(),
            relation: field.relation.map(|s| s.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionDescriptor {
    pub value: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl From<&SelectOption> for OptionDescriptor {
    fn from(option: &SelectOption) -> Self {
        Self {
            value: option.value.to_string(),
            label: option.label.to_string(),
            color: option.color.map(|s| s.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionsDescriptor {
    pub create: bool,
    pub read: bool,
    pub update: bool,
    pub delete: bool,
}

impl From<Permissions> for PermissionsDescriptor {
    fn from(p: Permissions) -> Self {
        Self {
            create: p.create,
            read: p.read,
            update: p.update,
            delete: p.delete,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionDescriptor {
    pub id: String,
    pub label: String,
    pub scope: super::action::ActionScope,
    /// Handler tag: navigate, function, api, modal or external
    pub handler: String,
    pub destructive: bool,
    pub confirm: bool,
}

impl From<&ActionDef> for ActionDescriptor {
    fn from(action: &ActionDef) -> Self {
        Self {
            id: action.id.to_string(),
            label: action.label.to_string(),
            scope: action.scope,
            handler: action.handler.kind().to_string(),
            destructive: action.destructive,
            confirm: action.confirm.is_some(),
        }
    }
}

/// Response of the registry-wide lint endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LintRegistryResponse {
    pub reports: Vec<SchemaLintReport>,
    pub total_schemas: usize,
    pub valid_count: usize,
    pub invalid_count: usize,
}

impl From<Vec<SchemaLintReport>> for LintRegistryResponse {
    fn from(reports: Vec<SchemaLintReport>) -> Self {
        let valid_count = reports.iter().filter(|r| r.is_valid()).count();
        Self {
            total_schemas: reports.len(),
            invalid_count: reports.len() - valid_count,
            valid_count,
            reports,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_task::schema::TASK_SCHEMA;

    #[test]
    fn descriptor_carries_fields_and_views() {
        let d = SchemaDescriptor::from(&TASK_SCHEMA);
        assert_eq!(d.slug, "tasks");
        assert_eq!(d.fields.len(), TASK_SCHEMA.fields.len());
        assert_eq!(d.views.first().map(String::as_str), Some("table"));

        let status = d.fields.iter().find(|f| f.key == "status").unwrap();
        assert!(status.options.iter().any(|o| o.value == "todo"));
    }

    #[test]
    fn descriptor_serializes_field_type_snake_case() {
        let d = SchemaDescriptor::from(&TASK_SCHEMA);
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["fields"][0]["field_type"], "text");
    }

    #[test]
    fn lint_response_counts() {
        let ok = SchemaLintReport {
            slug: "a".into(),
            errors: vec![],
            warnings: vec![],
        };
        let mut bad = ok.clone();
        bad.slug = "b".into();
        bad.errors.push(crate::shared::schema::SchemaIssue {
            severity: crate::shared::schema::Severity::Error,
            location: "fields.x".into(),
            message: "duplicate field key".into(),
        });
        let response = LintRegistryResponse::from(vec![ok, bad]);
        assert_eq!(response.total_schemas, 2);
        assert_eq!(response.valid_count, 1);
        assert_eq!(response.invalid_count, 1);
    }
}
