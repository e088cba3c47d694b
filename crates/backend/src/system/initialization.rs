use contracts::shared::schema::{lint_registry, SchemaLintReport, SchemaRegistry};

/// Lint every registered schema and log the outcome.
///
/// Errors are always logged; with `strict` they abort startup.
pub fn lint_schemas_on_startup(registry: &SchemaRegistry, strict: bool) -> anyhow::Result<()> {
    let reports = lint_registry(registry);
    log_reports(&reports);

    let invalid: Vec<&str> = reports
        .iter()
        .filter(|r| !r.is_valid())
        .map(|r| r.slug.as_str())
        .collect();

    if invalid.is_empty() {
        tracing::info!("All {} entity schemas passed lint", reports.len());
        return Ok(());
    }

    if strict {
        anyhow::bail!(
            "schema lint failed for {} (schemas.strict = true)",
            invalid.join(", ")
        );
    }
    tracing::warn!(
        "Starting with {} invalid schema(s); set schemas.strict = true to refuse",
        invalid.len()
    );
    Ok(())
}

fn log_reports(reports: &[SchemaLintReport]) {
    for report in reports {
        for issue in &report.errors {
            tracing::error!("schema '{}' {}: {}", report.slug, issue.location, issue.message);
        }
        for issue in &report.warnings {
            tracing::warn!("schema '{}' {}: {}", report.slug, issue.location, issue.message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::schema::*;

    static BROKEN: EntitySchema = EntitySchema {
        identity: EntityIdentity {
            name: "Broken",
            plural_name: "Broken",
            slug: "broken",
            icon: "bug",
            description: "",
            module: BusinessModule::Operations,
        },
        endpoint: "/api/broken",
        fields: &[FieldDef::new("name", "Name", FieldType::Text)],
        display: DisplayConfig {
            title: DisplayProjection::Field("missing"),
            subtitle: None,
            badge: None,
            image: None,
        },
        search: SearchConfig {
            fields: &["name"],
            placeholder: None,
        },
        filters: FiltersConfig::NONE,
        layouts: LayoutsConfig {
            list: ListLayoutConfig {
                default_view: ViewType::Table,
                page_size: 25,
                stats: &[],
            },
            detail: DetailLayoutConfig { tabs: &[] },
            form: FormLayoutConfig {
                sections: &[],
                columns: 1,
            },
        },
        views: ViewsConfig {
            table: Some(TableView {
                columns: &["name"],
                default_sort: None,
            }),
            kanban: None,
            calendar: None,
            grid: None,
        },
        actions: &[],
        relationships: &[],
        permissions: Permissions::READ_ONLY,
        subpages: &[],
    };

    #[test]
    fn builtin_schemas_pass_in_strict_mode() {
        let registry = SchemaRegistry::builtin();
        assert!(lint_schemas_on_startup(&registry, true).is_ok());
    }

    #[test]
    fn strict_mode_refuses_invalid_schemas() {
        let registry = SchemaRegistry::new(&[&BROKEN]);
        let err = lint_schemas_on_startup(&registry, true).unwrap_err();
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn lenient_mode_only_logs() {
        let registry = SchemaRegistry::new(&[&BROKEN]);
        assert!(lint_schemas_on_startup(&registry, false).is_ok());
    }
}
