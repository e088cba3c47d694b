use axum::{extract::Path, http::StatusCode, Json};
use contracts::shared::schema::{
    lint_registry, registry, LintRegistryResponse, SchemaDescriptor, SchemaSummary,
};

/// GET /api/schemas
/// All registered entity schemas, sorted by slug
pub async fn list_schemas() -> Json<Vec<SchemaSummary>> {
    let schemas: Vec<SchemaSummary> = registry()
        .list()
        .into_iter()
        .map(SchemaSummary::from)
        .collect();
    tracing::debug!("Listing {} schemas", schemas.len());
    Json(schemas)
}

/// GET /api/schemas/:slug
pub async fn get_schema(Path(slug): Path<String>) -> Result<Json<SchemaDescriptor>, StatusCode> {
    match registry().get(&slug) {
        Some(schema) => Ok(Json(SchemaDescriptor::from(schema))),
        None => {
            tracing::warn!("Schema not found: {}", slug);
            Err(StatusCode::NOT_FOUND)
        }
    }
}

/// GET /api/schemas/lint
/// Lint report for the whole registry
pub async fn lint_schemas() -> Json<LintRegistryResponse> {
    let response = LintRegistryResponse::from(lint_registry(registry()));
    if response.invalid_count > 0 {
        tracing::warn!(
            "Schema lint: {} of {} schemas invalid",
            response.invalid_count,
            response.total_schemas
        );
    }
    Json(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn list_is_sorted_by_slug() {
        let Json(schemas) = list_schemas().await;
        assert_eq!(schemas.len(), registry().len());
        let slugs: Vec<&str> = schemas.iter().map(|s| s.slug.as_str()).collect();
        let mut sorted = slugs.clone();
        sorted.sort();
        assert_eq!(slugs, sorted);
    }

    #[tokio::test]
    async fn get_known_schema() {
        let Json(descriptor) = get_schema(Path("tasks".to_string())).await.unwrap();
        assert_eq!(descriptor.slug, "tasks");
        assert_eq!(descriptor.endpoint, "/api/tasks");
        assert!(descriptor.fields.iter().any(|f| f.key == "title"));
    }

    #[tokio::test]
    async fn unknown_schema_is_404() {
        let result = get_schema(Path("no-such-entity".to_string())).await;
        assert_eq!(result.unwrap_err(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn lint_report_covers_every_schema() {
        let Json(report) = lint_schemas().await;
        assert_eq!(report.total_schemas, registry().len());
        assert_eq!(report.invalid_count, 0);
        assert_eq!(report.valid_count, report.total_schemas);
    }
}
