//! Schema registry
//!
//! Built once at startup and passed by reference: the frontend provides it
//! through Leptos context, the backend keeps the process-wide instance.

use std::collections::HashMap;

use super::types::{BusinessModule, EntitySchema};

pub struct SchemaRegistry {
    schemas: Vec<&'static EntitySchema>,
    by_slug: HashMap<&'static str, usize>,
}

impl SchemaRegistry {
    /// Create a registry from an explicit schema list.
    /// The first schema wins when two share a slug; see `duplicate_slugs`.
    pub fn new(schemas: &[&'static EntitySchema]) -> Self {
        let mut by_slug = HashMap::new();
        for (idx, schema) in schemas.iter().enumerate() {
            by_slug.entry(schema.slug()).or_insert(idx);
        }
        Self {
            schemas: schemas.to_vec(),
            by_slug,
        }
    }

    /// Registry with every entity shipped in `crate::domain`
    pub fn builtin() -> Self {
        Self::new(crate::domain::ALL_SCHEMAS)
    }

    pub fn get(&self, slug: &str) -> Option<&'static EntitySchema> {
        self.by_slug.get(slug).map(|idx| self.schemas[*idx])
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.by_slug.contains_key(slug)
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// All schemas in registration order
    pub fn iter(&self) -> impl Iterator<Item = &'static EntitySchema> + '_ {
        self.schemas.iter().copied()
    }

    /// All schemas sorted by slug
    pub fn list(&self) -> Vec<&'static EntitySchema> {
        let mut out = self.schemas.clone();
        out.sort_by_key(|s| s.slug());
        out
    }

    pub fn by_module(&self, module: BusinessModule) -> Vec<&'static EntitySchema> {
        self.schemas
            .iter()
            .copied()
            .filter(|s| s.identity.module == module)
            .collect()
    }

    /// Slugs registered more than once
    pub fn duplicate_slugs(&self) -> Vec<&'static str> {
        let mut seen = HashMap::new();
        let mut dups = Vec::new();
        for schema in &self.schemas {
            let count = seen.entry(schema.slug()).or_insert(0usize);
            *count += 1;
            if *count == 2 {
                dups.push(schema.slug());
            }
        }
        dups
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Global schema registry instance
static REGISTRY: std::sync::OnceLock<SchemaRegistry> = std::sync::OnceLock::new();

/// Get global schema registry
pub fn registry() -> &'static SchemaRegistry {
    REGISTRY.get_or_init(SchemaRegistry::builtin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_production::schema::PRODUCTION_SCHEMA;
    use crate::domain::a002_task::schema::TASK_SCHEMA;

    #[test]
    fn builtin_registry_resolves_slugs() {
        let registry = SchemaRegistry::builtin();
        assert_eq!(registry.len(), crate::domain::ALL_SCHEMAS.len());
        assert_eq!(registry.get("tasks").map(|s| s.identity.name), Some("Task"));
        assert!(registry.get("nope").is_none());
    }

    #[test]
    fn every_module_has_entities() {
        let registry = SchemaRegistry::builtin();
        for module in BusinessModule::ALL {
            assert!(
                !registry.by_module(module).is_empty(),
                "{} has no entities",
                module.label()
            );
        }
    }

    #[test]
    fn list_is_sorted_by_slug() {
        let registry = SchemaRegistry::builtin();
        let slugs: Vec<_> = registry.list().iter().map(|s| s.slug()).collect();
        let mut sorted = slugs.clone();
        sorted.sort();
        assert_eq!(slugs, sorted);
    }

    #[test]
    fn first_duplicate_wins() {
        let registry = SchemaRegistry::new(&[&TASK_SCHEMA, &PRODUCTION_SCHEMA, &TASK_SCHEMA]);
        assert_eq!(registry.duplicate_slugs(), vec!["tasks"]);
        assert_eq!(registry.len(), 3);
        assert!(std::ptr::eq(registry.get("tasks").unwrap(), &TASK_SCHEMA));
    }

    #[test]
    fn global_registry_is_shared() {
        assert!(std::ptr::eq(registry(), registry()));
    }
}
