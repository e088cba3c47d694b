//! Schema registry access for components

use contracts::shared::schema::{BusinessModule, EntitySchema, SchemaRegistry};
use leptos::prelude::*;

/// The registry injected at the root of the app
#[derive(Clone, Copy)]
pub struct SchemaContext {
    registry: &'static SchemaRegistry,
}

impl SchemaContext {
    pub fn new(registry: &'static SchemaRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'static SchemaRegistry {
        self.registry
    }

    pub fn get(&self, slug: &str) -> Option<&'static EntitySchema> {
        self.registry.get(slug)
    }

    /// Modules that own at least one entity, in declaration order
    pub fn modules(&self) -> Vec<(BusinessModule, Vec<&'static EntitySchema>)> {
        BusinessModule::ALL
            .iter()
            .map(|m| (*m, self.registry.by_module(*m)))
            .filter(|(_, schemas)| !schemas.is_empty())
            .collect()
    }
}

pub fn use_schemas() -> SchemaContext {
    expect_context::<SchemaContext>()
}
