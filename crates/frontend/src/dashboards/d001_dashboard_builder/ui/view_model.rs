use std::collections::BTreeMap;

use contracts::shared::layout::dashboard::{DashboardBuilder, Widget};
use leptos::prelude::*;

use crate::domain::entity::model;
use crate::shared::schemas::SchemaContext;
use crate::shared::storage::{load_json, save_json};

const STORAGE_KEY: &str = "dashboard-builder";
const HISTORY_LIMIT: usize = 50;

/// Undo/redo stacks of snapshots
#[derive(Debug, Clone, PartialEq)]
pub struct History<T> {
    past: Vec<T>,
    future: Vec<T>,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self {
            past: Vec::new(),
            future: Vec::new(),
        }
    }
}

impl<T> History<T> {
    /// Remember the state before an edit; a new edit discards the redo stack
    pub fn record(&mut self, before: T) {
        self.past.push(before);
        if self.past.len() > HISTORY_LIMIT {
            self.past.remove(0);
        }
        self.future.clear();
    }

    pub fn undo(&mut self, current: T) -> Option<T> {
        let previous = self.past.pop()?;
        self.future.push(current);
        Some(previous)
    }

    pub fn redo(&mut self, current: T) -> Option<T> {
        let next = self.future.pop()?;
        self.past.push(current);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }
}

#[derive(Clone, Copy)]
pub struct DashboardBuilderViewModel {
    pub builder: RwSignal<DashboardBuilder>,
    history: RwSignal<History<Vec<Widget>>>,
    /// Record count per source entity slug
    pub counts: RwSignal<BTreeMap<String, usize>>,
    pub auto_refresh: RwSignal<Option<u32>>,
}

impl DashboardBuilderViewModel {
    pub fn new() -> Self {
        Self {
            builder: RwSignal::new(load_json(STORAGE_KEY).unwrap_or_default()),
            history: RwSignal::new(History::default()),
            counts: RwSignal::new(BTreeMap::new()),
            auto_refresh: RwSignal::new(None),
        }
    }

    /// Apply an edit to the widgets, recording it for undo
    pub fn edit(&self, f: impl FnOnce(&mut DashboardBuilder)) {
        let before = self.builder.with_untracked(|b| b.widgets.clone());
        self.builder.update(f);
        let changed = self.builder.with_untracked(|b| b.widgets != before);
        if changed {
            self.history.update(|h| h.record(before));
        }
        self.save();
    }

    fn save(&self) {
        self.builder.with_untracked(|b| save_json(STORAGE_KEY, b));
    }

    pub fn select(&self, id: Option<String>) {
        self.builder.update(|b| b.select(id.as_deref()));
    }

    pub fn undo(&self) {
        let current = self.builder.with_untracked(|b| b.widgets.clone());
        if let Some(previous) = self.history.try_update(|h| h.undo(current)).flatten() {
            self.restore(previous);
        }
    }

    pub fn redo(&self) {
        let current = self.builder.with_untracked(|b| b.widgets.clone());
        if let Some(next) = self.history.try_update(|h| h.redo(current)).flatten() {
            self.restore(next);
        }
    }

    fn restore(&self, widgets: Vec<Widget>) {
        self.builder.update(|b| {
            b.widgets = widgets;
            let selected = b.selected.clone();
            b.select(selected.as_deref());
        });
        self.save();
    }

    pub fn can_undo(&self) -> bool {
        self.history.with(|h| h.can_undo())
    }

    pub fn can_redo(&self) -> bool {
        self.history.with(|h| h.can_redo())
    }

    /// Re-count the records behind every widget source
    pub async fn refresh_counts(self, schemas: SchemaContext) -> Result<(), String> {
        let slugs: Vec<String> = self.builder.with_untracked(|b| {
            let mut slugs: Vec<String> = b.widgets.iter().filter_map(|w| w.source.clone()).collect();
            slugs.sort();
            slugs.dedup();
            slugs
        });
        let mut counts = BTreeMap::new();
        for slug in slugs {
            let Some(schema) = schemas.get(&slug) else {
                log::warn!("dashboard: unknown widget source {}", slug);
                continue;
            };
            let records = model::fetch_list(schema).await?;
            counts.insert(slug, records.len());
        }
        self.counts.try_set(counts);
        Ok(())
    }
}

impl Default for DashboardBuilderViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undo_then_redo_round_trips() {
        let mut h = History::default();
        h.record(1);
        h.record(2);
        assert_eq!(h.undo(3), Some(2));
        assert_eq!(h.undo(2), Some(1));
        assert_eq!(h.undo(1), None);
        assert_eq!(h.redo(1), Some(2));
        assert!(h.can_redo());
    }

    #[test]
    fn new_edit_clears_redo() {
        let mut h = History::default();
        h.record("a");
        assert_eq!(h.undo("b"), Some("a"));
        h.record("a");
        assert!(!h.can_redo());
    }

    #[test]
    fn history_is_bounded() {
        let mut h = History::default();
        for i in 0..(HISTORY_LIMIT + 10) {
            h.record(i);
        }
        let mut undone = 0;
        let mut current = usize::MAX;
        while let Some(prev) = h.undo(current) {
            current = prev;
            undone += 1;
        }
        assert_eq!(undone, HISTORY_LIMIT);
        assert_eq!(current, 10);
    }
}
