//! Dashboard refresh policy and the dashboard builder's widget model

use std::time::Duration;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Auto-refresh intervals below this are treated as disabled
pub const MIN_AUTO_REFRESH_SECS: u32 = 5;

pub fn auto_refresh_interval(seconds: Option<u32>) -> Option<Duration> {
    seconds
        .filter(|s| *s >= MIN_AUTO_REFRESH_SECS)
        .map(|s| Duration::from_secs(s as u64))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuilderTab {
    #[default]
    Layout,
    Data,
    Preview,
}

impl BuilderTab {
    pub const ALL: [BuilderTab; 3] = [Self::Layout, Self::Data, Self::Preview];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Layout => "layout",
            Self::Data => "data",
            Self::Preview => "preview",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Layout => "Layout",
            Self::Data => "Data",
            Self::Preview => "Preview",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    Stat,
    Chart,
    Table,
    List,
    Note,
}

impl WidgetKind {
    pub const ALL: [WidgetKind; 5] = [Self::Stat, Self::Chart, Self::Table, Self::List, Self::Note];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Stat => "Stat card",
            Self::Chart => "Chart",
            Self::Table => "Table",
            Self::List => "List",
            Self::Note => "Note",
        }
    }

    pub fn default_span(&self) -> u8 {
        match self {
            Self::Stat => 1,
            Self::Chart | Self::List | Self::Note => 2,
            Self::Table => 4,
        }
    }
}

pub const MIN_SPAN: u8 = 1;
pub const MAX_SPAN: u8 = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Widget {
    pub id: String,
    pub title: String,
    pub kind: WidgetKind,
    /// Grid columns occupied, 1-4
    pub span: u8,
    /// Entity slug feeding the widget
    pub source: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardBuilder {
    pub widgets: Vec<Widget>,
    pub selected: Option<String>,
    pub tab: BuilderTab,
}

impl DashboardBuilder {
    /// Append a widget and select it; returns its id
    pub fn add(&mut self, kind: WidgetKind) -> String {
        let id = Uuid::new_v4().to_string();
        self.widgets.push(Widget {
            id: id.clone(),
            title: format!("{} {}", kind.label(), self.widgets.len() + 1),
            kind,
            span: kind.default_span(),
            source: None,
        });
        self.selected = Some(id.clone());
        id
    }

    pub fn remove(&mut self, id: &str) {
        self.widgets.retain(|w| w.id != id);
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.widgets.iter().position(|w| w.id == id)
    }

    pub fn move_up(&mut self, id: &str) {
        if let Some(pos) = self.position(id).filter(|p| *p > 0) {
            self.widgets.swap(pos, pos - 1);
        }
    }

    pub fn move_down(&mut self, id: &str) {
        if let Some(pos) = self.position(id).filter(|p| p + 1 < self.widgets.len()) {
            self.widgets.swap(pos, pos + 1);
        }
    }

    pub fn resize(&mut self, id: &str, span: u8) {
        if let Some(w) = self.widgets.iter_mut().find(|w| w.id == id) {
            w.span = span.clamp(MIN_SPAN, MAX_SPAN);
        }
    }

    pub fn rename(&mut self, id: &str, title: &str) {
        if let Some(w) = self.widgets.iter_mut().find(|w| w.id == id) {
            w.title = title.to_string();
        }
    }

    pub fn set_source(&mut self, id: &str, slug: Option<String>) {
        if let Some(w) = self.widgets.iter_mut().find(|w| w.id == id) {
            w.source = slug;
        }
    }

    pub fn select(&mut self, id: Option<&str>) {
        self.selected = id
            .filter(|id| self.widgets.iter().any(|w| w.id == *id))
            .map(str::to_string);
    }

    pub fn selected_widget(&self) -> Option<&Widget> {
        let id = self.selected.as_deref()?;
        self.widgets.iter().find(|w| w.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_below_minimum_is_disabled() {
        assert_eq!(auto_refresh_interval(Some(4)), None);
        assert_eq!(auto_refresh_interval(None), None);
        assert_eq!(auto_refresh_interval(Some(5)), Some(Duration::from_secs(5)));
    }

    #[test]
    fn add_move_remove() {
        let mut b = DashboardBuilder::default();
        let a = b.add(WidgetKind::Stat);
        let c = b.add(WidgetKind::Chart);
        assert_ne!(a, c);
        assert_eq!(b.selected.as_deref(), Some(c.as_str()));

        b.move_up(&c);
        assert_eq!(b.widgets[0].id, c);
        b.move_up(&c);
        assert_eq!(b.widgets[0].id, c);
        b.move_down(&a);
        assert_eq!(b.widgets[1].id, a);

        b.remove(&c);
        assert_eq!(b.widgets.len(), 1);
        assert!(b.selected.is_none());
    }

    #[test]
    fn span_is_clamped() {
        let mut b = DashboardBuilder::default();
        let id = b.add(WidgetKind::Table);
        b.resize(&id, 9);
        assert_eq!(b.widgets[0].span, 4);
        b.resize(&id, 0);
        assert_eq!(b.widgets[0].span, 1);
    }

    #[test]
    fn select_ignores_unknown_ids() {
        let mut b = DashboardBuilder::default();
        let id = b.add(WidgetKind::Note);
        b.select(Some("ghost"));
        assert!(b.selected_widget().is_none());
        b.select(Some(&id));
        assert_eq!(b.selected_widget().map(|w| w.kind), Some(WidgetKind::Note));
    }
}
