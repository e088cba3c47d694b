//! Detail page state: header projections, tabs and tab shortcuts

use crate::shared::schema::{
    DetailTab, DisplayProjection, EntityRecord, EntitySchema, FieldDef, FieldType, RelationKind,
    Relationship, TabContent,
};

use super::keyboard::KeyChord;

/// Header regions resolved from the schema's display projections.
/// A region is `None` when its projection is missing or resolves to empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailHeader {
    pub title: String,
    pub subtitle: Option<String>,
    pub badge: Option<String>,
    /// Badge colour token when the badge comes from a coloured select option
    pub badge_color: Option<&'static str>,
    pub image: Option<String>,
}

impl DetailHeader {
    pub fn resolve(schema: &EntitySchema, record: &dyn EntityRecord) -> Self {
        Self {
            title: schema.title_of(record),
            subtitle: schema.subtitle_of(record),
            badge: schema.badge_of(record),
            badge_color: badge_color(schema, record),
            image: schema.image_of(record),
        }
    }
}

fn badge_color(schema: &EntitySchema, record: &dyn EntityRecord) -> Option<&'static str> {
    let Some(DisplayProjection::Field(key)) = schema.display.badge else {
        return None;
    };
    let field = schema.field(key).filter(|f| f.field_type == FieldType::Select)?;
    let value = record.field_value(key)?;
    field.option(value.as_text()?).and_then(|o| o.color)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailBody {
    Loading,
    Error(String),
    NotFound,
    Ready,
}

pub fn present(loading: bool, error: Option<&str>, has_record: bool) -> DetailBody {
    if loading {
        DetailBody::Loading
    } else if let Some(e) = error {
        DetailBody::Error(e.to_string())
    } else if !has_record {
        DetailBody::NotFound
    } else {
        DetailBody::Ready
    }
}

/// The requested tab when it exists, otherwise the first tab
pub fn resolve_active_tab(schema: &EntitySchema, requested: Option<&str>) -> Option<&'static str> {
    let tabs = schema.layouts.detail.tabs;
    requested
        .and_then(|id| tabs.iter().find(|t| t.id == id))
        .or_else(|| tabs.first())
        .map(|t| t.id)
}

/// Tab index selected by Cmd/Ctrl+digit.
///
/// Active only while the page has 1 to 9 tabs; digits beyond the tab
/// count select the last tab.
pub fn tab_for_shortcut(tab_count: usize, chord: &KeyChord) -> Option<usize> {
    if tab_count == 0 || tab_count > 9 {
        return None;
    }
    let n = chord.primary_digit()?;
    Some((n - 1).min(tab_count - 1))
}

/// Fields shown on a field tab, limited to `in_detail` fields
pub fn tab_fields(schema: &EntitySchema, tab: &DetailTab) -> Vec<&'static FieldDef> {
    match tab.content {
        TabContent::Fields(keys) => keys
            .iter()
            .filter_map(|key| schema.field(key))
            .filter(|f| f.display.in_detail)
            .collect(),
        _ => Vec::new(),
    }
}

/// `has_many` relationships listed in the relationship panel
pub fn related_lists(schema: &EntitySchema) -> Vec<&'static Relationship> {
    schema
        .relationships
        .iter()
        .filter(|r| r.kind == RelationKind::HasMany)
        .collect()
}

/// Path to the related list, pre-filtered by the foreign key
pub fn related_path(rel: &Relationship, record_id: &str) -> String {
    format!("/e/{}?{}={}", rel.target, rel.foreign_key, record_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_task::schema::TASK_SCHEMA;
    use crate::shared::schema::{FieldValue, Record};

    #[test]
    fn missing_subtitle_projection_omits_region() {
        // Tasks have a subtitle projection; a record without the value must
        // still resolve to None instead of an empty string
        let record = Record::new("t1").with("title", FieldValue::text("Book crew"));
        let header = DetailHeader::resolve(&TASK_SCHEMA, &record);
        assert_eq!(header.title, "Book crew");
        assert_eq!(header.subtitle, None);
        assert_eq!(header.image, None);
    }

    #[test]
    fn schema_without_subtitle_projection() {
        let mut schema = TASK_SCHEMA;
        schema.display.subtitle = None;
        let record = Record::new("t1")
            .with("title", FieldValue::text("Book crew"))
            .with("description", FieldValue::text("Call the agency"));
        assert_eq!(DetailHeader::resolve(&schema, &record).subtitle, None);
    }

    #[test]
    fn title_falls_back_to_id() {
        let header = DetailHeader::resolve(&TASK_SCHEMA, &Record::new("t9"));
        assert_eq!(header.title, "t9");
    }

    #[test]
    fn badge_uses_option_label_and_color() {
        let record = Record::new("t1")
            .with("title", FieldValue::text("x"))
            .with("status", FieldValue::text("done"));
        let header = DetailHeader::resolve(&TASK_SCHEMA, &record);
        assert_eq!(header.badge.as_deref(), Some("Done"));
        assert_eq!(header.badge_color, Some("success"));
    }

    #[test]
    fn shortcut_clamps_to_last_tab() {
        let chord = KeyChord::new("7").meta();
        assert_eq!(tab_for_shortcut(3, &chord), Some(2));
        assert_eq!(tab_for_shortcut(3, &KeyChord::new("1").ctrl()), Some(0));
        assert_eq!(tab_for_shortcut(10, &chord), None);
        assert_eq!(tab_for_shortcut(0, &chord), None);
        assert_eq!(tab_for_shortcut(3, &KeyChord::new("2")), None);
    }

    #[test]
    fn active_tab_defaults_to_first() {
        let first = TASK_SCHEMA.layouts.detail.tabs[0].id;
        assert_eq!(resolve_active_tab(&TASK_SCHEMA, None), Some(first));
        assert_eq!(resolve_active_tab(&TASK_SCHEMA, Some("nope")), Some(first));
    }

    #[test]
    fn body_precedence() {
        assert_eq!(present(true, Some("x"), false), DetailBody::Loading);
        assert_eq!(present(false, Some("x"), true), DetailBody::Error("x".into()));
        assert_eq!(present(false, None, false), DetailBody::NotFound);
        assert_eq!(present(false, None, true), DetailBody::Ready);
    }
}
