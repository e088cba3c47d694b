//! List presentation: search, quick filters, sorting, pagination, stats,
//! view resolution, kanban/calendar grouping and row selection.
//!
//! All functions work on indices into the caller's data so the UI can
//! clone only the rows it renders.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};

use chrono::NaiveDate;

use crate::shared::schema::{
    format_money, format_number, EntityRecord, EntitySchema, FieldDef, FieldType, FieldValue,
    FilterOp, FilterValue, QueryFragment, StatKind, ViewType,
};

pub const DEFAULT_PAGE_SIZE: usize = 25;

// ============================================================================
// Mode & query
// ============================================================================

/// Who owns filtering and pagination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMode {
    /// The layout filters, sorts and paginates
    Uncontrolled,
    /// Search or view is owned by the caller; data is rendered as given
    Controlled,
    /// The caller renders the body; data is neither filtered nor paginated
    RenderProp,
}

impl ListMode {
    pub fn resolve(controlled_search: bool, controlled_view: bool, has_render: bool) -> Self {
        if has_render {
            Self::RenderProp
        } else if controlled_search || controlled_view {
            Self::Controlled
        } else {
            Self::Uncontrolled
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub field: &'static str,
    pub ascending: bool,
}

impl SortState {
    /// Next sort after clicking a column header
    pub fn toggle(current: Option<SortState>, field: &'static str) -> SortState {
        match current {
            Some(s) if s.field == field => SortState {
                field,
                ascending: !s.ascending,
            },
            _ => SortState {
                field,
                ascending: true,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub search: String,
    pub quick_filter: Option<&'static str>,
    pub sort: Option<SortState>,
    pub page: usize,
    pub page_size: usize,
}

impl ListQuery {
    /// Initial query from the schema's list layout and table view
    pub fn for_schema(schema: &EntitySchema) -> Self {
        let page_size = match schema.layouts.list.page_size {
            0 => DEFAULT_PAGE_SIZE,
            n => n,
        };
        Self {
            search: String::new(),
            quick_filter: None,
            sort: schema
                .views
                .table
                .and_then(|t| t.default_sort)
                .map(|s| SortState {
                    field: s.field,
                    ascending: s.ascending,
                }),
            page: 0,
            page_size,
        }
    }

    /// Changing the search always returns to the first page
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 0;
    }

    pub fn set_quick_filter(&mut self, filter: Option<&'static str>) {
        self.quick_filter = filter;
        self.page = 0;
    }

    pub fn toggle_sort(&mut self, field: &'static str) {
        self.sort = Some(SortState::toggle(self.sort, field));
    }
}

// ============================================================================
// Body presentation
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyVariant {
    /// Nothing exists yet; `create` when a create button should be offered
    NoData { create: bool },
    /// The search matched nothing
    NoResults,
}

/// Picks the empty variant from the raw (untrimmed) search string
pub fn empty_variant(search: &str, can_create: bool) -> EmptyVariant {
    if search.is_empty() {
        EmptyVariant::NoData { create: can_create }
    } else {
        EmptyVariant::NoResults
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPage {
    /// Indices into the caller's data, in display order
    pub indices: Vec<usize>,
    /// Page after clamping
    pub page: usize,
    pub page_count: usize,
    /// Rows after filtering, before pagination
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListBody {
    Loading,
    Error(String),
    Empty(EmptyVariant),
    Rows(ListPage),
}

#[derive(Debug, Clone, Copy)]
pub struct ListContext<'a> {
    pub mode: ListMode,
    pub loading: bool,
    pub error: Option<&'a str>,
    /// `permissions.create` and a create callback are both present
    pub can_create: bool,
}

/// Decide what the list body shows: loading, error, empty, or a page of rows
pub fn present<T: EntityRecord>(
    schema: &EntitySchema,
    data: &[T],
    query: &ListQuery,
    ctx: ListContext<'_>,
) -> ListBody {
    if ctx.loading {
        return ListBody::Loading;
    }
    if let Some(error) = ctx.error {
        return ListBody::Error(error.to_string());
    }

    let indices = match ctx.mode {
        ListMode::Uncontrolled => {
            let mut idx = filter_indices(schema, data, &query.search, query.quick_filter);
            if let Some(sort) = query.sort {
                sort_indices(schema, data, &mut idx, sort);
            }
            idx
        }
        ListMode::Controlled | ListMode::RenderProp => (0..data.len()).collect(),
    };
    if indices.is_empty() {
        return ListBody::Empty(empty_variant(&query.search, ctx.can_create));
    }

    let total = indices.len();
    match ctx.mode {
        ListMode::Uncontrolled => {
            let (indices, page) = paginate(&indices, query.page, query.page_size);
            ListBody::Rows(ListPage {
                indices,
                page,
                page_count: page_count(total, query.page_size),
                total,
            })
        }
        _ => ListBody::Rows(ListPage {
            indices,
            page: 0,
            page_count: 1,
            total,
        }),
    }
}

// ============================================================================
// Search, filters, sorting
// ============================================================================

/// Case-insensitive substring match over the schema's search fields.
/// Schemas without search fields match on the title.
pub fn matches_search<T: EntityRecord>(
    schema: &EntitySchema,
    record: &T,
    needle_lower: &str,
) -> bool {
    if needle_lower.is_empty() {
        return true;
    }
    let fields = schema.search.fields;
    if fields.is_empty() {
        return schema
            .title_of(record)
            .to_lowercase()
            .contains(needle_lower);
    }
    fields.iter().filter_map(|key| schema.field(key)).any(|field| {
        record
            .display_value(field)
            .to_lowercase()
            .contains(needle_lower)
    })
}

/// Indices of records passing the trimmed search and the quick filter
pub fn filter_indices<T: EntityRecord>(
    schema: &EntitySchema,
    data: &[T],
    search: &str,
    quick_filter: Option<&str>,
) -> Vec<usize> {
    let needle = search.trim().to_lowercase();
    let quick = quick_filter.and_then(|id| schema.filters.quick.iter().find(|q| q.id == id));
    data.iter()
        .enumerate()
        .filter(|(_, record)| matches_search(schema, *record, &needle))
        .filter(|(_, record)| match quick {
            Some(q) => matches_option(*record, q.field, q.value),
            None => true,
        })
        .map(|(idx, _)| idx)
        .collect()
}

fn matches_option<T: EntityRecord + ?Sized>(record: &T, field: &str, value: &str) -> bool {
    match record.field_value(field) {
        Some(FieldValue::Text(s)) => s == value,
        Some(FieldValue::List(items)) => items.iter().any(|i| i == value),
        Some(FieldValue::Bool(b)) => b.to_string() == value,
        _ => false,
    }
}

/// Whether a record satisfies a subpage's query fragment
pub fn matches_fragment<T: EntityRecord + ?Sized>(
    record: &T,
    fragment: &QueryFragment,
    today: NaiveDate,
) -> bool {
    let value = record.field_value(fragment.field).unwrap_or_default();
    let target = match fragment.value {
        FilterValue::Text(s) => FieldValue::text(s),
        FilterValue::Number(n) => FieldValue::Number(n),
        FilterValue::Bool(b) => FieldValue::Bool(b),
        FilterValue::Today => FieldValue::Date(today),
    };
    // Date-times compare by day against `Today`
    let value = match (&value, &target) {
        (FieldValue::DateTime(dt), FieldValue::Date(_)) => FieldValue::Date(dt.date_naive()),
        _ => value,
    };
    match fragment.op {
        FilterOp::Eq => value == target,
        FilterOp::Ne => value != target,
        FilterOp::Gte => !value.is_null() && value.compare(&target) != Ordering::Less,
        FilterOp::Lte => !value.is_null() && value.compare(&target) != Ordering::Greater,
    }
}

/// Indices of records matching a subpage fragment
pub fn apply_fragment<T: EntityRecord>(
    data: &[T],
    fragment: &QueryFragment,
    today: NaiveDate,
) -> Vec<usize> {
    data.iter()
        .enumerate()
        .filter(|(_, r)| matches_fragment(*r, fragment, today))
        .map(|(idx, _)| idx)
        .collect()
}

/// Stable sort of `indices` by one field; nulls stay last in both directions
pub fn sort_indices<T: EntityRecord>(
    schema: &EntitySchema,
    data: &[T],
    indices: &mut [usize],
    sort: SortState,
) {
    if !schema.has_field(sort.field) {
        return;
    }
    indices.sort_by(|a, b| {
        let va = data[*a].field_value(sort.field).unwrap_or_default();
        let vb = data[*b].field_value(sort.field).unwrap_or_default();
        match (va.is_null(), vb.is_null()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) if sort.ascending => va.compare(&vb),
            (false, false) => vb.compare(&va),
        }
    });
}

// ============================================================================
// Pagination
// ============================================================================

/// At least one page, even for empty data
pub fn page_count(total: usize, page_size: usize) -> usize {
    let size = page_size.max(1);
    total.div_ceil(size).max(1)
}

/// Clamp a page index after data shrinks
pub fn clamp_page(page: usize, total: usize, page_size: usize) -> usize {
    page.min(page_count(total, page_size) - 1)
}

/// Slice one page of indices; returns the rows and the clamped page
pub fn paginate(indices: &[usize], page: usize, page_size: usize) -> (Vec<usize>, usize) {
    let size = page_size.max(1);
    let page = clamp_page(page, indices.len(), size);
    let start = page * size;
    let end = (start + size).min(indices.len());
    (indices[start.min(end)..end].to_vec(), page)
}

// ============================================================================
// Stats
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatValue {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub value: String,
}

/// Stat cards computed over the full (unfiltered) data set
pub fn compute_stats<T: EntityRecord>(schema: &EntitySchema, data: &[T]) -> Vec<StatValue> {
    schema
        .layouts
        .list
        .stats
        .iter()
        .map(|stat| {
            let value = match stat.kind {
                StatKind::Count => format_number(data.len() as f64),
                StatKind::Sum { field } => {
                    let sum: f64 = data
                        .iter()
                        .filter_map(|r| r.field_value(field).and_then(|v| v.as_number()))
                        .sum();
                    match schema.field(field).map(|f| f.field_type) {
                        Some(FieldType::Currency) => format_money(sum),
                        _ => format_number(sum),
                    }
                }
                StatKind::CountWhere { field, value } => {
                    let n = data
                        .iter()
                        .filter(|r| matches_option(*r, field, value))
                        .count();
                    format_number(n as f64)
                }
            };
            StatValue {
                id: stat.id,
                label: stat.label,
                icon: stat.icon,
                value,
            }
        })
        .collect()
}

// ============================================================================
// Columns & views
// ============================================================================

/// Columns the user has hidden through the column picker
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnVisibility {
    hidden: HashSet<&'static str>,
}

impl ColumnVisibility {
    pub fn is_visible(&self, key: &str) -> bool {
        !self.hidden.contains(key)
    }

    /// Toggle a column; the last visible column cannot be hidden
    pub fn toggle(&mut self, schema: &EntitySchema, key: &'static str) {
        if self.hidden.remove(key) {
            return;
        }
        if self.visible_columns(schema).len() > 1 {
            self.hidden.insert(key);
        }
    }

    pub fn visible_columns(&self, schema: &EntitySchema) -> Vec<&'static FieldDef> {
        schema
            .table_columns()
            .into_iter()
            .filter(|f| self.is_visible(f.key))
            .collect()
    }
}

/// The requested view if the schema declares it, otherwise the schema's
/// default, otherwise the first declared view
pub fn resolve_view(schema: &EntitySchema, requested: Option<ViewType>) -> ViewType {
    let available = schema.views.available();
    requested
        .filter(|v| available.contains(v))
        .or_else(|| {
            let default = schema.layouts.list.default_view;
            available.contains(&default).then_some(default)
        })
        .or_else(|| available.first().copied())
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KanbanColumn {
    /// Option value; `None` collects records with no or unknown value
    pub value: Option<&'static str>,
    pub label: &'static str,
    pub color: Option<&'static str>,
    pub indices: Vec<usize>,
}

/// One column per option of the group-by field, in option order.
/// Records whose value matches no option go to a trailing column, shown
/// only when non-empty.
pub fn group_kanban<T: EntityRecord>(
    schema: &EntitySchema,
    data: &[T],
    indices: &[usize],
) -> Vec<KanbanColumn> {
    let Some(kanban) = schema.views.kanban else {
        return Vec::new();
    };
    let Some(group) = schema.field(kanban.group_by) else {
        return Vec::new();
    };

    let mut columns: Vec<KanbanColumn> = group
        .options
        .iter()
        .map(|opt| KanbanColumn {
            value: Some(opt.value),
            label: opt.label,
            color: kanban
                .color_map
                .iter()
                .find(|(value, _)| *value == opt.value)
                .map(|(_, color)| *color)
                .or(opt.color),
            indices: Vec::new(),
        })
        .collect();
    let mut unassigned = Vec::new();

    for &idx in indices {
        let value = data[idx].field_value(group.key);
        let slot = value
            .as_ref()
            .and_then(|v| v.as_text())
            .and_then(|v| columns.iter().position(|c| c.value == Some(v)));
        match slot {
            Some(pos) => columns[pos].indices.push(idx),
            None => unassigned.push(idx),
        }
    }

    if !unassigned.is_empty() {
        columns.push(KanbanColumn {
            value: None,
            label: "No status",
            color: None,
            indices: unassigned,
        });
    }
    columns
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// Records starting on this date
    pub indices: Vec<usize>,
}

/// Agenda grouping for the calendar view; records without a start date
/// are left out
pub fn group_calendar<T: EntityRecord>(
    schema: &EntitySchema,
    data: &[T],
    indices: &[usize],
) -> Vec<CalendarDay> {
    let Some(calendar) = schema.views.calendar else {
        return Vec::new();
    };
    let mut days: Vec<CalendarDay> = Vec::new();
    let mut dated: Vec<(NaiveDate, usize)> = indices
        .iter()
        .filter_map(|&idx| {
            data[idx]
                .field_value(calendar.start_field)
                .and_then(|v| v.as_date())
                .map(|d| (d, idx))
        })
        .collect();
    dated.sort_by_key(|(d, _)| *d);

    for (date, idx) in dated {
        if let Some(day) = days.last_mut().filter(|d| d.date == date) {
            day.indices.push(idx);
            continue;
        }
        days.push(CalendarDay {
            date,
            indices: vec![idx],
        });
    }
    days
}

// ============================================================================
// Selection
// ============================================================================

/// Selected row ids for bulk actions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<String>,
}

impl Selection {
    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Select every id on the page, or clear them all if already selected
    pub fn toggle_all(&mut self, page_ids: &[String]) {
        if self.all_selected(page_ids) {
            for id in page_ids {
                self.ids.remove(id);
            }
        } else {
            self.ids.extend(page_ids.iter().cloned());
        }
    }

    pub fn all_selected(&self, page_ids: &[String]) -> bool {
        !page_ids.is_empty() && page_ids.iter().all(|id| self.ids.contains(id))
    }

    /// Drop ids no longer present in the data
    pub fn retain_existing(&mut self, existing: &[String]) {
        let existing: HashSet<&str> = existing.iter().map(String::as_str).collect();
        self.ids.retain(|id| existing.contains(id.as_str()));
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Bulk actions are enabled only while something is selected
    pub fn bulk_enabled(&self) -> bool {
        !self.ids.is_empty()
    }

    pub fn ids(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_task::schema::TASK_SCHEMA;
    use crate::shared::schema::Record;

    fn task(id: &str, title: &str, status: &str) -> Record {
        Record::new(id)
            .with("title", FieldValue::text(title))
            .with("status", FieldValue::text(status))
    }

    fn uncontrolled() -> ListContext<'static> {
        ListContext {
            mode: ListMode::Uncontrolled,
            loading: false,
            error: None,
            can_create: true,
        }
    }

    fn many(n: usize) -> Vec<Record> {
        (0..n)
            .map(|i| task(&i.to_string(), &format!("Task {i}"), "todo"))
            .collect()
    }

    #[test]
    fn empty_data_with_empty_search_offers_create() {
        let query = ListQuery::for_schema(&TASK_SCHEMA);
        let body = present::<Record>(&TASK_SCHEMA, &[], &query, uncontrolled());
        assert_eq!(body, ListBody::Empty(EmptyVariant::NoData { create: true }));
    }

    #[test]
    fn whitespace_search_counts_as_no_results() {
        let mut query = ListQuery::for_schema(&TASK_SCHEMA);
        query.set_search("  ");
        let body = present::<Record>(&TASK_SCHEMA, &[], &query, uncontrolled());
        assert_eq!(body, ListBody::Empty(EmptyVariant::NoResults));
    }

    #[test]
    fn loading_and_error_take_precedence() {
        let data = many(3);
        let query = ListQuery::for_schema(&TASK_SCHEMA);
        let mut ctx = uncontrolled();
        ctx.error = Some("HTTP 500");
        assert_eq!(
            present(&TASK_SCHEMA, &data, &query, ctx),
            ListBody::Error("HTTP 500".into())
        );
        ctx.loading = true;
        assert_eq!(present(&TASK_SCHEMA, &data, &query, ctx), ListBody::Loading);
    }

    #[test]
    fn search_is_case_insensitive_over_display_text() {
        let data = vec![
            task("1", "Book crew", "todo"),
            task("2", "Scout location", "done"),
        ];
        assert_eq!(filter_indices(&TASK_SCHEMA, &data, "  BOOK ", None), vec![0]);
        // status is searched by its option label
        assert_eq!(filter_indices(&TASK_SCHEMA, &data, "done", None), vec![1]);
    }

    #[test]
    fn render_prop_skips_filtering_and_pagination() {
        let data = many(60);
        let mut query = ListQuery::for_schema(&TASK_SCHEMA);
        query.set_search("no such task");
        let ctx = ListContext {
            mode: ListMode::RenderProp,
            ..uncontrolled()
        };
        match present(&TASK_SCHEMA, &data, &query, ctx) {
            ListBody::Rows(page) => assert_eq!(page.indices.len(), 60),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn controlled_mode_renders_data_as_given() {
        let data = many(40);
        let mut query = ListQuery::for_schema(&TASK_SCHEMA);
        query.search = "zzz".into();
        query.page = 3;
        let ctx = ListContext {
            mode: ListMode::Controlled,
            ..uncontrolled()
        };
        match present(&TASK_SCHEMA, &data, &query, ctx) {
            ListBody::Rows(page) => {
                assert_eq!(page.indices, (0..40).collect::<Vec<_>>());
                assert_eq!(page.page_count, 1);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn render_prop_empty_state_uses_raw_data() {
        let query = ListQuery::for_schema(&TASK_SCHEMA);
        let ctx = ListContext {
            mode: ListMode::RenderProp,
            ..uncontrolled()
        };
        assert!(matches!(
            present::<Record>(&TASK_SCHEMA, &[], &query, ctx),
            ListBody::Empty(EmptyVariant::NoData { .. })
        ));
    }

    #[test]
    fn page_is_clamped_when_data_shrinks() {
        let data = many(30);
        let mut query = ListQuery::for_schema(&TASK_SCHEMA);
        query.page_size = 10;
        query.page = 7;
        match present(&TASK_SCHEMA, &data, &query, uncontrolled()) {
            ListBody::Rows(page) => {
                assert_eq!(page.page, 2);
                assert_eq!(page.indices, (20..30).collect::<Vec<_>>());
                assert_eq!(page.page_count, 3);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(clamp_page(5, 0, 10), 0);
        assert_eq!(page_count(0, 25), 1);
    }

    #[test]
    fn search_change_resets_page() {
        let mut query = ListQuery::for_schema(&TASK_SCHEMA);
        query.page = 4;
        query.set_search("crew");
        assert_eq!(query.page, 0);
    }

    #[test]
    fn sort_toggles_and_keeps_nulls_last() {
        let data = vec![
            task("1", "Beta", "todo"),
            Record::new("2"),
            task("3", "alpha", "todo"),
        ];
        let mut idx = vec![0, 1, 2];
        let asc = SortState::toggle(None, "title");
        sort_indices(&TASK_SCHEMA, &data, &mut idx, asc);
        assert_eq!(idx, vec![2, 0, 1]);

        let desc = SortState::toggle(Some(asc), "title");
        assert!(!desc.ascending);
        sort_indices(&TASK_SCHEMA, &data, &mut idx, desc);
        assert_eq!(idx, vec![0, 2, 1]);
    }

    #[test]
    fn quick_filter_matches_option_value() {
        let data = vec![task("1", "A", "todo"), task("2", "B", "done")];
        let quick = TASK_SCHEMA.filters.quick[0];
        let idx = filter_indices(&TASK_SCHEMA, &data, "", Some(quick.id));
        assert!(idx
            .iter()
            .all(|i| data[*i].get(quick.field) == Some(&FieldValue::text(quick.value))));
    }

    #[test]
    fn fragment_compares_dates_against_today() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let fragment = QueryFragment {
            field: "due_date",
            op: FilterOp::Gte,
            value: FilterValue::Today,
        };
        let past = Record::new("p").with("due_date", FieldValue::Date(today.pred_opt().unwrap()));
        let same = Record::new("s").with("due_date", FieldValue::Date(today));
        let none = Record::new("n");
        assert!(!matches_fragment(&past, &fragment, today));
        assert!(matches_fragment(&same, &fragment, today));
        assert!(!matches_fragment(&none, &fragment, today));
    }

    #[test]
    fn stats_cover_full_data() {
        let data = vec![task("1", "A", "todo"), task("2", "B", "done")];
        let stats = compute_stats(&TASK_SCHEMA, &data);
        let total = stats.iter().find(|s| s.id == "total").unwrap();
        assert_eq!(total.value, "2");
    }

    #[test]
    fn view_falls_back_to_declared_views() {
        assert_eq!(resolve_view(&TASK_SCHEMA, Some(ViewType::Kanban)), ViewType::Kanban);
        let fallback = resolve_view(&TASK_SCHEMA, Some(ViewType::Grid));
        assert!(TASK_SCHEMA.views.available().contains(&fallback));
    }

    #[test]
    fn kanban_groups_by_option_order() {
        let data = vec![
            task("1", "A", "done"),
            task("2", "B", "todo"),
            task("3", "C", "archived-long-ago"),
        ];
        let cols = group_kanban(&TASK_SCHEMA, &data, &[0, 1, 2]);
        assert_eq!(cols[0].value, Some("todo"));
        assert_eq!(cols[0].indices, vec![1]);
        let last = cols.last().unwrap();
        assert_eq!(last.value, None);
        assert_eq!(last.indices, vec![2]);
    }

    #[test]
    fn last_visible_column_stays() {
        let mut vis = ColumnVisibility::default();
        let keys: Vec<&'static str> = TASK_SCHEMA.table_columns().iter().map(|f| f.key).collect();
        for key in &keys {
            vis.toggle(&TASK_SCHEMA, key);
        }
        assert_eq!(vis.visible_columns(&TASK_SCHEMA).len(), 1);
    }

    #[test]
    fn selection_toggle_all_and_retain() {
        let page: Vec<String> = vec!["a".into(), "b".into()];
        let mut sel = Selection::default();
        assert!(!sel.bulk_enabled());
        sel.toggle_all(&page);
        assert!(sel.all_selected(&page));
        sel.retain_existing(&["b".to_string()]);
        assert_eq!(sel.ids(), vec!["b".to_string()]);
        sel.toggle_all(&page);
        assert!(sel.all_selected(&page));
        sel.toggle_all(&page);
        assert!(sel.is_empty());
    }
}
