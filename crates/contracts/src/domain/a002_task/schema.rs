use crate::shared::schema::*;

const STATUS_OPTIONS: &[SelectOption] = &[
    SelectOption::colored("todo", "To do", "neutral"),
    SelectOption::colored("in_progress", "In progress", "primary"),
    SelectOption::colored("review", "In review", "primary"),
    SelectOption::colored("done", "Done", "success"),
];

const PRIORITY_OPTIONS: &[SelectOption] = &[
    SelectOption::colored("low", "Low", "neutral"),
    SelectOption::colored("medium", "Medium", "primary"),
    SelectOption::colored("high", "High", "warning"),
    SelectOption::colored("urgent", "Urgent", "error"),
];

fn subtitle(record: &dyn EntityRecord) -> Option<String> {
    let due = record.field_value("due_date")?.as_date()?;
    Some(format!("Due {}", due.format("%b %-d, %Y")))
}

fn edit_path(record: &dyn EntityRecord) -> String {
    format!("/e/tasks/{}/edit", record.record_id())
}

pub static TASK_SCHEMA: EntitySchema = EntitySchema {
    identity: EntityIdentity {
        name: "Task",
        plural_name: "Tasks",
        slug: "tasks",
        icon: "check-square",
        description: "Production to-dos, assigned to crew and tracked on the board",
        module: BusinessModule::Productions,
    },
    endpoint: "/api/tasks",
    fields: &[
        FieldDef::new("title", "Title", FieldType::Text)
            .required()
            .max_length(200)
            .sortable(),
        FieldDef::new("status", "Status", FieldType::Select)
            .required()
            .options(STATUS_OPTIONS)
            .default_value(DefaultValue::Option("todo"))
            .sortable()
            .width(130),
        FieldDef::new("priority", "Priority", FieldType::Select)
            .options(PRIORITY_OPTIONS)
            .default_value(DefaultValue::Option("medium"))
            .sortable()
            .width(110),
        FieldDef::new("production_id", "Production", FieldType::Relation)
            .relation("productions")
            .hide_in_table(),
        FieldDef::new("assignee_id", "Assignee", FieldType::Relation)
            .relation("employees")
            .hide_in_table(),
        FieldDef::new("due_date", "Due date", FieldType::Date).sortable(),
        FieldDef::new("estimate_hours", "Estimate (h)", FieldType::Number)
            .min(0.0)
            .sortable(),
        FieldDef::new("description", "Description", FieldType::Textarea)
            .max_length(4000)
            .hide_in_table(),
        FieldDef::new("tags", "Tags", FieldType::Tags).hide_in_table(),
    ],
    display: DisplayConfig {
        title: DisplayProjection::Field("title"),
        subtitle: Some(DisplayProjection::Compute(subtitle)),
        badge: Some(DisplayProjection::Field("status")),
        image: None,
    },
    search: SearchConfig {
        fields: &["title", "description", "status"],
        placeholder: Some("Search tasks…"),
    },
    filters: FiltersConfig {
        quick: &[
            QuickFilter {
                id: "done",
                label: "Done",
                field: "status",
                value: "done",
            },
            QuickFilter {
                id: "urgent",
                label: "Urgent",
                field: "priority",
                value: "urgent",
            },
        ],
        advanced: &["production_id", "assignee_id", "due_date"],
    },
    layouts: LayoutsConfig {
        list: ListLayoutConfig {
            default_view: ViewType::Table,
            page_size: 25,
            stats: &[
                StatDef {
                    id: "total",
                    label: "Tasks",
                    icon: "list",
                    kind: StatKind::Count,
                },
                StatDef {
                    id: "todo",
                    label: "To do",
                    icon: "circle",
                    kind: StatKind::CountWhere {
                        field: "status",
                        value: "todo",
                    },
                },
                StatDef {
                    id: "done",
                    label: "Done",
                    icon: "check",
                    kind: StatKind::CountWhere {
                        field: "status",
                        value: "done",
                    },
                },
                StatDef {
                    id: "hours",
                    label: "Estimated hours",
                    icon: "clock",
                    kind: StatKind::Sum {
                        field: "estimate_hours",
                    },
                },
            ],
        },
        detail: DetailLayoutConfig {
            tabs: &[
                DetailTab {
                    id: "overview",
                    label: "Overview",
                    icon: "info",
                    content: TabContent::Fields(&["title", "status", "priority", "description", "tags"]),
                },
                DetailTab {
                    id: "planning",
                    label: "Planning",
                    icon: "calendar",
                    content: TabContent::Fields(&[
                        "production_id",
                        "assignee_id",
                        "due_date",
                        "estimate_hours",
                    ]),
                },
                DetailTab {
                    id: "activity",
                    label: "Activity",
                    icon: "activity",
                    content: TabContent::Custom,
                },
            ],
        },
        form: FormLayoutConfig {
            sections: &[
                FormSection {
                    id: "general",
                    title: "General",
                    description: None,
                    fields: &["title", "status", "priority", "description"],
                },
                FormSection {
                    id: "planning",
                    title: "Planning",
                    description: Some("Who does it and by when"),
                    fields: &["production_id", "assignee_id", "due_date", "estimate_hours", "tags"],
                },
            ],
            columns: 2,
        },
    },
    views: ViewsConfig {
        table: Some(TableView {
            columns: &["title", "status", "priority", "due_date", "estimate_hours"],
            default_sort: Some(SortSpec {
                field: "due_date",
                ascending: true,
            }),
        }),
        kanban: Some(KanbanView {
            group_by: "status",
            card_title: "title",
            card_subtitle: Some("due_date"),
            color_map: &[("review", "warning")],
        }),
        calendar: Some(CalendarView {
            start_field: "due_date",
            end_field: None,
            title_field: "title",
        }),
        grid: None,
    },
    actions: &[
        ActionDef {
            id: "edit",
            label: "Edit",
            icon: Some("pencil"),
            scope: ActionScope::Row,
            handler: ActionHandler::Navigate(PathSpec::Computed(edit_path)),
            confirm: None,
            destructive: false,
        },
        ActionDef {
            id: "complete",
            label: "Mark done",
            icon: Some("check"),
            scope: ActionScope::Row,
            handler: ActionHandler::Api {
                endpoint: "/api/tasks/{id}/complete",
                method: HttpMethod::Post,
            },
            confirm: None,
            destructive: false,
        },
        ActionDef {
            id: "duplicate",
            label: "Duplicate",
            icon: Some("copy"),
            scope: ActionScope::Row,
            handler: ActionHandler::Function { name: "duplicate" },
            confirm: None,
            destructive: false,
        },
        ActionDef {
            id: "delete",
            label: "Delete",
            icon: Some("trash"),
            scope: ActionScope::Row,
            handler: ActionHandler::Api {
                endpoint: "/api/tasks/{id}",
                method: HttpMethod::Delete,
            },
            confirm: Some("Delete this task?"),
            destructive: true,
        },
        ActionDef {
            id: "bulk-complete",
            label: "Mark selected done",
            icon: Some("check-check"),
            scope: ActionScope::Bulk,
            handler: ActionHandler::Api {
                endpoint: "/api/tasks/bulk-complete",
                method: HttpMethod::Post,
            },
            confirm: None,
            destructive: false,
        },
        ActionDef {
            id: "bulk-delete",
            label: "Delete selected",
            icon: Some("trash"),
            scope: ActionScope::Bulk,
            handler: ActionHandler::Api {
                endpoint: "/api/tasks/bulk-delete",
                method: HttpMethod::Post,
            },
            confirm: Some("Delete the selected tasks?"),
            destructive: true,
        },
        ActionDef {
            id: "board",
            label: "Open board",
            icon: Some("columns"),
            scope: ActionScope::Global,
            handler: ActionHandler::Navigate(PathSpec::Literal("/e/tasks?view=kanban")),
            confirm: None,
            destructive: false,
        },
        ActionDef {
            id: "export",
            label: "Export CSV",
            icon: Some("download"),
            scope: ActionScope::Global,
            handler: ActionHandler::Function { name: "export_csv" },
            confirm: None,
            destructive: false,
        },
    ],
    relationships: &[
        Relationship {
            name: "production",
            label: "Production",
            kind: RelationKind::BelongsTo,
            target: "productions",
            foreign_key: "production_id",
        },
        Relationship {
            name: "assignee",
            label: "Assignee",
            kind: RelationKind::BelongsTo,
            target: "employees",
            foreign_key: "assignee_id",
        },
    ],
    permissions: Permissions::ALL,
    subpages: &[
        Subpage {
            id: "upcoming",
            label: "Upcoming",
            filter: QueryFragment {
                field: "due_date",
                op: FilterOp::Gte,
                value: FilterValue::Today,
            },
        },
        Subpage {
            id: "completed",
            label: "Completed",
            filter: QueryFragment {
                field: "status",
                op: FilterOp::Eq,
                value: FilterValue::Text("done"),
            },
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn subtitle_shows_due_date() {
        let due = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let record = Record::new("t1").with("due_date", FieldValue::Date(due));
        assert_eq!(
            TASK_SCHEMA.subtitle_of(&record).as_deref(),
            Some("Due Mar 9, 2024")
        );
    }

    #[test]
    fn row_actions_in_declaration_order() {
        let ids: Vec<_> = TASK_SCHEMA
            .actions_for(ActionScope::Row)
            .iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec!["edit", "complete", "duplicate", "delete"]);
    }
}
