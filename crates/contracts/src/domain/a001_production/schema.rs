use crate::shared::schema::*;

const STATUS_OPTIONS: &[SelectOption] = &[
    SelectOption::colored("development", "Development", "neutral"),
    SelectOption::colored("pre_production", "Pre-production", "primary"),
    SelectOption::colored("production", "In production", "warning"),
    SelectOption::colored("post_production", "Post-production", "primary"),
    SelectOption::colored("released", "Released", "success"),
    SelectOption::colored("cancelled", "Cancelled", "error"),
];

const KIND_OPTIONS: &[SelectOption] = &[
    SelectOption::new("film", "Feature film"),
    SelectOption::new("series", "Series"),
    SelectOption::new("commercial", "Commercial"),
    SelectOption::new("documentary", "Documentary"),
    SelectOption::new("music_video", "Music video"),
];

fn subtitle(record: &dyn EntityRecord) -> Option<String> {
    let director = record.field_value("director").and_then(|v| v.as_text().map(str::to_string));
    let kind = record.field_value("kind").and_then(|v| v.as_text().map(str::to_string));
    match (kind, director) {
        (Some(k), Some(d)) => Some(format!("{} · dir. {}", option_label(k.as_str()), d)),
        (Some(k), None) => Some(option_label(k.as_str()).to_string()),
        (None, Some(d)) => Some(format!("dir. {}", d)),
        (None, None) => None,
    }
}

fn option_label(value: &str) -> &str {
    KIND_OPTIONS
        .iter()
        .find(|o| o.value == value)
        .map(|o| o.label)
        .unwrap_or(value)
}

fn edit_path(record: &dyn EntityRecord) -> String {
    format!("/e/productions/{}/edit", record.record_id())
}

pub static PRODUCTION_SCHEMA: EntitySchema = EntitySchema {
    identity: EntityIdentity {
        name: "Production",
        plural_name: "Productions",
        slug: "productions",
        icon: "clapperboard",
        description: "Films, series and commercials from development to release",
        module: BusinessModule::Productions,
    },
    endpoint: "/api/productions",
    fields: &[
        FieldDef::new("title", "Title", FieldType::Text)
            .required()
            .max_length(200)
            .sortable(),
        FieldDef::new("code", "Code", FieldType::Text)
            .required()
            .max_length(20)
            .placeholder("PRD-001")
            .sortable()
            .width(110),
        FieldDef::new("status", "Status", FieldType::Select)
            .required()
            .options(STATUS_OPTIONS)
            .default_value(DefaultValue::Option("development"))
            .sortable(),
        FieldDef::new("kind", "Type", FieldType::Select).options(KIND_OPTIONS),
        FieldDef::new("director", "Director", FieldType::Text),
        FieldDef::new("start_date", "Start date", FieldType::Date).sortable(),
        FieldDef::new("wrap_date", "Wrap date", FieldType::Date).sortable(),
        FieldDef::new("budget", "Budget", FieldType::Currency)
            .min(0.0)
            .sortable(),
        FieldDef::new("progress", "Progress", FieldType::Percent)
            .range(0.0, 100.0)
            .default_value(DefaultValue::Number(0.0)),
        FieldDef::new("genres", "Genres", FieldType::Tags).hide_in_table(),
        FieldDef::new("poster", "Poster", FieldType::Image).hide_in_table(),
        FieldDef::new("synopsis", "Synopsis", FieldType::RichText).hide_in_table(),
    ],
    display: DisplayConfig {
        title: DisplayProjection::Field("title"),
        subtitle: Some(DisplayProjection::Compute(subtitle)),
        badge: Some(DisplayProjection::Field("status")),
        image: Some(DisplayProjection::Field("poster")),
    },
    search: SearchConfig {
        fields: &["title", "code", "director"],
        placeholder: Some("Search productions…"),
    },
    filters: FiltersConfig {
        quick: &[
            QuickFilter {
                id: "shooting",
                label: "Shooting",
                field: "status",
                value: "production",
            },
            QuickFilter {
                id: "released",
                label: "Released",
                field: "status",
                value: "released",
            },
        ],
        advanced: &["kind", "start_date", "budget"],
    },
    layouts: LayoutsConfig {
        list: ListLayoutConfig {
            default_view: ViewType::Table,
            page_size: 25,
            stats: &[
                StatDef {
                    id: "total",
                    label: "Productions",
                    icon: "clapperboard",
                    kind: StatKind::Count,
                },
                StatDef {
                    id: "shooting",
                    label: "In production",
                    icon: "video",
                    kind: StatKind::CountWhere {
                        field: "status",
                        value: "production",
                    },
                },
                StatDef {
                    id: "budget",
                    label: "Total budget",
                    icon: "wallet",
                    kind: StatKind::Sum { field: "budget" },
                },
            ],
        },
        detail: DetailLayoutConfig {
            tabs: &[
                DetailTab {
                    id: "overview",
                    label: "Overview",
                    icon: "info",
                    content: TabContent::Fields(&[
                        "title", "code", "status", "kind", "director", "genres", "synopsis",
                    ]),
                },
                DetailTab {
                    id: "schedule",
                    label: "Schedule & budget",
                    icon: "calendar",
                    content: TabContent::Fields(&["start_date", "wrap_date", "budget", "progress"]),
                },
                DetailTab {
                    id: "tasks",
                    label: "Tasks",
                    icon: "check-square",
                    content: TabContent::Related("tasks"),
                },
                DetailTab {
                    id: "expenses",
                    label: "Expenses",
                    icon: "receipt",
                    content: TabContent::Related("expenses"),
                },
            ],
        },
        form: FormLayoutConfig {
            sections: &[
                FormSection {
                    id: "general",
                    title: "General",
                    description: None,
                    fields: &["title", "code", "kind", "status", "director", "genres"],
                },
                FormSection {
                    id: "schedule",
                    title: "Schedule & budget",
                    description: Some("Dates drive the production calendar"),
                    fields: &["start_date", "wrap_date", "budget", "progress"],
                },
                FormSection {
                    id: "content",
                    title: "Content",
                    description: None,
                    fields: &["poster", "synopsis"],
                },
            ],
            columns: 2,
        },
    },
    views: ViewsConfig {
        table: Some(TableView {
            columns: &["code", "title", "status", "director", "start_date", "budget", "progress"],
            default_sort: Some(SortSpec {
                field: "start_date",
                ascending: false,
            }),
        }),
        kanban: Some(KanbanView {
            group_by: "status",
            card_title: "title",
            card_subtitle: Some("director"),
            color_map: &[],
        }),
        calendar: Some(CalendarView {
            start_field: "start_date",
            end_field: Some("wrap_date"),
            title_field: "title",
        }),
        grid: Some(GridView {
            title_field: "title",
            subtitle_field: Some("director"),
            image_field: Some("poster"),
        }),
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
            id: "quick-view",
            label: "Quick view",
            icon: Some("eye"),
            scope: ActionScope::Row,
            handler: ActionHandler::Modal {
                component: "quick_view",
            },
            confirm: None,
            destructive: false,
        },
        ActionDef {
            id: "archive",
            label: "Archive",
            icon: Some("archive"),
            scope: ActionScope::Row,
            handler: ActionHandler::Api {
                endpoint: "/api/productions/{id}/archive",
                method: HttpMethod::Post,
            },
            confirm: Some("Archive this production?"),
            destructive: false,
        },
        ActionDef {
            id: "delete",
            label: "Delete",
            icon: Some("trash"),
            scope: ActionScope::Row,
            handler: ActionHandler::Api {
                endpoint: "/api/productions/{id}",
                method: HttpMethod::Delete,
            },
            confirm: Some("Delete this production and its schedule?"),
            destructive: true,
        },
        ActionDef {
            id: "bulk-archive",
            label: "Archive selected",
            icon: Some("archive"),
            scope: ActionScope::Bulk,
            handler: ActionHandler::Api {
                endpoint: "/api/productions/bulk-archive",
                method: HttpMethod::Post,
            },
            confirm: Some("Archive the selected productions?"),
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
            name: "tasks",
            label: "Tasks",
            kind: RelationKind::HasMany,
            target: "tasks",
            foreign_key: "production_id",
        },
        Relationship {
            name: "expenses",
            label: "Expenses",
            kind: RelationKind::HasMany,
            target: "expenses",
            foreign_key: "production_id",
        },
        Relationship {
            name: "budgets",
            label: "Budget lines",
            kind: RelationKind::HasMany,
            target: "budgets",
            foreign_key: "production_id",
        },
    ],
    permissions: Permissions::ALL,
    subpages: &[
        Subpage {
            id: "active",
            label: "Shooting now",
            filter: QueryFragment {
                field: "status",
                op: FilterOp::Eq,
                value: FilterValue::Text("production"),
            },
        },
        Subpage {
            id: "upcoming",
            label: "Upcoming",
            filter: QueryFragment {
                field: "start_date",
                op: FilterOp::Gte,
                value: FilterValue::Today,
            },
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtitle_combines_kind_and_director() {
        let record = Record::new("p1")
            .with("kind", FieldValue::text("series"))
            .with("director", FieldValue::text("Ana Lima"));
        assert_eq!(
            PRODUCTION_SCHEMA.subtitle_of(&record).as_deref(),
            Some("Series · dir. Ana Lima")
        );
        assert_eq!(PRODUCTION_SCHEMA.subtitle_of(&Record::new("p2")), None);
    }
}
