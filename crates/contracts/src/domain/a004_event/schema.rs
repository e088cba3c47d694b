use crate::shared::schema::*;

const STATUS_OPTIONS: &[SelectOption] = &[
    SelectOption::colored("planning", "Planning", "neutral"),
    SelectOption::colored("confirmed", "Confirmed", "primary"),
    SelectOption::colored("on_sale", "On sale", "success"),
    SelectOption::colored("sold_out", "Sold out", "warning"),
    SelectOption::colored("completed", "Completed", "neutral"),
    SelectOption::colored("cancelled", "Cancelled", "error"),
];

const TYPE_OPTIONS: &[SelectOption] = &[
    SelectOption::new("concert", "Concert"),
    SelectOption::new("festival", "Festival"),
    SelectOption::new("premiere", "Premiere"),
    SelectOption::new("conference", "Conference"),
    SelectOption::new("private", "Private event"),
];

fn subtitle(record: &dyn EntityRecord) -> Option<String> {
    let starts = record.field_value("starts_at")?;
    let date = starts.as_date()?;
    match record.field_value("capacity").and_then(|v| v.as_number()) {
        Some(cap) => Some(format!("{} · {} seats", date.format("%a %b %-d"), format_number(cap))),
        None => Some(date.format("%a %b %-d").to_string()),
    }
}

fn edit_path(record: &dyn EntityRecord) -> String {
    format!("/e/events/{}/edit", record.record_id())
}

pub static EVENT_SCHEMA: EntitySchema = EntitySchema {
    identity: EntityIdentity {
        name: "Event",
        plural_name: "Events",
        slug: "events",
        icon: "ticket",
        description: "Concerts, premieres and live shows with their ticketing state",
        module: BusinessModule::Events,
    },
    endpoint: "/api/events",
    fields: &[
        FieldDef::new("name", "Name", FieldType::Text)
            .required()
            .max_length(200)
            .sortable(),
        FieldDef::new("event_type", "Type", FieldType::Select)
            .options(TYPE_OPTIONS)
            .default_value(DefaultValue::Option("concert")),
        FieldDef::new("status", "Status", FieldType::Select)
            .required()
            .options(STATUS_OPTIONS)
            .default_value(DefaultValue::Option("planning"))
            .sortable(),
        FieldDef::new("venue_id", "Venue", FieldType::Relation).relation("venues"),
        FieldDef::new("starts_at", "Starts", FieldType::DateTime)
            .required()
            .sortable(),
        FieldDef::new("ends_at", "Ends", FieldType::DateTime).hide_in_table(),
        FieldDef::new("capacity", "Capacity", FieldType::Number)
            .min(0.0)
            .sortable(),
        FieldDef::new("tickets_sold", "Tickets sold", FieldType::Number).min(0.0),
        FieldDef::new("ticket_price", "Ticket price", FieldType::Currency).min(0.0),
        FieldDef::new("public", "Public listing", FieldType::Switch)
            .default_value(DefaultValue::Bool(true))
            .hide_in_table(),
        FieldDef::new("website", "Website", FieldType::Url).hide_in_table(),
        FieldDef::new("banner", "Banner", FieldType::Image).hide_in_table(),
        FieldDef::new("description", "Description", FieldType::RichText).hide_in_table(),
    ],
    display: DisplayConfig {
        title: DisplayProjection::Field("name"),
        subtitle: Some(DisplayProjection::Compute(subtitle)),
        badge: Some(DisplayProjection::Field("status")),
        image: Some(DisplayProjection::Field("banner")),
    },
    search: SearchConfig {
        fields: &["name", "event_type", "status"],
        placeholder: Some("Search events…"),
    },
    filters: FiltersConfig {
        quick: &[
            QuickFilter {
                id: "on-sale",
                label: "On sale",
                field: "status",
                value: "on_sale",
            },
            QuickFilter {
                id: "festivals",
                label: "Festivals",
                field: "event_type",
                value: "festival",
            },
        ],
        advanced: &["venue_id", "starts_at", "public"],
    },
    layouts: LayoutsConfig {
        list: ListLayoutConfig {
            default_view: ViewType::Calendar,
            page_size: 25,
            stats: &[
                StatDef {
                    id: "total",
                    label: "Events",
                    icon: "ticket",
                    kind: StatKind::Count,
                },
                StatDef {
                    id: "sold",
                    label: "Tickets sold",
                    icon: "users",
                    kind: StatKind::Sum {
                        field: "tickets_sold",
                    },
                },
                StatDef {
                    id: "sold-out",
                    label: "Sold out",
                    icon: "flame",
                    kind: StatKind::CountWhere {
                        field: "status",
                        value: "sold_out",
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
                    content: TabContent::Fields(&[
                        "name",
                        "event_type",
                        "status",
                        "venue_id",
                        "starts_at",
                        "ends_at",
                        "description",
                    ]),
                },
                DetailTab {
                    id: "ticketing",
                    label: "Ticketing",
                    icon: "ticket",
                    content: TabContent::Fields(&[
                        "capacity",
                        "tickets_sold",
                        "ticket_price",
                        "public",
                        "website",
                    ]),
                },
                DetailTab {
                    id: "lineup",
                    label: "Line-up",
                    icon: "mic",
                    content: TabContent::Related("bookings"),
                },
            ],
        },
        form: FormLayoutConfig {
            sections: &[
                FormSection {
                    id: "event",
                    title: "Event",
                    description: None,
                    fields: &["name", "event_type", "status", "venue_id", "starts_at", "ends_at"],
                },
                FormSection {
                    id: "ticketing",
                    title: "Ticketing",
                    description: Some("Capacity and pricing shown on the public page"),
                    fields: &["capacity", "tickets_sold", "ticket_price", "public", "website"],
                },
                FormSection {
                    id: "content",
                    title: "Content",
                    description: None,
                    fields: &["banner", "description"],
                },
            ],
            columns: 2,
        },
    },
    views: ViewsConfig {
        table: Some(TableView {
            columns: &["name", "status", "venue_id", "starts_at", "capacity", "tickets_sold"],
            default_sort: Some(SortSpec {
                field: "starts_at",
                ascending: true,
            }),
        }),
        kanban: Some(KanbanView {
            group_by: "status",
            card_title: "name",
            card_subtitle: Some("starts_at"),
            color_map: &[("sold_out", "error")],
        }),
        calendar: Some(CalendarView {
            start_field: "starts_at",
            end_field: Some("ends_at"),
            title_field: "name",
        }),
        grid: Some(GridView {
            title_field: "name",
            subtitle_field: Some("starts_at"),
            image_field: Some("banner"),
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
            id: "publish",
            label: "Put on sale",
            icon: Some("megaphone"),
            scope: ActionScope::Row,
            handler: ActionHandler::Api {
                endpoint: "/api/events/{id}/publish",
                method: HttpMethod::Post,
            },
            confirm: Some("Open ticket sales for this event?"),
            destructive: false,
        },
        ActionDef {
            id: "copy-link",
            label: "Copy link",
            icon: Some("link"),
            scope: ActionScope::Row,
            handler: ActionHandler::Function { name: "copy_link" },
            confirm: None,
            destructive: false,
        },
        ActionDef {
            id: "cancel",
            label: "Cancel event",
            icon: Some("x-circle"),
            scope: ActionScope::Row,
            handler: ActionHandler::Api {
                endpoint: "/api/events/{id}/cancel",
                method: HttpMethod::Post,
            },
            confirm: Some("Cancel this event? Ticket holders will be notified."),
            destructive: true,
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
            name: "venue",
            label: "Venue",
            kind: RelationKind::BelongsTo,
            target: "venues",
            foreign_key: "venue_id",
        },
        Relationship {
            name: "bookings",
            label: "Talent bookings",
            kind: RelationKind::HasMany,
            target: "talent-bookings",
            foreign_key: "event_id",
        },
    ],
    permissions: Permissions::ALL,
    subpages: &[
        Subpage {
            id: "upcoming",
            label: "Upcoming",
            filter: QueryFragment {
                field: "starts_at",
                op: FilterOp::Gte,
                value: FilterValue::Today,
            },
        },
        Subpage {
            id: "past",
            label: "Past",
            filter: QueryFragment {
                field: "starts_at",
                op: FilterOp::Lte,
                value: FilterValue::Today,
            },
        },
    ],
};
