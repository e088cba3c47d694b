use crate::shared::schema::*;

const STATUS_OPTIONS: &[SelectOption] = &[
    SelectOption::colored("inquiry", "Inquiry", "neutral"),
    SelectOption::colored("offer_sent", "Offer sent", "primary"),
    SelectOption::colored("contracted", "Contracted", "success"),
    SelectOption::colored("declined", "Declined", "error"),
];

const ROLE_OPTIONS: &[SelectOption] = &[
    SelectOption::new("headliner", "Headliner"),
    SelectOption::new("support", "Support act"),
    SelectOption::new("host", "Host"),
    SelectOption::new("speaker", "Speaker"),
    SelectOption::new("dj", "DJ"),
];

pub static TALENT_BOOKING_SCHEMA: EntitySchema = EntitySchema {
    identity: EntityIdentity {
        name: "Talent booking",
        plural_name: "Talent bookings",
        slug: "talent-bookings",
        icon: "mic",
        description: "Artists, hosts and speakers booked for events, from inquiry to contract",
        module: BusinessModule::Events,
    },
    endpoint: "/api/talent-bookings",
    fields: &[
        FieldDef::new("performer", "Performer", FieldType::Text)
            .required()
            .sortable(),
        FieldDef::new("event_id", "Event", FieldType::Relation)
            .relation("events")
            .required(),
        FieldDef::new("agent_id", "Agent", FieldType::Relation).relation("contacts"),
        FieldDef::new("role", "Role", FieldType::Select)
            .options(ROLE_OPTIONS)
            .default_value(DefaultValue::Option("support")),
        FieldDef::new("status", "Status", FieldType::Select)
            .required()
            .options(STATUS_OPTIONS)
            .default_value(DefaultValue::Option("inquiry"))
            .sortable(),
        FieldDef::new("set_time", "Set time", FieldType::Time),
        FieldDef::new("set_length", "Set length (min)", FieldType::Number).range(0.0, 600.0),
        FieldDef::new("fee", "Fee", FieldType::Currency)
            .min(0.0)
            .sortable(),
        FieldDef::new("deposit_paid", "Deposit paid", FieldType::Switch)
            .default_value(DefaultValue::Bool(false)),
        FieldDef::new("rider", "Rider", FieldType::File).hide_in_table(),
        FieldDef::new("requirements", "Requirements", FieldType::Json)
            .hide_in_table()
            .hide_in_form(),
        FieldDef::new("notes", "Notes", FieldType::Textarea).hide_in_table(),
    ],
    display: DisplayConfig {
        title: DisplayProjection::Field("performer"),
        subtitle: Some(DisplayProjection::Field("role")),
        badge: Some(DisplayProjection::Field("status")),
        image: None,
    },
    search: SearchConfig {
        fields: &["performer", "role", "status"],
        placeholder: Some("Search performers…"),
    },
    filters: FiltersConfig {
        quick: &[
            QuickFilter {
                id: "contracted",
                label: "Contracted",
                field: "status",
                value: "contracted",
            },
            QuickFilter {
                id: "headliners",
                label: "Headliners",
                field: "role",
                value: "headliner",
            },
        ],
        advanced: &["event_id", "agent_id", "deposit_paid"],
    },
    layouts: LayoutsConfig {
        list: ListLayoutConfig {
            default_view: ViewType::Kanban,
            page_size: 25,
            stats: &[
                StatDef {
                    id: "total",
                    label: "Bookings",
                    icon: "mic",
                    kind: StatKind::Count,
                },
                StatDef {
                    id: "fees",
                    label: "Total fees",
                    icon: "wallet",
                    kind: StatKind::Sum { field: "fee" },
                },
                StatDef {
                    id: "contracted",
                    label: "Contracted",
                    icon: "file-check",
                    kind: StatKind::CountWhere {
                        field: "status",
                        value: "contracted",
                    },
                },
            ],
        },
        detail: DetailLayoutConfig {
            tabs: &[
                DetailTab {
                    id: "booking",
                    label: "Booking",
                    icon: "info",
                    content: TabContent::Fields(&[
                        "performer",
                        "event_id",
                        "agent_id",
                        "role",
                        "status",
                        "set_time",
                        "set_length",
                    ]),
                },
                DetailTab {
                    id: "contract",
                    label: "Contract",
                    icon: "file-text",
                    content: TabContent::Fields(&["fee", "deposit_paid", "rider", "requirements", "notes"]),
                },
            ],
        },
        form: FormLayoutConfig {
            sections: &[
                FormSection {
                    id: "booking",
                    title: "Booking",
                    description: None,
                    fields: &["performer", "event_id", "agent_id", "role", "status"],
                },
                FormSection {
                    id: "performance",
                    title: "Performance",
                    description: None,
                    fields: &["set_time", "set_length"],
                },
                FormSection {
                    id: "contract",
                    title: "Contract",
                    description: Some("Fee and deposit as agreed with the agent"),
                    fields: &["fee", "deposit_paid", "rider", "notes"],
                },
            ],
            columns: 2,
        },
    },
    views: ViewsConfig {
        table: Some(TableView {
            columns: &["performer", "event_id", "role", "status", "set_time", "fee", "deposit_paid"],
            default_sort: None,
        }),
        kanban: Some(KanbanView {
            group_by: "status",
            card_title: "performer",
            card_subtitle: Some("role"),
            color_map: &[],
        }),
        calendar: None,
        grid: None,
    },
    actions: &[
        ActionDef {
            id: "edit",
            label: "Edit",
            icon: Some("pencil"),
            scope: ActionScope::Row,
            handler: ActionHandler::Navigate(PathSpec::Literal("/e/talent-bookings/{id}/edit")),
            confirm: None,
            destructive: false,
        },
        ActionDef {
            id: "send-offer",
            label: "Send offer",
            icon: Some("send"),
            scope: ActionScope::Row,
            handler: ActionHandler::Api {
                endpoint: "/api/talent-bookings/{id}/offer",
                method: HttpMethod::Post,
            },
            confirm: Some("Email the offer to the agent?"),
            destructive: false,
        },
        ActionDef {
            id: "decline",
            label: "Decline",
            icon: Some("x"),
            scope: ActionScope::Row,
            handler: ActionHandler::Api {
                endpoint: "/api/talent-bookings/{id}/decline",
                method: HttpMethod::Post,
            },
            confirm: Some("Decline this booking?"),
            destructive: true,
        },
    ],
    relationships: &[
        Relationship {
            name: "event",
            label: "Event",
            kind: RelationKind::BelongsTo,
            target: "events",
            foreign_key: "event_id",
        },
        Relationship {
            name: "agent",
            label: "Agent",
            kind: RelationKind::BelongsTo,
            target: "contacts",
            foreign_key: "agent_id",
        },
    ],
    permissions: Permissions::ALL,
    subpages: &[Subpage {
        id: "open",
        label: "Open offers",
        filter: QueryFragment {
            field: "status",
            op: FilterOp::Eq,
            value: FilterValue::Text("offer_sent"),
        },
    }],
};
