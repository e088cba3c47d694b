use crate::shared::schema::*;

const CATEGORY_OPTIONS: &[SelectOption] = &[
    SelectOption::new("camera", "Camera"),
    SelectOption::new("lens", "Lens"),
    SelectOption::new("lighting", "Lighting"),
    SelectOption::new("audio", "Audio"),
    SelectOption::new("grip", "Grip"),
    SelectOption::new("other", "Other"),
];

const CONDITION_OPTIONS: &[SelectOption] = &[
    SelectOption::colored("available", "Available", "success"),
    SelectOption::colored("checked_out", "Checked out", "primary"),
    SelectOption::colored("maintenance", "In maintenance", "warning"),
    SelectOption::colored("retired", "Retired", "neutral"),
];

pub static EQUIPMENT_SCHEMA: EntitySchema = EntitySchema {
    identity: EntityIdentity {
        name: "Equipment",
        plural_name: "Equipment",
        slug: "equipment",
        icon: "camera",
        description: "Cameras, lenses, lights and sound kit owned by the studio",
        module: BusinessModule::Productions,
    },
    endpoint: "/api/equipment",
    fields: &[
        FieldDef::new("name", "Name", FieldType::Text)
            .required()
            .sortable(),
        FieldDef::new("serial_number", "Serial number", FieldType::Text)
            .required()
            .max_length(64),
        FieldDef::new("category", "Category", FieldType::Select)
            .required()
            .options(CATEGORY_OPTIONS)
            .sortable(),
        FieldDef::new("condition", "Status", FieldType::Select)
            .options(CONDITION_OPTIONS)
            .default_value(DefaultValue::Option("available")),
        FieldDef::new("assigned_production_id", "Assigned to", FieldType::Relation)
            .relation("productions"),
        FieldDef::new("daily_rate", "Daily rate", FieldType::Currency)
            .min(0.0)
            .sortable(),
        FieldDef::new("purchase_date", "Purchased", FieldType::Date).hide_in_table(),
        FieldDef::new("next_service", "Next service", FieldType::Date).sortable(),
        FieldDef::new("photo", "Photo", FieldType::Image).hide_in_table(),
        FieldDef::new("notes", "Notes", FieldType::Textarea).hide_in_table(),
    ],
    display: DisplayConfig {
        title: DisplayProjection::Field("name"),
        subtitle: Some(DisplayProjection::Field("serial_number")),
        badge: Some(DisplayProjection::Field("condition")),
        image: Some(DisplayProjection::Field("photo")),
    },
    search: SearchConfig {
        fields: &["name", "serial_number", "category"],
        placeholder: Some("Search by name or serial…"),
    },
    filters: FiltersConfig {
        quick: &[
            QuickFilter {
                id: "available",
                label: "Available",
                field: "condition",
                value: "available",
            },
            QuickFilter {
                id: "maintenance",
                label: "In maintenance",
                field: "condition",
                value: "maintenance",
            },
        ],
        advanced: &["category", "assigned_production_id"],
    },
    layouts: LayoutsConfig {
        list: ListLayoutConfig {
            default_view: ViewType::Grid,
            page_size: 24,
            stats: &[
                StatDef {
                    id: "total",
                    label: "Items",
                    icon: "package",
                    kind: StatKind::Count,
                },
                StatDef {
                    id: "out",
                    label: "Checked out",
                    icon: "log-out",
                    kind: StatKind::CountWhere {
                        field: "condition",
                        value: "checked_out",
                    },
                },
            ],
        },
        detail: DetailLayoutConfig {
            tabs: &[
                DetailTab {
                    id: "details",
                    label: "Details",
                    icon: "info",
                    content: TabContent::Fields(&[
                        "name",
                        "serial_number",
                        "category",
                        "condition",
                        "assigned_production_id",
                        "daily_rate",
                    ]),
                },
                DetailTab {
                    id: "service",
                    label: "Service",
                    icon: "wrench",
                    content: TabContent::Fields(&["purchase_date", "next_service", "notes"]),
                },
            ],
        },
        form: FormLayoutConfig {
            sections: &[
                FormSection {
                    id: "item",
                    title: "Item",
                    description: None,
                    fields: &["name", "serial_number", "category", "condition", "photo"],
                },
                FormSection {
                    id: "usage",
                    title: "Usage & service",
                    description: None,
                    fields: &[
                        "assigned_production_id",
                        "daily_rate",
                        "purchase_date",
                        "next_service",
                        "notes",
                    ],
                },
            ],
            columns: 2,
        },
    },
    views: ViewsConfig {
        table: Some(TableView {
            columns: &["name", "category", "condition", "assigned_production_id", "daily_rate", "next_service"],
            default_sort: Some(SortSpec {
                field: "name",
                ascending: true,
            }),
        }),
        kanban: Some(KanbanView {
            group_by: "condition",
            card_title: "name",
            card_subtitle: Some("serial_number"),
            color_map: &[],
        }),
        calendar: None,
        grid: Some(GridView {
            title_field: "name",
            subtitle_field: Some("category"),
            image_field: Some("photo"),
        }),
    },
    actions: &[
        ActionDef {
            id: "edit",
            label: "Edit",
            icon: Some("pencil"),
            scope: ActionScope::Row,
            handler: ActionHandler::Navigate(PathSpec::Literal("/e/equipment/{id}/edit")),
            confirm: None,
            destructive: false,
        },
        ActionDef {
            id: "check-in",
            label: "Check in",
            icon: Some("log-in"),
            scope: ActionScope::Row,
            handler: ActionHandler::Api {
                endpoint: "/api/equipment/{id}/check-in",
                method: HttpMethod::Post,
            },
            confirm: None,
            destructive: false,
        },
        ActionDef {
            id: "retire",
            label: "Retire",
            icon: Some("archive"),
            scope: ActionScope::Row,
            handler: ActionHandler::Api {
                endpoint: "/api/equipment/{id}/retire",
                method: HttpMethod::Post,
            },
            confirm: Some("Retire this item? It will no longer be bookable."),
            destructive: true,
        },
        ActionDef {
            id: "print-labels",
            label: "Print labels",
            icon: Some("printer"),
            scope: ActionScope::Bulk,
            handler: ActionHandler::Function { name: "print" },
            confirm: None,
            destructive: false,
        },
    ],
    relationships: &[Relationship {
        name: "production",
        label: "Production",
        kind: RelationKind::BelongsTo,
        target: "productions",
        foreign_key: "assigned_production_id",
    }],
    permissions: Permissions::ALL,
    subpages: &[Subpage {
        id: "service-due",
        label: "Service due",
        filter: QueryFragment {
            field: "next_service",
            op: FilterOp::Lte,
            value: FilterValue::Today,
        },
    }],
};
