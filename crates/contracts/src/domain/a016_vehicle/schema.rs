use crate::shared::schema::*;

const TYPE_OPTIONS: &[SelectOption] = &[
    SelectOption::new("van", "Van"),
    SelectOption::new("truck", "Truck"),
    SelectOption::new("car", "Car"),
    SelectOption::new("trailer", "Trailer"),
];

const STATUS_OPTIONS: &[SelectOption] = &[
    SelectOption::colored("available", "Available", "success"),
    SelectOption::colored("in_use", "In use", "primary"),
    SelectOption::colored("service", "In service", "warning"),
];

pub static VEHICLE_SCHEMA: EntitySchema = EntitySchema {
    identity: EntityIdentity {
        name: "Vehicle",
        plural_name: "Vehicles",
        slug: "vehicles",
        icon: "truck",
        description: "Fleet used to move crew and kit between locations",
        module: BusinessModule::Operations,
    },
    endpoint: "/api/vehicles",
    fields: &[
        FieldDef::new("plate", "Plate", FieldType::Text)
            .required()
            .max_length(16)
            .sortable()
            .width(110),
        FieldDef::new("model", "Model", FieldType::Text)
            .required()
            .sortable(),
        FieldDef::new("vehicle_type", "Type", FieldType::Select)
            .options(TYPE_OPTIONS)
            .default_value(DefaultValue::Option("van")),
        FieldDef::new("status", "Status", FieldType::Select)
            .options(STATUS_OPTIONS)
            .default_value(DefaultValue::Option("available"))
            .sortable(),
        FieldDef::new("assigned_to", "Driver", FieldType::Relation).relation("employees"),
        FieldDef::new("seats", "Seats", FieldType::Number).range(1.0, 60.0),
        FieldDef::new("mileage", "Mileage (km)", FieldType::Number)
            .min(0.0)
            .sortable(),
        FieldDef::new("next_inspection", "Next inspection", FieldType::Date).sortable(),
        FieldDef::new("photo", "Photo", FieldType::Image).hide_in_table(),
        FieldDef::new("notes", "Notes", FieldType::Textarea).hide_in_table(),
    ],
    display: DisplayConfig {
        title: DisplayProjection::Field("plate"),
        subtitle: Some(DisplayProjection::Field("model")),
        badge: Some(DisplayProjection::Field("status")),
        image: Some(DisplayProjection::Field("photo")),
    },
    search: SearchConfig {
        fields: &["plate", "model"],
        placeholder: Some("Search by plate or model…"),
    },
    filters: FiltersConfig {
        quick: &[QuickFilter {
            id: "available",
            label: "Available",
            field: "status",
            value: "available",
        }],
        advanced: &["vehicle_type", "assigned_to"],
    },
    layouts: LayoutsConfig {
        list: ListLayoutConfig {
            default_view: ViewType::Table,
            page_size: 25,
            stats: &[
                StatDef {
                    id: "fleet",
                    label: "Fleet",
                    icon: "truck",
                    kind: StatKind::Count,
                },
                StatDef {
                    id: "in-use",
                    label: "In use",
                    icon: "navigation",
                    kind: StatKind::CountWhere {
                        field: "status",
                        value: "in_use",
                    },
                },
                StatDef {
                    id: "km",
                    label: "Total km",
                    icon: "gauge",
                    kind: StatKind::Sum { field: "mileage" },
                },
            ],
        },
        detail: DetailLayoutConfig {
            tabs: &[
                DetailTab {
                    id: "vehicle",
                    label: "Vehicle",
                    icon: "truck",
                    content: TabContent::Fields(&[
                        "plate",
                        "model",
                        "vehicle_type",
                        "seats",
                        "status",
                        "assigned_to",
                    ]),
                },
                DetailTab {
                    id: "maintenance",
                    label: "Maintenance",
                    icon: "wrench",
                    content: TabContent::Fields(&["mileage", "next_inspection", "notes"]),
                },
            ],
        },
        form: FormLayoutConfig {
            sections: &[
                FormSection {
                    id: "vehicle",
                    title: "Vehicle",
                    description: None,
                    fields: &["plate", "model", "vehicle_type", "seats", "photo"],
                },
                FormSection {
                    id: "usage",
                    title: "Usage",
                    description: None,
                    fields: &["status", "assigned_to", "mileage", "next_inspection", "notes"],
                },
            ],
            columns: 2,
        },
    },
    views: ViewsConfig {
        table: Some(TableView {
            columns: &["plate", "model", "vehicle_type", "status", "assigned_to", "mileage", "next_inspection"],
            default_sort: Some(SortSpec {
                field: "plate",
                ascending: true,
            }),
        }),
        kanban: Some(KanbanView {
            group_by: "status",
            card_title: "plate",
            card_subtitle: Some("model"),
            color_map: &[],
        }),
        calendar: Some(CalendarView {
            start_field: "next_inspection",
            end_field: None,
            title_field: "plate",
        }),
        grid: Some(GridView {
            title_field: "plate",
            subtitle_field: Some("model"),
            image_field: Some("photo"),
        }),
    },
    actions: &[
        ActionDef {
            id: "edit",
            label: "Edit",
            icon: Some("pencil"),
            scope: ActionScope::Row,
            handler: ActionHandler::Navigate(PathSpec::Literal("/e/vehicles/{id}/edit")),
            confirm: None,
            destructive: false,
        },
        ActionDef {
            id: "send-to-service",
            label: "Send to service",
            icon: Some("wrench"),
            scope: ActionScope::Row,
            handler: ActionHandler::Api {
                endpoint: "/api/vehicles/{id}/service",
                method: HttpMethod::Post,
            },
            confirm: Some("Take this vehicle out of rotation for service?"),
            destructive: false,
        },
        ActionDef {
            id: "print",
            label: "Print logbook",
            icon: Some("printer"),
            scope: ActionScope::Global,
            handler: ActionHandler::Function { name: "print" },
            confirm: None,
            destructive: false,
        },
    ],
    relationships: &[Relationship {
        name: "driver",
        label: "Driver",
        kind: RelationKind::BelongsTo,
        target: "employees",
        foreign_key: "assigned_to",
    }],
    permissions: Permissions::ALL,
    subpages: &[Subpage {
        id: "inspection-due",
        label: "Inspection due",
        filter: QueryFragment {
            field: "next_inspection",
            op: FilterOp::Lte,
            value: FilterValue::Today,
        },
    }],
};
