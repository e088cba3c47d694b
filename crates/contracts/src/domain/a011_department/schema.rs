use crate::shared::schema::*;

pub static DEPARTMENT_SCHEMA: EntitySchema = EntitySchema {
    identity: EntityIdentity {
        name: "Department",
        plural_name: "Departments",
        slug: "departments",
        icon: "building",
        description: "Org units that own people and budgets",
        module: BusinessModule::Hr,
    },
    endpoint: "/api/departments",
    fields: &[
        FieldDef::new("name", "Name", FieldType::Text)
            .required()
            .sortable(),
        FieldDef::new("code", "Code", FieldType::Text)
            .required()
            .max_length(8)
            .placeholder("PROD")
            .width(90),
        FieldDef::new("head_id", "Head", FieldType::Relation).relation("employees"),
        FieldDef::new("headcount", "Headcount", FieldType::Number)
            .min(0.0)
            .sortable()
            .hide_in_form(),
        FieldDef::new("cost_center", "Cost center", FieldType::Text).hide_in_table(),
        FieldDef::new("color", "Colour", FieldType::Color)
            .default_value(DefaultValue::Text("#6366f1"))
            .hide_in_table(),
        FieldDef::new("description", "Description", FieldType::Textarea).hide_in_table(),
    ],
    display: DisplayConfig {
        title: DisplayProjection::Field("name"),
        subtitle: Some(DisplayProjection::Field("code")),
        badge: None,
        image: None,
    },
    search: SearchConfig {
        fields: &["name", "code", "cost_center"],
        placeholder: None,
    },
    filters: FiltersConfig::NONE,
    layouts: LayoutsConfig {
        list: ListLayoutConfig {
            default_view: ViewType::Table,
            page_size: 25,
            stats: &[
                StatDef {
                    id: "total",
                    label: "Departments",
                    icon: "building",
                    kind: StatKind::Count,
                },
                StatDef {
                    id: "people",
                    label: "People",
                    icon: "users",
                    kind: StatKind::Sum { field: "headcount" },
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
                        "code",
                        "head_id",
                        "headcount",
                        "cost_center",
                        "color",
                        "description",
                    ]),
                },
                DetailTab {
                    id: "members",
                    label: "Members",
                    icon: "users",
                    content: TabContent::Related("members"),
                },
            ],
        },
        form: FormLayoutConfig {
            sections: &[FormSection {
                id: "department",
                title: "Department",
                description: None,
                fields: &["name", "code", "head_id", "cost_center", "color", "description"],
            }],
            columns: 1,
        },
    },
    views: ViewsConfig {
        table: Some(TableView {
            columns: &["name", "code", "head_id", "headcount"],
            default_sort: Some(SortSpec {
                field: "name",
                ascending: true,
            }),
        }),
        kanban: None,
        calendar: None,
        grid: None,
    },
    actions: &[
        ActionDef {
            id: "edit",
            label: "Edit",
            icon: Some("pencil"),
            scope: ActionScope::Row,
            handler: ActionHandler::Navigate(PathSpec::Literal("/e/departments/{id}/edit")),
            confirm: None,
            destructive: false,
        },
        ActionDef {
            id: "delete",
            label: "Delete",
            icon: Some("trash"),
            scope: ActionScope::Row,
            handler: ActionHandler::Api {
                endpoint: "/api/departments/{id}",
                method: HttpMethod::Delete,
            },
            confirm: Some("Delete this department? Members will become unassigned."),
            destructive: true,
        },
    ],
    relationships: &[
        Relationship {
            name: "head",
            label: "Head",
            kind: RelationKind::BelongsTo,
            target: "employees",
            foreign_key: "head_id",
        },
        Relationship {
            name: "members",
            label: "Members",
            kind: RelationKind::HasMany,
            target: "employees",
            foreign_key: "department_id",
        },
        Relationship {
            name: "budgets",
            label: "Budgets",
            kind: RelationKind::HasMany,
            target: "budgets",
            foreign_key: "department_id",
        },
    ],
    permissions: Permissions::ALL,
    subpages: &[],
};
