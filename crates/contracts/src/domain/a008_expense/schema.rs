use crate::shared::schema::*;

const CATEGORY_OPTIONS: &[SelectOption] = &[
    SelectOption::new("travel", "Travel"),
    SelectOption::new("catering", "Catering"),
    SelectOption::new("equipment", "Equipment rental"),
    SelectOption::new("location", "Location fees"),
    SelectOption::new("talent", "Talent"),
    SelectOption::new("other", "Other"),
];

const STATUS_OPTIONS: &[SelectOption] = &[
    SelectOption::colored("submitted", "Submitted", "primary"),
    SelectOption::colored("approved", "Approved", "success"),
    SelectOption::colored("rejected", "Rejected", "error"),
    SelectOption::colored("reimbursed", "Reimbursed", "neutral"),
];

pub static EXPENSE_SCHEMA: EntitySchema = EntitySchema {
    identity: EntityIdentity {
        name: "Expense",
        plural_name: "Expenses",
        slug: "expenses",
        icon: "credit-card",
        description: "Out-of-pocket and card spend, submitted for approval",
        module: BusinessModule::Finance,
    },
    endpoint: "/api/expenses",
    fields: &[
        FieldDef::new("description", "Description", FieldType::Text)
            .required()
            .max_length(240),
        FieldDef::new("amount", "Amount", FieldType::Currency)
            .required()
            .min(0.0)
            .sortable(),
        FieldDef::new("category", "Category", FieldType::Select)
            .required()
            .options(CATEGORY_OPTIONS)
            .sortable(),
        FieldDef::new("status", "Status", FieldType::Select)
            .options(STATUS_OPTIONS)
            .default_value(DefaultValue::Option("submitted"))
            .sortable(),
        FieldDef::new("spent_on", "Date", FieldType::Date)
            .required()
            .default_value(DefaultValue::Today)
            .sortable(),
        FieldDef::new("production_id", "Production", FieldType::Relation).relation("productions"),
        FieldDef::new("employee_id", "Submitted by", FieldType::Relation).relation("employees"),
        FieldDef::new("vendor", "Vendor", FieldType::Text).hide_in_table(),
        FieldDef::new("billable", "Billable to client", FieldType::Switch)
            .default_value(DefaultValue::Bool(false))
            .hide_in_table(),
        FieldDef::new("receipt", "Receipt", FieldType::File).hide_in_table(),
    ],
    display: DisplayConfig {
        title: DisplayProjection::Field("description"),
        subtitle: Some(DisplayProjection::Field("amount")),
        badge: Some(DisplayProjection::Field("status")),
        image: None,
    },
    search: SearchConfig {
        fields: &["description", "vendor", "category"],
        placeholder: None,
    },
    filters: FiltersConfig {
        quick: &[
            QuickFilter {
                id: "pending",
                label: "Awaiting approval",
                field: "status",
                value: "submitted",
            },
            QuickFilter {
                id: "travel",
                label: "Travel",
                field: "category",
                value: "travel",
            },
        ],
        advanced: &["production_id", "employee_id", "spent_on", "billable"],
    },
    layouts: LayoutsConfig {
        list: ListLayoutConfig {
            default_view: ViewType::Table,
            page_size: 50,
            stats: &[
                StatDef {
                    id: "total",
                    label: "Expenses",
                    icon: "credit-card",
                    kind: StatKind::Count,
                },
                StatDef {
                    id: "spend",
                    label: "Total spend",
                    icon: "banknote",
                    kind: StatKind::Sum { field: "amount" },
                },
                StatDef {
                    id: "pending",
                    label: "Awaiting approval",
                    icon: "hourglass",
                    kind: StatKind::CountWhere {
                        field: "status",
                        value: "submitted",
                    },
                },
            ],
        },
        detail: DetailLayoutConfig {
            tabs: &[DetailTab {
                id: "details",
                label: "Details",
                icon: "info",
                content: TabContent::Fields(&[
                    "description",
                    "amount",
                    "category",
                    "status",
                    "spent_on",
                    "production_id",
                    "employee_id",
                    "vendor",
                    "billable",
                    "receipt",
                ]),
            }],
        },
        form: FormLayoutConfig {
            sections: &[FormSection {
                id: "expense",
                title: "Expense",
                description: Some("Attach a receipt for anything over $75"),
                fields: &[
                    "description",
                    "amount",
                    "category",
                    "spent_on",
                    "production_id",
                    "employee_id",
                    "vendor",
                    "billable",
                    "receipt",
                ],
            }],
            columns: 2,
        },
    },
    views: ViewsConfig {
        table: Some(TableView {
            columns: &["description", "amount", "category", "status", "spent_on", "production_id"],
            default_sort: Some(SortSpec {
                field: "spent_on",
                ascending: false,
            }),
        }),
        kanban: Some(KanbanView {
            group_by: "status",
            card_title: "description",
            card_subtitle: Some("amount"),
            color_map: &[],
        }),
        calendar: None,
        grid: None,
    },
    actions: &[
        ActionDef {
            id: "approve",
            label: "Approve",
            icon: Some("check"),
            scope: ActionScope::Row,
            handler: ActionHandler::Api {
                endpoint: "/api/expenses/{id}/approve",
                method: HttpMethod::Post,
            },
            confirm: None,
            destructive: false,
        },
        ActionDef {
            id: "reject",
            label: "Reject",
            icon: Some("x"),
            scope: ActionScope::Row,
            handler: ActionHandler::Api {
                endpoint: "/api/expenses/{id}/reject",
                method: HttpMethod::Post,
            },
            confirm: Some("Reject this expense?"),
            destructive: true,
        },
        ActionDef {
            id: "bulk-approve",
            label: "Approve selected",
            icon: Some("check-check"),
            scope: ActionScope::Bulk,
            handler: ActionHandler::Api {
                endpoint: "/api/expenses/bulk-approve",
                method: HttpMethod::Post,
            },
            confirm: Some("Approve all selected expenses?"),
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
            name: "employee",
            label: "Submitted by",
            kind: RelationKind::BelongsTo,
            target: "employees",
            foreign_key: "employee_id",
        },
    ],
    permissions: Permissions::ALL,
    subpages: &[Subpage {
        id: "billable",
        label: "Billable",
        filter: QueryFragment {
            field: "billable",
            op: FilterOp::Eq,
            value: FilterValue::Bool(true),
        },
    }],
};
