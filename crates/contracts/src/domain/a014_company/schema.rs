use crate::shared::schema::*;

const INDUSTRY_OPTIONS: &[SelectOption] = &[
    SelectOption::new("broadcast", "Broadcast"),
    SelectOption::new("streaming", "Streaming"),
    SelectOption::new("advertising", "Advertising"),
    SelectOption::new("music", "Music"),
    SelectOption::new("live", "Live events"),
    SelectOption::new("other", "Other"),
];

const TIER_OPTIONS: &[SelectOption] = &[
    SelectOption::colored("key", "Key account", "success"),
    SelectOption::colored("regular", "Regular", "primary"),
    SelectOption::colored("prospect", "Prospect", "neutral"),
];

pub static COMPANY_SCHEMA: EntitySchema = EntitySchema {
    identity: EntityIdentity {
        name: "Company",
        plural_name: "Companies",
        slug: "companies",
        icon: "building-2",
        description: "Clients, partners and suppliers",
        module: BusinessModule::Crm,
    },
    endpoint: "/api/companies",
    fields: &[
        FieldDef::new("name", "Name", FieldType::Text)
            .required()
            .sortable(),
        FieldDef::new("industry", "Industry", FieldType::Select)
            .options(INDUSTRY_OPTIONS)
            .sortable(),
        FieldDef::new("tier", "Tier", FieldType::Select)
            .options(TIER_OPTIONS)
            .default_value(DefaultValue::Option("prospect"))
            .sortable(),
        FieldDef::new("website", "Website", FieldType::Url),
        FieldDef::new("phone", "Phone", FieldType::Phone).hide_in_table(),
        FieldDef::new("city", "City", FieldType::Text),
        FieldDef::new("annual_revenue", "Annual revenue", FieldType::Currency)
            .min(0.0)
            .sortable(),
        FieldDef::new("logo", "Logo", FieldType::Image).hide_in_table(),
        FieldDef::new("notes", "Notes", FieldType::Textarea).hide_in_table(),
    ],
    display: DisplayConfig {
        title: DisplayProjection::Field("name"),
        subtitle: Some(DisplayProjection::Field("industry")),
        badge: Some(DisplayProjection::Field("tier")),
        image: Some(DisplayProjection::Field("logo")),
    },
    search: SearchConfig {
        fields: &["name", "city", "website"],
        placeholder: Some("Search companies…"),
    },
    filters: FiltersConfig {
        quick: &[
            QuickFilter {
                id: "key",
                label: "Key accounts",
                field: "tier",
                value: "key",
            },
            QuickFilter {
                id: "prospects",
                label: "Prospects",
                field: "tier",
                value: "prospect",
            },
        ],
        advanced: &["industry", "city"],
    },
    layouts: LayoutsConfig {
        list: ListLayoutConfig {
            default_view: ViewType::Table,
            page_size: 25,
            stats: &[
                StatDef {
                    id: "total",
                    label: "Companies",
                    icon: "building-2",
                    kind: StatKind::Count,
                },
                StatDef {
                    id: "key",
                    label: "Key accounts",
                    icon: "star",
                    kind: StatKind::CountWhere {
                        field: "tier",
                        value: "key",
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
                        "industry",
                        "tier",
                        "website",
                        "phone",
                        "city",
                        "annual_revenue",
                        "notes",
                    ]),
                },
                DetailTab {
                    id: "contacts",
                    label: "Contacts",
                    icon: "contact",
                    content: TabContent::Related("contacts"),
                },
                DetailTab {
                    id: "deals",
                    label: "Deals",
                    icon: "briefcase",
                    content: TabContent::Related("deals"),
                },
                DetailTab {
                    id: "invoices",
                    label: "Invoices",
                    icon: "receipt",
                    content: TabContent::Related("invoices"),
                },
            ],
        },
        form: FormLayoutConfig {
            sections: &[
                FormSection {
                    id: "company",
                    title: "Company",
                    description: None,
                    fields: &["name", "industry", "tier", "logo"],
                },
                FormSection {
                    id: "contact",
                    title: "Contact details",
                    description: None,
                    fields: &["website", "phone", "city"],
                },
                FormSection {
                    id: "account",
                    title: "Account",
                    description: None,
                    fields: &["annual_revenue", "notes"],
                },
            ],
            columns: 2,
        },
    },
    views: ViewsConfig {
        table: Some(TableView {
            columns: &["name", "industry", "tier", "city", "annual_revenue"],
            default_sort: Some(SortSpec {
                field: "name",
                ascending: true,
            }),
        }),
        kanban: Some(KanbanView {
            group_by: "tier",
            card_title: "name",
            card_subtitle: Some("industry"),
            color_map: &[],
        }),
        calendar: None,
        grid: Some(GridView {
            title_field: "name",
            subtitle_field: Some("city"),
            image_field: Some("logo"),
        }),
    },
    actions: &[
        ActionDef {
            id: "edit",
            label: "Edit",
            icon: Some("pencil"),
            scope: ActionScope::Row,
            handler: ActionHandler::Navigate(PathSpec::Literal("/e/companies/{id}/edit")),
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
            id: "delete",
            label: "Delete",
            icon: Some("trash"),
            scope: ActionScope::Row,
            handler: ActionHandler::Api {
                endpoint: "/api/companies/{id}",
                method: HttpMethod::Delete,
            },
            confirm: Some("Delete this company and unlink its contacts?"),
            destructive: true,
        },
    ],
    relationships: &[
        Relationship {
            name: "contacts",
            label: "Contacts",
            kind: RelationKind::HasMany,
            target: "contacts",
            foreign_key: "company_id",
        },
        Relationship {
            name: "deals",
            label: "Deals",
            kind: RelationKind::HasMany,
            target: "deals",
            foreign_key: "company_id",
        },
        Relationship {
            name: "invoices",
            label: "Invoices",
            kind: RelationKind::HasMany,
            target: "invoices",
            foreign_key: "company_id",
        },
    ],
    permissions: Permissions::ALL,
    subpages: &[],
};
