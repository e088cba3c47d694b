use crate::shared::schema::*;

const ROLE_OPTIONS: &[SelectOption] = &[
    SelectOption::new("client", "Client"),
    SelectOption::new("agent", "Agent"),
    SelectOption::new("vendor", "Vendor"),
    SelectOption::new("press", "Press"),
    SelectOption::new("other", "Other"),
];

fn subtitle(record: &dyn EntityRecord) -> Option<String> {
    let job = record
        .field_value("job_title")
        .and_then(|v| v.as_text().map(str::to_string))
        .filter(|s| !s.is_empty());
    let email = record
        .field_value("email")
        .and_then(|v| v.as_text().map(str::to_string))
        .filter(|s| !s.is_empty());
    match (job, email) {
        (Some(job), Some(email)) => Some(format!("{} · {}", job, email)),
        (Some(one), None) | (None, Some(one)) => Some(one),
        (None, None) => None,
    }
}

pub static CONTACT_SCHEMA: EntitySchema = EntitySchema {
    identity: EntityIdentity {
        name: "Contact",
        plural_name: "Contacts",
        slug: "contacts",
        icon: "contact",
        description: "People we work with outside the company",
        module: BusinessModule::Crm,
    },
    endpoint: "/api/contacts",
    fields: &[
        FieldDef::new("full_name", "Name", FieldType::Text)
            .required()
            .sortable(),
        FieldDef::new("email", "Email", FieldType::Email),
        FieldDef::new("phone", "Phone", FieldType::Phone),
        FieldDef::new("job_title", "Job title", FieldType::Text).hide_in_table(),
        FieldDef::new("company_id", "Company", FieldType::Relation)
            .relation("companies")
            .sortable(),
        FieldDef::new("role", "Role", FieldType::Select)
            .options(ROLE_OPTIONS)
            .default_value(DefaultValue::Option("client")),
        FieldDef::new("tags", "Tags", FieldType::Tags).hide_in_table(),
        FieldDef::new("last_contacted", "Last contacted", FieldType::DateTime).sortable(),
        FieldDef::new("newsletter", "Newsletter", FieldType::Switch)
            .default_value(DefaultValue::Bool(false))
            .hide_in_table(),
        FieldDef::new("avatar", "Photo", FieldType::Image).hide_in_table(),
        FieldDef::new("notes", "Notes", FieldType::RichText).hide_in_table(),
    ],
    display: DisplayConfig {
        title: DisplayProjection::Field("full_name"),
        subtitle: Some(DisplayProjection::Compute(subtitle)),
        badge: Some(DisplayProjection::Field("role")),
        image: Some(DisplayProjection::Field("avatar")),
    },
    search: SearchConfig {
        fields: &["full_name", "email", "phone", "tags"],
        placeholder: Some("Search name, email or phone…"),
    },
    filters: FiltersConfig {
        quick: &[
            QuickFilter {
                id: "clients",
                label: "Clients",
                field: "role",
                value: "client",
            },
            QuickFilter {
                id: "agents",
                label: "Agents",
                field: "role",
                value: "agent",
            },
        ],
        advanced: &["company_id", "tags", "newsletter"],
    },
    layouts: LayoutsConfig {
        list: ListLayoutConfig {
            default_view: ViewType::Table,
            page_size: 50,
            stats: &[
                StatDef {
                    id: "total",
                    label: "Contacts",
                    icon: "contact",
                    kind: StatKind::Count,
                },
                StatDef {
                    id: "clients",
                    label: "Clients",
                    icon: "handshake",
                    kind: StatKind::CountWhere {
                        field: "role",
                        value: "client",
                    },
                },
            ],
        },
        detail: DetailLayoutConfig {
            tabs: &[
                DetailTab {
                    id: "profile",
                    label: "Profile",
                    icon: "user",
                    content: TabContent::Fields(&[
                        "full_name",
                        "email",
                        "phone",
                        "job_title",
                        "company_id",
                        "role",
                        "tags",
                        "newsletter",
                    ]),
                },
                DetailTab {
                    id: "notes",
                    label: "Notes",
                    icon: "notebook",
                    content: TabContent::Fields(&["notes", "last_contacted"]),
                },
                DetailTab {
                    id: "deals",
                    label: "Deals",
                    icon: "briefcase",
                    content: TabContent::Related("deals"),
                },
            ],
        },
        form: FormLayoutConfig {
            sections: &[
                FormSection {
                    id: "contact",
                    title: "Contact",
                    description: None,
                    fields: &["full_name", "email", "phone", "job_title", "company_id", "avatar"],
                },
                FormSection {
                    id: "relationship",
                    title: "Relationship",
                    description: None,
                    fields: &["role", "tags", "last_contacted", "newsletter", "notes"],
                },
            ],
            columns: 2,
        },
    },
    views: ViewsConfig {
        table: Some(TableView {
            columns: &["full_name", "email", "phone", "company_id", "role", "last_contacted"],
            default_sort: Some(SortSpec {
                field: "full_name",
                ascending: true,
            }),
        }),
        kanban: None,
        calendar: None,
        grid: Some(GridView {
            title_field: "full_name",
            subtitle_field: Some("company_id"),
            image_field: Some("avatar"),
        }),
    },
    actions: &[
        ActionDef {
            id: "edit",
            label: "Edit",
            icon: Some("pencil"),
            scope: ActionScope::Row,
            handler: ActionHandler::Navigate(PathSpec::Literal("/e/contacts/{id}/edit")),
            confirm: None,
            destructive: false,
        },
        ActionDef {
            id: "log-call",
            label: "Log contact",
            icon: Some("phone-call"),
            scope: ActionScope::Row,
            handler: ActionHandler::Api {
                endpoint: "/api/contacts/{id}/touch",
                method: HttpMethod::Post,
            },
            confirm: None,
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
            id: "delete",
            label: "Delete",
            icon: Some("trash"),
            scope: ActionScope::Row,
            handler: ActionHandler::Api {
                endpoint: "/api/contacts/{id}",
                method: HttpMethod::Delete,
            },
            confirm: Some("Delete this contact?"),
            destructive: true,
        },
        ActionDef {
            id: "bulk-delete",
            label: "Delete selected",
            icon: Some("trash"),
            scope: ActionScope::Bulk,
            handler: ActionHandler::Api {
                endpoint: "/api/contacts/bulk-delete",
                method: HttpMethod::Post,
            },
            confirm: Some("Delete the selected contacts?"),
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
            name: "company",
            label: "Company",
            kind: RelationKind::BelongsTo,
            target: "companies",
            foreign_key: "company_id",
        },
        Relationship {
            name: "deals",
            label: "Deals",
            kind: RelationKind::HasMany,
            target: "deals",
            foreign_key: "contact_id",
        },
    ],
    permissions: Permissions::ALL,
    subpages: &[Subpage {
        id: "newsletter",
        label: "Newsletter",
        filter: QueryFragment {
            field: "newsletter",
            op: FilterOp::Eq,
            value: FilterValue::Bool(true),
        },
    }],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtitle_uses_whatever_is_present() {
        let both = Record::new("c1")
            .with("job_title", FieldValue::text("Booker"))
            .with("email", FieldValue::text("b@agency.test"));
        assert_eq!(
            CONTACT_SCHEMA.subtitle_of(&both).as_deref(),
            Some("Booker · b@agency.test")
        );

        let email_only = Record::new("c2").with("email", FieldValue::text("x@y.test"));
        assert_eq!(CONTACT_SCHEMA.subtitle_of(&email_only).as_deref(), Some("x@y.test"));

        assert_eq!(CONTACT_SCHEMA.subtitle_of(&Record::new("c3")), None);
    }
}
