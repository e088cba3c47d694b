use crate::shared::schema::*;

const STAGE_OPTIONS: &[SelectOption] = &[
    SelectOption::colored("lead", "Lead", "neutral"),
    SelectOption::colored("qualified", "Qualified", "primary"),
    SelectOption::colored("proposal", "Proposal", "primary"),
    SelectOption::colored("negotiation", "Negotiation", "warning"),
    SelectOption::colored("won", "Won", "success"),
    SelectOption::colored("lost", "Lost", "error"),
];

fn subtitle(record: &dyn EntityRecord) -> Option<String> {
    let value = record.field_value("value")?.as_number()?;
    match record.field_value("probability").and_then(|v| v.as_number()) {
        Some(p) => Some(format!("{} at {}%", format_money(value), format_number(p))),
        None => Some(format_money(value)),
    }
}

pub static DEAL_SCHEMA: EntitySchema = EntitySchema {
    identity: EntityIdentity {
        name: "Deal",
        plural_name: "Deals",
        slug: "deals",
        icon: "briefcase",
        description: "Sales pipeline from first lead to signed contract",
        module: BusinessModule::Crm,
    },
    endpoint: "/api/deals",
    fields: &[
        FieldDef::new("title", "Title", FieldType::Text)
            .required()
            .sortable(),
        FieldDef::new("company_id", "Company", FieldType::Relation)
            .relation("companies")
            .required(),
        FieldDef::new("contact_id", "Contact", FieldType::Relation).relation("contacts"),
        FieldDef::new("stage", "Stage", FieldType::Select)
            .required()
            .options(STAGE_OPTIONS)
            .default_value(DefaultValue::Option("lead"))
            .sortable(),
        FieldDef::new("value", "Value", FieldType::Currency)
            .min(0.0)
            .sortable(),
        FieldDef::new("probability", "Probability", FieldType::Percent)
            .range(0.0, 100.0)
            .default_value(DefaultValue::Number(10.0)),
        FieldDef::new("close_date", "Expected close", FieldType::Date).sortable(),
        FieldDef::new("owner_id", "Owner", FieldType::Relation)
            .relation("employees")
            .hide_in_table(),
        FieldDef::new("description", "Description", FieldType::Textarea).hide_in_table(),
    ],
    display: DisplayConfig {
        title: DisplayProjection::Field("title"),
        subtitle: Some(DisplayProjection::Compute(subtitle)),
        badge: Some(DisplayProjection::Field("stage")),
        image: None,
    },
    search: SearchConfig {
        fields: &["title", "description", "stage"],
        placeholder: Some("Search deals…"),
    },
    filters: FiltersConfig {
        quick: &[
            QuickFilter {
                id: "won",
                label: "Won",
                field: "stage",
                value: "won",
            },
            QuickFilter {
                id: "negotiation",
                label: "In negotiation",
                field: "stage",
                value: "negotiation",
            },
        ],
        advanced: &["company_id", "owner_id", "close_date"],
    },
    layouts: LayoutsConfig {
        list: ListLayoutConfig {
            default_view: ViewType::Kanban,
            page_size: 25,
            stats: &[
                StatDef {
                    id: "open",
                    label: "Deals",
                    icon: "briefcase",
                    kind: StatKind::Count,
                },
                StatDef {
                    id: "pipeline",
                    label: "Pipeline value",
                    icon: "trending-up",
                    kind: StatKind::Sum { field: "value" },
                },
                StatDef {
                    id: "won",
                    label: "Won",
                    icon: "trophy",
                    kind: StatKind::CountWhere {
                        field: "stage",
                        value: "won",
                    },
                },
            ],
        },
        detail: DetailLayoutConfig {
            tabs: &[
                DetailTab {
                    id: "deal",
                    label: "Deal",
                    icon: "briefcase",
                    content: TabContent::Fields(&[
                        "title",
                        "company_id",
                        "contact_id",
                        "owner_id",
                        "stage",
                        "value",
                        "probability",
                        "close_date",
                    ]),
                },
                DetailTab {
                    id: "notes",
                    label: "Notes",
                    icon: "notebook",
                    content: TabContent::Fields(&["description"]),
                },
                DetailTab {
                    id: "timeline",
                    label: "Timeline",
                    icon: "git-commit",
                    content: TabContent::Custom,
                },
            ],
        },
        form: FormLayoutConfig {
            sections: &[
                FormSection {
                    id: "deal",
                    title: "Deal",
                    description: None,
                    fields: &["title", "company_id", "contact_id", "owner_id", "description"],
                },
                FormSection {
                    id: "forecast",
                    title: "Forecast",
                    description: Some("Used for the weighted pipeline on the dashboard"),
                    fields: &["stage", "value", "probability", "close_date"],
                },
            ],
            columns: 2,
        },
    },
    views: ViewsConfig {
        table: Some(TableView {
            columns: &["title", "company_id", "stage", "value", "probability", "close_date"],
            default_sort: Some(SortSpec {
                field: "value",
                ascending: false,
            }),
        }),
        kanban: Some(KanbanView {
            group_by: "stage",
            card_title: "title",
            card_subtitle: Some("value"),
            color_map: &[("won", "success"), ("lost", "error")],
        }),
        calendar: Some(CalendarView {
            start_field: "close_date",
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
            handler: ActionHandler::Navigate(PathSpec::Literal("/e/deals/{id}/edit")),
            confirm: None,
            destructive: false,
        },
        ActionDef {
            id: "win",
            label: "Mark won",
            icon: Some("trophy"),
            scope: ActionScope::Row,
            handler: ActionHandler::Api {
                endpoint: "/api/deals/{id}/win",
                method: HttpMethod::Post,
            },
            confirm: Some("Mark this deal as won?"),
            destructive: false,
        },
        ActionDef {
            id: "lose",
            label: "Mark lost",
            icon: Some("thumbs-down"),
            scope: ActionScope::Row,
            handler: ActionHandler::Api {
                endpoint: "/api/deals/{id}/lose",
                method: HttpMethod::Post,
            },
            confirm: Some("Mark this deal as lost?"),
            destructive: true,
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
            name: "contact",
            label: "Contact",
            kind: RelationKind::BelongsTo,
            target: "contacts",
            foreign_key: "contact_id",
        },
        Relationship {
            name: "owner",
            label: "Owner",
            kind: RelationKind::BelongsTo,
            target: "employees",
            foreign_key: "owner_id",
        },
    ],
    permissions: Permissions::ALL,
    subpages: &[
        Subpage {
            id: "open",
            label: "Open",
            filter: QueryFragment {
                field: "stage",
                op: FilterOp::Ne,
                value: FilterValue::Text("won"),
            },
        },
        Subpage {
            id: "closing-soon",
            label: "Closing soon",
            filter: QueryFragment {
                field: "close_date",
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
    fn pipeline_columns_follow_stage_order() {
        let records = vec![
            Record::new("d1").with("stage", FieldValue::text("won")),
            Record::new("d2").with("stage", FieldValue::text("lead")),
        ];
        let indices: Vec<usize> = (0..records.len()).collect();
        let columns = crate::shared::layout::list::group_kanban(&DEAL_SCHEMA, &records, &indices);
        let keys: Vec<_> = columns.iter().map(|c| c.value).collect();
        assert_eq!(keys.first(), Some(&Some("lead")));
        assert_eq!(keys.len(), STAGE_OPTIONS.len());
        let won = columns.iter().find(|c| c.value == Some("won")).unwrap();
        assert_eq!(won.indices, vec![0]);
        assert_eq!(won.color, Some("success"));
    }
}
