use crate::shared::schema::*;

const PERIOD_OPTIONS: &[SelectOption] = &[
    SelectOption::new("q1", "Q1"),
    SelectOption::new("q2", "Q2"),
    SelectOption::new("q3", "Q3"),
    SelectOption::new("q4", "Q4"),
    SelectOption::new("annual", "Full year"),
];

const STATUS_OPTIONS: &[SelectOption] = &[
    SelectOption::colored("draft", "Draft", "neutral"),
    SelectOption::colored("approved", "Approved", "success"),
    SelectOption::colored("over", "Over budget", "error"),
    SelectOption::colored("closed", "Closed", "neutral"),
];

fn remaining(record: &dyn EntityRecord) -> Option<String> {
    let allocated = record.field_value("allocated")?.as_number()?;
    let spent = record
        .field_value("spent")
        .and_then(|v| v.as_number())
        .unwrap_or(0.0);
    let left = allocated - spent;
    if left < 0.0 {
        Some(format!("{} over", format_money(-left)))
    } else {
        Some(format!("{} left", format_money(left)))
    }
}

pub static BUDGET_SCHEMA: EntitySchema = EntitySchema {
    identity: EntityIdentity {
        name: "Budget",
        plural_name: "Budgets",
        slug: "budgets",
        icon: "piggy-bank",
        description: "Allocated versus actual spend per production and department",
        module: BusinessModule::Finance,
    },
    endpoint: "/api/budgets",
    fields: &[
        FieldDef::new("name", "Name", FieldType::Text)
            .required()
            .sortable(),
        FieldDef::new("production_id", "Production", FieldType::Relation).relation("productions"),
        FieldDef::new("department_id", "Department", FieldType::Relation).relation("departments"),
        FieldDef::new("period", "Period", FieldType::Select)
            .required()
            .options(PERIOD_OPTIONS)
            .default_value(DefaultValue::Option("annual")),
        FieldDef::new("status", "Status", FieldType::Select)
            .options(STATUS_OPTIONS)
            .default_value(DefaultValue::Option("draft"))
            .sortable(),
        FieldDef::new("allocated", "Allocated", FieldType::Currency)
            .required()
            .min(0.0)
            .sortable(),
        FieldDef::new("spent", "Spent", FieldType::Currency)
            .min(0.0)
            .sortable()
            .hide_in_form(),
        FieldDef::new("utilisation", "Used", FieldType::Percent)
            .range(0.0, 1000.0)
            .hide_in_form(),
        FieldDef::new("notes", "Notes", FieldType::Textarea).hide_in_table(),
    ],
    display: DisplayConfig {
        title: DisplayProjection::Field("name"),
        subtitle: Some(DisplayProjection::Compute(remaining)),
        badge: Some(DisplayProjection::Field("status")),
        image: None,
    },
    search: SearchConfig {
        fields: &["name", "notes"],
        placeholder: Some("Search budgets…"),
    },
    filters: FiltersConfig {
        quick: &[QuickFilter {
            id: "over",
            label: "Over budget",
            field: "status",
            value: "over",
        }],
        advanced: &["production_id", "department_id", "period"],
    },
    layouts: LayoutsConfig {
        list: ListLayoutConfig {
            default_view: ViewType::Table,
            page_size: 25,
            stats: &[
                StatDef {
                    id: "allocated",
                    label: "Allocated",
                    icon: "wallet",
                    kind: StatKind::Sum { field: "allocated" },
                },
                StatDef {
                    id: "spent",
                    label: "Spent",
                    icon: "trending-down",
                    kind: StatKind::Sum { field: "spent" },
                },
                StatDef {
                    id: "over",
                    label: "Over budget",
                    icon: "alert-octagon",
                    kind: StatKind::CountWhere {
                        field: "status",
                        value: "over",
                    },
                },
            ],
        },
        detail: DetailLayoutConfig {
            tabs: &[
                DetailTab {
                    id: "summary",
                    label: "Summary",
                    icon: "pie-chart",
                    content: TabContent::Fields(&[
                        "name",
                        "production_id",
                        "department_id",
                        "period",
                        "status",
                        "allocated",
                        "spent",
                        "utilisation",
                    ]),
                },
                DetailTab {
                    id: "notes",
                    label: "Notes",
                    icon: "sticky-note",
                    content: TabContent::Fields(&["notes"]),
                },
            ],
        },
        form: FormLayoutConfig {
            sections: &[FormSection {
                id: "budget",
                title: "Budget",
                description: Some("Spend is tallied from approved expenses"),
                fields: &[
                    "name",
                    "production_id",
                    "department_id",
                    "period",
                    "status",
                    "allocated",
                    "notes",
                ],
            }],
            columns: 2,
        },
    },
    views: ViewsConfig {
        table: Some(TableView {
            columns: &["name", "period", "status", "allocated", "spent", "utilisation"],
            default_sort: Some(SortSpec {
                field: "allocated",
                ascending: false,
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
            handler: ActionHandler::Navigate(PathSpec::Literal("/e/budgets/{id}/edit")),
            confirm: None,
            destructive: false,
        },
        ActionDef {
            id: "approve",
            label: "Approve",
            icon: Some("stamp"),
            scope: ActionScope::Row,
            handler: ActionHandler::Api {
                endpoint: "/api/budgets/{id}/approve",
                method: HttpMethod::Post,
            },
            confirm: Some("Approve this budget?"),
            destructive: false,
        },
        ActionDef {
            id: "close",
            label: "Close",
            icon: Some("lock"),
            scope: ActionScope::Row,
            handler: ActionHandler::Api {
                endpoint: "/api/budgets/{id}/close",
                method: HttpMethod::Post,
            },
            confirm: Some("Close this budget? No further spend can be booked."),
            destructive: true,
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
            name: "department",
            label: "Department",
            kind: RelationKind::BelongsTo,
            target: "departments",
            foreign_key: "department_id",
        },
    ],
    permissions: Permissions::ALL,
    subpages: &[],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtitle_reports_overspend() {
        let record = Record::new("b1")
            .with("allocated", FieldValue::Number(1000.0))
            .with("spent", FieldValue::Number(1200.0));
        let subtitle = BUDGET_SCHEMA.subtitle_of(&record).unwrap();
        assert!(subtitle.ends_with(" over"));
        assert!(subtitle.contains(&format_money(200.0)));
    }

    #[test]
    fn subtitle_treats_missing_spend_as_zero() {
        let record = Record::new("b2").with("allocated", FieldValue::Number(500.0));
        assert_eq!(
            BUDGET_SCHEMA.subtitle_of(&record),
            Some(format!("{} left", format_money(500.0)))
        );
    }
}
