use crate::shared::schema::*;

const KIND_OPTIONS: &[SelectOption] = &[
    SelectOption::colored("vacation", "Vacation", "primary"),
    SelectOption::colored("sick", "Sick leave", "warning"),
    SelectOption::colored("parental", "Parental leave", "success"),
    SelectOption::colored("unpaid", "Unpaid", "neutral"),
];

const STATUS_OPTIONS: &[SelectOption] = &[
    SelectOption::colored("requested", "Requested", "primary"),
    SelectOption::colored("approved", "Approved", "success"),
    SelectOption::colored("declined", "Declined", "error"),
];

fn title(record: &dyn EntityRecord) -> Option<String> {
    let start = record.field_value("starts_on")?.as_date()?;
    let end = record.field_value("ends_on").and_then(|v| v.as_date());
    match end {
        Some(end) if end != start => Some(format!(
            "{} – {}",
            start.format("%b %-d"),
            end.format("%b %-d, %Y")
        )),
        _ => Some(start.format("%b %-d, %Y").to_string()),
    }
}

pub static TIME_OFF_SCHEMA: EntitySchema = EntitySchema {
    identity: EntityIdentity {
        name: "Time off",
        plural_name: "Time off",
        slug: "time-off",
        icon: "palmtree",
        description: "Leave requests and approvals",
        module: BusinessModule::Hr,
    },
    endpoint: "/api/time-off",
    fields: &[
        FieldDef::new("employee_id", "Employee", FieldType::Relation)
            .relation("employees")
            .required(),
        FieldDef::new("kind", "Type", FieldType::Select)
            .required()
            .options(KIND_OPTIONS)
            .default_value(DefaultValue::Option("vacation")),
        FieldDef::new("starts_on", "From", FieldType::Date)
            .required()
            .sortable(),
        FieldDef::new("ends_on", "To", FieldType::Date)
            .required()
            .sortable(),
        FieldDef::new("days", "Days", FieldType::Number)
            .range(0.5, 365.0)
            .hide_in_form(),
        FieldDef::new("status", "Status", FieldType::Select)
            .options(STATUS_OPTIONS)
            .default_value(DefaultValue::Option("requested"))
            .sortable(),
        FieldDef::new("reason", "Reason", FieldType::Textarea).hide_in_table(),
    ],
    display: DisplayConfig {
        title: DisplayProjection::Compute(title),
        subtitle: Some(DisplayProjection::Field("kind")),
        badge: Some(DisplayProjection::Field("status")),
        image: None,
    },
    search: SearchConfig {
        fields: &["kind", "status", "reason"],
        placeholder: None,
    },
    filters: FiltersConfig {
        quick: &[QuickFilter {
            id: "pending",
            label: "Pending",
            field: "status",
            value: "requested",
        }],
        advanced: &["employee_id", "kind"],
    },
    layouts: LayoutsConfig {
        list: ListLayoutConfig {
            default_view: ViewType::Calendar,
            page_size: 50,
            stats: &[
                StatDef {
                    id: "requests",
                    label: "Requests",
                    icon: "inbox",
                    kind: StatKind::Count,
                },
                StatDef {
                    id: "days",
                    label: "Days booked",
                    icon: "calendar-days",
                    kind: StatKind::Sum { field: "days" },
                },
                StatDef {
                    id: "pending",
                    label: "Pending",
                    icon: "hourglass",
                    kind: StatKind::CountWhere {
                        field: "status",
                        value: "requested",
                    },
                },
            ],
        },
        detail: DetailLayoutConfig {
            tabs: &[DetailTab {
                id: "request",
                label: "Request",
                icon: "info",
                content: TabContent::Fields(&[
                    "employee_id",
                    "kind",
                    "starts_on",
                    "ends_on",
                    "days",
                    "status",
                    "reason",
                ]),
            }],
        },
        form: FormLayoutConfig {
            sections: &[FormSection {
                id: "request",
                title: "Request",
                description: Some("Days are counted from the dates, excluding weekends"),
                fields: &["employee_id", "kind", "starts_on", "ends_on", "reason"],
            }],
            columns: 2,
        },
    },
    views: ViewsConfig {
        table: Some(TableView {
            columns: &["employee_id", "kind", "starts_on", "ends_on", "days", "status"],
            default_sort: Some(SortSpec {
                field: "starts_on",
                ascending: false,
            }),
        }),
        kanban: Some(KanbanView {
            group_by: "status",
            card_title: "employee_id",
            card_subtitle: Some("starts_on"),
            color_map: &[],
        }),
        calendar: Some(CalendarView {
            start_field: "starts_on",
            end_field: Some("ends_on"),
            title_field: "employee_id",
        }),
        grid: None,
    },
    actions: &[
        ActionDef {
            id: "approve",
            label: "Approve",
            icon: Some("check"),
            scope: ActionScope::Row,
            handler: ActionHandler::Api {
                endpoint: "/api/time-off/{id}/approve",
                method: HttpMethod::Post,
            },
            confirm: None,
            destructive: false,
        },
        ActionDef {
            id: "decline",
            label: "Decline",
            icon: Some("x"),
            scope: ActionScope::Row,
            handler: ActionHandler::Api {
                endpoint: "/api/time-off/{id}/decline",
                method: HttpMethod::Post,
            },
            confirm: Some("Decline this request?"),
            destructive: true,
        },
        ActionDef {
            id: "bulk-approve",
            label: "Approve selected",
            icon: Some("check-check"),
            scope: ActionScope::Bulk,
            handler: ActionHandler::Api {
                endpoint: "/api/time-off/bulk-approve",
                method: HttpMethod::Post,
            },
            confirm: None,
            destructive: false,
        },
    ],
    relationships: &[Relationship {
        name: "employee",
        label: "Employee",
        kind: RelationKind::BelongsTo,
        target: "employees",
        foreign_key: "employee_id",
    }],
    permissions: Permissions {
        create: true,
        read: true,
        update: true,
        delete: false,
    },
    subpages: &[Subpage {
        id: "pending",
        label: "Pending approval",
        filter: QueryFragment {
            field: "status",
            op: FilterOp::Eq,
            value: FilterValue::Text("requested"),
        },
    }],
};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(m: u32, d: u32) -> FieldValue {
        FieldValue::Date(NaiveDate::from_ymd_opt(2024, m, d).unwrap())
    }

    #[test]
    fn title_shows_date_range() {
        let record = Record::new("t1")
            .with("starts_on", date(7, 1))
            .with("ends_on", date(7, 12));
        assert_eq!(TIME_OFF_SCHEMA.title_of(&record), "Jul 1 – Jul 12, 2024");
    }

    #[test]
    fn single_day_title_has_no_range() {
        let record = Record::new("t2")
            .with("starts_on", date(3, 4))
            .with("ends_on", date(3, 4));
        assert_eq!(TIME_OFF_SCHEMA.title_of(&record), "Mar 4, 2024");
    }
}
