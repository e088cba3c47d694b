use crate::shared::schema::*;

const STATUS_OPTIONS: &[SelectOption] = &[
    SelectOption::colored("draft", "Draft", "neutral"),
    SelectOption::colored("sent", "Sent", "primary"),
    SelectOption::colored("paid", "Paid", "success"),
    SelectOption::colored("overdue", "Overdue", "error"),
    SelectOption::colored("void", "Void", "neutral"),
];

const CURRENCY_OPTIONS: &[SelectOption] = &[
    SelectOption::new("USD", "US dollar"),
    SelectOption::new("EUR", "Euro"),
    SelectOption::new("GBP", "Pound sterling"),
];

fn subtitle(record: &dyn EntityRecord) -> Option<String> {
    let total = record.field_value("total")?.as_number()?;
    let due = record
        .field_value("due_date")
        .and_then(|v| v.as_date())
        .map(|d| format!(" · due {}", d.format("%b %-d")))
        .unwrap_or_default();
    Some(format!("{}{}", format_money(total), due))
}

fn download_path(record: &dyn EntityRecord) -> String {
    format!("/api/invoices/{}/pdf", record.record_id())
}

pub static INVOICE_SCHEMA: EntitySchema = EntitySchema {
    identity: EntityIdentity {
        name: "Invoice",
        plural_name: "Invoices",
        slug: "invoices",
        icon: "receipt",
        description: "Client billing for productions and events",
        module: BusinessModule::Finance,
    },
    endpoint: "/api/invoices",
    fields: &[
        FieldDef::new("number", "Number", FieldType::Text)
            .required()
            .max_length(32)
            .placeholder("INV-0001")
            .sortable()
            .width(120),
        FieldDef::new("company_id", "Client", FieldType::Relation)
            .relation("companies")
            .required(),
        FieldDef::new("status", "Status", FieldType::Select)
            .required()
            .options(STATUS_OPTIONS)
            .default_value(DefaultValue::Option("draft"))
            .sortable(),
        FieldDef::new("issue_date", "Issued", FieldType::Date)
            .required()
            .default_value(DefaultValue::Today)
            .sortable(),
        FieldDef::new("due_date", "Due", FieldType::Date).sortable(),
        FieldDef::new("currency", "Currency", FieldType::Select)
            .options(CURRENCY_OPTIONS)
            .default_value(DefaultValue::Option("USD"))
            .hide_in_table(),
        FieldDef::new("subtotal", "Subtotal", FieldType::Currency)
            .min(0.0)
            .hide_in_table(),
        FieldDef::new("tax_rate", "Tax rate", FieldType::Percent)
            .range(0.0, 100.0)
            .default_value(DefaultValue::Number(20.0))
            .hide_in_table(),
        FieldDef::new("total", "Total", FieldType::Currency)
            .required()
            .min(0.0)
            .sortable(),
        FieldDef::new("line_items", "Line items", FieldType::Json)
            .hide_in_table()
            .help("Array of { description, quantity, unit_price }"),
        FieldDef::new("notes", "Notes", FieldType::Textarea).hide_in_table(),
    ],
    display: DisplayConfig {
        title: DisplayProjection::Field("number"),
        subtitle: Some(DisplayProjection::Compute(subtitle)),
        badge: Some(DisplayProjection::Field("status")),
        image: None,
    },
    search: SearchConfig {
        fields: &["number", "status", "notes"],
        placeholder: Some("Search by invoice number…"),
    },
    filters: FiltersConfig {
        quick: &[
            QuickFilter {
                id: "overdue",
                label: "Overdue",
                field: "status",
                value: "overdue",
            },
            QuickFilter {
                id: "unpaid",
                label: "Sent",
                field: "status",
                value: "sent",
            },
        ],
        advanced: &["company_id", "issue_date", "due_date", "currency"],
    },
    layouts: LayoutsConfig {
        list: ListLayoutConfig {
            default_view: ViewType::Table,
            page_size: 50,
            stats: &[
                StatDef {
                    id: "total",
                    label: "Invoices",
                    icon: "receipt",
                    kind: StatKind::Count,
                },
                StatDef {
                    id: "billed",
                    label: "Billed",
                    icon: "banknote",
                    kind: StatKind::Sum { field: "total" },
                },
                StatDef {
                    id: "overdue",
                    label: "Overdue",
                    icon: "alert-triangle",
                    kind: StatKind::CountWhere {
                        field: "status",
                        value: "overdue",
                    },
                },
            ],
        },
        detail: DetailLayoutConfig {
            tabs: &[
                DetailTab {
                    id: "summary",
                    label: "Summary",
                    icon: "file-text",
                    content: TabContent::Fields(&[
                        "number",
                        "company_id",
                        "status",
                        "issue_date",
                        "due_date",
                        "currency",
                        "subtotal",
                        "tax_rate",
                        "total",
                    ]),
                },
                DetailTab {
                    id: "lines",
                    label: "Line items",
                    icon: "list",
                    content: TabContent::Fields(&["line_items", "notes"]),
                },
                DetailTab {
                    id: "history",
                    label: "History",
                    icon: "history",
                    content: TabContent::Custom,
                },
            ],
        },
        form: FormLayoutConfig {
            sections: &[
                FormSection {
                    id: "header",
                    title: "Invoice",
                    description: None,
                    fields: &["number", "company_id", "status", "issue_date", "due_date"],
                },
                FormSection {
                    id: "amounts",
                    title: "Amounts",
                    description: Some("Total is what the client is billed, tax included"),
                    fields: &["currency", "subtotal", "tax_rate", "total"],
                },
                FormSection {
                    id: "lines",
                    title: "Line items",
                    description: None,
                    fields: &["line_items", "notes"],
                },
            ],
            columns: 2,
        },
    },
    views: ViewsConfig {
        table: Some(TableView {
            columns: &["number", "company_id", "status", "issue_date", "due_date", "total"],
            default_sort: Some(SortSpec {
                field: "issue_date",
                ascending: false,
            }),
        }),
        kanban: Some(KanbanView {
            group_by: "status",
            card_title: "number",
            card_subtitle: Some("total"),
            color_map: &[],
        }),
        calendar: Some(CalendarView {
            start_field: "due_date",
            end_field: None,
            title_field: "number",
        }),
        grid: None,
    },
    actions: &[
        ActionDef {
            id: "edit",
            label: "Edit",
            icon: Some("pencil"),
            scope: ActionScope::Row,
            handler: ActionHandler::Navigate(PathSpec::Literal("/e/invoices/{id}/edit")),
            confirm: None,
            destructive: false,
        },
        ActionDef {
            id: "send",
            label: "Send to client",
            icon: Some("send"),
            scope: ActionScope::Row,
            handler: ActionHandler::Api {
                endpoint: "/api/invoices/{id}/send",
                method: HttpMethod::Post,
            },
            confirm: Some("Email this invoice to the client?"),
            destructive: false,
        },
        ActionDef {
            id: "mark-paid",
            label: "Mark paid",
            icon: Some("check-circle"),
            scope: ActionScope::Row,
            handler: ActionHandler::Api {
                endpoint: "/api/invoices/{id}",
                method: HttpMethod::Patch,
            },
            confirm: None,
            destructive: false,
        },
        ActionDef {
            id: "download",
            label: "Download PDF",
            icon: Some("file-down"),
            scope: ActionScope::Row,
            handler: ActionHandler::Navigate(PathSpec::Computed(download_path)),
            confirm: None,
            destructive: false,
        },
        ActionDef {
            id: "void",
            label: "Void",
            icon: Some("ban"),
            scope: ActionScope::Row,
            handler: ActionHandler::Api {
                endpoint: "/api/invoices/{id}/void",
                method: HttpMethod::Post,
            },
            confirm: Some("Void this invoice? This cannot be undone."),
            destructive: true,
        },
        ActionDef {
            id: "print",
            label: "Print selected",
            icon: Some("printer"),
            scope: ActionScope::Bulk,
            handler: ActionHandler::Function { name: "print" },
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
    relationships: &[Relationship {
        name: "client",
        label: "Client",
        kind: RelationKind::BelongsTo,
        target: "companies",
        foreign_key: "company_id",
    }],
    permissions: Permissions {
        create: true,
        read: true,
        update: true,
        delete: false,
    },
    subpages: &[
        Subpage {
            id: "outstanding",
            label: "Outstanding",
            filter: QueryFragment {
                field: "status",
                op: FilterOp::Eq,
                value: FilterValue::Text("sent"),
            },
        },
        Subpage {
            id: "paid",
            label: "Paid",
            filter: QueryFragment {
                field: "status",
                op: FilterOp::Eq,
                value: FilterValue::Text("paid"),
            },
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn subtitle_combines_total_and_due_date() {
        let record = Record::new("inv-1")
            .with("total", FieldValue::Number(1250.5))
            .with(
                "due_date",
                FieldValue::Date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()),
            );
        let subtitle = INVOICE_SCHEMA.subtitle_of(&record).unwrap();
        assert!(subtitle.ends_with(" · due Jun 1"), "{}", subtitle);
        assert!(subtitle.starts_with(&format_money(1250.5)));
    }

    #[test]
    fn invoices_cannot_be_deleted() {
        assert!(!INVOICE_SCHEMA.permissions.delete);
        assert!(INVOICE_SCHEMA.permissions.create);
    }
}
