use crate::shared::schema::*;

const EMPLOYMENT_OPTIONS: &[SelectOption] = &[
    SelectOption::new("full_time", "Full-time"),
    SelectOption::new("part_time", "Part-time"),
    SelectOption::new("contractor", "Contractor"),
    SelectOption::new("freelance", "Freelance"),
];

const STATUS_OPTIONS: &[SelectOption] = &[
    SelectOption::colored("active", "Active", "success"),
    SelectOption::colored("on_leave", "On leave", "warning"),
    SelectOption::colored("left", "Left", "neutral"),
];

const SKILL_OPTIONS: &[SelectOption] = &[
    SelectOption::new("camera", "Camera"),
    SelectOption::new("editing", "Editing"),
    SelectOption::new("sound", "Sound"),
    SelectOption::new("lighting", "Lighting"),
    SelectOption::new("production", "Production"),
    SelectOption::new("finance", "Finance"),
];

fn subtitle(record: &dyn EntityRecord) -> Option<String> {
    let title = record.field_value("job_title")?.as_text()?.to_string();
    match record
        .field_value("employment")
        .and_then(|v| v.as_text().map(str::to_string))
    {
        Some(kind) if kind == "contractor" || kind == "freelance" => {
            Some(format!("{} (external)", title))
        }
        _ => Some(title),
    }
}

pub static EMPLOYEE_SCHEMA: EntitySchema = EntitySchema {
    identity: EntityIdentity {
        name: "Employee",
        plural_name: "Employees",
        slug: "employees",
        icon: "user",
        description: "Staff and regular crew, with contracts and skills",
        module: BusinessModule::Hr,
    },
    endpoint: "/api/employees",
    fields: &[
        FieldDef::new("full_name", "Name", FieldType::Text)
            .required()
            .sortable(),
        FieldDef::new("email", "Email", FieldType::Email).required(),
        FieldDef::new("phone", "Phone", FieldType::Phone).hide_in_table(),
        FieldDef::new("job_title", "Job title", FieldType::Text).sortable(),
        FieldDef::new("department_id", "Department", FieldType::Relation).relation("departments"),
        FieldDef::new("employment", "Employment", FieldType::Select)
            .options(EMPLOYMENT_OPTIONS)
            .default_value(DefaultValue::Option("full_time")),
        FieldDef::new("status", "Status", FieldType::Select)
            .options(STATUS_OPTIONS)
            .default_value(DefaultValue::Option("active"))
            .sortable(),
        FieldDef::new("start_date", "Start date", FieldType::Date)
            .default_value(DefaultValue::Today)
            .sortable(),
        FieldDef::new("salary", "Salary", FieldType::Currency)
            .min(0.0)
            .hide_in_table(),
        FieldDef::new("skills", "Skills", FieldType::MultiSelect)
            .options(SKILL_OPTIONS)
            .hide_in_table(),
        FieldDef::new("avatar", "Photo", FieldType::Image).hide_in_table(),
        FieldDef::new("bio", "Bio", FieldType::RichText).hide_in_table(),
    ],
    display: DisplayConfig {
        title: DisplayProjection::Field("full_name"),
        subtitle: Some(DisplayProjection::Compute(subtitle)),
        badge: Some(DisplayProjection::Field("status")),
        image: Some(DisplayProjection::Field("avatar")),
    },
    search: SearchConfig {
        fields: &["full_name", "email", "job_title"],
        placeholder: Some("Search people…"),
    },
    filters: FiltersConfig {
        quick: &[
            QuickFilter {
                id: "on-leave",
                label: "On leave",
                field: "status",
                value: "on_leave",
            },
            QuickFilter {
                id: "contractors",
                label: "Contractors",
                field: "employment",
                value: "contractor",
            },
        ],
        advanced: &["department_id", "start_date", "skills"],
    },
    layouts: LayoutsConfig {
        list: ListLayoutConfig {
            default_view: ViewType::Grid,
            page_size: 24,
            stats: &[
                StatDef {
                    id: "headcount",
                    label: "Headcount",
                    icon: "users",
                    kind: StatKind::Count,
                },
                StatDef {
                    id: "active",
                    label: "Active",
                    icon: "user-check",
                    kind: StatKind::CountWhere {
                        field: "status",
                        value: "active",
                    },
                },
                StatDef {
                    id: "payroll",
                    label: "Annual payroll",
                    icon: "banknote",
                    kind: StatKind::Sum { field: "salary" },
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
                        "department_id",
                        "skills",
                        "bio",
                    ]),
                },
                DetailTab {
                    id: "contract",
                    label: "Contract",
                    icon: "file-signature",
                    content: TabContent::Fields(&["employment", "status", "start_date", "salary"]),
                },
                DetailTab {
                    id: "time-off",
                    label: "Time off",
                    icon: "palmtree",
                    content: TabContent::Related("time_off"),
                },
            ],
        },
        form: FormLayoutConfig {
            sections: &[
                FormSection {
                    id: "person",
                    title: "Person",
                    description: None,
                    fields: &["full_name", "email", "phone", "avatar", "bio"],
                },
                FormSection {
                    id: "role",
                    title: "Role",
                    description: None,
                    fields: &["job_title", "department_id", "skills"],
                },
                FormSection {
                    id: "contract",
                    title: "Contract",
                    description: Some("Salary is only visible to HR and finance"),
                    fields: &["employment", "status", "start_date", "salary"],
                },
            ],
            columns: 2,
        },
    },
    views: ViewsConfig {
        table: Some(TableView {
            columns: &["full_name", "job_title", "department_id", "employment", "status", "start_date"],
            default_sort: Some(SortSpec {
                field: "full_name",
                ascending: true,
            }),
        }),
        kanban: Some(KanbanView {
            group_by: "employment",
            card_title: "full_name",
            card_subtitle: Some("job_title"),
            color_map: &[("contractor", "warning"), ("freelance", "warning")],
        }),
        calendar: None,
        grid: Some(GridView {
            title_field: "full_name",
            subtitle_field: Some("job_title"),
            image_field: Some("avatar"),
        }),
    },
    actions: &[
        ActionDef {
            id: "edit",
            label: "Edit",
            icon: Some("pencil"),
            scope: ActionScope::Row,
            handler: ActionHandler::Navigate(PathSpec::Literal("/e/employees/{id}/edit")),
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
            id: "offboard",
            label: "Offboard",
            icon: Some("user-minus"),
            scope: ActionScope::Row,
            handler: ActionHandler::Api {
                endpoint: "/api/employees/{id}/offboard",
                method: HttpMethod::Post,
            },
            confirm: Some("Start offboarding? Access will be revoked on their last day."),
            destructive: true,
        },
        ActionDef {
            id: "directory",
            label: "Export directory",
            icon: Some("download"),
            scope: ActionScope::Global,
            handler: ActionHandler::Function { name: "export_csv" },
            confirm: None,
            destructive: false,
        },
    ],
    relationships: &[
        Relationship {
            name: "department",
            label: "Department",
            kind: RelationKind::BelongsTo,
            target: "departments",
            foreign_key: "department_id",
        },
        Relationship {
            name: "time_off",
            label: "Time off",
            kind: RelationKind::HasMany,
            target: "time-off",
            foreign_key: "employee_id",
        },
    ],
    permissions: Permissions::ALL,
    subpages: &[Subpage {
        id: "current",
        label: "Current staff",
        filter: QueryFragment {
            field: "status",
            op: FilterOp::Ne,
            value: FilterValue::Text("left"),
        },
    }],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtitle_marks_external_staff() {
        let record = Record::new("e1")
            .with("job_title", FieldValue::text("Gaffer"))
            .with("employment", FieldValue::text("freelance"));
        assert_eq!(
            EMPLOYEE_SCHEMA.subtitle_of(&record).as_deref(),
            Some("Gaffer (external)")
        );

        let staff = Record::new("e2")
            .with("job_title", FieldValue::text("Producer"))
            .with("employment", FieldValue::text("full_time"));
        assert_eq!(EMPLOYEE_SCHEMA.subtitle_of(&staff).as_deref(), Some("Producer"));
    }
}
