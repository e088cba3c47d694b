use crate::shared::schema::*;

const KIND_OPTIONS: &[SelectOption] = &[
    SelectOption::new("arena", "Arena"),
    SelectOption::new("theatre", "Theatre"),
    SelectOption::new("club", "Club"),
    SelectOption::new("outdoor", "Outdoor"),
    SelectOption::new("studio", "Studio"),
];

fn subtitle(record: &dyn EntityRecord) -> Option<String> {
    let city = record.field_value("city")?.as_text()?.to_string();
    match record.field_value("country").and_then(|v| v.as_text().map(str::to_string)) {
        Some(country) if !country.is_empty() => Some(format!("{}, {}", city, country)),
        _ => Some(city),
    }
}

pub static VENUE_SCHEMA: EntitySchema = EntitySchema {
    identity: EntityIdentity {
        name: "Venue",
        plural_name: "Venues",
        slug: "venues",
        icon: "map-pin",
        description: "Halls, clubs and outdoor sites we book for events and shoots",
        module: BusinessModule::Events,
    },
    endpoint: "/api/venues",
    fields: &[
        FieldDef::new("name", "Name", FieldType::Text)
            .required()
            .sortable(),
        FieldDef::new("kind", "Kind", FieldType::Select).options(KIND_OPTIONS),
        FieldDef::new("address", "Address", FieldType::Text).hide_in_table(),
        FieldDef::new("city", "City", FieldType::Text)
            .required()
            .sortable(),
        FieldDef::new("country", "Country", FieldType::Text),
        FieldDef::new("capacity", "Capacity", FieldType::Number)
            .min(0.0)
            .sortable(),
        FieldDef::new("hire_rate", "Hire rate / day", FieldType::Currency).min(0.0),
        FieldDef::new("rating", "Rating", FieldType::Rating).range(0.0, 5.0),
        FieldDef::new("contact_email", "Booking email", FieldType::Email).hide_in_table(),
        FieldDef::new("contact_phone", "Booking phone", FieldType::Phone).hide_in_table(),
        FieldDef::new("accessible", "Step-free access", FieldType::Switch)
            .default_value(DefaultValue::Bool(false))
            .hide_in_table(),
        FieldDef::new("photo", "Photo", FieldType::Image).hide_in_table(),
    ],
    display: DisplayConfig {
        title: DisplayProjection::Field("name"),
        subtitle: Some(DisplayProjection::Compute(subtitle)),
        badge: Some(DisplayProjection::Field("kind")),
        image: Some(DisplayProjection::Field("photo")),
    },
    search: SearchConfig {
        fields: &["name", "city", "country"],
        placeholder: Some("Search venues or cities…"),
    },
    filters: FiltersConfig {
        quick: &[QuickFilter {
            id: "outdoor",
            label: "Outdoor",
            field: "kind",
            value: "outdoor",
        }],
        advanced: &["city", "capacity", "accessible"],
    },
    layouts: LayoutsConfig {
        list: ListLayoutConfig {
            default_view: ViewType::Grid,
            page_size: 24,
            stats: &[
                StatDef {
                    id: "total",
                    label: "Venues",
                    icon: "map-pin",
                    kind: StatKind::Count,
                },
                StatDef {
                    id: "capacity",
                    label: "Total capacity",
                    icon: "users",
                    kind: StatKind::Sum { field: "capacity" },
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
                        "kind",
                        "address",
                        "city",
                        "country",
                        "capacity",
                        "hire_rate",
                        "rating",
                        "accessible",
                    ]),
                },
                DetailTab {
                    id: "contact",
                    label: "Booking contact",
                    icon: "phone",
                    content: TabContent::Fields(&["contact_email", "contact_phone"]),
                },
                DetailTab {
                    id: "events",
                    label: "Events",
                    icon: "ticket",
                    content: TabContent::Related("events"),
                },
            ],
        },
        form: FormLayoutConfig {
            sections: &[
                FormSection {
                    id: "venue",
                    title: "Venue",
                    description: None,
                    fields: &["name", "kind", "capacity", "hire_rate", "rating", "accessible", "photo"],
                },
                FormSection {
                    id: "location",
                    title: "Location",
                    description: None,
                    fields: &["address", "city", "country"],
                },
                FormSection {
                    id: "contact",
                    title: "Booking contact",
                    description: None,
                    fields: &["contact_email", "contact_phone"],
                },
            ],
            columns: 2,
        },
    },
    views: ViewsConfig {
        table: Some(TableView {
            columns: &["name", "kind", "city", "country", "capacity", "rating"],
            default_sort: Some(SortSpec {
                field: "name",
                ascending: true,
            }),
        }),
        kanban: None,
        calendar: None,
        grid: Some(GridView {
            title_field: "name",
            subtitle_field: Some("city"),
            image_field: Some("photo"),
        }),
    },
    actions: &[
        ActionDef {
            id: "edit",
            label: "Edit",
            icon: Some("pencil"),
            scope: ActionScope::Row,
            handler: ActionHandler::Navigate(PathSpec::Literal("/e/venues/{id}/edit")),
            confirm: None,
            destructive: false,
        },
        ActionDef {
            id: "map",
            label: "Open map",
            icon: Some("map"),
            scope: ActionScope::Row,
            handler: ActionHandler::External {
                url: "https://www.openstreetmap.org/search?query=venue%20{id}",
            },
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
                endpoint: "/api/venues/{id}",
                method: HttpMethod::Delete,
            },
            confirm: Some("Delete this venue?"),
            destructive: true,
        },
    ],
    relationships: &[Relationship {
        name: "events",
        label: "Events",
        kind: RelationKind::HasMany,
        target: "events",
        foreign_key: "venue_id",
    }],
    permissions: Permissions::ALL,
    subpages: &[],
};
