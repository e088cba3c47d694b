//! Business entities, one static schema per entity

pub mod a001_production;
pub mod a002_task;
pub mod a003_equipment;
pub mod a004_event;
pub mod a005_venue;
pub mod a006_talent_booking;
pub mod a007_invoice;
pub mod a008_expense;
pub mod a009_budget;
pub mod a010_employee;
pub mod a011_department;
pub mod a012_time_off;
pub mod a013_contact;
pub mod a014_company;
pub mod a015_deal;
pub mod a016_vehicle;

use crate::shared::schema::EntitySchema;

/// Every shipped schema in navigation order
pub static ALL_SCHEMAS: &[&EntitySchema] = &[
    &a001_production::schema::PRODUCTION_SCHEMA,
    &a002_task::schema::TASK_SCHEMA,
    &a003_equipment::schema::EQUIPMENT_SCHEMA,
    &a004_event::schema::EVENT_SCHEMA,
    &a005_venue::schema::VENUE_SCHEMA,
    &a006_talent_booking::schema::TALENT_BOOKING_SCHEMA,
    &a007_invoice::schema::INVOICE_SCHEMA,
    &a008_expense::schema::EXPENSE_SCHEMA,
    &a009_budget::schema::BUDGET_SCHEMA,
    &a010_employee::schema::EMPLOYEE_SCHEMA,
    &a011_department::schema::DEPARTMENT_SCHEMA,
    &a012_time_off::schema::TIME_OFF_SCHEMA,
    &a013_contact::schema::CONTACT_SCHEMA,
    &a014_company::schema::COMPANY_SCHEMA,
    &a015_deal::schema::DEAL_SCHEMA,
    &a016_vehicle::schema::VEHICLE_SCHEMA,
];
