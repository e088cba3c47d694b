//! REST access for any entity. Every call coerces the JSON reply through
//! the schema so pages only ever see typed `Record`s.

use contracts::shared::schema::{EntitySchema, Record};
use serde_json::Value;

use crate::shared::api_utils::{get_json, post_json, put_json, with_query};

fn item_path(schema: &EntitySchema, id: &str) -> String {
    format!("{}/{}", schema.endpoint, urlencoding::encode(id))
}

pub async fn fetch_list(schema: &'static EntitySchema) -> Result<Vec<Record>, String> {
    let raw: Value = get_json(schema.endpoint).await?;
    Record::list_from_json(schema, &raw).map_err(|e| e.to_string())
}

/// List pre-filtered by the server, e.g. `?company_id=...`
pub async fn fetch_filtered(
    schema: &'static EntitySchema,
    params: &[(String, String)],
) -> Result<Vec<Record>, String> {
    let raw: Value = get_json(&with_query(schema.endpoint, params)).await?;
    Record::list_from_json(schema, &raw).map_err(|e| e.to_string())
}

pub async fn fetch_by_id(schema: &'static EntitySchema, id: &str) -> Result<Record, String> {
    let raw: Value = get_json(&item_path(schema, id)).await?;
    Record::from_json(schema, &raw).map_err(|e| e.to_string())
}

/// Create a record; returns the stored record as echoed by the server
pub async fn create(schema: &'static EntitySchema, record: &Record) -> Result<Record, String> {
    let mut body = record.clone();
    body.id.clear();
    let raw: Value = post_json(schema.endpoint, &body.to_json(schema)).await?;
    Record::from_json(schema, &raw).map_err(|e| e.to_string())
}

pub async fn update(schema: &'static EntitySchema, record: &Record) -> Result<Record, String> {
    let raw: Value = put_json(&item_path(schema, &record.id), &record.to_json(schema)).await?;
    Record::from_json(schema, &raw).map_err(|e| e.to_string())
}
