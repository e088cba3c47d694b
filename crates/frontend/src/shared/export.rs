//! CSV export of entity records, downloaded through a temporary blob link

use contracts::shared::schema::{EntityRecord, EntitySchema};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

const SEPARATOR: char = ',';

/// CSV text for `records` using the schema's table columns.
/// Starts with a UTF-8 BOM so spreadsheet apps detect the encoding.
pub fn records_to_csv<T: EntityRecord>(schema: &EntitySchema, records: &[T]) -> String {
    let columns = schema.table_columns();
    let mut csv = String::from('\u{FEFF}');

    let header: Vec<String> = columns.iter().map(|f| escape_csv_cell(f.label)).collect();
    csv.push_str(&header.join(&SEPARATOR.to_string()));
    csv.push('\n');

    for record in records {
        let row: Vec<String> = columns
            .iter()
            .map(|f| escape_csv_cell(&record.display_value(f)))
            .collect();
        csv.push_str(&row.join(&SEPARATOR.to_string()));
        csv.push('\n');
    }
    csv
}

/// Export records to `{filename}` and start the browser download
pub fn export_records<T: EntityRecord>(
    schema: &EntitySchema,
    records: &[T],
    filename: &str,
) -> Result<(), String> {
    if records.is_empty() {
        return Err("Nothing to export".to_string());
    }
    let blob = create_csv_blob(&records_to_csv(schema, records))?;
    download_blob(&blob, filename)
}

fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(SEPARATOR) || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_task::schema::TASK_SCHEMA;
    use contracts::shared::schema::{FieldValue, Record};

    #[test]
    fn cells_with_separators_are_quoted() {
        assert_eq!(escape_csv_cell("plain"), "plain");
        assert_eq!(escape_csv_cell("a,b"), "\"a,b\"");
        assert_eq!(escape_csv_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn csv_has_header_and_one_line_per_record() {
        let records = vec![
            Record::new("t1").with("title", FieldValue::text("Book crew, catering")),
            Record::new("t2").with("title", FieldValue::text("Scout")),
        ];
        let csv = records_to_csv(&TASK_SCHEMA, &records);
        let lines: Vec<&str> = csv.trim_end().lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with('\u{FEFF}'));
        assert!(lines[1].starts_with("\"Book crew, catering\""));
    }
}
