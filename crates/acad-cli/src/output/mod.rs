use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

pub mod table;

/// Columns shown first, in this order, when present. Others follow sorted.
const LEADING_COLUMNS: [&str; 7] = [
    "instructor_course_id",
    "course_id",
    "course_name",
    "instructor_id",
    "sks",
    "assigned_date",
    "created_at",
];

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(render_table(&serde_json::to_value(value)?)),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_table(value: &Value) -> String {
    match value {
        Value::Array(items) if items.is_empty() => String::from("(no rows)"),
        Value::Array(items) => {
            let headers = columns(items.iter().filter_map(Value::as_object));
            let header_refs: Vec<&str> = headers.iter().map(String::as_str).collect();
            let rows: Vec<Vec<String>> = items
                .iter()
                .map(|item| match item.as_object() {
                    Some(map) => headers
                        .iter()
                        .map(|h| map.get(h).map_or_else(|| String::from("-"), cell))
                        .collect(),
                    None => vec![cell(item)],
                })
                .collect();
            table::render(&header_refs, &rows)
        }
        Value::Object(map) => {
            let keys = columns(std::iter::once(map));
            let rows: Vec<Vec<String>> = keys
                .iter()
                .map(|key| vec![key.clone(), map.get(key).map_or_else(String::new, cell)])
                .collect();
            table::render(&["field", "value"], &rows)
        }
        scalar => table::render(&["value"], &[vec![cell(scalar)]]),
    }
}

fn columns<'a>(objects: impl Iterator<Item = &'a serde_json::Map<String, Value>>) -> Vec<String> {
    let mut rest = Vec::<String>::new();
    let mut seen_leading = [false; LEADING_COLUMNS.len()];
    for map in objects {
        for key in map.keys() {
            if let Some(pos) = LEADING_COLUMNS.iter().position(|c| c == key) {
                seen_leading[pos] = true;
            } else if !rest.contains(key) {
                rest.push(key.clone());
            }
        }
    }
    rest.sort();

    LEADING_COLUMNS
        .iter()
        .zip(seen_leading)
        .filter(|(_, seen)| *seen)
        .map(|(name, _)| (*name).to_string())
        .chain(rest)
        .collect()
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(v) => v.clone(),
        Value::Bool(_) | Value::Number(_) => value.to_string(),
        nested => serde_json::to_string(nested).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
