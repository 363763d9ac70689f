//! Normalization of raw volume JSON into flat records.
//!
//! Every field access here tolerates a missing or wrongly-typed value by falling
//! back to an empty default, so one malformed volume never stops the rest of the
//! page from being read.

use booketl::{BookRecord, EtlError};
use serde_json::Value;
use tracing::{debug, warn};

const ISBN_13: &str = "ISBN_13";
const LIST_SEPARATOR: &str = ", ";

/// Parses a volumes response body into records, one per item, in order.
///
/// A body without `items` (or with `items: null`) is a valid empty page.
pub fn parse_volumes(body: &str) -> Result<Vec<BookRecord>, EtlError> {
    let data: Value = serde_json::from_str(body).map_err(|e| EtlError::Parse(e.to_string()))?;
    if !data.is_object() {
        return Err(EtlError::Parse(
            "expected a JSON object at the top level".to_string(),
        ));
    }

    match data.get("items") {
        None | Some(Value::Null) => {
            debug!("Response has no items.");
            Ok(Vec::new())
        }
        Some(Value::Array(items)) => Ok(items.iter().map(normalize_volume).collect()),
        Some(other) => Err(EtlError::Parse(format!(
            "expected `items` to be an array, found {}",
            json_kind(other)
        ))),
    }
}

/// Flattens one volume item into a `BookRecord`. Never fails.
pub fn normalize_volume(item: &Value) -> BookRecord {
    if !item.is_object() {
        warn!("Volume item is a {}, not an object; using defaults.", json_kind(item));
    }
    let info = item.get("volumeInfo").unwrap_or(&Value::Null);

    let published_date = string_field(info, "publishedDate");
    let published_year = published_date.as_deref().and_then(leading_year);

    BookRecord {
        title: string_field(info, "title"),
        authors: joined_list(info, "authors"),
        publisher: string_field(info, "publisher"),
        published_date,
        published_year,
        description: string_field(info, "description"),
        page_count: info.get("pageCount").and_then(Value::as_i64),
        categories: joined_list(info, "categories"),
        language: string_field(info, "language"),
        isbn_13: first_isbn_13(info),
        info_link: string_field(info, "infoLink"),
    }
}

fn string_field(info: &Value, key: &str) -> Option<String> {
    info.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Joins the string entries of a list field; absent or empty lists give "".
fn joined_list(info: &Value, key: &str) -> String {
    info.get(key)
        .and_then(Value::as_array)
        .map(|values| {
            values
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(LIST_SEPARATOR)
        })
        .unwrap_or_default()
}

/// The identifier of the first `ISBN_13` entry; later matches are ignored.
fn first_isbn_13(info: &Value) -> Option<String> {
    info.get("industryIdentifiers")
        .and_then(Value::as_array)?
        .iter()
        .find(|entry| entry.get("type").and_then(Value::as_str) == Some(ISBN_13))
        .and_then(|entry| entry.get("identifier"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// The first four characters of a date such as "1986", "1986-05" or "1986-05-01".
fn leading_year(date: &str) -> Option<String> {
    let year: String = date.chars().take(4).collect();
    (year.chars().count() == 4).then_some(year)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
