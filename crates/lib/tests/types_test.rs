//! # Core Type Tests
//!
//! Covers the bind values a record produces for the insert statement and the
//! rendering of the search query.

use booketl::{BookQuery, BookRecord};
use turso::Value as TursoValue;

fn full_record() -> BookRecord {
    BookRecord {
        title: Some("It".to_string()),
        authors: "Stephen King".to_string(),
        publisher: Some("Viking".to_string()),
        published_date: Some("1986-09-15".to_string()),
        published_year: Some("1986".to_string()),
        description: Some("A story about fear.".to_string()),
        page_count: Some(1138),
        categories: "Fiction, Horror".to_string(),
        language: Some("en".to_string()),
        isbn_13: Some("9780670813025".to_string()),
        info_link: Some("http://books.google.com/books?id=abc".to_string()),
    }
}

fn text(value: &TursoValue) -> Option<&str> {
    match value {
        TursoValue::Text(s) => Some(s.as_str()),
        _ => None,
    }
}

#[test]
fn test_insert_params_follow_column_order() {
    let params = full_record().insert_params();

    assert_eq!(params.len(), 11);
    assert_eq!(text(&params[0]), Some("It"));
    assert_eq!(text(&params[1]), Some("Stephen King"));
    assert_eq!(text(&params[2]), Some("Viking"));
    assert_eq!(text(&params[3]), Some("1986-09-15"));
    assert_eq!(text(&params[4]), Some("A story about fear."));
    assert!(matches!(params[5], TursoValue::Integer(1138)));
    assert_eq!(text(&params[6]), Some("Fiction, Horror"));
    assert_eq!(text(&params[7]), Some("en"));
    assert_eq!(text(&params[8]), Some("9780670813025"));
    assert_eq!(
        text(&params[9]),
        Some("http://books.google.com/books?id=abc")
    );
    assert_eq!(text(&params[10]), Some("1986"));
}

#[test]
fn test_insert_params_bind_absent_fields_as_null() {
    let params = BookRecord::default().insert_params();

    assert_eq!(params.len(), 11);
    // The joined list columns are empty strings, never NULL.
    assert_eq!(text(&params[1]), Some(""));
    assert_eq!(text(&params[6]), Some(""));
    for index in [0, 2, 3, 4, 5, 7, 8, 9, 10] {
        assert!(
            matches!(params[index], TursoValue::Null),
            "column {index} should be NULL"
        );
    }
}

#[test]
fn test_book_record_serializes_with_source_field_names() {
    let value = serde_json::to_value(full_record()).unwrap();

    assert_eq!(value["publishedDate"], "1986-09-15");
    assert_eq!(value["publishedYear"], "1986");
    assert_eq!(value["pageCount"], 1138);
    assert_eq!(value["infoLink"], "http://books.google.com/books?id=abc");
    assert_eq!(value["isbn_13"], "9780670813025");
}

#[test]
fn test_book_query_renders_author_filter() {
    let query = BookQuery::default();

    assert_eq!(query.q(), "inauthor:\"Stephen King\"");
    assert_eq!(query.page_size(), 40);
    assert_eq!(query.print_type, "books");
}

#[test]
fn test_book_query_page_size_is_clamped() {
    let mut query = BookQuery::new("Octavia E. Butler");
    query.max_results = 500;
    assert_eq!(query.page_size(), 40);

    query.max_results = 0;
    assert_eq!(query.page_size(), 1);

    query.max_results = 12;
    assert_eq!(query.page_size(), 12);
}
