//! Fixture catalog data
//!
//! Static seed records compiled into the binary. Loaded once at startup
//! and treated as read-only: the running catalog shrinks via removal but
//! the fixture itself never changes.

use serde::Deserialize;
use shelf_common::Book;
use std::sync::OnceLock;

/// Embedded fixture data (compiled into the binary)
const FIXTURE_JSON: &str = include_str!("../fixtures/books.json");

#[derive(Debug, Deserialize)]
struct FixtureFile {
    books: Vec<FixtureBook>,
}

#[derive(Debug, Deserialize)]
struct FixtureBook {
    isbn13: String,
    title: String,
    #[serde(default)]
    subtitle: String,
    price: String,
    #[serde(default)]
    image: Option<String>,
    url: String,
}

impl From<FixtureBook> for Book {
    fn from(record: FixtureBook) -> Self {
        Book {
            isbn13: record.isbn13,
            title: record.title,
            // The upstream records use "" for books without a subtitle
            subtitle: (!record.subtitle.is_empty()).then_some(record.subtitle),
            price: record.price,
            image: record.image,
            url: record.url,
        }
    }
}

static BOOKS: OnceLock<Vec<Book>> = OnceLock::new();

fn parse(json: &str) -> Vec<Book> {
    let fixture: FixtureFile =
        serde_json::from_str(json).expect("Failed to parse books fixture");
    fixture.books.into_iter().map(Book::from).collect()
}

/// The seed catalog, in fixture order.
pub fn books() -> Vec<Book> {
    BOOKS.get_or_init(|| parse(FIXTURE_JSON)).clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_embedded_fixture_parses() {
        let books = parse(FIXTURE_JSON);
        assert!(!books.is_empty());
    }

    #[test]
    fn test_isbn13_unique() {
        let books = parse(FIXTURE_JSON);
        let isbns: HashSet<&str> = books.iter().map(|b| b.isbn13.as_str()).collect();
        assert_eq!(isbns.len(), books.len());
    }

    #[test]
    fn test_records_complete() {
        for book in parse(FIXTURE_JSON) {
            assert!(!book.title.is_empty(), "{} has no title", book.isbn13);
            assert!(!book.price.is_empty(), "{} has no price", book.isbn13);
            assert!(!book.url.is_empty(), "{} has no url", book.isbn13);
        }
    }

    #[test]
    fn test_empty_subtitle_maps_to_none() {
        let books = parse(
            r#"{"books": [{"isbn13": "111", "title": "A", "subtitle": "", "price": "$1", "url": "https://example.com"}]}"#,
        );
        assert_eq!(books[0].subtitle, None);
        assert_eq!(books[0].image, None);
    }
}
