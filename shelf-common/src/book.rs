/// A single book record in the catalog.
///
/// `isbn13` is the sole key used for selection and removal and is unique
/// across the catalog at all times. `price` is a pre-formatted display
/// string (e.g. "$28.99"), not a numeric amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub isbn13: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub price: String,
    /// Cover image URL, if the record has one
    pub image: Option<String>,
    /// External "learn more" URL
    pub url: String,
}

/// In-progress field values for the add-book form.
///
/// All six fields are free-text strings, including the numeric ones -
/// the form relies on native input constraints, not on typed parsing.
/// The draft lives only while the modal is open and is never partially
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub publication_year: String,
    pub language: String,
    pub pages: String,
}

impl BookDraft {
    /// Whether every field is still untouched.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.author.is_empty()
            && self.publisher.is_empty()
            && self.publication_year.is_empty()
            && self.language.is_empty()
            && self.pages.is_empty()
    }
}
