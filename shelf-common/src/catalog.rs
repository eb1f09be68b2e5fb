use crate::Book;

/// Pure data structure for the book catalog and its selection.
///
/// Holds the ordered book list plus the at-most-one selected isbn13,
/// without any I/O. Every mutation goes through a named method so the
/// no-dangling-selection invariant holds after each call: a non-empty
/// selection always references an isbn13 currently in the catalog.
pub struct Catalog {
    books: Vec<Book>,
    selected_isbn13: Option<String>,
}

impl Catalog {
    /// Seed the catalog from the fixture. Happens once at startup.
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books,
            selected_isbn13: None,
        }
    }

    /// Toggle selection: selecting the already-selected book clears the
    /// selection, anything else (including from another selection) moves
    /// it to `isbn13`.
    pub fn toggle_select(&mut self, isbn13: &str) {
        if self.selected_isbn13.as_deref() == Some(isbn13) {
            self.selected_isbn13 = None;
        } else {
            self.selected_isbn13 = Some(isbn13.to_string());
        }
    }

    /// Remove the book with the given isbn13, preserving the order of the
    /// rest. Silent no-op when absent. Clears the selection in the same
    /// step if the removed book was the selected one.
    pub fn remove(&mut self, isbn13: &str) {
        self.books.retain(|book| book.isbn13 != isbn13);
        if self.selected_isbn13.as_deref() == Some(isbn13) {
            self.selected_isbn13 = None;
        }
    }

    /// Books in catalog order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn selected_isbn13(&self) -> Option<&str> {
        self.selected_isbn13.as_deref()
    }

    pub fn is_selected(&self, isbn13: &str) -> bool {
        self.selected_isbn13.as_deref() == Some(isbn13)
    }

    /// Number of books in the catalog.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the catalog has no books left.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(isbn13: &str, title: &str) -> Book {
        Book {
            isbn13: isbn13.into(),
            title: title.into(),
            subtitle: None,
            price: "$0.00".into(),
            image: None,
            url: format!("https://itbook.store/books/{isbn13}"),
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            book("111", "A"),
            book("222", "B"),
            book("333", "C"),
        ])
    }

    #[test]
    fn test_new_preserves_fixture_order() {
        let c = catalog();
        let titles: Vec<&str> = c.books().iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
        assert_eq!(c.selected_isbn13(), None);
    }

    #[test]
    fn test_toggle_select_sets_selection() {
        let mut c = catalog();
        c.toggle_select("111");
        assert_eq!(c.selected_isbn13(), Some("111"));
        assert!(c.is_selected("111"));
        assert!(!c.is_selected("222"));
    }

    #[test]
    fn test_toggle_select_twice_clears() {
        let mut c = catalog();
        c.toggle_select("111");
        c.toggle_select("111");
        assert_eq!(c.selected_isbn13(), None);
    }

    #[test]
    fn test_single_selection() {
        let mut c = catalog();
        c.toggle_select("111");
        c.toggle_select("222");
        assert_eq!(c.selected_isbn13(), Some("222"));
    }

    #[test]
    fn test_remove_preserves_order_of_rest() {
        let mut c = catalog();
        c.remove("222");
        let isbns: Vec<&str> = c.books().iter().map(|b| b.isbn13.as_str()).collect();
        assert_eq!(isbns, vec!["111", "333"]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut c = catalog();
        c.remove("999");
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn test_remove_selected_clears_selection() {
        let mut c = catalog();
        c.toggle_select("111");
        c.remove("111");
        assert_eq!(c.selected_isbn13(), None);
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn test_remove_unselected_keeps_selection() {
        let mut c = catalog();
        c.toggle_select("111");
        c.remove("222");
        assert_eq!(c.selected_isbn13(), Some("111"));
    }

    #[test]
    fn test_remove_down_to_empty() {
        let mut c = catalog();
        c.remove("111");
        c.remove("222");
        c.remove("333");
        assert!(c.is_empty());
    }

    #[test]
    fn test_select_then_remove_scenario() {
        let mut c = Catalog::new(vec![book("111", "A"), book("222", "B")]);
        c.toggle_select("111");
        assert_eq!(c.selected_isbn13(), Some("111"));
        c.remove("111");
        let isbns: Vec<&str> = c.books().iter().map(|b| b.isbn13.as_str()).collect();
        assert_eq!(isbns, vec!["222"]);
        assert_eq!(c.selected_isbn13(), None);
    }

    #[test]
    fn test_draft_default_is_empty() {
        let draft = crate::BookDraft::default();
        assert!(draft.is_empty());
    }

    #[test]
    fn test_draft_edit_touches_one_field() {
        let mut draft = crate::BookDraft::default();
        draft.title = "Rust in Action".into();
        assert!(!draft.is_empty());
        assert_eq!(draft.author, "");
        assert_eq!(draft.pages, "");
    }
}
