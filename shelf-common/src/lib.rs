//! shelf-common - UI-free catalog state shared by the app and view crates

mod book;
mod catalog;

pub use book::{Book, BookDraft};
pub use catalog::Catalog;
