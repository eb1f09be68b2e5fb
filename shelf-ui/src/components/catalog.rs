//! Catalog view component - pure rendering, no data fetching

use crate::components::book_card::BookCard;
use crate::components::icons::{ImageIcon, PlusIcon};
use crate::components::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;
use shelf_common::Book;

/// Catalog view component - pure rendering, no data fetching
///
/// Renders the "Add Book" tile followed by one card per book, keyed by
/// isbn13, in catalog order. State lives in the app crate; this view
/// only reports intents back up.
#[component]
pub fn CatalogView(
    books: Vec<Book>,
    selected_isbn13: Option<String>,
    // Intent callbacks, each called with the book's isbn13
    on_select: EventHandler<String>,
    on_remove: EventHandler<String>,
    // Opens the add-book modal
    on_add_click: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "flex-grow overflow-y-auto flex flex-col py-10",
            div { class: "container mx-auto flex flex-col",
                if books.is_empty() {
                    EmptyCatalog { on_add_click }
                } else {
                    div { class: "grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6",
                        AddBookTile { on_add_click }
                        for book in books {
                            BookCard {
                                key: "{book.isbn13}",
                                is_selected: selected_isbn13.as_deref() == Some(book.isbn13.as_str()),
                                book,
                                on_select,
                                on_remove,
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Dashed tile at the head of the grid that opens the add-book modal
#[component]
fn AddBookTile(on_add_click: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "border-2 border-dashed border-gray-600 hover:border-indigo-500 rounded-lg flex flex-col items-center justify-center gap-2 text-gray-400 hover:text-indigo-400 cursor-pointer transition-colors min-h-[200px]",
            "data-testid": "add-book-tile",
            onclick: move |_| on_add_click.call(()),
            PlusIcon { class: "w-8 h-8" }
            span { class: "font-semibold", "Add Book" }
        }
    }
}

/// Shown when every book has been removed
#[component]
fn EmptyCatalog(on_add_click: EventHandler<()>) -> Element {
    rsx! {
        div { class: "text-center py-12",
            div { class: "text-gray-400 mb-4",
                ImageIcon { class: "w-16 h-16 mx-auto" }
            }
            h2 { class: "text-2xl font-bold text-gray-300 mb-2", "No books in your catalog" }
            p { class: "text-gray-500 mb-4", "Add your first book to get started!" }
            Button {
                variant: ButtonVariant::Primary,
                size: ButtonSize::Medium,
                onclick: move |_| on_add_click.call(()),
                PlusIcon {}
                span { "Add Book" }
            }
        }
    }
}
