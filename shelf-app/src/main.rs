//! shelf - client-side book catalog browser
//!
//! Renders the embedded fixture as a grid of book cards with
//! client-local select/remove, plus a modal form for adding a book.
//! All shared state lives here; the view crates report intents back up
//! through callbacks and every mutation funnels through a named
//! `Catalog` method.

mod fixture;

use dioxus::prelude::*;
use shelf_common::{BookDraft, Catalog};
use shelf_ui::{AddBookModal, CatalogView};
use tracing::{debug, info, Level};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

/// Root app component - sole owner of the catalog, the selection, and
/// the modal flag
#[component]
pub fn App() -> Element {
    let mut catalog = use_signal(|| Catalog::new(fixture::books()));
    let mut modal_open = use_signal(|| false);

    let books = catalog.read().books().to_vec();
    let selected_isbn13 = catalog.read().selected_isbn13().map(str::to_string);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen flex flex-col bg-gray-900",
            header { class: "py-6 border-b border-gray-800",
                h1 { class: "text-3xl font-bold text-white text-center", "Book Catalog" }
            }
            main { class: "flex-grow flex flex-col",
                CatalogView {
                    books,
                    selected_isbn13,
                    on_select: move |isbn13: String| {
                        debug!(%isbn13, "toggle select");
                        catalog.write().toggle_select(&isbn13);
                    },
                    on_remove: move |isbn13: String| {
                        info!(%isbn13, "remove book");
                        catalog.write().remove(&isbn13);
                    },
                    on_add_click: move |_| modal_open.set(true),
                }
            }
            footer { class: "py-4 text-center text-gray-500 text-sm border-t border-gray-800",
                p { "© 2026 Book Catalog" }
            }
            // Rendered only while open so the draft resets on every close
            if modal_open() {
                AddBookModal {
                    on_close: move |_| modal_open.set(false),
                    // TODO: append the draft to the catalog once drafts carry an isbn13
                    on_submit: move |draft: BookDraft| {
                        info!(?draft, "new book submitted");
                        modal_open.set(false);
                    },
                }
            }
        }
    }
}

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}
