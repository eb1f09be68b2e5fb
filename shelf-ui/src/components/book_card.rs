//! Book card component - pure view with callbacks

use crate::components::icons::{ExternalLinkIcon, ImageIcon, TrashIcon};
use dioxus::prelude::*;
use shelf_common::Book;

/// Individual book card component
///
/// Pure view component - displays one book with its cover, title, and
/// price. Clicking the card body toggles selection via `on_select`; the
/// remove button and the "Learn more" link stop propagation so they
/// never double as a select.
#[component]
pub fn BookCard(
    book: Book,
    is_selected: bool,
    // Called with the book's isbn13 when the card body is clicked
    on_select: EventHandler<String>,
    // Called with the book's isbn13 when the remove button is clicked
    on_remove: EventHandler<String>,
) -> Element {
    let isbn13 = book.isbn13.clone();
    let title = book.title.clone();
    let cover_url = book.image.clone();

    // Selection is purely a style distinction
    let card_class = if is_selected {
        "bg-gray-800 rounded-lg overflow-hidden shadow-lg ring-2 ring-indigo-500 cursor-pointer"
    } else {
        "bg-gray-800 rounded-lg overflow-hidden shadow-lg hover:shadow-xl transition-shadow duration-300 cursor-pointer"
    };

    rsx! {
        div {
            class: "{card_class}",
            "data-testid": "book-card",
            onclick: {
                let isbn13 = isbn13.clone();
                move |_| on_select.call(isbn13.clone())
            },
            div { class: "aspect-square bg-gray-700 flex items-center justify-center",
                if let Some(url) = &cover_url {
                    img {
                        src: "{url}",
                        alt: "Cover for {title}",
                        class: "w-full h-full object-cover",
                    }
                } else {
                    ImageIcon { class: "w-12 h-12 text-gray-500" }
                }
            }
            div { class: "p-4",
                h3 {
                    class: "font-bold text-white text-lg mb-1 truncate",
                    title: "{title}",
                    "{title}"
                }
                if let Some(subtitle) = &book.subtitle {
                    p {
                        class: "text-gray-400 text-sm truncate",
                        title: "{subtitle}",
                        "{subtitle}"
                    }
                }
                p { class: "text-indigo-400 font-semibold mt-1", "{book.price}" }
                div { class: "flex items-center justify-between mt-3",
                    a {
                        class: "inline-flex items-center gap-1 text-sm text-gray-400 hover:text-white transition-colors",
                        href: "{book.url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        // Following the link must not toggle selection
                        onclick: move |evt| evt.stop_propagation(),
                        ExternalLinkIcon {}
                        span { "Learn more" }
                    }
                    button {
                        class: "inline-flex items-center gap-1 text-sm text-red-400 hover:text-red-300 transition-colors",
                        aria_label: "Remove {title}",
                        onclick: {
                            let isbn13 = isbn13.clone();
                            move |evt: MouseEvent| {
                                evt.stop_propagation();
                                on_remove.call(isbn13.clone());
                            }
                        },
                        TrashIcon {}
                        span { "Remove" }
                    }
                }
            }
        }
    }
}
