//! Add-book modal - transient overlay holding the draft record
//!
//! The parent renders this component only while the modal is open, so
//! the draft signal is dropped on close and every open starts from an
//! empty draft. Closes on backdrop click, the header x, Cancel, or
//! submit; only the backdrop's inner wrapper stops propagation so
//! content clicks never close the modal.

use crate::components::icons::XIcon;
use crate::components::text_input::TextInput;
use crate::components::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;
use shelf_common::BookDraft;

/// Modal form for adding a new book
///
/// `on_submit` receives the finished draft; the catalog is not mutated
/// here. Field constraints are native-only: everything `required`, the
/// publication year bounded to a plausible range, the page count
/// positive.
#[component]
pub fn AddBookModal(on_close: EventHandler<()>, on_submit: EventHandler<BookDraft>) -> Element {
    let mut draft = use_signal(BookDraft::default);

    rsx! {
        div {
            class: "fixed inset-0 bg-black/50 flex items-center justify-center z-50",
            "data-testid": "modal-backdrop",
            onclick: move |_| on_close.call(()),

            div {
                class: "bg-gray-800 rounded-lg p-6 max-w-md w-full mx-4",
                onclick: move |evt| evt.stop_propagation(),

                div { class: "flex items-center justify-between mb-4",
                    h2 { class: "text-xl font-bold text-white", "Add New Book" }
                    button {
                        class: "text-gray-400 hover:text-white transition-colors",
                        aria_label: "Close",
                        onclick: move |_| on_close.call(()),
                        XIcon { class: "w-5 h-5" }
                    }
                }

                form {
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        on_submit.call(draft());
                    },

                    DraftField {
                        id: "title",
                        label: "Title:",
                        value: draft().title,
                        on_input: move |v| draft.write().title = v,
                    }
                    DraftField {
                        id: "author",
                        label: "Author:",
                        value: draft().author,
                        on_input: move |v| draft.write().author = v,
                    }
                    DraftField {
                        id: "publisher",
                        label: "Publisher:",
                        value: draft().publisher,
                        on_input: move |v| draft.write().publisher = v,
                    }
                    DraftField {
                        id: "publication-year",
                        label: "Publication Year:",
                        value: draft().publication_year,
                        r#type: "number",
                        min: "1000",
                        max: "2026",
                        on_input: move |v| draft.write().publication_year = v,
                    }
                    DraftField {
                        id: "language",
                        label: "Language:",
                        value: draft().language,
                        on_input: move |v| draft.write().language = v,
                    }
                    DraftField {
                        id: "pages",
                        label: "Pages:",
                        value: draft().pages,
                        r#type: "number",
                        min: "1",
                        on_input: move |v| draft.write().pages = v,
                    }

                    div { class: "flex gap-3 justify-end mt-6",
                        Button {
                            variant: ButtonVariant::Secondary,
                            size: ButtonSize::Medium,
                            r#type: "button",
                            onclick: move |_| on_close.call(()),
                            "Cancel"
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            size: ButtonSize::Medium,
                            r#type: "submit",
                            onclick: move |_| {},
                            "Add Book"
                        }
                    }
                }
            }
        }
    }
}

/// One labelled field of the draft form
#[component]
fn DraftField(
    id: &'static str,
    label: &'static str,
    value: String,
    #[props(default = "text")] r#type: &'static str,
    #[props(default)] min: Option<&'static str>,
    #[props(default)] max: Option<&'static str>,
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "mb-4",
            label {
                class: "block text-sm text-gray-300 mb-1",
                r#for: id,
                "{label}"
            }
            TextInput {
                id,
                name: id,
                r#type,
                value,
                required: true,
                min,
                max,
                on_input,
            }
        }
    }
}
