//! Reusable text input component

use dioxus::prelude::*;

/// Reusable input component with consistent styling.
///
/// Defaults to a text input; the add-book form also uses it for its
/// number fields via `r#type`/`min`/`max`. Constraints are native-only
/// (`required`, `min`, `max`) - nothing is validated in Rust.
#[component]
pub fn TextInput(
    value: String,
    on_input: EventHandler<String>,
    #[props(default = "text")] r#type: &'static str,
    #[props(default)] id: Option<&'static str>,
    #[props(default)] name: Option<&'static str>,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default)] required: bool,
    #[props(default)] min: Option<&'static str>,
    #[props(default)] max: Option<&'static str>,
) -> Element {
    let class = "w-full bg-gray-800/50 rounded-lg px-3 py-2 focus:outline-none focus:ring-1 focus:ring-indigo-500/50 text-gray-300 placeholder-gray-500";

    rsx! {
        input {
            r#type,
            class: "{class}",
            id,
            name,
            value: "{value}",
            placeholder,
            required,
            min,
            max,
            oninput: move |e| on_input.call(e.value()),
        }
    }
}
