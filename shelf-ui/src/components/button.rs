//! Reusable button component

use dioxus::prelude::*;

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Indigo background - for primary actions
    Primary,
    /// Gray background - for secondary/cancel actions
    Secondary,
    /// Red background - for destructive actions
    Danger,
}

/// Button size
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    /// Smaller padding, text-sm
    Small,
    /// Standard padding
    Medium,
}

/// Reusable button component with consistent styling
#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] r#type: Option<&'static str>,
    #[props(default)] class: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let base = match size {
        ButtonSize::Small => {
            "inline-flex items-center gap-2 px-3 py-1.5 text-sm rounded-lg transition-colors"
        }
        ButtonSize::Medium => "inline-flex items-center gap-2 px-4 py-2 rounded-lg transition-colors",
    };

    let variant_class = match variant {
        ButtonVariant::Primary => "bg-indigo-600 hover:bg-indigo-500 text-white",
        ButtonVariant::Secondary => "bg-gray-700 hover:bg-gray-600 text-gray-300",
        ButtonVariant::Danger => "bg-red-600 hover:bg-red-500 text-white",
    };

    let computed_class = match &class {
        Some(extra) => format!("{base} {variant_class} {extra}"),
        None => format!("{base} {variant_class}"),
    };

    rsx! {
        button {
            class: "{computed_class}",
            r#type,
            onclick: move |e| onclick.call(e),
            {children}
        }
    }
}
