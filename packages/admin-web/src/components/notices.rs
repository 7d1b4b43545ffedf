//! Inline status messages

use dioxus::prelude::*;

#[component]
pub fn ErrorBox(#[props(into)] message: String) -> Element {
    rsx! {
        div {
            class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg mb-4",
            "{message}"
        }
    }
}

#[component]
pub fn SuccessBox(#[props(into)] message: String) -> Element {
    rsx! {
        div {
            class: "bg-green-50 border border-green-200 text-green-700 p-4 rounded-lg mb-4",
            "{message}"
        }
    }
}

/// Placeholder card for empty lists
#[component]
pub fn EmptyState(#[props(into)] message: String) -> Element {
    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-12 text-center",
            p { class: "text-gray-500", "{message}" }
        }
    }
}
