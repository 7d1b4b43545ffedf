use dioxus::prelude::*;

use crate::components::RedirectTo;
use crate::routes::Route;

/// Unknown paths go to the login page, which forwards signed-in operators.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "Unknown route");

    rsx! {
        RedirectTo { to: Route::AdminLogin {} }
    }
}
