//! Root application component

use dioxus::prelude::*;

use crate::auth::SessionProvider;
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    rsx! {
        // Global styles
        document::Stylesheet { href: asset!("/assets/tailwind.css") }

        SessionProvider {
            Router::<Route> {}
        }
    }
}
