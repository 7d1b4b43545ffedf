//! Admin layout wrapper with auth protection

use dioxus::prelude::*;

use super::{AdminNav, RedirectTo, Sidebar};
use crate::auth::use_auth;
use crate::routes::{guard, Route};

/// Shell for every protected page
#[component]
pub fn AdminLayout() -> Element {
    let auth = use_auth();
    let route = use_route::<Route>();

    if let Some(target) = guard(&route, auth.is_authenticated()) {
        return rsx! {
            RedirectTo { to: target }
        };
    }

    rsx! {
        div {
            class: "min-h-screen bg-gray-100",

            AdminNav {}

            div {
                class: "flex",
                Sidebar {}
                main {
                    class: "flex-1 p-6",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
