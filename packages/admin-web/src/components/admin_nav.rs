//! Admin navigation: top bar and sidebar

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::routes::Route;

/// Top bar with brand, current administrator and logout
#[component]
pub fn AdminNav() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    let handle_logout = move |_| {
        auth.sign_out();
        navigator.replace(Route::AdminLogin {});
    };

    let user_name = auth
        .user
        .read()
        .as_ref()
        .and_then(|u| u.display_name())
        .map(str::to_string);

    rsx! {
        nav {
            class: "bg-white border-b border-gray-200 px-6 py-3",
            div {
                class: "flex items-center justify-between",

                Link {
                    to: Route::AdminGremios {},
                    class: "flex flex-col",
                    span { class: "text-xl font-bold text-amber-700", "Multigremial" }
                    span { class: "text-xs text-gray-500", "Administración" }
                }

                div {
                    class: "flex items-center gap-4",
                    if let Some(name) = user_name {
                        span {
                            class: "text-sm text-gray-600",
                            "{name}"
                        }
                    }
                    button {
                        class: "text-sm text-gray-600 hover:text-gray-900 px-3 py-1.5 rounded hover:bg-gray-100",
                        onclick: handle_logout,
                        "Cerrar sesión"
                    }
                }
            }
        }
    }
}

/// Section links
#[component]
pub fn Sidebar() -> Element {
    rsx! {
        aside {
            class: "w-56 min-h-[calc(100vh-57px)] bg-white border-r border-gray-200 p-4",
            div {
                class: "flex flex-col gap-1",
                NavLink { to: Route::AdminGremios {}, label: "Gremios" }
                NavLink { to: Route::AdminRegistrados {}, label: "Registrados" }
                NavLink { to: Route::AdminSecurity {}, label: "Seguridad" }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct NavLinkProps {
    to: Route,
    label: &'static str,
}

#[component]
fn NavLink(props: NavLinkProps) -> Element {
    let route = use_route::<Route>();
    let is_active = in_section(&route, &props.to);

    rsx! {
        Link {
            to: props.to.clone(),
            class: if is_active {
                "px-3 py-2 rounded-md text-sm font-medium bg-amber-100 text-amber-800"
            } else {
                "px-3 py-2 rounded-md text-sm font-medium text-gray-600 hover:bg-gray-100 hover:text-gray-900"
            },
            "{props.label}"
        }
    }
}

/// Whether `current` belongs to the section whose index page is `section`.
fn in_section(current: &Route, section: &Route) -> bool {
    use Route::*;

    match section {
        AdminGremios {} => matches!(
            current,
            AdminGremios {} | AdminGremioNew {} | AdminGremioEdit { .. } | AdminGremioDetail { .. }
        ),
        AdminRegistrados {} => matches!(
            current,
            AdminRegistrados {}
                | AdminRegistradoNew {}
                | AdminRegistrado { .. }
                | AdminRegistradoEdit { .. }
                | AdminRegistradoDetail { .. }
        ),
        other => current == other,
    }
}
