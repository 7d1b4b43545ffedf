//! Admin login page

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::components::{RedirectTo, INPUT_CLASS, LABEL_CLASS};
use crate::routes::{guard, Route};

#[component]
pub fn AdminLogin() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);

    // Already signed in
    if let Some(target) = guard(&Route::AdminLogin {}, auth.is_authenticated()) {
        return rsx! {
            RedirectTo { to: target }
        };
    }

    let handle_submit = move |_| async move {
        is_pending.set(true);
        error.set(None);

        match auth.sign_in(&email(), &password()).await {
            Ok(_) => {
                navigator.replace(Route::AdminGremios {});
            }
            Err(e) => {
                error.set(Some(e.to_string()));
                is_pending.set(false);
            }
        }
    };

    rsx! {
        div {
            class: "min-h-screen bg-gray-100 flex items-center justify-center px-4",

            div {
                class: "bg-white rounded-lg shadow-md p-8 max-w-md w-full",

                div {
                    class: "mb-6 text-center",
                    h1 { class: "text-2xl font-bold text-gray-900 mb-2", "Multigremial" }
                    p { class: "text-gray-600 text-sm", "Panel de administración" }
                }

                if let Some(err) = error() {
                    div {
                        class: "mb-4 p-3 bg-orange-50 border border-orange-200 text-orange-800 rounded text-sm",
                        "{err}"
                    }
                }

                form {
                    onsubmit: handle_submit,
                    div {
                        class: "mb-4",
                        label { class: LABEL_CLASS, "Email" }
                        input {
                            r#type: "email",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                            placeholder: "admin@multigremial.cl",
                            class: INPUT_CLASS,
                            disabled: is_pending()
                        }
                    }
                    div {
                        class: "mb-6",
                        label { class: LABEL_CLASS, "Contraseña" }
                        input {
                            r#type: "password",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                            class: INPUT_CLASS,
                            disabled: is_pending()
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "w-full bg-amber-700 text-white py-2 px-4 rounded-md hover:bg-amber-800 focus:outline-none focus:ring-2 focus:ring-amber-500 focus:ring-offset-2 disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: is_pending(),
                        if is_pending() { "Ingresando..." } else { "Ingresar" }
                    }
                }
            }
        }
    }
}
