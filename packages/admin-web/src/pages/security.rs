//! Account security: change email and password

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::components::{ErrorBox, SuccessBox, TextField};

#[cfg(feature = "web")]
const NOTICE_MS: u32 = 4_000;

#[component]
pub fn AdminSecurity() -> Element {
    rsx! {
        div {
            class: "max-w-xl",
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Seguridad" }
            div {
                class: "space-y-6",
                ChangeEmailCard {}
                ChangePasswordCard {}
            }
        }
    }
}

#[component]
fn ChangeEmailCard() -> Element {
    let auth = use_auth();
    let mut email = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut notice = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);

    let handle_submit = move |_| async move {
        error.set(None);
        notice.set(None);

        let value = email().trim().to_string();
        if value.is_empty() {
            error.set(Some("Ingresá el nuevo email".to_string()));
            return;
        }

        is_pending.set(true);
        match auth.api().change_email(&value).await {
            Ok(()) => {
                email.set(String::new());
                notice.set(Some("Email actualizado".to_string()));
                clear_later(notice);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
        is_pending.set(false);
    };

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
            h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Cambiar email" }

            if let Some(err) = error() {
                ErrorBox { message: err }
            }
            if let Some(msg) = notice() {
                SuccessBox { message: msg }
            }

            form {
                class: "space-y-4",
                onsubmit: handle_submit,
                TextField {
                    label: "Nuevo email",
                    input_type: "email",
                    value: email(),
                    disabled: is_pending(),
                    on_input: move |v| email.set(v),
                }
                button {
                    r#type: "submit",
                    class: "bg-amber-700 text-white py-2 px-4 rounded-md hover:bg-amber-800 disabled:opacity-50",
                    disabled: is_pending(),
                    "Actualizar email"
                }
            }
        }
    }
}

#[component]
fn ChangePasswordCard() -> Element {
    let auth = use_auth();
    let mut current = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut notice = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);

    let handle_submit = move |_| async move {
        error.set(None);
        notice.set(None);

        let (old, new) = (current(), new_password());
        if old.is_empty() || new.is_empty() {
            error.set(Some("Completá ambas contraseñas".to_string()));
            return;
        }

        is_pending.set(true);
        match auth.api().change_password(&old, &new).await {
            Ok(()) => {
                current.set(String::new());
                new_password.set(String::new());
                notice.set(Some("Contraseña actualizada".to_string()));
                clear_later(notice);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
        is_pending.set(false);
    };

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
            h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Cambiar contraseña" }

            if let Some(err) = error() {
                ErrorBox { message: err }
            }
            if let Some(msg) = notice() {
                SuccessBox { message: msg }
            }

            form {
                class: "space-y-4",
                onsubmit: handle_submit,
                TextField {
                    label: "Contraseña actual",
                    input_type: "password",
                    value: current(),
                    disabled: is_pending(),
                    on_input: move |v| current.set(v),
                }
                TextField {
                    label: "Nueva contraseña",
                    input_type: "password",
                    value: new_password(),
                    disabled: is_pending(),
                    on_input: move |v| new_password.set(v),
                }
                button {
                    r#type: "submit",
                    class: "bg-amber-700 text-white py-2 px-4 rounded-md hover:bg-amber-800 disabled:opacity-50",
                    disabled: is_pending(),
                    "Actualizar contraseña"
                }
            }
        }
    }
}

/// Hide a success notice after a few seconds.
fn clear_later(notice: Signal<Option<String>>) {
    #[cfg(feature = "web")]
    {
        let mut notice = notice;
        spawn(async move {
            gloo_timers::future::TimeoutFuture::new(NOTICE_MS).await;
            notice.set(None);
        });
    }
    #[cfg(not(feature = "web"))]
    let _ = notice;
}
