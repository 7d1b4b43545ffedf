//! New registrado page

use dioxus::prelude::*;

use super::RegistradoFields;
use crate::auth::use_auth;
use crate::components::ErrorBox;
use crate::forms::RegistradoForm;
use crate::routes::Route;

#[component]
pub fn AdminRegistradoNew() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    let mut form = use_signal(RegistradoForm::default);
    let mut error = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);

    let geo = use_resource(move || async move { auth.api().load_geo().await });

    let handle_submit = move |_| async move {
        error.set(None);
        let regions = match &*geo.read() {
            Some(Ok(g)) => g.regions.clone(),
            _ => Vec::new(),
        };
        let payload = match form.read().to_payload(&regions) {
            Ok(payload) => payload,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };

        is_pending.set(true);
        match auth.api().create_registrado(&payload).await {
            Ok(()) => {
                navigator.push(Route::AdminRegistrados {});
            }
            Err(e) => {
                error.set(Some(e.to_string()));
                is_pending.set(false);
            }
        }
    };

    let (geo_data, geo_error) = match &*geo.read() {
        Some(Ok(g)) => (Some(g.clone()), None),
        Some(Err(e)) => (None, Some(e.to_string())),
        None => (None, None),
    };

    rsx! {
        div {
            class: "max-w-4xl",
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Nuevo registrado" }

            if let Some(err) = geo_error {
                ErrorBox { message: err }
            }
            if let Some(err) = error() {
                ErrorBox { message: err }
            }

            form {
                class: "space-y-6",
                onsubmit: handle_submit,

                RegistradoFields {
                    form: form(),
                    geo: geo_data,
                    disabled: is_pending(),
                    on_edit: move |(field, value)| form.write().set(field, value),
                }

                div {
                    class: "flex gap-3",
                    button {
                        r#type: "submit",
                        class: "bg-amber-700 text-white py-2 px-4 rounded-md hover:bg-amber-800 disabled:opacity-50",
                        disabled: is_pending(),
                        if is_pending() { "Guardando..." } else { "Guardar" }
                    }
                    Link {
                        to: Route::AdminRegistrados {},
                        class: "py-2 px-4 rounded-md border border-gray-300 hover:bg-gray-50",
                        "Cancelar"
                    }
                }
            }
        }
    }
}
