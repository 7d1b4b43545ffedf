//! Registrado view/edit page

use dioxus::prelude::*;

use super::RegistradoFields;
use crate::auth::use_auth;
use crate::components::{EmptyState, ErrorBox, LoadingSpinner, SuccessBox};
use crate::forms::{EditSession, RecordMode, RegistradoForm};
use crate::routes::Route;

/// Read-only view without an edit toggle.
#[component]
pub fn AdminRegistradoDetail(id: i64) -> Element {
    rsx! {
        RegistradoRecord { id: id, mode: RecordMode::ViewOnly }
    }
}

/// Read-only view that can switch into edit mode in place.
#[component]
pub fn AdminRegistrado(id: i64) -> Element {
    rsx! {
        RegistradoRecord { id: id, mode: RecordMode::Viewing }
    }
}

/// Opens the record in edit mode.
#[component]
pub fn AdminRegistradoEdit(id: i64) -> Element {
    rsx! {
        RegistradoRecord { id: id, mode: RecordMode::Editing }
    }
}

#[component]
fn RegistradoRecord(id: i64, mode: RecordMode) -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    let mut session = use_signal(|| None::<EditSession<RegistradoForm>>);
    let mut error = use_signal(|| None::<String>);
    let mut notice = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);

    let record = use_resource(use_reactive!(|id| async move { auth.api().get_registrado(id).await }));
    let geo = use_resource(move || async move { auth.api().load_geo().await });

    // Build the form once both the record and the reference data settled
    use_effect(move || {
        let record = record.read();
        let geo = geo.read();
        if let (Some(Ok(registrado)), Some(geo)) = (&*record, &*geo) {
            let regions = geo.as_ref().map(|g| g.regions.as_slice()).unwrap_or_default();
            let form = RegistradoForm::from_registrado(registrado, regions);
            session.set(Some(EditSession::open(form, mode)));
        }
    });

    let regions = match &*geo.read() {
        Some(Ok(g)) => g.regions.clone(),
        _ => Vec::new(),
    };

    let handle_save = move |_| {
        let regions = regions.clone();
        async move {
            error.set(None);
            notice.set(None);
            let Some(draft) = session.read().as_ref().map(|s| s.draft.clone()) else {
                return;
            };
            let payload = match draft.to_payload(&regions) {
                Ok(payload) => payload,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };

            is_pending.set(true);
            match auth.api().update_registrado(id, &payload).await {
                Ok(()) => {
                    if let Some(s) = session.write().as_mut() {
                        s.commit();
                    }
                    notice.set(Some("Cambios guardados".to_string()));
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            is_pending.set(false);
        }
    };

    let handle_cancel = move |_| {
        if let Some(s) = session.write().as_mut() {
            s.cancel();
        }
        error.set(None);
        navigator.push(Route::AdminRegistradoDetail { id });
    };

    let handle_begin = move |_| {
        notice.set(None);
        if let Some(s) = session.write().as_mut() {
            s.begin_edit();
        }
    };

    match &*record.read() {
        None => return rsx! { LoadingSpinner {} },
        Some(Err(e)) if e.is_not_found() => {
            return rsx! {
                EmptyState { message: "No encontrado" }
            }
        }
        Some(Err(e)) => {
            return rsx! {
                ErrorBox { message: e.to_string() }
            }
        }
        Some(Ok(_)) => {}
    }

    let (geo_data, geo_error) = match &*geo.read() {
        Some(Ok(g)) => (Some(g.clone()), None),
        Some(Err(e)) => (None, Some(e.to_string())),
        None => (None, None),
    };

    let Some(current) = session() else {
        return rsx! { LoadingSpinner {} };
    };
    let editing = current.is_editing();
    let title = if editing { "Editar registrado" } else { "Registrado" };

    rsx! {
        div {
            class: "max-w-4xl",
            div {
                class: "flex items-center justify-between mb-6",
                h1 { class: "text-2xl font-bold text-gray-900", "{title}" }
                div {
                    class: "flex gap-2",
                    Link {
                        to: Route::AdminRegistrados {},
                        class: "px-3 py-2 text-sm rounded-md border border-gray-300 bg-white hover:bg-gray-50",
                        "Volver"
                    }
                    if mode.can_toggle() && !editing {
                        button {
                            class: "px-3 py-2 text-sm rounded-md bg-amber-700 text-white hover:bg-amber-800",
                            onclick: handle_begin,
                            "Editar"
                        }
                    }
                }
            }

            if let Some(err) = geo_error {
                ErrorBox { message: err }
            }
            if let Some(err) = error() {
                ErrorBox { message: err }
            }
            if let Some(msg) = notice() {
                SuccessBox { message: msg }
            }

            RegistradoFields {
                form: current.draft.clone(),
                geo: geo_data,
                disabled: !editing || is_pending(),
                on_edit: move |(field, value)| {
                    if let Some(s) = session.write().as_mut() {
                        s.draft.set(field, value);
                    }
                },
            }

            if editing {
                div {
                    class: "flex gap-3 mt-6",
                    button {
                        class: "bg-amber-700 text-white py-2 px-4 rounded-md hover:bg-amber-800 disabled:opacity-50",
                        disabled: is_pending(),
                        onclick: handle_save,
                        if is_pending() { "Guardando..." } else { "Guardar" }
                    }
                    button {
                        class: "py-2 px-4 rounded-md border border-gray-300 hover:bg-gray-50",
                        disabled: is_pending(),
                        onclick: handle_cancel,
                        "Cancelar"
                    }
                }
            }
        }
    }
}
