//! Gremio create/edit page

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::components::{
    DownloadButton, ErrorBox, FileField, LoadingSpinner, SelectField, TextField, INPUT_CLASS,
    LABEL_CLASS,
};
use crate::constants::{CARGOS, REGIONES, RUBROS};
use crate::download::{letter_file_name, logo_file_name, member_photo_file_name};
use crate::forms::GremioForm;
use crate::routes::Route;
use crate::types::Cargo;

#[component]
pub fn AdminGremioNew() -> Element {
    rsx! {
        GremioFormPage { id: None }
    }
}

#[component]
pub fn AdminGremioEdit(id: i64) -> Element {
    rsx! {
        GremioFormPage { id: Some(id) }
    }
}

fn owned(options: &[&str]) -> Vec<String> {
    options.iter().map(|o| o.to_string()).collect()
}

#[component]
fn GremioFormPage(id: Option<i64>) -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    let mut form = use_signal(GremioForm::default);
    let mut error = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);

    let existing = use_resource(use_reactive!(|id| async move {
        match id {
            Some(id) => auth.api().get_gremio(id).await.map(Some),
            None => Ok(None),
        }
    }));

    // Pre-fill once the record arrives
    use_effect(move || {
        if let Some(Ok(Some(gremio))) = &*existing.read() {
            form.set(GremioForm::from_gremio(gremio));
        }
    });

    if id.is_some() {
        match &*existing.read() {
            None => return rsx! { LoadingSpinner {} },
            Some(Err(e)) if e.is_not_found() => {
                return rsx! {
                    ErrorBox { message: "No encontrado" }
                }
            }
            Some(Err(e)) => {
                return rsx! {
                    ErrorBox { message: e.to_string() }
                }
            }
            Some(Ok(_)) => {}
        }
    }

    let handle_submit = move |_| async move {
        error.set(None);
        let payload = match form.read().to_payload() {
            Ok(payload) => payload,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };

        is_pending.set(true);
        let api = auth.api();
        let result = match id {
            Some(id) => api.update_gremio(id, payload).await,
            None => api.create_gremio(payload).await,
        };

        match result {
            Ok(()) => {
                navigator.push(Route::AdminGremios {});
            }
            Err(e) => {
                error.set(Some(e.to_string()));
                is_pending.set(false);
            }
        }
    };

    let current = form.read().clone();

    rsx! {
        div {
            class: "max-w-4xl",
            h1 {
                class: "text-2xl font-bold text-gray-900 mb-6",
                if id.is_some() { "Editar gremio" } else { "Nuevo gremio" }
            }

            if let Some(err) = error() {
                ErrorBox { message: err }
            }

            form {
                class: "space-y-6",
                onsubmit: handle_submit,

                div {
                    class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6 grid grid-cols-1 md:grid-cols-2 gap-4",
                    TextField {
                        label: "Nombre *",
                        value: current.name.clone(),
                        on_input: move |v| form.write().name = v,
                    }
                    TextField {
                        label: "RUT",
                        value: current.rut.clone(),
                        on_input: move |v| form.write().rut = v,
                    }
                    SelectField {
                        label: "Rubro *",
                        value: current.category.clone(),
                        options: owned(RUBROS),
                        placeholder: "Seleccionar",
                        on_change: move |v| form.write().category = v,
                    }
                    SelectField {
                        label: "Región *",
                        value: current.region.clone(),
                        options: owned(REGIONES),
                        placeholder: "Seleccionar",
                        on_change: move |v| form.write().region = v,
                    }
                    div {
                        class: "md:col-span-2",
                        label { class: LABEL_CLASS, "Descripción" }
                        textarea {
                            class: INPUT_CLASS,
                            rows: "4",
                            value: "{current.description}",
                            oninput: move |e| form.write().description = e.value(),
                        }
                    }
                    div {
                        FileField {
                            label: "Logo",
                            accept: "image/*",
                            selected: current.logo.as_ref().map(|f| f.name.clone()),
                            on_select: move |upload| form.write().logo = Some(upload),
                        }
                        if let (Some(url), Some(id)) = (&current.current_logo_url, id) {
                            div {
                                class: "mt-2 flex items-center gap-3",
                                img { class: "w-12 h-12 object-contain", src: "{url}" }
                                DownloadButton { url: url.clone(), file_name: logo_file_name(id) }
                            }
                        }
                    }
                    div {
                        FileField {
                            label: "Carta de adhesión (PDF)",
                            accept: "application/pdf",
                            selected: current.letter.as_ref().map(|f| f.name.clone()),
                            on_select: move |upload| form.write().letter = Some(upload),
                        }
                        if let (Some(url), Some(id)) = (&current.current_letter_url, id) {
                            div {
                                class: "mt-2",
                                DownloadButton { url: url.clone(), file_name: letter_file_name(id) }
                            }
                        }
                    }
                }

                div {
                    class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
                    div {
                        class: "flex items-center justify-between mb-4",
                        h2 { class: "text-lg font-semibold text-gray-900", "Integrantes" }
                        button {
                            r#type: "button",
                            class: "px-3 py-1.5 text-sm rounded-md border border-gray-300 hover:bg-gray-50",
                            onclick: move |_| form.write().add_member(),
                            "Agregar integrante"
                        }
                    }

                    if current.members.is_empty() {
                        p { class: "text-sm text-gray-500", "Sin integrantes." }
                    }

                    div {
                        class: "space-y-4",
                        for (index, member) in current.members.iter().enumerate() {
                            div {
                                key: "{index}",
                                class: "border border-gray-200 rounded-md p-4 grid grid-cols-1 md:grid-cols-3 gap-3",
                                TextField {
                                    label: "Nombre",
                                    value: member.name.clone(),
                                    on_input: move |v| form.write().members[index].name = v,
                                }
                                TextField {
                                    label: "Teléfono",
                                    value: member.phone.clone(),
                                    on_input: move |v| form.write().members[index].phone = v,
                                }
                                TextField {
                                    label: "Correo",
                                    input_type: "email",
                                    value: member.email.clone(),
                                    on_input: move |v| form.write().members[index].email = v,
                                }
                                SelectField {
                                    label: "Cargo",
                                    value: member.role.label().to_string(),
                                    options: owned(CARGOS),
                                    placeholder: "Seleccionar",
                                    on_change: move |v: String| form.write().members[index].role = Cargo::from_label(&v),
                                }
                                div {
                                    FileField {
                                        label: "Foto",
                                        accept: "image/*",
                                        selected: member.photo.as_ref().map(|f| f.name.clone()),
                                        on_select: move |upload| form.write().members[index].photo = Some(upload),
                                    }
                                    if let Some(url) = &member.photo_url {
                                        div {
                                            class: "mt-2 flex items-center gap-3",
                                            img { class: "w-10 h-10 rounded-full object-cover", src: "{url}" }
                                            DownloadButton {
                                                url: url.clone(),
                                                file_name: member_photo_file_name(member.id, index),
                                            }
                                        }
                                    }
                                }
                                div {
                                    class: "flex items-end justify-end",
                                    button {
                                        r#type: "button",
                                        class: "text-sm text-red-600 hover:underline",
                                        onclick: move |_| form.write().remove_member(index),
                                        "Quitar"
                                    }
                                }
                            }
                        }
                    }
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
                        to: Route::AdminGremios {},
                        class: "py-2 px-4 rounded-md border border-gray-300 hover:bg-gray-50",
                        "Cancelar"
                    }
                }
            }
        }
    }
}
