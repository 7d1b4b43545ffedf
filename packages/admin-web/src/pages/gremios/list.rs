//! Gremio list with in-memory filters

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::components::{EmptyState, ErrorBox, LoadingSpinner, SelectField, TextField};
use crate::constants::RUBROS;
use crate::dom;
use crate::listing::{confirm_and_delete, gremio_filter};
use crate::routes::Route;

#[component]
pub fn AdminGremios() -> Element {
    let auth = use_auth();
    let mut filter = use_signal(gremio_filter);
    let mut error = use_signal(|| None::<String>);

    let mut gremios = use_resource(move || async move { auth.api().list_gremios().await });

    let delete = move |id: i64| {
        spawn(async move {
            error.set(None);
            let api = auth.api();
            match confirm_and_delete("¿Eliminar este gremio?", dom::confirm, || api.delete_gremio(id)).await {
                Ok(true) => gremios.restart(),
                Ok(false) => {}
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let rubros: Vec<String> = RUBROS.iter().map(|r| r.to_string()).collect();

    rsx! {
        div {
            div {
                class: "flex items-center justify-between mb-6",
                h1 { class: "text-2xl font-bold text-gray-900", "Gremios" }
                div {
                    class: "flex gap-2",
                    button {
                        class: "px-3 py-2 text-sm rounded-md border border-gray-300 bg-white hover:bg-gray-50",
                        onclick: move |_| gremios.restart(),
                        "Refrescar"
                    }
                    Link {
                        to: Route::AdminGremioNew {},
                        class: "px-3 py-2 text-sm rounded-md bg-amber-700 text-white hover:bg-amber-800",
                        "Nuevo gremio"
                    }
                }
            }

            div {
                class: "bg-white rounded-lg shadow-sm border border-gray-200 p-4 mb-4 grid grid-cols-1 md:grid-cols-4 gap-4 items-end",
                TextField {
                    label: "Nombre",
                    value: filter.read().value("nombre").to_string(),
                    on_input: move |v| filter.write().set("nombre", v),
                }
                TextField {
                    label: "RUT",
                    value: filter.read().value("rut").to_string(),
                    on_input: move |v| filter.write().set("rut", v),
                }
                SelectField {
                    label: "Rubro",
                    value: filter.read().value("rubro").to_string(),
                    options: rubros,
                    placeholder: "Todos",
                    on_change: move |v| filter.write().set("rubro", v),
                }
                button {
                    class: "px-3 py-2 text-sm rounded-md border border-gray-300 hover:bg-gray-50",
                    onclick: move |_| filter.write().clear(),
                    "Limpiar filtros"
                }
            }

            if let Some(err) = error() {
                ErrorBox { message: err }
            }

            match &*gremios.read() {
                Some(Ok(all)) if all.is_empty() => rsx! {
                    EmptyState { message: "No hay gremios registrados." }
                },
                Some(Ok(all)) => {
                    let visible = filter.read().apply(all);
                    rsx! {
                        p { class: "text-sm text-gray-500 mb-2", "Mostrando {visible.len()} de {all.len()}" }
                        if visible.is_empty() {
                            EmptyState { message: "Ningún gremio coincide con los filtros." }
                        } else {
                            div {
                                class: "bg-white rounded-lg shadow-sm border border-gray-200 overflow-x-auto",
                                table {
                                    class: "min-w-full text-sm",
                                    thead {
                                        class: "bg-gray-50 text-left text-gray-600",
                                        tr {
                                            th { class: "px-4 py-2", "Logo" }
                                            th { class: "px-4 py-2", "Nombre" }
                                            th { class: "px-4 py-2", "RUT" }
                                            th { class: "px-4 py-2", "Rubro" }
                                            th { class: "px-4 py-2", "Región" }
                                            th { class: "px-4 py-2", "Integrantes" }
                                            th { class: "px-4 py-2" }
                                        }
                                    }
                                    tbody {
                                        for gremio in visible {
                                            tr {
                                                key: "{gremio.id}",
                                                class: "border-t border-gray-100",
                                                td {
                                                    class: "px-4 py-2",
                                                    if let Some(logo) = &gremio.logo_url {
                                                        img { class: "w-10 h-10 object-contain", src: "{logo}" }
                                                    } else {
                                                        span { class: "text-xs text-gray-400", "Sin logo" }
                                                    }
                                                }
                                                td { class: "px-4 py-2 font-medium text-gray-900", "{gremio.name}" }
                                                td { class: "px-4 py-2", {gremio.rut.clone().unwrap_or_else(|| "-".to_string())} }
                                                td { class: "px-4 py-2", "{gremio.category}" }
                                                td { class: "px-4 py-2", "{gremio.region}" }
                                                td { class: "px-4 py-2", "{gremio.members.len()}" }
                                                td {
                                                    class: "px-4 py-2 whitespace-nowrap space-x-3",
                                                    Link {
                                                        to: Route::AdminGremioDetail { id: gremio.id },
                                                        class: "text-amber-700 hover:underline",
                                                        "Ver"
                                                    }
                                                    Link {
                                                        to: Route::AdminGremioEdit { id: gremio.id },
                                                        class: "text-amber-700 hover:underline",
                                                        "Editar"
                                                    }
                                                    button {
                                                        class: "text-red-600 hover:underline",
                                                        onclick: {
                                                            let id = gremio.id;
                                                            move |_| delete(id)
                                                        },
                                                        "Eliminar"
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                Some(Err(e)) => rsx! {
                    ErrorBox { message: e.to_string() }
                },
                None => rsx! {
                    LoadingSpinner {}
                }
            }
        }
    }
}
