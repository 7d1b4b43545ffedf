//! Registrado list, filtered and paginated by the backend

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::components::{EmptyState, ErrorBox, LoadingSpinner, SelectField, TextField};
use crate::config::DEFAULT_PAGE_SIZE;
use crate::constants::{REGIONES_CHILE, RUBROS_REGISTRO, TIPOS_EMPRESA};
use crate::dom;
use crate::listing::{confirm_and_delete, registrado_filter, Pagination};
use crate::routes::Route;

fn owned(options: &[&str]) -> Vec<String> {
    options.iter().map(|o| o.to_string()).collect()
}

#[component]
pub fn AdminRegistrados() -> Element {
    let auth = use_auth();
    let mut filter = use_signal(registrado_filter);
    let mut page = use_signal(|| 1u32);
    let mut error = use_signal(|| None::<String>);

    // Re-runs whenever the filter or the page changes
    let mut listing = use_resource(move || async move {
        let filter = filter();
        let pagination = Pagination::new(page(), DEFAULT_PAGE_SIZE);
        auth.api().list_registrados(&filter, pagination).await
    });

    // A delete can empty the last page; step back to the new last one
    use_effect(move || {
        if let Some(Ok(result)) = &*listing.read() {
            if let Some(last) = result.past_end() {
                tracing::debug!(from = result.page, to = last, "Page past end, stepping back");
                page.set(last);
            }
        }
    });

    // Any filter edit goes back to the first page
    let mut set_filter = move |param: &'static str, value: String| {
        filter.write().set(param, value);
        page.set(1);
    };

    let delete = move |id: i64| {
        spawn(async move {
            error.set(None);
            let api = auth.api();
            match confirm_and_delete("¿Eliminar este registro?", dom::confirm, || api.delete_registrado(id)).await {
                Ok(true) => listing.restart(),
                Ok(false) => {}
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        div {
            div {
                class: "flex items-center justify-between mb-6",
                h1 { class: "text-2xl font-bold text-gray-900", "Registrados" }
                div {
                    class: "flex gap-2",
                    button {
                        class: "px-3 py-2 text-sm rounded-md border border-gray-300 bg-white hover:bg-gray-50",
                        onclick: move |_| listing.restart(),
                        "Refrescar"
                    }
                    Link {
                        to: Route::AdminRegistradoNew {},
                        class: "px-3 py-2 text-sm rounded-md bg-amber-700 text-white hover:bg-amber-800",
                        "Nuevo registrado"
                    }
                }
            }

            div {
                class: "bg-white rounded-lg shadow-sm border border-gray-200 p-4 mb-4 grid grid-cols-1 md:grid-cols-5 gap-4 items-end",
                TextField {
                    label: "Buscar",
                    value: filter.read().value("q").to_string(),
                    on_input: move |v| set_filter("q", v),
                }
                SelectField {
                    label: "Región",
                    value: filter.read().value("region").to_string(),
                    options: owned(REGIONES_CHILE),
                    placeholder: "Todas",
                    on_change: move |v| set_filter("region", v),
                }
                SelectField {
                    label: "Rubro",
                    value: filter.read().value("rubro").to_string(),
                    options: owned(RUBROS_REGISTRO),
                    placeholder: "Todos",
                    on_change: move |v| set_filter("rubro", v),
                }
                SelectField {
                    label: "Tipo de empresa",
                    value: filter.read().value("tipoEmpresa").to_string(),
                    options: owned(TIPOS_EMPRESA),
                    placeholder: "Todos",
                    on_change: move |v| set_filter("tipoEmpresa", v),
                }
                button {
                    class: "px-3 py-2 text-sm rounded-md border border-gray-300 hover:bg-gray-50",
                    onclick: move |_| {
                        filter.write().clear();
                        page.set(1);
                    },
                    "Limpiar filtros"
                }
            }

            if let Some(err) = error() {
                ErrorBox { message: err }
            }

            match &*listing.read() {
                Some(Ok(result)) if result.items.is_empty() => rsx! {
                    if filter.read().is_active() {
                        EmptyState { message: "Ningún registro coincide con los filtros." }
                    } else {
                        EmptyState { message: "No hay registrados." }
                    }
                },
                Some(Ok(result)) => {
                    let current = result.page;
                    let pages = result.page_count();
                    rsx! {
                        p { class: "text-sm text-gray-500 mb-2", "Mostrando {result.items.len()} de {result.total}" }
                        div {
                            class: "bg-white rounded-lg shadow-sm border border-gray-200 overflow-x-auto",
                            table {
                                class: "min-w-full text-sm",
                                thead {
                                    class: "bg-gray-50 text-left text-gray-600",
                                    tr {
                                        th { class: "px-4 py-2", "Nombre" }
                                        th { class: "px-4 py-2", "RUT" }
                                        th { class: "px-4 py-2", "Email" }
                                        th { class: "px-4 py-2", "Teléfono" }
                                        th { class: "px-4 py-2", "Región" }
                                        th { class: "px-4 py-2", "Rubro" }
                                        th { class: "px-4 py-2" }
                                    }
                                }
                                tbody {
                                    for r in result.items.iter() {
                                        tr {
                                            key: "{r.id}",
                                            class: "border-t border-gray-100",
                                            td { class: "px-4 py-2 font-medium text-gray-900", {r.full_name()} }
                                            td { class: "px-4 py-2", {r.rut.clone().unwrap_or_default()} }
                                            td { class: "px-4 py-2", {r.email.clone().unwrap_or_default()} }
                                            td { class: "px-4 py-2", {r.phone.clone().unwrap_or_default()} }
                                            td { class: "px-4 py-2", {r.region.clone().unwrap_or_default()} }
                                            td { class: "px-4 py-2", {r.category.clone().unwrap_or_default()} }
                                            td {
                                                class: "px-4 py-2 whitespace-nowrap space-x-3",
                                                Link {
                                                    to: Route::AdminRegistradoDetail { id: r.id },
                                                    class: "text-amber-700 hover:underline",
                                                    "Ver"
                                                }
                                                Link {
                                                    to: Route::AdminRegistradoEdit { id: r.id },
                                                    class: "text-amber-700 hover:underline",
                                                    "Editar"
                                                }
                                                button {
                                                    class: "text-red-600 hover:underline",
                                                    onclick: {
                                                        let id = r.id;
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
                        div {
                            class: "flex items-center justify-between mt-4 text-sm",
                            button {
                                class: "px-3 py-1.5 rounded-md border border-gray-300 bg-white hover:bg-gray-50 disabled:opacity-50",
                                disabled: current <= 1,
                                onclick: move |_| page.set(current.saturating_sub(1).max(1)),
                                "Anterior"
                            }
                            span { class: "text-gray-600", "Página {current} de {pages}" }
                            button {
                                class: "px-3 py-1.5 rounded-md border border-gray-300 bg-white hover:bg-gray-50 disabled:opacity-50",
                                disabled: current >= pages,
                                onclick: move |_| page.set(current + 1),
                                "Siguiente"
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
