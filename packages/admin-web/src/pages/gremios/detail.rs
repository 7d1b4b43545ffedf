//! Read-only gremio card

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::components::{DownloadButton, EmptyState, ErrorBox, LoadingSpinner};
use crate::download::{letter_file_name, logo_file_name, member_photo_file_name};
use crate::routes::Route;
use crate::types::Gremio;

#[component]
pub fn AdminGremioDetail(id: i64) -> Element {
    let auth = use_auth();
    let gremio = use_resource(use_reactive!(|id| async move { auth.api().get_gremio(id).await }));

    rsx! {
        div {
            class: "max-w-4xl",
            div {
                class: "flex items-center justify-between mb-6",
                h1 { class: "text-2xl font-bold text-gray-900", "Gremio" }
                div {
                    class: "flex gap-2",
                    Link {
                        to: Route::AdminGremios {},
                        class: "px-3 py-2 text-sm rounded-md border border-gray-300 bg-white hover:bg-gray-50",
                        "Volver"
                    }
                    Link {
                        to: Route::AdminGremioEdit { id },
                        class: "px-3 py-2 text-sm rounded-md bg-amber-700 text-white hover:bg-amber-800",
                        "Editar"
                    }
                }
            }

            match &*gremio.read() {
                Some(Ok(g)) => rsx! {
                    GremioCard { gremio: g.clone() }
                },
                Some(Err(e)) if e.is_not_found() => rsx! {
                    EmptyState { message: "No encontrado" }
                },
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

#[derive(Props, Clone, PartialEq)]
struct GremioCardProps {
    gremio: Gremio,
}

#[component]
fn GremioCard(props: GremioCardProps) -> Element {
    let g = &props.gremio;

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6 space-y-6",

            div {
                class: "flex items-start gap-6",
                div {
                    class: "w-28 flex flex-col items-center gap-2",
                    if let Some(logo) = &g.logo_url {
                        img { class: "w-24 h-24 object-contain", src: "{logo}" }
                        DownloadButton { url: logo.clone(), file_name: logo_file_name(g.id) }
                    } else {
                        div {
                            class: "w-24 h-24 bg-gray-100 rounded flex items-center justify-center text-xs text-gray-400",
                            "Sin logo"
                        }
                    }
                }
                div {
                    class: "flex-1",
                    h2 { class: "text-xl font-semibold text-gray-900", "{g.name}" }
                    dl {
                        class: "mt-3 grid grid-cols-2 gap-x-6 gap-y-2 text-sm",
                        dt { class: "text-gray-500", "RUT" }
                        dd { class: "text-gray-900", {g.rut.clone().unwrap_or_else(|| "-".to_string())} }
                        dt { class: "text-gray-500", "Rubro" }
                        dd { class: "text-gray-900", "{g.category}" }
                        dt { class: "text-gray-500", "Región" }
                        dd { class: "text-gray-900", "{g.region}" }
                    }
                }
            }

            div {
                h3 { class: "font-medium text-gray-900 mb-1", "Descripción" }
                p {
                    class: "text-sm text-gray-700 whitespace-pre-line",
                    {g.description.clone().filter(|d| !d.trim().is_empty()).unwrap_or_else(|| "Sin descripción.".to_string())}
                }
            }

            div {
                h3 { class: "font-medium text-gray-900 mb-1", "Carta de adhesión" }
                if let Some(letter) = &g.letter_url {
                    DownloadButton { url: letter.clone(), file_name: letter_file_name(g.id), label: "Descargar PDF" }
                } else {
                    p { class: "text-sm text-gray-500", "No hay PDF cargado." }
                }
            }

            div {
                h3 { class: "font-medium text-gray-900 mb-3", "Integrantes" }
                if g.members.is_empty() {
                    p { class: "text-sm text-gray-500", "Sin integrantes." }
                }
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                    for (index, member) in g.members.iter().enumerate() {
                        div {
                            key: "{member.id}",
                            class: "flex items-center gap-4 border border-gray-200 rounded-md p-3",
                            if let Some(photo) = &member.photo_url {
                                img { class: "w-12 h-12 rounded-full object-cover", src: "{photo}" }
                            } else {
                                div { class: "w-12 h-12 rounded-full bg-gray-100" }
                            }
                            div {
                                class: "flex-1 text-sm",
                                p { class: "font-medium text-gray-900", "{member.name}" }
                                span {
                                    class: "inline-block px-2 py-0.5 rounded text-xs {member.role.badge_class()}",
                                    "{member.role.label()}"
                                }
                                if let Some(phone) = &member.phone {
                                    p { class: "text-gray-600", "{phone}" }
                                }
                                if let Some(email) = &member.email {
                                    p { class: "text-gray-600", "{email}" }
                                }
                            }
                            if let Some(photo) = &member.photo_url {
                                DownloadButton {
                                    url: photo.clone(),
                                    file_name: member_photo_file_name(Some(member.id), index),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
