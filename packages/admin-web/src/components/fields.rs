//! Form inputs shared by the create/edit pages

use dioxus::prelude::*;

use crate::api::FileUpload;
use crate::download;

pub const INPUT_CLASS: &str = "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-amber-500 disabled:bg-gray-50";
pub const LABEL_CLASS: &str = "block text-sm font-medium text-gray-700 mb-1";

#[derive(Props, Clone, PartialEq)]
pub struct TextFieldProps {
    pub label: &'static str,
    pub value: String,
    pub on_input: EventHandler<String>,
    #[props(default = "text")]
    pub input_type: &'static str,
    #[props(default)]
    pub disabled: bool,
}

#[component]
pub fn TextField(props: TextFieldProps) -> Element {
    rsx! {
        div {
            label { class: LABEL_CLASS, "{props.label}" }
            input {
                r#type: props.input_type,
                class: INPUT_CLASS,
                value: "{props.value}",
                disabled: props.disabled,
                oninput: move |e| props.on_input.call(e.value()),
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct SelectFieldProps {
    pub label: &'static str,
    pub value: String,
    pub options: Vec<String>,
    /// Text of the empty first option
    pub placeholder: &'static str,
    pub on_change: EventHandler<String>,
    #[props(default)]
    pub disabled: bool,
}

/// Select where the option value and its label are the same text
#[component]
pub fn SelectField(props: SelectFieldProps) -> Element {
    rsx! {
        div {
            label { class: LABEL_CLASS, "{props.label}" }
            select {
                class: INPUT_CLASS,
                value: "{props.value}",
                disabled: props.disabled,
                onchange: move |e| props.on_change.call(e.value()),
                option { value: "", selected: props.value.is_empty(), "{props.placeholder}" }
                for opt in props.options.iter() {
                    option {
                        value: "{opt}",
                        selected: *opt == props.value,
                        "{opt}"
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct FileFieldProps {
    pub label: &'static str,
    /// `accept` attribute, e.g. `image/*`
    pub accept: &'static str,
    /// Name of the file picked so far, if any
    pub selected: Option<String>,
    pub on_select: EventHandler<FileUpload>,
}

/// File input that reads the chosen file into memory
#[component]
pub fn FileField(props: FileFieldProps) -> Element {
    let on_select = props.on_select;

    rsx! {
        div {
            label { class: LABEL_CLASS, "{props.label}" }
            input {
                r#type: "file",
                accept: props.accept,
                class: "block w-full text-sm text-gray-600 file:mr-3 file:py-1.5 file:px-3 file:rounded file:border-0 file:bg-amber-100 file:text-amber-800",
                onchange: move |evt: FormEvent| async move {
                    let Some(engine) = evt.files() else { return };
                    let Some(name) = engine.files().into_iter().next() else { return };
                    match engine.read_file(&name).await {
                        Some(bytes) => on_select.call(FileUpload::new(name, bytes)),
                        None => tracing::warn!(%name, "Could not read selected file"),
                    }
                },
            }
            if let Some(name) = &props.selected {
                p { class: "mt-1 text-xs text-gray-500", "{name}" }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct DownloadButtonProps {
    pub url: String,
    pub file_name: String,
    #[props(default = "Descargar")]
    pub label: &'static str,
}

/// Saves a remote asset under `file_name`
#[component]
pub fn DownloadButton(props: DownloadButtonProps) -> Element {
    let url = props.url.clone();
    let file_name = props.file_name.clone();

    rsx! {
        button {
            r#type: "button",
            class: "text-sm text-amber-700 hover:text-amber-900 underline",
            onclick: move |_| {
                let url = url.clone();
                let file_name = file_name.clone();
                spawn(async move {
                    download::download(&url, &file_name).await;
                });
            },
            "{props.label}"
        }
    }
}
