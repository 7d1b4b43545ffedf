use dioxus::prelude::*;

use crate::api::GeoData;
use crate::components::{SelectField, TextField, INPUT_CLASS, LABEL_CLASS};
use crate::constants::{ASESORIAS, GENEROS, NUM_TRABAJADORES, RUBROS_REGISTRO, TIPOS_EMPRESA};
use crate::forms::{RegistradoField, RegistradoForm};

fn owned(options: &[&str]) -> Vec<String> {
    options.iter().map(|o| o.to_string()).collect()
}

#[derive(Props, Clone, PartialEq)]
pub struct RegistradoFieldsProps {
    pub form: RegistradoForm,
    /// `None` until both reference tables have loaded
    pub geo: Option<GeoData>,
    pub disabled: bool,
    pub on_edit: EventHandler<(RegistradoField, String)>,
}

/// Inputs shared by the create page and the view/edit page
#[component]
pub fn RegistradoFields(props: RegistradoFieldsProps) -> Element {
    use RegistradoField::*;

    let form = &props.form;
    let disabled = props.disabled;
    let on_edit = props.on_edit;

    let geo_ready = props.geo.is_some();
    let regions = props
        .geo
        .as_ref()
        .map(|g| g.regions.clone())
        .unwrap_or_default();
    let communes = props
        .geo
        .as_ref()
        .map(|g| form.available_communes(&g.communes))
        .unwrap_or_default();

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6 grid grid-cols-1 md:grid-cols-2 gap-4",

            TextField {
                label: "Nombres *",
                value: form.get(FirstNames).to_string(),
                disabled: disabled,
                on_input: move |v| on_edit.call((FirstNames, v)),
            }
            TextField {
                label: "Apellidos *",
                value: form.get(LastNames).to_string(),
                disabled: disabled,
                on_input: move |v| on_edit.call((LastNames, v)),
            }
            SelectField {
                label: "Género",
                value: form.get(Gender).to_string(),
                options: owned(GENEROS),
                placeholder: "Seleccionar",
                disabled: disabled,
                on_change: move |v| on_edit.call((Gender, v)),
            }
            TextField {
                label: "Fecha de nacimiento",
                input_type: "date",
                value: form.get(BirthDate).to_string(),
                disabled: disabled,
                on_input: move |v| on_edit.call((BirthDate, v)),
            }
            TextField {
                label: "RUT",
                value: form.get(Rut).to_string(),
                disabled: disabled,
                on_input: move |v| on_edit.call((Rut, v)),
            }
            TextField {
                label: "Teléfono",
                value: form.get(Phone).to_string(),
                disabled: disabled,
                on_input: move |v| on_edit.call((Phone, v)),
            }
            TextField {
                label: "Email",
                input_type: "email",
                value: form.get(Email).to_string(),
                disabled: disabled,
                on_input: move |v| on_edit.call((Email, v)),
            }

            div {
                label { class: LABEL_CLASS, "Región" }
                select {
                    class: INPUT_CLASS,
                    disabled: disabled || !geo_ready,
                    onchange: move |e| on_edit.call((Region, e.value())),
                    option { value: "", selected: form.region_code.is_empty(), "Seleccionar" }
                    for region in regions.iter() {
                        option {
                            key: "{region.code}",
                            value: "{region.code}",
                            selected: region.code == form.region_code,
                            "{region.name}"
                        }
                    }
                }
            }
            SelectField {
                label: "Comuna",
                value: form.get(Commune).to_string(),
                options: communes,
                placeholder: "Seleccionar",
                disabled: disabled || !geo_ready || form.region_code.is_empty(),
                on_change: move |v| on_edit.call((Commune, v)),
            }

            SelectField {
                label: "Tipo de empresa",
                value: form.get(CompanyType).to_string(),
                options: owned(TIPOS_EMPRESA),
                placeholder: "Seleccionar",
                disabled: disabled,
                on_change: move |v| on_edit.call((CompanyType, v)),
            }
            SelectField {
                label: "Número de trabajadores",
                value: form.get(EmployeeBracket).to_string(),
                options: owned(NUM_TRABAJADORES),
                placeholder: "Seleccionar",
                disabled: disabled,
                on_change: move |v| on_edit.call((EmployeeBracket, v)),
            }
            SelectField {
                label: "Rubro",
                value: form.get(Category).to_string(),
                options: owned(RUBROS_REGISTRO),
                placeholder: "Seleccionar",
                disabled: disabled,
                on_change: move |v| on_edit.call((Category, v)),
            }
            SelectField {
                label: "Asesoría sobre",
                value: form.get(Advisory).to_string(),
                options: owned(ASESORIAS),
                placeholder: "Seleccionar",
                disabled: disabled,
                on_change: move |v| on_edit.call((Advisory, v)),
            }
        }
    }
}
