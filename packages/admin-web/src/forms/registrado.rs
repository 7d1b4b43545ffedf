//! Registrado create/edit form state

use chrono::{DateTime, NaiveDate};
use serde::Serialize;

use crate::api::ApiError;
use crate::geo::{communes_for_region, region_code_for_name, region_name_for_code};
use crate::types::{Comuna, Region, Registrado};

/// JSON body for create and update. Blank inputs are sent as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistradoPayload {
    pub nombres: String,
    pub apellidos: String,
    pub genero: Option<String>,
    pub fecha_nacimiento: Option<String>,
    pub rut: Option<String>,
    pub telefono: Option<String>,
    pub email: Option<String>,
    pub region: Option<String>,
    pub comuna: Option<String>,
    pub tipo_empresa: Option<String>,
    pub numero_trabajadores: Option<String>,
    pub rubro: Option<String>,
    pub asesoria_sobre: Option<String>,
}

/// Addressable inputs of [`RegistradoForm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistradoField {
    FirstNames,
    LastNames,
    Gender,
    BirthDate,
    Rut,
    Phone,
    Email,
    Region,
    Commune,
    CompanyType,
    EmployeeBracket,
    Category,
    Advisory,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistradoForm {
    pub first_names: String,
    pub last_names: String,
    pub gender: String,
    /// `YYYY-MM-DD`, as a date input expects.
    pub birth_date: String,
    pub rut: String,
    pub phone: String,
    pub email: String,
    /// The select works on region codes; the backend stores names.
    pub region_code: String,
    pub commune: String,
    pub company_type: String,
    pub employee_bracket: String,
    pub category: String,
    pub advisory: String,
}

impl RegistradoForm {
    /// Pre-fill from a stored record, resolving its region name to a code.
    pub fn from_registrado(registrado: &Registrado, regions: &[Region]) -> Self {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();

        Self {
            first_names: registrado.first_names.clone(),
            last_names: registrado.last_names.clone(),
            gender: text(&registrado.gender),
            birth_date: registrado
                .birth_date
                .as_deref()
                .map(date_input_value)
                .unwrap_or_default(),
            rut: text(&registrado.rut),
            phone: text(&registrado.phone),
            email: text(&registrado.email),
            region_code: registrado
                .region
                .as_deref()
                .and_then(|name| region_code_for_name(name, regions))
                .unwrap_or_default(),
            commune: text(&registrado.commune),
            company_type: text(&registrado.company_type),
            employee_bracket: text(&registrado.employee_bracket),
            category: text(&registrado.category),
            advisory: text(&registrado.advisory),
        }
    }

    pub fn get(&self, field: RegistradoField) -> &str {
        use RegistradoField::*;

        match field {
            FirstNames => &self.first_names,
            LastNames => &self.last_names,
            Gender => &self.gender,
            BirthDate => &self.birth_date,
            Rut => &self.rut,
            Phone => &self.phone,
            Email => &self.email,
            Region => &self.region_code,
            Commune => &self.commune,
            CompanyType => &self.company_type,
            EmployeeBracket => &self.employee_bracket,
            Category => &self.category,
            Advisory => &self.advisory,
        }
    }

    pub fn set(&mut self, field: RegistradoField, value: String) {
        use RegistradoField::*;

        let slot = match field {
            Region => return self.set_region(value),
            FirstNames => &mut self.first_names,
            LastNames => &mut self.last_names,
            Gender => &mut self.gender,
            BirthDate => &mut self.birth_date,
            Rut => &mut self.rut,
            Phone => &mut self.phone,
            Email => &mut self.email,
            Commune => &mut self.commune,
            CompanyType => &mut self.company_type,
            EmployeeBracket => &mut self.employee_bracket,
            Category => &mut self.category,
            Advisory => &mut self.advisory,
        };
        *slot = value;
    }

    /// Select a region. Any previously chosen commune is cleared.
    pub fn set_region(&mut self, code: impl Into<String>) {
        self.region_code = code.into();
        self.commune.clear();
    }

    pub fn available_communes(&self, communes: &[Comuna]) -> Vec<String> {
        communes_for_region(&self.region_code, communes)
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        if self.first_names.trim().is_empty() || self.last_names.trim().is_empty() {
            return Err(ApiError::Validation(
                "Nombres y apellidos son obligatorios".to_string(),
            ));
        }
        Ok(())
    }

    pub fn to_payload(&self, regions: &[Region]) -> Result<RegistradoPayload, ApiError> {
        self.validate()?;

        Ok(RegistradoPayload {
            nombres: self.first_names.trim().to_string(),
            apellidos: self.last_names.trim().to_string(),
            genero: non_empty(&self.gender),
            fecha_nacimiento: non_empty(&self.birth_date),
            rut: non_empty(&self.rut),
            telefono: non_empty(&self.phone),
            email: non_empty(&self.email),
            region: region_name_for_code(&self.region_code, regions).and_then(non_empty),
            comuna: non_empty(&self.commune),
            tipo_empresa: non_empty(&self.company_type),
            numero_trabajadores: non_empty(&self.employee_bracket),
            rubro: non_empty(&self.category),
            asesoria_sobre: non_empty(&self.advisory),
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Normalize a stored date (plain date or RFC 3339 timestamp) for a date input.
pub fn date_input_value(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%Y-%m-%d").to_string();
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return timestamp.date_naive().format("%Y-%m-%d").to_string();
    }
    raw.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GeoUnit;
    use pretty_assertions::assert_eq;

    fn regions() -> Vec<Region> {
        vec![
            GeoUnit {
                code: "05".into(),
                name: "Valparaíso".into(),
                kind: Some("region".into()),
            },
            GeoUnit {
                code: "16".into(),
                name: "Ñuble".into(),
                kind: Some("region".into()),
            },
        ]
    }

    fn communes() -> Vec<Comuna> {
        ["05101:Valparaíso", "05109:Viña del Mar", "16101:Chillán"]
            .iter()
            .map(|entry| {
                let (code, name) = entry.split_once(':').unwrap();
                GeoUnit {
                    code: code.into(),
                    name: name.into(),
                    kind: Some("comuna".into()),
                }
            })
            .collect()
    }

    #[test]
    fn test_names_are_required() {
        let form = RegistradoForm {
            first_names: "  ".into(),
            last_names: "Soto".into(),
            ..Default::default()
        };

        let err = form.to_payload(&regions()).unwrap_err();
        assert_eq!(err.to_string(), "Nombres y apellidos son obligatorios");
    }

    #[test]
    fn test_payload_trims_and_nulls_blanks() {
        let form = RegistradoForm {
            first_names: " Camila ".into(),
            last_names: "Fuentes".into(),
            rut: "   ".into(),
            email: " camila@pyme.cl ".into(),
            region_code: "16".into(),
            commune: "Chillán".into(),
            company_type: "Pyme".into(),
            ..Default::default()
        };

        let payload = form.to_payload(&regions()).unwrap();
        assert_eq!(payload.nombres, "Camila");
        assert_eq!(payload.rut, None);
        assert_eq!(payload.email.as_deref(), Some("camila@pyme.cl"));
        assert_eq!(payload.region.as_deref(), Some("Ñuble"));

        let body = serde_json::to_value(&payload).unwrap();
        assert_eq!(body["tipoEmpresa"], "Pyme");
        assert!(body["fechaNacimiento"].is_null());
    }

    #[test]
    fn test_changing_region_clears_commune() {
        let mut form = RegistradoForm::default();
        form.set_region("05");
        assert_eq!(form.available_communes(&communes()), vec!["Valparaíso", "Viña del Mar"]);

        form.set(RegistradoField::Commune, "Viña del Mar".into());
        assert_eq!(form.get(RegistradoField::Commune), "Viña del Mar");
        form.set(RegistradoField::Region, "16".into());

        assert_eq!(form.commune, "");
        assert_eq!(form.available_communes(&communes()), vec!["Chillán"]);
    }

    #[test]
    fn test_prefill_resolves_region_code() {
        let registrado = Registrado {
            id: 1,
            first_names: "Juan".into(),
            last_names: "Pérez".into(),
            region: Some("ñuble".into()),
            commune: Some("Chillán".into()),
            birth_date: Some("1988-04-02T00:00:00.000Z".into()),
            ..Default::default()
        };

        let form = RegistradoForm::from_registrado(&registrado, &regions());
        assert_eq!(form.region_code, "16");
        assert_eq!(form.commune, "Chillán");
        assert_eq!(form.birth_date, "1988-04-02");
    }

    #[test]
    fn test_date_input_value() {
        assert_eq!(date_input_value("2001-12-31"), "2001-12-31");
        assert_eq!(date_input_value("2001-12-31T03:00:00+00:00"), "2001-12-31");
        assert_eq!(date_input_value("2001-12-31 10:00:00"), "2001-12-31");
        assert_eq!(date_input_value("no es fecha"), "");
    }
}
