//! Gremio create/edit form state

use serde_json::json;

use crate::api::{ApiError, FileUpload, MultipartPayload};
use crate::types::{Cargo, Gremio};

/// One member row on the form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberForm {
    /// Present for members that already exist on the backend.
    pub id: Option<i64>,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub role: Cargo,
    /// Newly picked photo, replacing `photo_url` when submitted.
    pub photo: Option<FileUpload>,
    pub photo_url: Option<String>,
}

impl MemberForm {
    /// Multipart field carrying this member's new photo.
    ///
    /// Existing members are addressed by id, new ones by their position in
    /// the submitted list.
    pub fn photo_field(&self, index: usize) -> String {
        match self.id {
            Some(id) => format!("integranteFotoId_{id}"),
            None => format!("integranteFotoNew_{index}"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GremioForm {
    pub name: String,
    pub rut: String,
    pub category: String,
    pub region: String,
    pub description: String,
    pub logo: Option<FileUpload>,
    pub letter: Option<FileUpload>,
    pub current_logo_url: Option<String>,
    pub current_letter_url: Option<String>,
    pub members: Vec<MemberForm>,
}

impl GremioForm {
    pub fn from_gremio(gremio: &Gremio) -> Self {
        Self {
            name: gremio.name.clone(),
            rut: gremio.rut.clone().unwrap_or_default(),
            category: gremio.category.clone(),
            region: gremio.region.clone(),
            description: gremio.description.clone().unwrap_or_default(),
            logo: None,
            letter: None,
            current_logo_url: gremio.logo_url.clone(),
            current_letter_url: gremio.letter_url.clone(),
            members: gremio
                .members
                .iter()
                .map(|m| MemberForm {
                    id: Some(m.id),
                    name: m.name.clone(),
                    phone: m.phone.clone().unwrap_or_default(),
                    email: m.email.clone().unwrap_or_default(),
                    role: m.role,
                    photo: None,
                    photo_url: m.photo_url.clone(),
                })
                .collect(),
        }
    }

    /// Append an empty member with the default role.
    pub fn add_member(&mut self) {
        self.members.push(MemberForm::default());
    }

    pub fn remove_member(&mut self, index: usize) {
        if index < self.members.len() {
            self.members.remove(index);
        }
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.is_empty() || self.category.is_empty() || self.region.is_empty() {
            return Err(ApiError::Validation(
                "Completá los datos obligatorios".to_string(),
            ));
        }
        Ok(())
    }

    /// Build the multipart submission shared by create and update.
    pub fn to_payload(&self) -> Result<MultipartPayload, ApiError> {
        self.validate()?;

        let mut payload = MultipartPayload::new();
        payload.text("nombre", self.name.as_str());
        let rut = self.rut.trim();
        if !rut.is_empty() {
            payload.text("rut", rut);
        }
        payload
            .text("rubro", self.category.as_str())
            .text("region", self.region.as_str())
            .text("descripcion", self.description.as_str());

        if let Some(logo) = &self.logo {
            payload.file("logo", logo.clone());
        }
        if let Some(letter) = &self.letter {
            payload.file("cartaAdhesion", letter.clone());
        }

        let members: Vec<_> = self
            .members
            .iter()
            .map(|m| {
                json!({
                    "id": m.id,
                    "nombre": m.name,
                    "telefono": m.phone,
                    "correo": m.email,
                    "cargo": m.role.label(),
                    "fotoUrl": m.photo_url,
                })
            })
            .collect();
        payload.text("integrantes", serde_json::Value::Array(members).to_string());

        for (index, member) in self.members.iter().enumerate() {
            if let Some(photo) = &member.photo {
                payload.file(member.photo_field(index), photo.clone());
            }
        }

        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::PartValue;
    use crate::types::Integrante;
    use pretty_assertions::assert_eq;

    fn filled() -> GremioForm {
        GremioForm {
            name: "Cámara de Turismo".into(),
            category: "Hotelería / Turismo".into(),
            region: "Los Lagos".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_required_fields() {
        let mut form = filled();
        form.region.clear();

        let err = form.to_payload().unwrap_err();
        assert_eq!(err.to_string(), "Completá los datos obligatorios");
    }

    #[test]
    fn test_blank_rut_is_omitted() {
        let mut form = filled();
        form.rut = "   ".into();

        let payload = form.to_payload().unwrap();
        assert_eq!(
            payload.names(),
            vec!["nombre", "rubro", "region", "descripcion", "integrantes"]
        );

        form.rut = " 65.432.100-K ".into();
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.text_value("rut"), Some("65.432.100-K"));
    }

    #[test]
    fn test_member_photos_addressed_by_id_or_index() {
        let mut form = filled();
        form.members = vec![
            MemberForm {
                id: Some(17),
                name: "Rosa".into(),
                role: Cargo::Presidente,
                photo: Some(FileUpload::new("rosa.jpg", vec![1])),
                photo_url: Some("https://cdn/rosa-old.jpg".into()),
                ..Default::default()
            },
            MemberForm {
                id: Some(18),
                name: "Tomás".into(),
                ..Default::default()
            },
            MemberForm {
                name: "Nuevo".into(),
                photo: Some(FileUpload::new("nuevo.png", vec![2])),
                ..Default::default()
            },
        ];

        let payload = form.to_payload().unwrap();
        let names = payload.names();
        assert!(names.contains(&"integranteFotoId_17"));
        assert!(names.contains(&"integranteFotoNew_2"));
        assert!(!names.iter().any(|n| n.contains("18")));

        let members: serde_json::Value =
            serde_json::from_str(payload.text_value("integrantes").unwrap()).unwrap();
        assert_eq!(
            members,
            json!([
                { "id": 17, "nombre": "Rosa", "telefono": "", "correo": "", "cargo": "Presidente", "fotoUrl": "https://cdn/rosa-old.jpg" },
                { "id": 18, "nombre": "Tomás", "telefono": "", "correo": "", "cargo": "Miembro", "fotoUrl": null },
                { "id": null, "nombre": "Nuevo", "telefono": "", "correo": "", "cargo": "Miembro", "fotoUrl": null }
            ])
        );
    }

    #[test]
    fn test_files_are_attached() {
        let mut form = filled();
        form.logo = Some(FileUpload::new("logo.png", vec![9]));
        form.letter = Some(FileUpload::new("carta.pdf", vec![8]));

        let payload = form.to_payload().unwrap();
        match payload.get("cartaAdhesion") {
            Some(PartValue::File(upload)) => assert_eq!(upload.content_type, "application/pdf"),
            other => panic!("expected letter file, got {other:?}"),
        }
        assert!(matches!(payload.get("logo"), Some(PartValue::File(_))));
    }

    #[test]
    fn test_prefill_from_existing_gremio() {
        let gremio = Gremio {
            id: 3,
            name: "Gremio".into(),
            rut: None,
            category: "Comercio".into(),
            region: "Maule".into(),
            description: Some("Desc".into()),
            logo_url: Some("https://cdn/logo.jpg".into()),
            letter_url: None,
            members: vec![Integrante {
                id: 5,
                name: "Ana".into(),
                phone: Some("+56911111111".into()),
                email: None,
                role: Cargo::Vicepresidente,
                photo_url: None,
            }],
        };

        let form = GremioForm::from_gremio(&gremio);
        assert_eq!(form.rut, "");
        assert_eq!(form.current_logo_url.as_deref(), Some("https://cdn/logo.jpg"));
        assert_eq!(form.members[0].id, Some(5));
        assert_eq!(form.members[0].role, Cargo::Vicepresidente);
        assert_eq!(form.members[0].photo_field(0), "integranteFotoId_5");
    }

    #[test]
    fn test_add_and_remove_members() {
        let mut form = filled();
        form.add_member();
        form.add_member();
        form.members[1].name = "Segundo".into();

        form.remove_member(0);
        form.remove_member(7);

        assert_eq!(form.members.len(), 1);
        assert_eq!(form.members[0].name, "Segundo");
        assert_eq!(form.members[0].role, Cargo::Miembro);
    }
}
