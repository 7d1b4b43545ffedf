//! Type definitions for REST API payloads
//!
//! These mirror the JSON returned by the Multigremial backend. Field names are
//! English on the Rust side and renamed to the backend's keys.

use serde::{Deserialize, Deserializer, Serialize};

/// Treats an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Gremio Types
// ============================================================================

/// Role of a member inside a gremio.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cargo {
    Presidente,
    Vicepresidente,
    #[default]
    #[serde(other)]
    Miembro,
}

impl Cargo {
    pub fn label(&self) -> &'static str {
        match self {
            Cargo::Presidente => "Presidente",
            Cargo::Vicepresidente => "Vicepresidente",
            Cargo::Miembro => "Miembro",
        }
    }

    pub fn variants() -> &'static [Cargo] {
        &[Cargo::Presidente, Cargo::Vicepresidente, Cargo::Miembro]
    }

    /// Parses a select value; anything unknown is a plain member.
    pub fn from_label(label: &str) -> Self {
        Cargo::variants()
            .iter()
            .copied()
            .find(|c| c.label() == label)
            .unwrap_or_default()
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Cargo::Presidente => "bg-amber-100 text-amber-800",
            Cargo::Vicepresidente => "bg-blue-100 text-blue-800",
            Cargo::Miembro => "bg-gray-100 text-gray-700",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Integrante {
    pub id: i64,
    #[serde(rename = "nombre", default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,
    #[serde(rename = "correo", default)]
    pub email: Option<String>,
    #[serde(rename = "cargo", default, deserialize_with = "null_as_default")]
    pub role: Cargo,
    #[serde(rename = "fotoUrl", default)]
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gremio {
    pub id: i64,
    #[serde(rename = "nombre", default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub rut: Option<String>,
    #[serde(rename = "rubro", default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub region: String,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
    #[serde(rename = "logoUrl", default)]
    pub logo_url: Option<String>,
    #[serde(rename = "cartaPdfUrl", default)]
    pub letter_url: Option<String>,
    #[serde(rename = "integrantes", default, deserialize_with = "null_as_default")]
    pub members: Vec<Integrante>,
}

// ============================================================================
// Registrado Types
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Registrado {
    pub id: i64,
    #[serde(rename = "nombres", default, deserialize_with = "null_as_default")]
    pub first_names: String,
    #[serde(rename = "apellidos", default, deserialize_with = "null_as_default")]
    pub last_names: String,
    #[serde(rename = "genero", default)]
    pub gender: Option<String>,
    #[serde(rename = "fechaNacimiento", default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub rut: Option<String>,
    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(rename = "comuna", default)]
    pub commune: Option<String>,
    #[serde(rename = "tipoEmpresa", default)]
    pub company_type: Option<String>,
    #[serde(rename = "numeroTrabajadores", default)]
    pub employee_bracket: Option<String>,
    #[serde(rename = "rubro", default)]
    pub category: Option<String>,
    #[serde(rename = "asesoriaSobre", alias = "deseaAsesoria", default)]
    pub advisory: Option<String>,
    #[serde(rename = "createdAt", default, skip_serializing)]
    pub created_at: Option<String>,
}

impl Registrado {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_names, self.last_names)
            .trim()
            .to_string()
    }
}

// ============================================================================
// Reference Data
// ============================================================================

/// A region or commune from the DPA reference tables.
///
/// Commune codes carry their region in the first two characters
/// (`"05602"` belongs to region `"05"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoUnit {
    #[serde(rename = "codigo", default, deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(rename = "nombre", default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "tipo", default)]
    pub kind: Option<String>,
}

pub type Region = GeoUnit;
pub type Comuna = GeoUnit;

// ============================================================================
// Auth Types
// ============================================================================

/// The administrator object returned at login and cached in storage.
///
/// Unknown fields are preserved so the cached copy matches what the backend
/// sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "nombre", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl AdminUser {
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().or(self.email.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(rename = "usuario", default)]
    pub user: AdminUser,
}

// ============================================================================
// Listing Wrappers
// ============================================================================

/// One page of a server-side paginated collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

impl<T> Page<T> {
    pub fn page_count(&self) -> u32 {
        if self.page_size == 0 {
            return 1;
        }
        let pages = self.total.div_ceil(u64::from(self.page_size));
        u32::try_from(pages).unwrap_or(u32::MAX).max(1)
    }

    /// Last existing page when this one came back empty past the end of a
    /// non-empty collection, e.g. after deleting the only row of the last page.
    pub fn past_end(&self) -> Option<u32> {
        let last = self.page_count();
        (self.items.is_empty() && self.total > 0 && self.page > last).then_some(last)
    }
}

/// The registrados endpoint answers either a page or, on older backends, a
/// bare array holding every record.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Paged(Page<T>),
    Bare(Vec<T>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_gremio_tolerates_nulls() {
        let gremio: Gremio = serde_json::from_value(json!({
            "id": 4,
            "nombre": "Cámara de Comercio",
            "rut": null,
            "rubro": "Comercio",
            "region": null,
            "descripcion": null,
            "integrantes": null
        }))
        .unwrap();

        assert_eq!(gremio.name, "Cámara de Comercio");
        assert_eq!(gremio.region, "");
        assert!(gremio.members.is_empty());
    }

    #[test]
    fn test_unknown_cargo_is_miembro() {
        let member: Integrante = serde_json::from_value(json!({
            "id": 1,
            "nombre": "Ana",
            "cargo": "Tesorera"
        }))
        .unwrap();

        assert_eq!(member.role, Cargo::Miembro);
        assert_eq!(Cargo::from_label("Vicepresidente"), Cargo::Vicepresidente);
    }

    #[test]
    fn test_registrado_accepts_legacy_advisory_key() {
        let registrado: Registrado = serde_json::from_value(json!({
            "id": 9,
            "nombres": "Luis",
            "apellidos": "Pérez",
            "deseaAsesoria": "Formación"
        }))
        .unwrap();

        assert_eq!(registrado.advisory.as_deref(), Some("Formación"));
        assert_eq!(registrado.full_name(), "Luis Pérez");
    }

    #[test]
    fn test_listing_accepts_both_shapes() {
        let paged: Listing<Registrado> = serde_json::from_value(json!({
            "items": [{ "id": 1, "nombres": "A", "apellidos": "B" }],
            "total": 41,
            "page": 1,
            "pageSize": 20
        }))
        .unwrap();
        match paged {
            Listing::Paged(page) => assert_eq!(page.page_count(), 3),
            Listing::Bare(_) => panic!("expected a page"),
        }

        let bare: Listing<Registrado> =
            serde_json::from_value(json!([{ "id": 1, "nombres": "A", "apellidos": "B" }])).unwrap();
        assert!(matches!(bare, Listing::Bare(items) if items.len() == 1));
    }

    #[test]
    fn test_empty_page_past_end_points_to_last_page() {
        let page = |items: Vec<u8>, total, page| Page { items, total, page, page_size: 20 };

        assert_eq!(page(vec![], 20, 2).past_end(), Some(1));
        assert_eq!(page(vec![], 45, 5).past_end(), Some(3));
        // Genuinely empty collection stays where it is
        assert_eq!(page(vec![], 0, 1).past_end(), None);
        assert_eq!(page(vec![1], 21, 2).past_end(), None);
    }

    #[test]
    fn test_admin_user_keeps_unknown_fields() {
        let user: AdminUser = serde_json::from_value(json!({
            "id": 1,
            "email": "admin@multigremial.cl",
            "rol": "admin"
        }))
        .unwrap();

        let back = serde_json::to_value(&user).unwrap();
        assert_eq!(back["rol"], "admin");
        assert_eq!(user.display_name(), Some("admin@multigremial.cl"));
    }
}
