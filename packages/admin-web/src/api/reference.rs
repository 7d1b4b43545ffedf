//! Region and commune reference data

use reqwest::Method;
use serde_json::Value;

use super::{ApiClient, ApiResult};
use crate::geo::retain_kind;
use crate::types::{Comuna, GeoUnit, Region};

/// Both reference tables, narrowed to their own kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoData {
    pub regions: Vec<Region>,
    pub communes: Vec<Comuna>,
}

impl ApiClient {
    /// Fetch regions and communes concurrently; fails if either request does.
    pub async fn load_geo(&self) -> ApiResult<GeoData> {
        let (regions, communes) = futures::join!(
            self.fetch_units("/api/admin/registros/regiones", "Error cargando regiones/comunas"),
            self.fetch_units("/api/admin/registros/comunas", "Error cargando regiones/comunas"),
        );

        Ok(GeoData {
            regions: retain_kind(regions?, "region"),
            communes: retain_kind(communes?, "comuna"),
        })
    }

    /// A body that is not an array yields no entries; malformed entries are skipped.
    async fn fetch_units(&self, path: &str, fallback: &str) -> ApiResult<Vec<GeoUnit>> {
        let req = self.public(Method::GET, path);
        let response = self.send(req, fallback).await?;
        let bytes = response.bytes().await?;

        let units = match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Array(entries)) => entries
                .into_iter()
                .filter_map(|entry| serde_json::from_value(entry).ok())
                .collect(),
            _ => {
                tracing::warn!(path, "Reference data was not a JSON array");
                Vec::new()
            }
        };

        Ok(units)
    }
}
