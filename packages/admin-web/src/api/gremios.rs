//! Gremio endpoints

use reqwest::Method;

use super::{ApiClient, ApiResult, MultipartPayload};
use crate::types::Gremio;

impl ApiClient {
    pub async fn list_gremios(&self) -> ApiResult<Vec<Gremio>> {
        let req = self.request(Method::GET, "/api/admin/gremios");
        self.send_json(req, "Error al cargar gremios").await
    }

    pub async fn get_gremio(&self, id: i64) -> ApiResult<Gremio> {
        let req = self.request(Method::GET, &format!("/api/admin/gremios/{id}"));
        self.send_json(req, "Error al cargar gremio").await
    }

    pub async fn create_gremio(&self, payload: MultipartPayload) -> ApiResult<()> {
        let req = self
            .request(Method::POST, "/api/admin/gremios")
            .multipart(payload.into_form()?);

        self.send_empty(req, "Error al crear gremio").await?;
        tracing::info!("Gremio created");
        Ok(())
    }

    pub async fn update_gremio(&self, id: i64, payload: MultipartPayload) -> ApiResult<()> {
        let req = self
            .request(Method::PUT, &format!("/api/admin/gremios/{id}"))
            .multipart(payload.into_form()?);

        self.send_empty(req, "Error al actualizar gremio").await?;
        tracing::info!(id, "Gremio updated");
        Ok(())
    }

    pub async fn delete_gremio(&self, id: i64) -> ApiResult<()> {
        let req = self.request(Method::DELETE, &format!("/api/admin/gremios/{id}"));

        self.send_empty(req, "No se pudo eliminar").await?;
        tracing::info!(id, "Gremio deleted");
        Ok(())
    }
}
