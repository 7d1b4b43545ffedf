//! Registrado endpoints

use reqwest::Method;

use super::{ApiClient, ApiResult};
use crate::forms::RegistradoPayload;
use crate::listing::{ListFilter, Pagination};
use crate::types::{Listing, Page, Registrado};

impl ApiClient {
    /// Server-side filtered page of registrados.
    ///
    /// Backends that ignore the query and answer a bare array get the same
    /// filter and pagination applied here.
    pub async fn list_registrados(
        &self,
        filter: &ListFilter,
        pagination: Pagination,
    ) -> ApiResult<Page<Registrado>> {
        let mut query = filter.query_pairs();
        query.extend(pagination.query_pairs());

        let req = self
            .request(Method::GET, "/api/admin/registrados")
            .query(&query);

        let listing: Listing<Registrado> = self.send_json(req, "Error al cargar registrados").await?;

        Ok(match listing {
            Listing::Paged(page) => page,
            Listing::Bare(all) => {
                tracing::debug!(count = all.len(), "Paginating registrados locally");
                pagination.slice(&filter.apply(&all))
            }
        })
    }

    pub async fn get_registrado(&self, id: i64) -> ApiResult<Registrado> {
        let req = self.request(Method::GET, &format!("/api/admin/registros/{id}"));
        self.send_json(req, "No pude cargar el registrado").await
    }

    pub async fn create_registrado(&self, payload: &RegistradoPayload) -> ApiResult<()> {
        let req = self
            .request(Method::POST, "/api/admin/registros")
            .json(payload);

        self.send_empty(req, "Error al crear registrado").await?;
        tracing::info!("Registrado created");
        Ok(())
    }

    pub async fn update_registrado(&self, id: i64, payload: &RegistradoPayload) -> ApiResult<()> {
        let req = self
            .request(Method::PUT, &format!("/api/admin/registros/{id}"))
            .json(payload);

        self.send_empty(req, "Error al actualizar").await?;
        tracing::info!(id, "Registrado updated");
        Ok(())
    }

    pub async fn delete_registrado(&self, id: i64) -> ApiResult<()> {
        let req = self.request(Method::DELETE, &format!("/api/admin/registrados/{id}"));

        self.send_empty(req, "No se pudo eliminar").await?;
        tracing::info!(id, "Registrado deleted");
        Ok(())
    }
}
