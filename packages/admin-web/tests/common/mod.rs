//! Shared setup for tests that talk to a mock backend.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use multigremial_admin::api::ApiClient;
use multigremial_admin::auth::{MemoryStorage, Session, TokenStore};
use serde_json::{json, Value};
use wiremock::MockServer;

pub struct TestBackend {
    pub server: MockServer,
    pub store: Rc<MemoryStorage>,
    pub session: Session,
    pub api: ApiClient,
    /// Set when the client's 401 hook fires
    pub signed_out: Rc<Cell<bool>>,
}

impl TestBackend {
    /// Backend with no stored credentials.
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let store = Rc::new(MemoryStorage::new());
        let session = Session::new(store.clone());
        let signed_out = Rc::new(Cell::new(false));

        let flag = signed_out.clone();
        let api = ApiClient::new(server.uri(), session.clone()).on_unauthorized(move || flag.set(true));

        Self {
            server,
            store,
            session,
            api,
            signed_out,
        }
    }

    /// Backend with a token and user already stored.
    pub async fn signed_in(token: &str) -> Self {
        let backend = Self::start().await;
        backend
            .store
            .set("token", token)
            .expect("memory storage never fails");
        backend
            .store
            .set("usuario", r#"{"email":"admin@multigremial.cl","nombre":"Admin"}"#)
            .expect("memory storage never fails");
        backend
    }

    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|r| r.len())
            .unwrap_or_default()
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn gremio_json(id: i64, nombre: &str, rubro: &str) -> Value {
    json!({
        "id": id,
        "nombre": nombre,
        "rut": null,
        "rubro": rubro,
        "region": "Los Lagos",
        "descripcion": null,
        "logoUrl": null,
        "cartaPdfUrl": null,
        "integrantes": []
    })
}

pub fn registrado_json(id: i64, nombres: &str, apellidos: &str, region: &str) -> Value {
    json!({
        "id": id,
        "nombres": nombres,
        "apellidos": apellidos,
        "rut": format!("{id}.111.111-1"),
        "email": format!("{}@pyme.cl", nombres.to_lowercase()),
        "telefono": "+56912345678",
        "region": region,
        "rubro": "Comercio",
        "tipoEmpresa": "Pyme"
    })
}
