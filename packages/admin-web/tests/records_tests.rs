//! Gremio and registrado endpoints, list reloads and reference data.

mod common;

use common::{gremio_json, registrado_json, TestBackend};
use multigremial_admin::api::FileUpload;
use multigremial_admin::forms::{GremioForm, MemberForm, RegistradoForm};
use multigremial_admin::listing::{confirm_and_delete, registrado_filter, Pagination};
use multigremial_admin::types::Cargo;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_partial_json, body_string_contains, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

// ============================================================================
// Deletion
// ============================================================================

#[tokio::test]
async fn test_confirmed_delete_removes_record_from_reloaded_list() {
    let backend = TestBackend::signed_in("jwt").await;

    Mock::given(method("GET"))
        .and(path("/api/admin/gremios"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            gremio_json(1, "Cámara de Turismo", "Turismo"),
            gremio_json(2, "Asociación de Pescadores", "Pesca"),
        ])))
        .up_to_n_times(1)
        .mount(&backend.server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/admin/gremios/1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&backend.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/gremios"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([gremio_json(2, "Asociación de Pescadores", "Pesca")])),
        )
        .mount(&backend.server)
        .await;

    let before = backend.api.list_gremios().await.unwrap();
    assert_eq!(before.len(), 2);

    let deleted = confirm_and_delete("¿Eliminar este gremio?", |_| true, || backend.api.delete_gremio(1))
        .await
        .unwrap();
    assert!(deleted);

    let after = backend.api.list_gremios().await.unwrap();
    assert!(after.iter().all(|g| g.id != 1));
    assert_eq!(after.len(), 1);
}

#[tokio::test]
async fn test_cancelled_delete_makes_no_request() {
    let backend = TestBackend::signed_in("jwt").await;

    Mock::given(method("DELETE"))
        .and(path("/api/admin/registrados/7"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&backend.server)
        .await;

    let mut asked = None;
    let deleted = confirm_and_delete(
        "¿Eliminar este registro?",
        |prompt| {
            asked = Some(prompt.to_string());
            false
        },
        || backend.api.delete_registrado(7),
    )
    .await
    .unwrap();

    assert!(!deleted);
    assert_eq!(asked.as_deref(), Some("¿Eliminar este registro?"));
    assert_eq!(backend.request_count().await, 0);
}

#[tokio::test]
async fn test_failed_delete_uses_fallback_message() {
    let backend = TestBackend::signed_in("jwt").await;

    Mock::given(method("DELETE"))
        .and(path("/api/admin/gremios/3"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&backend.server)
        .await;

    let err = confirm_and_delete("¿Eliminar este gremio?", |_| true, || backend.api.delete_gremio(3))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "No se pudo eliminar");
}

// ============================================================================
// Gremios
// ============================================================================

#[tokio::test]
async fn test_missing_gremio_is_not_found() {
    let backend = TestBackend::signed_in("jwt").await;

    Mock::given(method("GET"))
        .and(path("/api/admin/gremios/99"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&backend.server)
        .await;

    let err = backend.api.get_gremio(99).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_create_gremio_sends_multipart_form() {
    let backend = TestBackend::signed_in("jwt").await;

    Mock::given(method("POST"))
        .and(path("/api/admin/gremios"))
        .and(body_string_contains(r#"name="nombre""#))
        .and(body_string_contains(r#"name="integrantes""#))
        .and(body_string_contains(r#"name="integranteFotoNew_0"; filename="ana.jpg""#))
        .and(body_string_contains(r#"name="logo"; filename="logo.png""#))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 10 })))
        .expect(1)
        .mount(&backend.server)
        .await;

    let form = GremioForm {
        name: "Cámara de Comercio de Osorno".into(),
        category: "Comercio".into(),
        region: "Los Lagos".into(),
        logo: Some(FileUpload::new("logo.png", b"fake-png".to_vec())),
        members: vec![MemberForm {
            name: "Ana".into(),
            role: Cargo::Presidente,
            photo: Some(FileUpload::new("ana.jpg", b"fake-jpg".to_vec())),
            ..Default::default()
        }],
        ..Default::default()
    };

    backend.api.create_gremio(form.to_payload().unwrap()).await.unwrap();
}

#[tokio::test]
async fn test_update_gremio_failure_message() {
    let backend = TestBackend::signed_in("jwt").await;

    Mock::given(method("PUT"))
        .and(path("/api/admin/gremios/4"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>boom</html>"))
        .mount(&backend.server)
        .await;

    let form = GremioForm {
        name: "Gremio".into(),
        category: "Comercio".into(),
        region: "Maule".into(),
        ..Default::default()
    };

    let err = backend
        .api
        .update_gremio(4, form.to_payload().unwrap())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Error al actualizar gremio");
}

// ============================================================================
// Registrados
// ============================================================================

#[tokio::test]
async fn test_registrados_filter_and_page_are_sent_as_query() {
    let backend = TestBackend::signed_in("jwt").await;

    Mock::given(method("GET"))
        .and(path("/api/admin/registrados"))
        .and(query_param("q", "soto"))
        .and(query_param("region", "Ñuble"))
        .and(query_param("page", "2"))
        .and(query_param("pageSize", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [registrado_json(31, "Marta", "Soto", "Ñuble")],
            "total": 21,
            "page": 2,
            "pageSize": 20
        })))
        .expect(1)
        .mount(&backend.server)
        .await;

    let filter = registrado_filter().with("q", " soto ").with("region", "Ñuble");
    let page = backend
        .api
        .list_registrados(&filter, Pagination::new(2, 20))
        .await
        .unwrap();

    assert_eq!(page.total, 21);
    assert_eq!(page.page_count(), 2);
    assert_eq!(page.items[0].full_name(), "Marta Soto");
}

#[tokio::test]
async fn test_bare_array_is_filtered_and_paginated_locally() {
    let backend = TestBackend::signed_in("jwt").await;

    Mock::given(method("GET"))
        .and(path("/api/admin/registrados"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            registrado_json(1, "Juan", "Soto", "Maule"),
            registrado_json(2, "Camila", "Pérez", "Maule"),
            registrado_json(3, "Pedro", "SOTO Ruiz", "Biobío"),
            registrado_json(4, "Rosa", "Sotomayor", "Maule"),
        ])))
        .mount(&backend.server)
        .await;

    let filter = registrado_filter().with("q", "soto");
    let first = backend
        .api
        .list_registrados(&filter, Pagination::new(1, 2))
        .await
        .unwrap();

    assert_eq!(first.total, 3);
    assert_eq!(first.page_count(), 2);
    assert_eq!(first.items.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 3]);

    let filter = filter.with("region", "maule");
    let narrowed = backend
        .api
        .list_registrados(&filter, Pagination::new(1, 20))
        .await
        .unwrap();
    assert_eq!(narrowed.items.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 4]);
}

#[tokio::test]
async fn test_deleting_last_row_of_last_page_steps_back() {
    let backend = TestBackend::signed_in("jwt").await;

    // Twenty records left after the 21st was deleted from page 2
    let remaining: Vec<_> = (1..=20)
        .map(|id| registrado_json(id, "Ana", "Rojas", "Maule"))
        .collect();
    Mock::given(method("GET"))
        .and(path("/api/admin/registrados"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(remaining)))
        .mount(&backend.server)
        .await;

    let filter = registrado_filter();
    let stale = backend
        .api
        .list_registrados(&filter, Pagination::new(2, 20))
        .await
        .unwrap();

    assert!(stale.items.is_empty());
    assert_eq!(stale.total, 20);
    let last = stale.past_end().unwrap();
    assert_eq!(last, 1);

    let reloaded = backend
        .api
        .list_registrados(&filter, Pagination::new(last, 20))
        .await
        .unwrap();
    assert_eq!(reloaded.items.len(), 20);
    assert_eq!(reloaded.past_end(), None);
}

#[tokio::test]
async fn test_create_registrado_sends_nulls_for_blanks() {
    let backend = TestBackend::signed_in("jwt").await;

    Mock::given(method("POST"))
        .and(path("/api/admin/registros"))
        .and(body_partial_json(json!({
            "nombres": "Camila",
            "apellidos": "Fuentes",
            "rut": null,
            "region": null,
            "tipoEmpresa": "Emprendedor"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 50 })))
        .expect(1)
        .mount(&backend.server)
        .await;

    let form = RegistradoForm {
        first_names: "Camila ".into(),
        last_names: " Fuentes".into(),
        company_type: "Emprendedor".into(),
        ..Default::default()
    };

    let payload = form.to_payload(&[]).unwrap();
    backend.api.create_registrado(&payload).await.unwrap();
}

#[tokio::test]
async fn test_registrado_is_read_from_registros_endpoint() {
    let backend = TestBackend::signed_in("jwt").await;

    Mock::given(method("GET"))
        .and(path("/api/admin/registros/12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 12,
            "nombres": "Luis",
            "apellidos": "Vera",
            "deseaAsesoria": "Financiamiento",
            "createdAt": "2024-03-01T12:00:00Z"
        })))
        .mount(&backend.server)
        .await;

    let registrado = backend.api.get_registrado(12).await.unwrap();
    assert_eq!(registrado.advisory.as_deref(), Some("Financiamiento"));
    assert_eq!(registrado.rut, None);
}

// ============================================================================
// Reference Data
// ============================================================================

#[tokio::test]
async fn test_geo_keeps_only_matching_kinds() {
    let backend = TestBackend::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/registros/regiones"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "codigo": "05", "nombre": "Valparaíso", "tipo": "region" },
            { "codigo": "05101", "nombre": "Valparaíso", "tipo": "comuna" },
            { "nombre": 42 }
        ])))
        .mount(&backend.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/registros/comunas"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "codigo": "05109", "nombre": "Viña del Mar", "tipo": "comuna" },
            { "codigo": "05101", "nombre": "Valparaíso", "tipo": "comuna" },
            { "codigo": "13", "nombre": "Metropolitana", "tipo": "region" }
        ])))
        .mount(&backend.server)
        .await;

    let geo = backend.api.load_geo().await.unwrap();
    assert_eq!(geo.regions.len(), 1);
    assert_eq!(geo.communes.len(), 2);

    let mut form = RegistradoForm::default();
    form.set_region("5");
    assert_eq!(
        form.available_communes(&geo.communes),
        vec!["Valparaíso", "Viña del Mar"]
    );
}

#[tokio::test]
async fn test_geo_non_array_body_yields_empty_list() {
    let backend = TestBackend::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/registros/regiones"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "error": "sin datos" })))
        .mount(&backend.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/registros/comunas"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&backend.server)
        .await;

    let geo = backend.api.load_geo().await.unwrap();
    assert!(geo.regions.is_empty());
    assert!(geo.communes.is_empty());
}

#[tokio::test]
async fn test_geo_failure_message() {
    let backend = TestBackend::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/registros/regiones"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&backend.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/registros/comunas"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&backend.server)
        .await;

    let err = backend.api.load_geo().await.unwrap_err();
    assert_eq!(err.to_string(), "Error cargando regiones/comunas");
}
