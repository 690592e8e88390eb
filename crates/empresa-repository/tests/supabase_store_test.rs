//! Supabase store and store selection against a mock PostgREST server.

mod common;

use common::{row, supabase_config, supabase_store, TEST_KEY};
use empresa_core::{Departamento, EmpresaError};
use empresa_repository::{
    select_store, DepartamentoDao, FuncionarioDao, Payload, Predicate, StatusSource, StoreKind, TableStore,
};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_select_sends_credentials_and_returns_rows() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/departamento"))
        .and(query_param("select", "*"))
        .and(header("apikey", TEST_KEY))
        .and(header("authorization", format!("Bearer {}", TEST_KEY).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"numero": 1, "nome": "Engenharia", "localizacao": "Bloco A"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let response = supabase_store(&server).select("departamento").await.unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.source, StatusSource::Transport);
    assert_eq!(
        response.payload,
        Payload::Many(vec![row(json!({"numero": 1, "nome": "Engenharia", "localizacao": "Bloco A"}))])
    );
}

#[tokio::test]
async fn test_insert_posts_row_and_asks_for_representation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/departamento"))
        .and(header("prefer", "return=representation"))
        .and(body_json(json!({"nome": "RH"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([{"numero": 3, "nome": "RH"}])))
        .expect(1)
        .mount(&server)
        .await;

    let response = supabase_store(&server)
        .insert("departamento", row(json!({"nome": "RH"})))
        .await
        .unwrap();

    assert_eq!(response.status, 201);
    assert_eq!(response.into_rows(), vec![row(json!({"numero": 3, "nome": "RH"}))]);
}

#[tokio::test]
async fn test_update_filters_by_predicate() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/rest/v1/departamento"))
        .and(query_param("numero", "eq.7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"numero": 7, "nome": "X (Updated)"}])))
        .expect(1)
        .mount(&server)
        .await;

    let response = supabase_store(&server)
        .update("departamento", row(json!({"nome": "X (Updated)"})), &Predicate::eq("numero", 7))
        .await
        .unwrap();

    assert_eq!(response.into_rows()[0].get("nome"), Some(&json!("X (Updated)")));
}

#[tokio::test]
async fn test_delete_no_content_counts_as_success() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/rest/v1/funcionario"))
        .and(query_param("cpf", "eq.123"))
        .respond_with(ResponseTemplate::new(204))
        .expect(2)
        .mount(&server)
        .await;

    let store = supabase_store(&server);
    let response = store.delete("funcionario", &Predicate::eq("cpf", "123")).await.unwrap();
    assert_eq!(response.payload, Payload::Empty);
    assert!(response.is_acknowledged());

    let dao = FuncionarioDao::from_store(Arc::new(store));
    assert!(dao.delete("123").await);
}

#[tokio::test]
async fn test_rejected_key_maps_to_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/departamento"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid API key"})))
        .mount(&server)
        .await;

    let err = supabase_store(&server).select("departamento").await.unwrap_err();
    assert!(matches!(err, EmpresaError::Unauthorized(_)));
    assert!(err.is_auth_failure());
}

#[tokio::test]
async fn test_server_error_degrades_dao_to_sentinels() {
    let server = MockServer::start().await;
    Mock::given(path("/rest/v1/departamento"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let dao = DepartamentoDao::from_store(Arc::new(supabase_store(&server)));
    let record = Departamento::new("RH");

    assert!(dao.create(&record).await.is_none());
    assert!(dao.read_all().await.is_empty());
    assert!(dao.update(1, &record).await.is_none());
    assert!(!dao.delete(1).await);
}

#[tokio::test]
async fn test_selector_uses_supabase_when_probe_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/departamento"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let selected = select_store(&supabase_config(&server)).await;

    assert_eq!(selected.kind, StoreKind::Supabase);
    assert_eq!(selected.store.name(), "supabase");
}

#[tokio::test]
async fn test_selector_falls_back_when_probe_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/departamento"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid API key"})))
        .mount(&server)
        .await;

    let selected = select_store(&supabase_config(&server)).await;

    assert_eq!(selected.kind, StoreKind::Mock);
    assert_eq!(selected.store.name(), "mock");
}

#[tokio::test]
async fn test_selector_falls_back_on_error_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/departamento"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 403, "message": "forbidden"})))
        .mount(&server)
        .await;

    let selected = select_store(&supabase_config(&server)).await;
    assert_eq!(selected.kind, StoreKind::Mock);
}

#[tokio::test]
async fn test_selected_mock_generates_department_numbers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let selected = select_store(&supabase_config(&server)).await;
    let dao = DepartamentoDao::from_store(selected.store);

    let created = dao.create(&Departamento::new("Engenharia")).await.unwrap();
    assert_eq!(created.numero, Some(1));
}
