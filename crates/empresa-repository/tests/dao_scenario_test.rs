//! End-to-end DAO tests against the in-memory store.

mod common;

use common::row;
use empresa_core::{Departamento, Funcionario};
use empresa_repository::{
    mock_store, DepartamentoDao, FuncionarioDao, MockTableStore, Predicate, TableStore, FUNCIONARIO_TABLE,
};
use serde_json::json;
use std::sync::Arc;

fn shared_mock() -> Arc<dyn TableStore> {
    Arc::new(mock_store())
}

#[tokio::test]
async fn test_department_and_employee_scenario() {
    let store = shared_mock();
    let departamentos = DepartamentoDao::from_store(Arc::clone(&store));
    let funcionarios = FuncionarioDao::from_store(Arc::clone(&store));

    let engenharia = departamentos
        .create(&Departamento::new("Engenharia").with_localizacao("Bloco A"))
        .await
        .expect("Department should be created");
    assert_eq!(engenharia.numero, Some(1));
    assert_eq!(engenharia.nome, "Engenharia");
    assert_eq!(engenharia.localizacao.as_deref(), Some("Bloco A"));

    let ana = Funcionario::new("12345678900", "Ana", "Silva").with_departamento(1);
    let created = funcionarios.create(&ana).await.expect("Employee should be created");
    assert_eq!(created, ana);

    let all = funcionarios.read_all().await;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].cpf, "12345678900");
    assert_eq!(all[0].pnome, "Ana");
    assert_eq!(all[0].unome, "Silva");
    assert_eq!(all[0].numero_departamento, Some(1));
}

#[tokio::test]
async fn test_second_department_gets_next_number() {
    let departamentos = DepartamentoDao::from_store(shared_mock());

    let first = departamentos.create(&Departamento::new("Engenharia")).await.unwrap();
    let second = departamentos.create(&Departamento::new("Financeiro")).await.unwrap();

    assert_eq!(first.numero, Some(1));
    assert_eq!(second.numero, Some(2));
    assert_eq!(departamentos.read_all().await.len(), 2);
}

#[tokio::test]
async fn test_update_department_by_number() {
    let departamentos = DepartamentoDao::from_store(shared_mock());

    let mut dept = departamentos
        .create(&Departamento::new("Engenharia").with_localizacao("Bloco A"))
        .await
        .unwrap();
    dept.nome = format!("{} (Updated)", dept.nome);

    let updated = departamentos.update(1, &dept).await.expect("Department should be updated");
    assert_eq!(updated.nome, "Engenharia (Updated)");
    assert_eq!(updated.numero, Some(1));
    assert_eq!(updated.localizacao.as_deref(), Some("Bloco A"));

    assert!(departamentos.update(99, &dept).await.is_none());
}

#[tokio::test]
async fn test_update_by_explicit_field() {
    let funcionarios = FuncionarioDao::from_store(shared_mock());
    let ana = Funcionario::new("1", "Ana", "Silva");
    funcionarios.create(&ana).await.unwrap();

    let promoted = ana.clone().with_salario(5000.0);
    let updated = funcionarios
        .update_by("pnome", "Ana", &promoted)
        .await
        .expect("Employee should be updated");
    assert_eq!(updated.salario, 5000.0);
}

#[tokio::test]
async fn test_delete_removes_only_matching_employee() {
    let store = shared_mock();
    let funcionarios = FuncionarioDao::from_store(Arc::clone(&store));

    funcionarios.create(&Funcionario::new("123", "Ana", "Silva")).await.unwrap();
    funcionarios.create(&Funcionario::new("456", "Bia", "Lima")).await.unwrap();

    assert!(funcionarios.delete("123").await);
    assert!(!funcionarios.delete("123").await);

    let remaining = funcionarios.read_all().await;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].cpf, "456");
}

#[tokio::test]
async fn test_read_all_converts_aliases_and_defaults() {
    let store = MockTableStore::new().with_rows(
        FUNCIONARIO_TABLE,
        vec![row(json!({"id": "999", "primeiro_nome": "Caio", "ultimo_nome": "Souza"}))],
    );
    let funcionarios = FuncionarioDao::from_store(Arc::new(store));

    let all = funcionarios.read_all().await;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].cpf, "999");
    assert_eq!(all[0].pnome, "Caio");
    assert_eq!(all[0].endereco, "Macau-Rn");
    assert_eq!(all[0].salario, 1518.01);
    assert_eq!(all[0].sexo, "f");
}

#[tokio::test]
async fn test_store_level_update_of_single_field() {
    let store = mock_store().with_rows(
        "departamento",
        vec![row(json!({"numero": 7, "nome": "X", "localizacao": "Bloco C", "gerente_cpf": null}))],
    );

    let response = store
        .update("departamento", row(json!({"nome": "X (Updated)"})), &Predicate::eq("numero", 7))
        .await
        .unwrap();

    let rows = response.into_rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0],
        row(json!({"numero": 7, "nome": "X (Updated)", "localizacao": "Bloco C", "gerente_cpf": null}))
    );
}

#[tokio::test]
async fn test_create_after_max_department_number_is_none() {
    let store = mock_store().with_rows("departamento", vec![row(json!({"numero": i64::MAX, "nome": "Topo"}))]);
    let departamentos = DepartamentoDao::from_store(Arc::new(store));

    assert!(departamentos.create(&Departamento::new("Engenharia")).await.is_none());
    assert_eq!(departamentos.read_all().await.len(), 1);
}
