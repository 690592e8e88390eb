//! Department/employee walkthrough over whichever store was selected.

use empresa_core::{Departamento, EmpresaError, EmpresaResult, Funcionario};
use empresa_repository::{DepartamentoDao, FuncionarioDao, TableStore};
use std::sync::Arc;
use tracing::{info, warn};

/// What the walkthrough observed.
#[derive(Debug, Clone)]
pub struct DemoReport {
    /// Department as stored after the rename.
    pub departamento: Departamento,
    /// Employees read back before the delete.
    pub funcionarios: Vec<Funcionario>,
    /// Whether the employee delete was acknowledged.
    pub deleted: bool,
    /// Employees left after the delete.
    pub remaining: usize,
}

/// Creates a department and an employee, reads them back, renames the
/// department and deletes the employee.
///
/// DAO calls never fail; a missing result is turned into an error here so
/// the binary can report it.
pub async fn run_demo(store: Arc<dyn TableStore>) -> EmpresaResult<DemoReport> {
    let departamentos = DepartamentoDao::from_store(Arc::clone(&store));
    let funcionarios = FuncionarioDao::from_store(store);

    let engenharia = departamentos
        .create(&Departamento::new("Engenharia").with_localizacao("Bloco A"))
        .await
        .ok_or_else(|| EmpresaError::internal("Department was not created"))?;
    info!(%engenharia, "Department created");

    let numero = engenharia
        .numero
        .ok_or_else(|| EmpresaError::internal("Created department has no number"))?;

    let ana = funcionarios
        .create(&Funcionario::new("12345678900", "Ana", "Silva").with_departamento(numero))
        .await
        .ok_or_else(|| EmpresaError::internal("Employee was not created"))?;
    info!(%ana, "Employee created");

    let all = funcionarios.read_all().await;
    for funcionario in &all {
        info!(%funcionario, departamento = ?funcionario.numero_departamento, "Employee");
    }

    let mut renamed = engenharia.clone();
    renamed.nome = format!("{} (Updated)", engenharia.nome);
    let departamento = departamentos
        .update(numero, &renamed)
        .await
        .ok_or_else(|| EmpresaError::internal("Department was not updated"))?;
    info!(%departamento, "Department updated");

    let deleted = funcionarios.delete(ana.cpf.as_str()).await;
    if !deleted {
        warn!(cpf = %ana.cpf, "Employee delete was not acknowledged");
    }

    let remaining = funcionarios.read_all().await.len();
    info!(deleted, remaining, "Walkthrough finished");

    Ok(DemoReport {
        departamento,
        funcionarios: all,
        deleted,
        remaining,
    })
}
