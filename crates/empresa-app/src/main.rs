//! # Empresa
//!
//! Loads configuration, selects a table store (Supabase when reachable,
//! in-memory otherwise) and runs the department/employee walkthrough.

use empresa_app::startup::print_startup_info;
use empresa_app::run_demo;
use empresa_config::ConfigLoader;
use empresa_core::telemetry::init_logging;
use empresa_core::EmpresaResult;
use empresa_repository::select_store;
use tracing::info;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Application error [{}]: {}", e.error_code(), e);
        std::process::exit(1);
    }
}

async fn run() -> EmpresaResult<()> {
    let config_loader = ConfigLoader::from_default_location()?;
    let config = config_loader.get().await;

    init_logging(&config.logging)?;
    info!("Starting {} v{}", config.app.name, env!("CARGO_PKG_VERSION"));

    let selected = select_store(&config.store).await;
    print_startup_info(&config, &selected);

    let report = run_demo(selected.store).await?;
    info!(
        departamento = %report.departamento,
        funcionarios = report.funcionarios.len(),
        deleted = report.deleted,
        "Done"
    );

    Ok(())
}
