//! Startup reporting.

use empresa_config::AppConfig;
use empresa_repository::SelectedStore;
use tracing::info;

/// Logs the application and store details chosen at startup.
pub fn print_startup_info(config: &AppConfig, selected: &SelectedStore) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("Application: {} {}", config.app.name, config.app.version);
    info!("Environment: {}", config.app.environment);
    info!("Backend:     {} (requested {})", selected.kind, config.store.backend);
    if let Some(url) = config.store.supabase_url.as_deref() {
        info!("Supabase:    {}", url);
    }
    info!("{}", separator);
}
