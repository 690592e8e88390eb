//! Configuration loader with layered sources.

use crate::{AppConfig, StoreBackend};
use config::{Config, ConfigError, Environment, File};
use empresa_core::EmpresaError;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Configuration loader with runtime refresh support.
#[derive(Clone)]
pub struct ConfigLoader {
    config: Arc<RwLock<AppConfig>>,
    config_dir: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Local overrides
    /// 4. Environment variables with `EMPRESA_` prefix (`EMPRESA_STORE__BACKEND=mock`)
    /// 5. `SUPABASE_URL` and `SUPABASE_KEY`, which always win
    ///
    /// A `.env` file in the working directory is loaded first.
    pub fn new(config_dir: impl Into<String>) -> Result<Self, EmpresaError> {
        let config_dir = config_dir.into();
        let config = Self::load_config(&config_dir)?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_dir,
        })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, EmpresaError> {
        Self::new("./config")
    }

    /// Returns the current configuration.
    pub async fn get(&self) -> AppConfig {
        self.config.read().await.clone()
    }

    /// Reloads the configuration from disk.
    pub async fn reload(&self) -> Result<(), EmpresaError> {
        let new_config = Self::load_config(&self.config_dir)?;
        let mut config = self.config.write().await;
        *config = new_config;
        info!("Configuration reloaded successfully");
        Ok(())
    }

    /// Loads configuration from the specified directory.
    fn load_config(config_dir: &str) -> Result<AppConfig, EmpresaError> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment = std::env::var("EMPRESA_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for name in ["default", environment.as_str(), "local"] {
            let path = format!("{}/{}.toml", config_dir, name);
            if Path::new(&path).exists() {
                debug!("Loading config from: {}", path);
                builder = builder.add_source(File::with_name(&path).required(false));
            }
        }

        builder = builder
            .add_source(
                Environment::with_prefix("EMPRESA")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("store.supabase_url", std::env::var("SUPABASE_URL").ok())
            .map_err(config_error_to_empresa_error)?
            .set_override_option("store.supabase_key", std::env::var("SUPABASE_KEY").ok())
            .map_err(config_error_to_empresa_error)?;

        let app_config: AppConfig = builder
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(config_error_to_empresa_error)?;

        validate_config(&app_config)?;

        Ok(app_config)
    }
}

/// Validates the configuration.
///
/// Only values no backend can work with are rejected. Missing credentials or
/// a malformed Supabase URL are reported here but left to the store selector,
/// which falls back to the in-memory store.
pub fn validate_config(config: &AppConfig) -> Result<(), EmpresaError> {
    let store = &config.store;

    if store.probe_table.trim().is_empty() {
        return Err(EmpresaError::configuration("store.probe_table must not be empty"));
    }

    if store.request_timeout_secs == 0 {
        return Err(EmpresaError::configuration("store.request_timeout_secs must be positive"));
    }

    if let Some(raw) = store.supabase_url.as_deref().filter(|u| !u.trim().is_empty()) {
        if let Err(e) = url::Url::parse(raw) {
            warn!(url = raw, error = %e, "Invalid Supabase URL; the in-memory store will be used");
        }
    }

    if store.backend != StoreBackend::Mock && !store.has_credentials() {
        warn!(backend = %store.backend, "Supabase credentials not set; the in-memory store will be used");
    }

    Ok(())
}

fn config_error_to_empresa_error(err: ConfigError) -> EmpresaError {
    EmpresaError::Configuration(err.to_string())
}
