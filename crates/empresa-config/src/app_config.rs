//! Application configuration structures.

use empresa_core::telemetry::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application name and metadata.
    #[serde(default)]
    pub app: AppMetadata,

    /// Table store configuration.
    #[serde(default)]
    pub store: StoreConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Application metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppMetadata {
    /// Application name.
    pub name: String,
    /// Application version.
    pub version: String,
    /// Environment (development, staging, production).
    pub environment: String,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "empresa".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Which table store backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Try Supabase, fall back to the in-memory mock.
    #[default]
    Auto,
    /// Supabase only; failures still fall back to the mock at startup.
    Supabase,
    /// In-memory mock only.
    Mock,
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Supabase => write!(f, "supabase"),
            Self::Mock => write!(f, "mock"),
        }
    }
}

/// Table store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Backend selection.
    pub backend: StoreBackend,
    /// Supabase project URL (`SUPABASE_URL`).
    pub supabase_url: Option<String>,
    /// Supabase API key (`SUPABASE_KEY`).
    pub supabase_key: Option<String>,
    /// Table read once at startup to check that the backend answers.
    pub probe_table: String,
    /// HTTP request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Auto,
            supabase_url: None,
            supabase_key: None,
            probe_table: "departamento".to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl StoreConfig {
    /// Returns a mock-only configuration.
    #[must_use]
    pub fn mock() -> Self {
        Self {
            backend: StoreBackend::Mock,
            ..Self::default()
        }
    }

    /// Returns a Supabase configuration for the given project.
    #[must_use]
    pub fn supabase(url: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            backend: StoreBackend::Supabase,
            supabase_url: Some(url.into()),
            supabase_key: Some(key.into()),
            ..Self::default()
        }
    }

    /// Checks if both URL and key are set and non-empty.
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        let filled = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.trim().is_empty());
        filled(&self.supabase_url) && filled(&self.supabase_key)
    }

    /// Returns the request timeout as a Duration.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
