//! Startup selection between the Supabase store and the in-memory mock.

use crate::dao::{DEPARTAMENTO_ID_FIELD, DEPARTAMENTO_TABLE};
use crate::store::{MockTableStore, Payload, StoreResponse, SupabaseTableStore, TableStore};
use empresa_config::{StoreBackend, StoreConfig};
use empresa_core::representation::as_integer;
use empresa_core::{EmpresaError, EmpresaResult};
use std::fmt;
use std::sync::Arc;
use tracing::{info, warn};

/// Kind of store handed out by [`select_store`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// Live Supabase project.
    Supabase,
    /// In-memory mock.
    Mock,
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Supabase => write!(f, "supabase"),
            Self::Mock => write!(f, "mock"),
        }
    }
}

/// Store chosen at startup, shared by every DAO.
#[derive(Clone)]
pub struct SelectedStore {
    /// Store handle.
    pub store: Arc<dyn TableStore>,
    /// Which implementation `store` is.
    pub kind: StoreKind,
}

impl SelectedStore {
    /// Returns a fresh in-memory store with the company schema registered.
    #[must_use]
    pub fn mock() -> Self {
        Self {
            store: Arc::new(mock_store()),
            kind: StoreKind::Mock,
        }
    }
}

impl fmt::Debug for SelectedStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedStore")
            .field("store", &self.store.name())
            .field("kind", &self.kind)
            .finish()
    }
}

/// Creates an in-memory store where department numbers are generated.
#[must_use]
pub fn mock_store() -> MockTableStore {
    MockTableStore::new().with_generated_id(DEPARTAMENTO_TABLE, DEPARTAMENTO_ID_FIELD)
}

/// Chooses the store for this process.
///
/// Unless the mock is requested explicitly, a Supabase store is built and
/// probed with a read of `probe_table`. Missing credentials, transport
/// errors, and access rejections (thrown or returned as data) all fall back
/// to the mock.
pub async fn select_store(config: &StoreConfig) -> SelectedStore {
    if config.backend == StoreBackend::Mock {
        info!("Using in-memory store");
        return SelectedStore::mock();
    }

    let supabase = match SupabaseTableStore::new(config) {
        Ok(store) => store,
        Err(e) => {
            warn!(error = %e, "Supabase store unavailable, falling back to in-memory store");
            return SelectedStore::mock();
        }
    };

    match probe(&supabase, &config.probe_table).await {
        Ok(()) => {
            info!(probe_table = %config.probe_table, "Connected to Supabase");
            SelectedStore {
                store: Arc::new(supabase),
                kind: StoreKind::Supabase,
            }
        }
        Err(e) => {
            warn!(
                error = %e,
                code = e.error_code(),
                "Supabase probe failed, falling back to in-memory store"
            );
            SelectedStore::mock()
        }
    }
}

async fn probe(store: &dyn TableStore, table: &str) -> EmpresaResult<()> {
    let response = store.select(table).await?;
    if rejects_access(&response) {
        return Err(EmpresaError::Unauthorized(format!(
            "Probe of {} returned an access error (status {})",
            table, response.status
        )));
    }
    Ok(())
}

/// Detects 401/403 reported in the status or in an error body.
fn rejects_access(response: &StoreResponse) -> bool {
    if matches!(response.status, 401 | 403) {
        return true;
    }

    match &response.payload {
        Payload::Single(body) => ["code", "status"]
            .iter()
            .filter_map(|key| body.get(*key))
            .any(|value| matches!(as_integer(value), Some(401 | 403))),
        _ => false,
    }
}
