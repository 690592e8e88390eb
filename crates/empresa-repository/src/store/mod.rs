//! Table store abstraction.
//!
//! A table store is a collection of tables addressed by name, each holding
//! key-value rows. Implementations connect to a single data source:
//!
//! ```text
//! store/
//!   response.rs   ← StoreResponse, Payload, Predicate
//!   mock.rs       ← MockTableStore (in-memory)
//!   supabase.rs   ← SupabaseTableStore (PostgREST over HTTP)
//! ```

mod mock;
mod response;
mod supabase;

pub use mock::MockTableStore;
pub use response::*;
pub use supabase::SupabaseTableStore;

use async_trait::async_trait;
use empresa_core::{EmpresaResult, Interface, KeyValue};

/// Table-oriented store.
///
/// Empty results are not errors: a select on an empty table, or an update or
/// delete matching nothing, returns an empty payload. Errors are reserved for
/// transport and configuration failures.
#[async_trait]
pub trait TableStore: Interface + Send + Sync {
    /// Short backend name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Returns every row of `table`.
    async fn select(&self, table: &str) -> EmpresaResult<StoreResponse>;

    /// Inserts one row and returns it as stored.
    async fn insert(&self, table: &str, payload: KeyValue) -> EmpresaResult<StoreResponse>;

    /// Merges `payload` into every row matching `predicate` and returns the
    /// updated rows.
    async fn update(&self, table: &str, payload: KeyValue, predicate: &Predicate) -> EmpresaResult<StoreResponse>;

    /// Removes every row matching `predicate` and returns the removed rows.
    async fn delete(&self, table: &str, predicate: &Predicate) -> EmpresaResult<StoreResponse>;
}
