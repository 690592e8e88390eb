//! Generic CRUD data access object.

use crate::store::{Predicate, StoreResponse, TableStore};
use empresa_core::{EmpresaError, TableRecord};
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, error};

/// Identifier column used when none is configured.
pub const DEFAULT_ID_FIELD: &str = "id";

/// CRUD access to one table, typed by its record.
///
/// Methods never return errors. A failed store call is logged with the
/// operation, table and cause, and the method degrades to `None`, an empty
/// `Vec`, or `false`. Callers therefore cannot tell "not found" apart from
/// "store failed"; this suits demo use and is not a correctness guarantee.
pub struct BaseDao<R> {
    store: Arc<dyn TableStore>,
    table_name: String,
    id_field: String,
    _record: PhantomData<fn() -> R>,
}

impl<R: TableRecord> BaseDao<R> {
    /// Creates a DAO over `table_name` using `id` as identifier column.
    #[must_use]
    pub fn new(store: Arc<dyn TableStore>, table_name: impl Into<String>) -> Self {
        Self {
            store,
            table_name: table_name.into(),
            id_field: DEFAULT_ID_FIELD.to_string(),
            _record: PhantomData,
        }
    }

    /// Sets the identifier column used by [`update`](Self::update) and
    /// [`delete`](Self::delete).
    #[must_use]
    pub fn with_id_field(mut self, id_field: impl Into<String>) -> Self {
        self.id_field = id_field.into();
        self
    }

    /// Returns the table name.
    #[must_use]
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Returns the identifier column.
    #[must_use]
    pub fn id_field(&self) -> &str {
        &self.id_field
    }

    /// Inserts a record and returns it as stored (with generated fields).
    pub async fn create(&self, record: &R) -> Option<R> {
        debug!(table = %self.table_name, "Creating record");

        match self.store.insert(&self.table_name, record.to_representation()).await {
            Ok(response) => first_record(response),
            Err(e) => {
                self.report("create", None, &e);
                None
            }
        }
    }

    /// Returns every record of the table.
    pub async fn read_all(&self) -> Vec<R> {
        debug!(table = %self.table_name, "Reading all records");

        match self.store.select(&self.table_name).await {
            Ok(response) => response
                .into_rows()
                .iter()
                .map(R::from_representation)
                .collect(),
            Err(e) => {
                self.report("read", None, &e);
                Vec::new()
            }
        }
    }

    /// Updates the record whose identifier column equals `id_value`.
    pub async fn update(&self, id_value: impl Into<Value>, record: &R) -> Option<R> {
        self.update_by(&self.id_field, id_value, record).await
    }

    /// Updates the record whose `id_field` equals `id_value`.
    pub async fn update_by(&self, id_field: &str, id_value: impl Into<Value>, record: &R) -> Option<R> {
        let predicate = Predicate::eq(id_field, id_value);
        debug!(table = %self.table_name, %predicate, "Updating record");

        match self
            .store
            .update(&self.table_name, record.to_representation(), &predicate)
            .await
        {
            Ok(response) => first_record(response),
            Err(e) => {
                self.report("update", Some(&predicate), &e);
                None
            }
        }
    }

    /// Deletes the records whose identifier column equals `id_value`.
    pub async fn delete(&self, id_value: impl Into<Value>) -> bool {
        self.delete_by(&self.id_field, id_value).await
    }

    /// Deletes the records whose `id_field` equals `id_value`.
    ///
    /// Succeeds when rows came back, or when a remote backend acknowledged
    /// the call with status 200 or 204. The two checks are independent.
    pub async fn delete_by(&self, id_field: &str, id_value: impl Into<Value>) -> bool {
        let predicate = Predicate::eq(id_field, id_value);
        debug!(table = %self.table_name, %predicate, "Deleting record");

        match self.store.delete(&self.table_name, &predicate).await {
            Ok(response) => response.has_payload() || response.is_acknowledged(),
            Err(e) => {
                self.report("delete", Some(&predicate), &e);
                false
            }
        }
    }

    fn report(&self, operation: &str, predicate: Option<&Predicate>, cause: &EmpresaError) {
        match predicate {
            Some(predicate) => error!(
                operation,
                table = %self.table_name,
                store = self.store.name(),
                code = cause.error_code(),
                "Failed to {} record ({}) in {}: {}",
                operation,
                predicate,
                self.table_name,
                cause
            ),
            None => error!(
                operation,
                table = %self.table_name,
                store = self.store.name(),
                code = cause.error_code(),
                "Failed to {} records in {}: {}",
                operation,
                self.table_name,
                cause
            ),
        }
    }
}

/// Converts the first row of a response, if the payload holds anything.
fn first_record<R: TableRecord>(response: StoreResponse) -> Option<R> {
    if !response.has_payload() {
        return None;
    }
    response
        .into_rows()
        .first()
        .map(R::from_representation)
}

impl<R> Clone for BaseDao<R> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            table_name: self.table_name.clone(),
            id_field: self.id_field.clone(),
            _record: PhantomData,
        }
    }
}

impl<R> fmt::Debug for BaseDao<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseDao")
            .field("store", &self.store.name())
            .field("table_name", &self.table_name)
            .field("id_field", &self.id_field)
            .finish()
    }
}
