//! In-memory table store.

use super::{Payload, Predicate, StoreResponse, TableStore, STATUS_CREATED, STATUS_OK};
use async_trait::async_trait;
use empresa_core::representation::{as_integer, is_truthy};
use empresa_core::{EmpresaError, EmpresaResult, KeyValue};
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// In-memory substitute for a remote table store.
///
/// Rows live for the lifetime of the process, one ordered `Vec` per table.
/// Tables registered with [`MockTableStore::with_generated_id`] get numeric
/// identifiers assigned on insert (`max + 1`, starting at 1) whenever the
/// identifier column is missing or falsy. Unregistered tables do the same
/// for an `id` key present in the inserted row.
#[derive(Debug, Default)]
pub struct MockTableStore {
    tables: Mutex<HashMap<String, Vec<KeyValue>>>,
    generated_ids: HashMap<String, String>,
}

impl MockTableStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `column` as the store-generated identifier of `table`.
    #[must_use]
    pub fn with_generated_id(mut self, table: impl Into<String>, column: impl Into<String>) -> Self {
        self.generated_ids.insert(table.into(), column.into());
        self
    }

    /// Seeds `table` with rows.
    #[must_use]
    pub fn with_rows(self, table: impl Into<String>, rows: Vec<KeyValue>) -> Self {
        self.tables.lock().entry(table.into()).or_default().extend(rows);
        self
    }

    /// Returns the number of rows currently in `table`.
    #[must_use]
    pub fn row_count(&self, table: &str) -> usize {
        self.tables.lock().get(table).map_or(0, Vec::len)
    }

    fn identity_column<'a>(&'a self, table: &str, row: &KeyValue) -> Option<&'a str> {
        self.generated_ids
            .get(table)
            .map(String::as_str)
            .or_else(|| row.contains_key("id").then_some("id"))
    }
}

fn next_id(rows: &[KeyValue], column: &str) -> EmpresaResult<i64> {
    match rows.iter().filter_map(|row| row.get(column).and_then(as_integer)).max() {
        None => Ok(1),
        Some(max) => max
            .checked_add(1)
            .ok_or_else(|| EmpresaError::internal(format!("Identifier space of {} exhausted", column))),
    }
}

#[async_trait]
impl TableStore for MockTableStore {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn select(&self, table: &str) -> EmpresaResult<StoreResponse> {
        let rows = self.tables.lock().get(table).cloned().unwrap_or_default();
        debug!(table, rows = rows.len(), "Mock select");
        Ok(StoreResponse::synthetic(Payload::Many(rows), STATUS_OK))
    }

    async fn insert(&self, table: &str, payload: KeyValue) -> EmpresaResult<StoreResponse> {
        let mut row = payload;
        let mut tables = self.tables.lock();
        let rows = tables.entry(table.to_string()).or_default();

        if let Some(column) = self.identity_column(table, &row) {
            if !row.get(column).is_some_and(is_truthy) {
                let id = next_id(rows, column)?;
                row.insert(column.to_string(), Value::from(id));
                debug!(table, column, id, "Assigned generated identifier");
            }
        }

        rows.push(row.clone());
        debug!(table, rows = rows.len(), "Mock insert");
        Ok(StoreResponse::synthetic(Payload::Many(vec![row]), STATUS_CREATED))
    }

    async fn update(&self, table: &str, payload: KeyValue, predicate: &Predicate) -> EmpresaResult<StoreResponse> {
        let mut tables = self.tables.lock();
        let updated: Vec<KeyValue> = tables
            .get_mut(table)
            .map(|rows| {
                rows.iter_mut()
                    .filter(|row| predicate.matches(row))
                    .map(|row| {
                        row.extend(payload.iter().map(|(k, v)| (k.clone(), v.clone())));
                        row.clone()
                    })
                    .collect()
            })
            .unwrap_or_default();

        debug!(table, %predicate, updated = updated.len(), "Mock update");
        Ok(StoreResponse::synthetic(Payload::Many(updated), STATUS_OK))
    }

    async fn delete(&self, table: &str, predicate: &Predicate) -> EmpresaResult<StoreResponse> {
        let mut tables = self.tables.lock();
        let removed = match tables.get_mut(table) {
            Some(rows) => {
                let (removed, kept): (Vec<_>, Vec<_>) =
                    std::mem::take(rows).into_iter().partition(|row| predicate.matches(row));
                *rows = kept;
                removed
            }
            None => Vec::new(),
        };

        debug!(table, %predicate, removed = removed.len(), "Mock delete");
        Ok(StoreResponse::synthetic(Payload::Many(removed), STATUS_OK))
    }
}
