//! Department DAO.

use super::BaseDao;
use crate::store::TableStore;
use empresa_core::Departamento;
use std::sync::Arc;

/// Table holding departments.
pub const DEPARTAMENTO_TABLE: &str = "departamento";

/// Identifier column of [`DEPARTAMENTO_TABLE`], generated by the store.
pub const DEPARTAMENTO_ID_FIELD: &str = "numero";

/// CRUD access to departments.
pub type DepartamentoDao = BaseDao<Departamento>;

impl BaseDao<Departamento> {
    /// Creates a department DAO keyed by `numero`.
    #[must_use]
    pub fn from_store(store: Arc<dyn TableStore>) -> Self {
        Self::new(store, DEPARTAMENTO_TABLE).with_id_field(DEPARTAMENTO_ID_FIELD)
    }
}
