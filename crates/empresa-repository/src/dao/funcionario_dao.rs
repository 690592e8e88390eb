//! Employee DAO.

use super::BaseDao;
use crate::store::TableStore;
use empresa_core::Funcionario;
use std::sync::Arc;

/// Table holding employees.
pub const FUNCIONARIO_TABLE: &str = "funcionario";

/// Identifier column of [`FUNCIONARIO_TABLE`].
pub const FUNCIONARIO_ID_FIELD: &str = "cpf";

/// CRUD access to employees.
pub type FuncionarioDao = BaseDao<Funcionario>;

impl BaseDao<Funcionario> {
    /// Creates an employee DAO keyed by `cpf`.
    #[must_use]
    pub fn from_store(store: Arc<dyn TableStore>) -> Self {
        Self::new(store, FUNCIONARIO_TABLE).with_id_field(FUNCIONARIO_ID_FIELD)
    }
}
