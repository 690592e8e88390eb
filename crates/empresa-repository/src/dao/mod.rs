//! Data access objects.
//!
//! [`BaseDao`] implements CRUD for any [`empresa_core::TableRecord`];
//! the concrete modules bind it to a table and identifier column.

mod base_dao;
mod departamento_dao;
mod funcionario_dao;

pub use base_dao::*;
pub use departamento_dao::*;
pub use funcionario_dao::*;
