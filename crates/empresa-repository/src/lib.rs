//! # Empresa Repository
//!
//! Data access over a table-oriented store:
//!
//! ```text
//! Caller
//!   ↓  typed records
//! BaseDao<R>                  (generic CRUD, never fails)
//!   ↓  Arc<dyn TableStore>    (key-value rows + status)
//! SupabaseTableStore | MockTableStore
//! ```
//!
//! [`select_store`] decides at startup which store implementation the DAOs
//! receive. The DAOs do not know which one they got.

pub mod dao;
pub mod selector;
pub mod store;

pub use dao::*;
pub use selector::*;
pub use store::*;
