//! Table records.

mod departamento;
mod funcionario;

pub use departamento::*;
pub use funcionario::*;
