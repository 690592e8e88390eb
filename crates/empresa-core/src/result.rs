//! Result type aliases for Empresa.

use crate::EmpresaError;

/// A specialized `Result` type for Empresa operations.
pub type EmpresaResult<T> = Result<T, EmpresaError>;
