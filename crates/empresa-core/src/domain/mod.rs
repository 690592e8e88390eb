//! # Empresa Domain
//!
//! Records of the company schema and the value objects they are built from.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
