//! # Empresa Core
//!
//! Core types, the record model, and error definitions shared by the
//! Empresa data access crates.

pub mod domain;
pub mod error;
pub mod representation;
pub mod result;
pub mod telemetry;
pub mod traits;

pub use domain::*;
pub use error::*;
pub use result::*;
pub use traits::*;

// Re-export shaku for dependency injection
pub use shaku::Interface;
