//! # Empresa Config
//!
//! Configuration management for Empresa data access.
//! Supports layered configuration from files, a `.env` file, and
//! environment variables.

mod app_config;
mod loader;

pub use app_config::*;
pub use loader::*;
