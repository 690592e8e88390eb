//! # Empresa App
//!
//! Library side of the demo binary: the startup report and the
//! department/employee walkthrough run against the selected store.

pub mod demo;
pub mod startup;

pub use demo::{run_demo, DemoReport};
