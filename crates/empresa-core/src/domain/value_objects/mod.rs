//! Value objects shared by the records.

mod iso_field;

pub use iso_field::*;
