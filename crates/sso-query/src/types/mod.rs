//! Core types for orbital queries

pub mod cutoffs;
pub mod orbit_class;
pub mod table;

pub use cutoffs::{CutoffField, OrbitalCutoffs};
pub use orbit_class::{OrbitalClass, CLASS_TABLE, ROW_LABEL_ORDER};
pub use table::ResultTable;
