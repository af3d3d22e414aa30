//! Orbital-class resolution

pub mod classifier;

pub use classifier::{classify, classify_elements, classify_orbit, match_class, ResolvedQuerySpec};
