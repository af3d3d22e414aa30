//! Class-name / cutoff resolution
//!
//! Resolution runs in either direction: a class name yields the class's
//! table cutoffs, and a caller's cutoff record yields the first class in
//! table order whose bounds it satisfies.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{CutoffField, OrbitalClass, OrbitalCutoffs, CLASS_TABLE, ROW_LABEL_ORDER};

/// Outcome of classification: the class (if any) and the cutoffs to query with
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedQuerySpec {
    /// Resolved class; `None` for a custom query that matches no class
    pub class: Option<OrbitalClass>,
    /// Fully merged cutoff record
    pub cutoffs: OrbitalCutoffs,
}

/// Resolve exactly one of `class_name` or `cutoffs`
///
/// Supplying both or neither is an `InvalidArgument`; an unknown class name
/// is `UnknownClass`. A cutoff record that matches no class resolves with
/// `class: None` rather than failing.
pub fn classify(
    class_name: Option<&str>,
    cutoffs: Option<&OrbitalCutoffs>,
) -> Result<ResolvedQuerySpec> {
    match (class_name, cutoffs) {
        (Some(name), None) => {
            let class: OrbitalClass = name.parse()?;
            Ok(ResolvedQuerySpec {
                class: Some(class),
                cutoffs: class.cutoffs(),
            })
        }
        (None, Some(user)) => {
            let merged = user.merged_over(&OrbitalCutoffs::default());
            let class = match_class(&merged);
            match class {
                Some(class) => tracing::debug!("Cutoffs resolved to class {}", class),
                None => tracing::debug!("Cutoffs match no orbital class"),
            }
            Ok(ResolvedQuerySpec {
                class,
                cutoffs: merged,
            })
        }
        _ => Err(Error::invalid_argument(
            "provide exactly one of class_name or cutoffs",
        )),
    }
}

/// First class in table order whose every defined bound admits the caller's value
///
/// A class is rejected on the first bound the caller leaves unset or violates.
pub fn match_class(cutoffs: &OrbitalCutoffs) -> Option<OrbitalClass> {
    CLASS_TABLE
        .iter()
        .find(|(_, bounds)| satisfies(cutoffs, bounds))
        .map(|(class, _)| *class)
}

fn satisfies(candidate: &OrbitalCutoffs, bounds: &OrbitalCutoffs) -> bool {
    bounds.defined().all(|(field, bound)| match field.get(candidate) {
        Some(value) => field.admits(value, bound),
        None => false,
    })
}

/// Classify one orbit from its elements
///
/// Classes are tried in [`ROW_LABEL_ORDER`], not query precedence, so an
/// orbit inside the Tisserand band is a JFC only when no semi-major-axis
/// class matches it.
pub fn classify_orbit(q: f64, e: f64, incl_deg: f64) -> Option<OrbitalClass> {
    classify_elements(q, e, Some(incl_deg))
}

/// Classify one orbit whose inclination may be unknown
///
/// Without an inclination T_J is left unset and only the classes that
/// don't constrain it can match.
pub fn classify_elements(q: f64, e: f64, incl_deg: Option<f64>) -> Option<OrbitalClass> {
    let mut point = OrbitalCutoffs::from_elements(q, e, incl_deg.unwrap_or(0.0));
    if incl_deg.is_none() {
        point.set(CutoffField::TjMin, None);
        point.set(CutoffField::TjMax, None);
    }
    ROW_LABEL_ORDER
        .iter()
        .copied()
        .find(|class| satisfies(&point, &class.cutoffs()))
}
