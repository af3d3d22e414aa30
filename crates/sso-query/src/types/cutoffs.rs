//! Orbital cutoff records
//!
//! A cutoff record is a fixed set of optional bounds on perihelion distance,
//! eccentricity, semi-major axis and the Tisserand parameter. An absent bound
//! means "unconstrained", which is distinct from a bound of zero.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::orbit::{semimajor_axis, tisserand_jupiter};

/// Optional lower/upper bounds on q (AU), e, a (AU) and T_J
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OrbitalCutoffs {
    /// Minimum perihelion distance (AU)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q_min: Option<f64>,
    /// Maximum perihelion distance (AU)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q_max: Option<f64>,
    /// Minimum eccentricity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub e_min: Option<f64>,
    /// Maximum eccentricity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub e_max: Option<f64>,
    /// Minimum semi-major axis (AU)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a_min: Option<f64>,
    /// Maximum semi-major axis (AU)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a_max: Option<f64>,
    /// Minimum Tisserand parameter w.r.t. Jupiter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tj_min: Option<f64>,
    /// Maximum Tisserand parameter w.r.t. Jupiter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tj_max: Option<f64>,
}

/// One named field of an [`OrbitalCutoffs`] record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CutoffField {
    QMin,
    QMax,
    EMin,
    EMax,
    AMin,
    AMax,
    TjMin,
    TjMax,
}

impl CutoffField {
    /// All fields, in the order their clauses are rendered
    pub const ALL: [CutoffField; 8] = [
        CutoffField::QMin,
        CutoffField::QMax,
        CutoffField::EMin,
        CutoffField::EMax,
        CutoffField::AMin,
        CutoffField::AMax,
        CutoffField::TjMin,
        CutoffField::TjMax,
    ];

    /// Field name as used in config files and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            CutoffField::QMin => "q_min",
            CutoffField::QMax => "q_max",
            CutoffField::EMin => "e_min",
            CutoffField::EMax => "e_max",
            CutoffField::AMin => "a_min",
            CutoffField::AMax => "a_max",
            CutoffField::TjMin => "tj_min",
            CutoffField::TjMax => "tj_max",
        }
    }

    /// Whether this is a lower bound (`*_min`)
    pub fn is_lower(&self) -> bool {
        self.name().ends_with("min")
    }

    /// Read this field from a record
    pub fn get(&self, cutoffs: &OrbitalCutoffs) -> Option<f64> {
        match self {
            CutoffField::QMin => cutoffs.q_min,
            CutoffField::QMax => cutoffs.q_max,
            CutoffField::EMin => cutoffs.e_min,
            CutoffField::EMax => cutoffs.e_max,
            CutoffField::AMin => cutoffs.a_min,
            CutoffField::AMax => cutoffs.a_max,
            CutoffField::TjMin => cutoffs.tj_min,
            CutoffField::TjMax => cutoffs.tj_max,
        }
    }

    fn slot<'a>(&self, cutoffs: &'a mut OrbitalCutoffs) -> &'a mut Option<f64> {
        match self {
            CutoffField::QMin => &mut cutoffs.q_min,
            CutoffField::QMax => &mut cutoffs.q_max,
            CutoffField::EMin => &mut cutoffs.e_min,
            CutoffField::EMax => &mut cutoffs.e_max,
            CutoffField::AMin => &mut cutoffs.a_min,
            CutoffField::AMax => &mut cutoffs.a_max,
            CutoffField::TjMin => &mut cutoffs.tj_min,
            CutoffField::TjMax => &mut cutoffs.tj_max,
        }
    }

    /// Whether `value` supplied by a caller satisfies this table bound
    ///
    /// Lower bounds pass on `value >= bound`, upper bounds on `value <= bound`.
    pub fn admits(&self, value: f64, bound: f64) -> bool {
        if self.is_lower() {
            value >= bound
        } else {
            value <= bound
        }
    }
}

impl std::fmt::Display for CutoffField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for CutoffField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        CutoffField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| Error::invalid_argument(format!("unknown cutoff field '{}'", s)))
    }
}

impl OrbitalCutoffs {
    /// Record with every bound absent
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a single field
    pub fn with(mut self, field: CutoffField, value: f64) -> Self {
        *field.slot(&mut self) = Some(value);
        self
    }

    /// Set or clear a single field
    pub fn set(&mut self, field: CutoffField, value: Option<f64>) {
        *field.slot(self) = value;
    }

    /// Read a single field
    pub fn get(&self, field: CutoffField) -> Option<f64> {
        field.get(self)
    }

    /// No bound is set
    pub fn is_empty(&self) -> bool {
        self.defined().next().is_none()
    }

    /// Defined bounds as `(field, value)`, in clause order
    pub fn defined(&self) -> impl Iterator<Item = (CutoffField, f64)> + '_ {
        CutoffField::ALL
            .into_iter()
            .filter_map(move |field| field.get(self).map(|value| (field, value)))
    }

    /// Layer this record's fields over `defaults`
    pub fn merged_over(&self, defaults: &OrbitalCutoffs) -> OrbitalCutoffs {
        let mut merged = *defaults;
        for (field, value) in self.defined() {
            merged.set(field, Some(value));
        }
        merged
    }

    /// Degenerate record describing one orbit, with min = max for every derivable quantity
    ///
    /// Semi-major axis and T_J are filled only when computable (bound orbit,
    /// non-negative radicand), so such a record never matches a class that
    /// constrains a quantity the orbit lacks.
    pub fn from_elements(q: f64, e: f64, incl_deg: f64) -> Self {
        let mut point = Self::new();
        let mut pin = |min: CutoffField, max: CutoffField, value: Option<f64>| {
            point.set(min, value);
            point.set(max, value);
        };

        pin(CutoffField::QMin, CutoffField::QMax, Some(q).filter(|v| v.is_finite()));
        pin(CutoffField::EMin, CutoffField::EMax, Some(e).filter(|v| v.is_finite()));
        pin(CutoffField::AMin, CutoffField::AMax, semimajor_axis(q, e));
        pin(CutoffField::TjMin, CutoffField::TjMax, tisserand_jupiter(q, e, incl_deg));
        point
    }

    /// Check the record can be rendered into a query
    ///
    /// Fails on an empty record, non-finite bounds, or a lone Tisserand bound.
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(Error::invalid_argument(
                "cutoffs must define at least one bound",
            ));
        }

        if let Some((field, value)) = self.defined().find(|(_, v)| !v.is_finite()) {
            return Err(Error::invalid_argument(format!(
                "{} must be a finite number, got {}",
                field, value
            )));
        }

        if self.tj_min.is_some() != self.tj_max.is_some() {
            return Err(Error::invalid_argument(
                "tj_min and tj_max must be given together",
            ));
        }

        Ok(())
    }
}
