//! Orbital dynamical classes and their defining cutoffs

use serde::{Deserialize, Serialize};

use super::cutoffs::OrbitalCutoffs;
use crate::error::{Error, Result};

/// Named minor-planet dynamical class
///
/// Names are case-sensitive and match the labels used in result tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OrbitalClass {
    /// Near-Earth object
    #[serde(rename = "NEO")]
    Neo,
    /// Main-belt asteroid
    #[serde(rename = "MBA")]
    Mba,
    /// Trans-Neptunian object
    #[serde(rename = "TNO")]
    Tno,
    /// Centaur (between Jupiter and Neptune)
    Centaur,
    /// Jupiter trojan
    Jtrojan,
    /// Neptune trojan
    Ntrojan,
    /// Long-period comet
    #[serde(rename = "LPC")]
    Lpc,
    /// Jupiter-family comet
    #[serde(rename = "JFC")]
    Jfc,
}

const UNBOUNDED: OrbitalCutoffs = OrbitalCutoffs {
    q_min: None,
    q_max: None,
    e_min: None,
    e_max: None,
    a_min: None,
    a_max: None,
    tj_min: None,
    tj_max: None,
};

/// Class definitions in match precedence order
///
/// Classification returns the first entry whose bounds a caller satisfies,
/// so the narrow Tisserand band is checked before the semi-major-axis classes.
pub static CLASS_TABLE: [(OrbitalClass, OrbitalCutoffs); 8] = [
    (
        OrbitalClass::Jfc,
        OrbitalCutoffs {
            tj_min: Some(2.0),
            tj_max: Some(3.0),
            ..UNBOUNDED
        },
    ),
    (
        OrbitalClass::Lpc,
        OrbitalCutoffs {
            a_min: Some(50.0),
            ..UNBOUNDED
        },
    ),
    (
        OrbitalClass::Tno,
        OrbitalCutoffs {
            a_min: Some(30.1),
            a_max: Some(50.0),
            ..UNBOUNDED
        },
    ),
    (
        OrbitalClass::Ntrojan,
        OrbitalCutoffs {
            a_min: Some(29.8),
            a_max: Some(30.4),
            ..UNBOUNDED
        },
    ),
    (
        OrbitalClass::Neo,
        OrbitalCutoffs {
            q_max: Some(1.3),
            e_max: Some(1.0),
            a_max: Some(4.0),
            ..UNBOUNDED
        },
    ),
    (
        OrbitalClass::Mba,
        OrbitalCutoffs {
            q_min: Some(1.66),
            a_min: Some(2.0),
            a_max: Some(3.2),
            ..UNBOUNDED
        },
    ),
    (
        OrbitalClass::Centaur,
        OrbitalCutoffs {
            a_min: Some(5.5),
            a_max: Some(30.1),
            ..UNBOUNDED
        },
    ),
    (
        OrbitalClass::Jtrojan,
        OrbitalCutoffs {
            e_max: Some(0.3),
            a_min: Some(4.8),
            a_max: Some(5.4),
            ..UNBOUNDED
        },
    ),
];

/// Order in which single orbits are labeled
///
/// Semi-major-axis classes come first so trojans, Centaurs and the like keep
/// their own label; the Tisserand band only takes orbits none of them claims.
pub const ROW_LABEL_ORDER: [OrbitalClass; 8] = [
    OrbitalClass::Lpc,
    OrbitalClass::Tno,
    OrbitalClass::Ntrojan,
    OrbitalClass::Neo,
    OrbitalClass::Mba,
    OrbitalClass::Centaur,
    OrbitalClass::Jtrojan,
    OrbitalClass::Jfc,
];

impl OrbitalClass {
    /// Canonical class label
    pub fn as_str(&self) -> &'static str {
        match self {
            OrbitalClass::Neo => "NEO",
            OrbitalClass::Mba => "MBA",
            OrbitalClass::Tno => "TNO",
            OrbitalClass::Centaur => "Centaur",
            OrbitalClass::Jtrojan => "Jtrojan",
            OrbitalClass::Ntrojan => "Ntrojan",
            OrbitalClass::Lpc => "LPC",
            OrbitalClass::Jfc => "JFC",
        }
    }

    /// Defining cutoffs from the class table
    pub fn cutoffs(&self) -> OrbitalCutoffs {
        CLASS_TABLE
            .iter()
            .find(|(class, _)| class == self)
            .map(|(_, cutoffs)| *cutoffs)
            .unwrap_or_default()
    }

    /// Classes in table (precedence) order
    pub fn all() -> impl Iterator<Item = OrbitalClass> {
        CLASS_TABLE.iter().map(|(class, _)| *class)
    }
}

impl std::fmt::Display for OrbitalClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OrbitalClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        OrbitalClass::all()
            .find(|class| class.as_str() == s)
            .ok_or_else(|| Error::UnknownClass(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_class_has_a_bound() {
        for (class, cutoffs) in CLASS_TABLE.iter() {
            assert!(!cutoffs.is_empty(), "{} has no bounds", class);
        }
    }

    #[test]
    fn test_table_covers_vocabulary_once() {
        let mut classes: Vec<_> = OrbitalClass::all().collect();
        classes.sort();
        classes.dedup();
        assert_eq!(classes.len(), CLASS_TABLE.len());
    }

    #[test]
    fn test_row_label_order_puts_tisserand_band_last() {
        let mut classes = ROW_LABEL_ORDER.to_vec();
        assert_eq!(classes.last(), Some(&OrbitalClass::Jfc));
        classes.sort();
        classes.dedup();
        assert_eq!(classes.len(), CLASS_TABLE.len());
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!("NEO".parse::<OrbitalClass>().unwrap(), OrbitalClass::Neo);
        assert_eq!("Jtrojan".parse::<OrbitalClass>().unwrap(), OrbitalClass::Jtrojan);
        assert!(matches!(
            "neo".parse::<OrbitalClass>(),
            Err(Error::UnknownClass(name)) if name == "neo"
        ));
        assert!("Comet".parse::<OrbitalClass>().is_err());
    }

    #[test]
    fn test_serde_labels() {
        let json = serde_json::to_string(&OrbitalClass::Ntrojan).unwrap();
        assert_eq!(json, "\"Ntrojan\"");
        let class: OrbitalClass = serde_json::from_str("\"LPC\"").unwrap();
        assert_eq!(class, OrbitalClass::Lpc);
    }

    #[test]
    fn test_cutoffs_lookup() {
        let neo = OrbitalClass::Neo.cutoffs();
        assert_eq!(neo.q_max, Some(1.3));
        assert_eq!(neo.e_max, Some(1.0));
        assert_eq!(neo.a_max, Some(4.0));
        assert_eq!(neo.q_min, None);
        assert_eq!(neo.tj_min, None);
    }
}
