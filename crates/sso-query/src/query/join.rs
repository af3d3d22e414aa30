//! Related catalog tables that can be joined onto MPCORB

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Table inner-joined on `ssObjectId`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JoinTarget {
    /// Per-detection sources (magnitudes and bands of every observation)
    #[serde(rename = "DiaSource")]
    DiaSource,
    /// Per-object summary (absolute magnitudes, discovery metadata)
    #[serde(rename = "SSObject")]
    SsObject,
}

/// A color index computed from two magnitude columns of the joined table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorIndex {
    pub minuend: &'static str,
    pub subtrahend: &'static str,
    pub alias: &'static str,
}

const SSOBJECT_COLORS: [ColorIndex; 2] = [
    ColorIndex {
        minuend: "g_H",
        subtrahend: "r_H",
        alias: "g_r_color",
    },
    ColorIndex {
        minuend: "r_H",
        subtrahend: "i_H",
        alias: "r_i_color",
    },
];

impl JoinTarget {
    /// Table name within the catalog schema
    pub fn table(&self) -> &'static str {
        match self {
            JoinTarget::DiaSource => "DiaSource",
            JoinTarget::SsObject => "SSObject",
        }
    }

    /// Alias used in the rendered query
    pub fn alias(&self) -> &'static str {
        match self {
            JoinTarget::DiaSource => "dias",
            JoinTarget::SsObject => "sso",
        }
    }

    /// Columns projected when the table actually has them, in projection order
    pub fn optional_columns(&self) -> &'static [&'static str] {
        match self {
            JoinTarget::DiaSource => &["magTrueVband", "band"],
            JoinTarget::SsObject => &["g_H", "r_H", "i_H", "discoverySubmissionDate", "numObs"],
        }
    }

    /// Derived color columns, added when both inputs are present
    pub fn color_indices(&self) -> &'static [ColorIndex] {
        match self {
            JoinTarget::DiaSource => &[],
            JoinTarget::SsObject => &SSOBJECT_COLORS,
        }
    }

    /// Projection expressions for the join given the columns the table has
    ///
    /// Order is optional columns first, then derived colors, each in their
    /// declared order. Column presence is matched case-insensitively.
    pub fn projection(&self, available: &[String]) -> Vec<String> {
        let has = |name: &str| available.iter().any(|c| c.eq_ignore_ascii_case(name));
        let alias = self.alias();

        let mut fields: Vec<String> = self
            .optional_columns()
            .iter()
            .filter(|col| has(**col))
            .map(|col| format!("{}.{}", alias, col))
            .collect();

        fields.extend(
            self.color_indices()
                .iter()
                .filter(|color| has(color.minuend) && has(color.subtrahend))
                .map(|color| {
                    format!(
                        "({alias}.{} - {alias}.{}) AS {}",
                        color.minuend,
                        color.subtrahend,
                        color.alias,
                        alias = alias
                    )
                }),
        );

        fields
    }

    /// Columns to assume present when the schema is not consulted
    pub fn all_columns(&self) -> Vec<String> {
        self.optional_columns().iter().map(|c| c.to_string()).collect()
    }
}

impl std::fmt::Display for JoinTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.table())
    }
}

impl std::str::FromStr for JoinTarget {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "diasource" => Ok(JoinTarget::DiaSource),
            "ssobject" => Ok(JoinTarget::SsObject),
            _ => Err(Error::invalid_argument(format!(
                "unknown join table '{}' (expected DiaSource or SSObject)",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_full_ssobject_projection() {
        let fields = JoinTarget::SsObject.projection(&JoinTarget::SsObject.all_columns());
        assert_eq!(
            fields,
            vec![
                "sso.g_H",
                "sso.r_H",
                "sso.i_H",
                "sso.discoverySubmissionDate",
                "sso.numObs",
                "(sso.g_H - sso.r_H) AS g_r_color",
                "(sso.r_H - sso.i_H) AS r_i_color",
            ]
        );
    }

    #[test]
    fn test_partial_schema_drops_colors() {
        // No i_H: r-i color cannot be derived
        let available = cols(&["ssObjectId", "g_H", "r_H", "numObs"]);
        let fields = JoinTarget::SsObject.projection(&available);
        assert_eq!(
            fields,
            vec!["sso.g_H", "sso.r_H", "sso.numObs", "(sso.g_H - sso.r_H) AS g_r_color"]
        );
    }

    #[test]
    fn test_diasource_projection() {
        let available = cols(&["diaSourceId", "ssObjectId", "band", "magTrueVband", "midPointMjdTai"]);
        assert_eq!(
            JoinTarget::DiaSource.projection(&available),
            vec!["dias.magTrueVband", "dias.band"]
        );
        assert!(JoinTarget::DiaSource.projection(&[]).is_empty());
    }

    #[test]
    fn test_parse() {
        assert_eq!("SSObject".parse::<JoinTarget>().unwrap(), JoinTarget::SsObject);
        assert_eq!("diasource".parse::<JoinTarget>().unwrap(), JoinTarget::DiaSource);
        assert!("MPCORB".parse::<JoinTarget>().is_err());
    }
}
