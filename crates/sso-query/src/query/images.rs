//! ObsCore image search queries

use serde::{Deserialize, Serialize};

use super::builder::adql_number;
use crate::error::{Error, Result};

/// LSST filter bands
pub const BANDS: [&str; 6] = ["u", "g", "r", "i", "z", "y"];

/// Bands searched when the caller doesn't choose
pub const DEFAULT_BANDS: [&str; 3] = ["g", "r", "i"];

/// Processed visit images
pub const DEFAULT_CALIB_LEVEL: u8 = 2;

/// ICRS sky position in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkyPosition {
    pub ra_deg: f64,
    pub dec_deg: f64,
}

impl SkyPosition {
    /// Create a position, checking ranges (RA in [0, 360), Dec in [-90, 90])
    pub fn new(ra_deg: f64, dec_deg: f64) -> Result<Self> {
        if !ra_deg.is_finite() || !(0.0..360.0).contains(&ra_deg) {
            return Err(Error::invalid_argument(format!(
                "right ascension {} outside [0, 360)",
                ra_deg
            )));
        }
        if !dec_deg.is_finite() || !(-90.0..=90.0).contains(&dec_deg) {
            return Err(Error::invalid_argument(format!(
                "declination {} outside [-90, 90]",
                dec_deg
            )));
        }
        Ok(Self { ra_deg, dec_deg })
    }
}

/// Images covering `center` from `ivoa.ObsCore`
///
/// The band line is omitted when `bands` is `None` or empty.
pub fn build_obscore_query(
    center: SkyPosition,
    bands: Option<&[&str]>,
    calib_level: u8,
) -> Result<String> {
    let mut query = format!(
        "SELECT lsst_visit, lsst_detector, lsst_tract, lsst_patch, lsst_band,\
         s_ra, s_dec, t_min, t_max, s_region\n\
         FROM ivoa.ObsCore\n\
         WHERE calib_level = {}\n",
        calib_level
    );

    if let Some(bands) = bands.filter(|b| !b.is_empty()) {
        if let Some(bad) = bands.iter().find(|b| !BANDS.contains(*b)) {
            return Err(Error::invalid_argument(format!(
                "unknown band '{}' (expected one of {})",
                bad,
                BANDS.join(" ")
            )));
        }
        let clause = bands
            .iter()
            .map(|band| format!("lsst_band = '{}'", band))
            .collect::<Vec<_>>()
            .join(" OR ");
        query.push_str(&format!("AND ({})\n", clause));
    }

    query.push_str(&format!(
        "AND CONTAINS(POINT('ICRS', {},{}), s_region) = 1\n",
        adql_number(center.ra_deg),
        adql_number(center.dec_deg)
    ));

    Ok(query)
}
