//! Per-object summaries of joined DiaSource and SSObject rows

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::orbits::value_counts;
use crate::error::{Error, Result};
use crate::types::ResultTable;

/// Object identifier column of MPCORB and the joined tables
pub const OBJECT_ID_COLUMN: &str = "ssObjectID";

/// Filter band column of DiaSource
pub const BAND_COLUMN: &str = "band";

/// Magnitude column of DiaSource used for variability ranges
pub const DEFAULT_MAGNITUDE_COLUMN: &str = "magTrueVband";

/// Discovery dates on or after this are counted as new objects
pub const DEFAULT_DISCOVERY_CUTOFF: &str = "2020-01-01";

/// Observation counts of a DiaSource join
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObservationCounts {
    /// Detections per object, most observed first
    pub by_object: Vec<(String, usize)>,
    /// Detections per band, most observed first
    pub by_band: Vec<(String, usize)>,
    /// Detections per (object, band), ordered by object then band
    pub by_object_band: Vec<(String, String, usize)>,
}

/// Count detections per object, per band, and per object within each band
pub fn observations_by_object_filter(table: &ResultTable) -> Result<ObservationCounts> {
    let ids = table.column_str(OBJECT_ID_COLUMN)?;
    let bands = table.column_str(BAND_COLUMN)?;

    let mut grouped: BTreeMap<(&str, &str), usize> = BTreeMap::new();
    for (id, band) in ids.iter().zip(&bands) {
        *grouped.entry((*id, *band)).or_default() += 1;
    }

    Ok(ObservationCounts {
        by_object: value_counts(ids.iter().copied()),
        by_band: value_counts(bands.iter().copied()),
        by_object_band: grouped
            .into_iter()
            .map(|((id, band), n)| (id.to_string(), band.to_string(), n))
            .collect(),
    })
}

/// Magnitude spread of one object across its detections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MagnitudeRange {
    pub ss_object_id: String,
    pub mag_min: f64,
    pub mag_max: f64,
    pub mag_mean: f64,
    /// `mag_max - mag_min`
    pub range: f64,
    /// Detections with a magnitude
    pub count: usize,
}

/// Per-object magnitude ranges, largest range first
///
/// Detections without a magnitude are skipped; objects with none are omitted.
pub fn magnitude_ranges(table: &ResultTable, mag_column: &str) -> Result<Vec<MagnitudeRange>> {
    let ids = table.column_str(OBJECT_ID_COLUMN)?;
    let mags = table.column_f64(mag_column)?;

    let mut grouped: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for (id, mag) in ids.iter().zip(&mags) {
        if let Some(mag) = mag {
            grouped.entry(*id).or_default().push(*mag);
        }
    }

    let mut ranges: Vec<MagnitudeRange> = grouped
        .into_iter()
        .map(|(id, mags)| {
            let mag_min = mags.iter().copied().fold(f64::INFINITY, f64::min);
            let mag_max = mags.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            MagnitudeRange {
                ss_object_id: id.to_string(),
                mag_min,
                mag_max,
                mag_mean: mags.iter().sum::<f64>() / mags.len() as f64,
                range: mag_max - mag_min,
                count: mags.len(),
            }
        })
        .collect();

    ranges.sort_by(|a, b| b.range.total_cmp(&a.range));
    Ok(ranges)
}

/// The first `n` ranges, or all of them for `None`
pub fn top(ranges: &[MagnitudeRange], n: Option<usize>) -> &[MagnitudeRange] {
    match n {
        Some(n) => &ranges[..n.min(ranges.len())],
        None => ranges,
    }
}

/// Mean of the magnitude ranges
pub fn mean_range(ranges: &[MagnitudeRange]) -> Option<f64> {
    if ranges.is_empty() {
        return None;
    }
    Some(ranges.iter().map(|r| r.range).sum::<f64>() / ranges.len() as f64)
}

/// Add column `is_new`: whether `discoverySubmissionDate` is on or after `cutoff`
///
/// Dates compare on their `YYYY-MM-DD` prefix. Unparseable dates count as known.
pub fn mark_new_objects(table: &mut ResultTable, cutoff: &str) -> Result<()> {
    let cutoff = date_prefix(cutoff)
        .ok_or_else(|| Error::invalid_argument(format!("cutoff '{}' is not YYYY-MM-DD", cutoff)))?;

    let flags = table
        .column_str("discoverySubmissionDate")?
        .into_iter()
        .map(|date| {
            let is_new = date_prefix(date).is_some_and(|d| d >= cutoff);
            is_new.to_string()
        })
        .collect();
    table.set_column("is_new", flags)
}

fn date_prefix(text: &str) -> Option<&str> {
    let date = text.trim().get(..10)?;
    let bytes = date.as_bytes();
    let well_formed = bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    });
    well_formed.then_some(date)
}
