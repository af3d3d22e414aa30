//! Orbit-level post-processing of MPCORB rows

use std::collections::HashMap;

use crate::classify::classify_elements;
use crate::error::{Error, Result};
use crate::orbit::semimajor_axis;
use crate::types::ResultTable;

/// Column holding the derived semi-major axis
pub const SEMI_MAJOR_AXIS_COLUMN: &str = "a";

/// Column holding per-row class labels
pub const OBJECT_TYPE_COLUMN: &str = "object_type";

/// Columns trimmed before plotting orbital distributions
pub const TRIM_COLUMNS: [&str; 3] = ["a", "e", "incl"];

/// Default trim percentiles
pub const TRIM_LOW: f64 = 0.5;
pub const TRIM_HIGH: f64 = 99.5;

fn cell(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Add (or replace) column `a` computed from `q` and `e`
///
/// Rows with a missing q or e, or an unbound orbit, get an empty cell.
pub fn with_semimajor_axis(table: &mut ResultTable) -> Result<()> {
    let q = table.column_f64("q")?;
    let e = table.column_f64("e")?;
    let values = q
        .iter()
        .zip(&e)
        .map(|(q, e)| match (q, e) {
            (Some(q), Some(e)) => cell(semimajor_axis(*q, *e)),
            _ => String::new(),
        })
        .collect();
    table.set_column(SEMI_MAJOR_AXIS_COLUMN, values)
}

/// Add (or replace) column `object_type` with the class label of each row
///
/// A row without `incl` (or a table without the column) can still take any
/// class that doesn't bound T_J. Unclassified rows get an empty cell.
pub fn label_classes(table: &mut ResultTable) -> Result<()> {
    let q = table.column_f64("q")?;
    let e = table.column_f64("e")?;
    let incl = if table.has_column("incl") {
        table.column_f64("incl")?
    } else {
        vec![None; table.len()]
    };

    let labels = q
        .iter()
        .zip(&e)
        .zip(&incl)
        .map(|((q, e), incl)| match (q, e) {
            (Some(q), Some(e)) => classify_elements(*q, *e, *incl)
                .map(|class| class.to_string())
                .unwrap_or_default(),
            _ => String::new(),
        })
        .collect();
    table.set_column(OBJECT_TYPE_COLUMN, labels)
}

/// Rows per `object_type` label, most frequent first
///
/// Empty labels are not counted. Ties are ordered by label.
pub fn type_counts(table: &ResultTable) -> Result<Vec<(String, usize)>> {
    let labels = table.column_str(OBJECT_TYPE_COLUMN)?;
    Ok(value_counts(labels.into_iter().filter(|l| !l.is_empty())))
}

pub(crate) fn value_counts<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }
    let mut counts: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(value, n)| (value.to_string(), n))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

/// Percentile of `values` with linear interpolation between closest ranks
///
/// `p` is in [0, 100]. Returns `None` for an empty slice.
pub fn percentile(values: &[f64], p: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let rank = (p / 100.0).clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * (rank - lo as f64))
}

/// Keep rows whose value in every column lies within its `[low, high]` percentiles
///
/// Bounds are computed per column over the rows present before trimming.
/// Rows with a missing value in any of the columns are dropped.
pub fn trim_percentiles(
    table: &mut ResultTable,
    columns: &[&str],
    low: f64,
    high: f64,
) -> Result<()> {
    if !(0.0..=100.0).contains(&low) || !(0.0..=100.0).contains(&high) || low > high {
        return Err(Error::invalid_argument(format!(
            "percentile range [{}, {}] is not within [0, 100]",
            low, high
        )));
    }

    let mut keep = vec![true; table.len()];
    for column in columns {
        let values = table.column_f64(column)?;
        let present: Vec<f64> = values.iter().flatten().copied().collect();
        let (Some(min), Some(max)) = (percentile(&present, low), percentile(&present, high)) else {
            keep.iter_mut().for_each(|k| *k = false);
            continue;
        };
        for (k, value) in keep.iter_mut().zip(&values) {
            *k &= matches!(value, Some(v) if *v >= min && *v <= max);
        }
    }

    let before = table.len();
    table.filter_rows(|i| keep[i]);
    tracing::debug!(
        "Trimmed {} of {} rows outside percentiles [{}, {}] of {:?}",
        before - table.len(),
        before,
        low,
        high,
        columns
    );
    Ok(())
}

/// Add `a`, then trim `a`, `e`, `incl` to their 0.5–99.5 percentile band
pub fn prepare_orbit_table(table: &mut ResultTable) -> Result<()> {
    with_semimajor_axis(table)?;
    trim_percentiles(table, &TRIM_COLUMNS, TRIM_LOW, TRIM_HIGH)
}
