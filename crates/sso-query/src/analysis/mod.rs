//! Post-processing of query results

mod observations;
mod orbits;

pub use observations::{
    magnitude_ranges, mark_new_objects, mean_range, observations_by_object_filter, top,
    MagnitudeRange, ObservationCounts, BAND_COLUMN, DEFAULT_DISCOVERY_CUTOFF,
    DEFAULT_MAGNITUDE_COLUMN, OBJECT_ID_COLUMN,
};
pub use orbits::{
    label_classes, percentile, prepare_orbit_table, trim_percentiles, type_counts,
    with_semimajor_axis, OBJECT_TYPE_COLUMN, SEMI_MAJOR_AXIS_COLUMN, TRIM_COLUMNS, TRIM_HIGH,
    TRIM_LOW,
};
