//! ADQL query building

pub mod builder;
pub mod images;
pub mod join;

pub use builder::{
    adql_number, render_conditions, BuiltQuery, QueryBuilder, QueryRequest, BASE_ALIAS, BASE_TABLE,
    DEFAULT_FIELDS,
};
pub use images::{build_obscore_query, SkyPosition, BANDS, DEFAULT_BANDS, DEFAULT_CALIB_LEVEL};
pub use join::{ColorIndex, JoinTarget};
