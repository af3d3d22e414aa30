//! sso-query: Solar-system object queries against a TAP catalog service
//!
//! This crate classifies orbits into named dynamical classes, renders ADQL
//! queries over the MPCORB table (optionally joined with DiaSource or
//! SSObject), runs them as asynchronous TAP jobs, and post-processes the
//! returned rows.

pub mod analysis;
pub mod classify;
pub mod config;
pub mod error;
pub mod orbit;
pub mod processing;
pub mod providers;
pub mod query;
pub mod types;

pub use classify::{classify, classify_elements, classify_orbit, match_class, ResolvedQuerySpec};
pub use config::SsoConfig;
pub use error::{Error, Result};
pub use processing::QueryRunner;
pub use providers::{SchemaProvider, StaticSchema, TapClient, TapService};
pub use query::{BuiltQuery, JoinTarget, QueryBuilder, QueryRequest};
pub use types::{CutoffField, OrbitalClass, OrbitalCutoffs, ResultTable, CLASS_TABLE, ROW_LABEL_ORDER};
