//! Catalog service and schema providers

pub mod schema;
pub mod tap;
pub mod tap_client;

pub use schema::{SchemaProvider, StaticSchema};
pub use tap::{JobHandle, JobPhase, TapService};
pub use tap_client::TapClient;
