//! Query execution against the catalog service

mod runner;

pub use runner::QueryRunner;
