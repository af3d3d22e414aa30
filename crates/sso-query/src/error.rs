//! Error types for query construction and catalog access

use thiserror::Error;

/// Result type alias for sso-query operations
pub type Result<T> = std::result::Result<T, Error>;

/// sso-query errors
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed caller input (both/neither selectors, bad bounds, bad identifiers)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Class name not present in the cutoff table
    #[error("Unknown orbital class: {0}")]
    UnknownClass(String),

    /// Join-target schema lookup failed
    #[error("Schema introspection failed for {table}: {message}")]
    SchemaIntrospection { table: String, message: String },

    /// The catalog service reported an error phase for a job
    #[error("Remote query failed: {0}")]
    RemoteQuery(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Result table access error (missing column, bad cell)
    #[error("Table error: {0}")]
    Table(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// CSV decode error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// HTTP request error
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create a schema introspection error
    pub fn schema(table: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SchemaIntrospection {
            table: table.into(),
            message: message.into(),
        }
    }

    /// Create a remote query error
    pub fn remote(message: impl Into<String>) -> Self {
        Self::RemoteQuery(message.into())
    }

    /// Create a table error
    pub fn table(message: impl Into<String>) -> Self {
        Self::Table(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
