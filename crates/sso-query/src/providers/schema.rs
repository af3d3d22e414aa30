//! Schema provider trait for join-target column discovery

use async_trait::async_trait;
use std::collections::HashMap;

use crate::error::{Error, Result};

/// Source of table column names
///
/// Implementations:
/// - `TapClient`: queries `TAP_SCHEMA.columns` on the catalog service
/// - `StaticSchema`: fixed in-memory column lists (offline use, tests)
#[async_trait]
pub trait SchemaProvider: Send + Sync {
    /// Column names of `schema.table`
    async fn table_columns(&self, schema: &str, table: &str) -> Result<Vec<String>>;
}

/// In-memory schema keyed by `schema.table`
#[derive(Debug, Clone, Default)]
pub struct StaticSchema {
    tables: HashMap<String, Vec<String>>,
}

impl StaticSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the columns of one table
    pub fn with_table<I, S>(mut self, schema: &str, table: &str, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tables.insert(
            format!("{}.{}", schema, table),
            columns.into_iter().map(Into::into).collect(),
        );
        self
    }
}

#[async_trait]
impl SchemaProvider for StaticSchema {
    async fn table_columns(&self, schema: &str, table: &str) -> Result<Vec<String>> {
        let key = format!("{}.{}", schema, table);
        self.tables
            .get(&key)
            .cloned()
            .ok_or_else(|| Error::schema(key, "table not registered"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_schema_lookup() {
        let schema = StaticSchema::new().with_table("dp03_catalogs_10yr", "DiaSource", ["band"]);

        let cols = schema
            .table_columns("dp03_catalogs_10yr", "DiaSource")
            .await
            .unwrap();
        assert_eq!(cols, vec!["band".to_string()]);

        let missing = schema.table_columns("dp03_catalogs_10yr", "SSObject").await;
        assert!(matches!(missing, Err(Error::SchemaIntrospection { .. })));
    }
}
