//! ADQL query construction over the MPCORB table
//!
//! Rendering is a single pass: validate the request, resolve cutoffs through
//! the classifier, discover join columns, then emit clauses in the fixed
//! order q, e, a, Tisserand.

use serde::{Deserialize, Serialize};

use super::join::JoinTarget;
use crate::classify::classify;
use crate::error::{Error, Result};
use crate::orbit::JUPITER_SEMI_MAJOR_AXIS;
use crate::providers::SchemaProvider;
use crate::types::{CutoffField, OrbitalClass, OrbitalCutoffs};

/// Base orbit table within a catalog schema
pub const BASE_TABLE: &str = "MPCORB";

/// Alias of the base table in rendered queries
pub const BASE_ALIAS: &str = "mpc";

/// Columns projected from MPCORB when the caller doesn't choose
pub const DEFAULT_FIELDS: [&str; 5] = ["incl", "q", "e", "ssObjectID", "mpcDesignation"];

/// Semi-major axis expressed through the stored q and e columns
const SEMI_MAJOR_AXIS_EXPR: &str = "mpc.q/(1-mpc.e)";

/// Parameters of one query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    /// Catalog schema (e.g. "dp03_catalogs_10yr")
    pub catalog: String,
    /// Orbital class to query; exclusive with `cutoffs`
    #[serde(default)]
    pub class_name: Option<String>,
    /// Custom cutoffs to query; exclusive with `class_name`
    #[serde(default)]
    pub cutoffs: Option<OrbitalCutoffs>,
    /// Related table to inner-join on ssObjectId
    #[serde(default)]
    pub join: Option<JoinTarget>,
    /// Maximum number of rows
    #[serde(default)]
    pub limit: Option<u64>,
    /// Sort column, optionally followed by ASC or DESC
    #[serde(default)]
    pub order_by: Option<String>,
    /// MPCORB projection replacing the default columns
    #[serde(default)]
    pub fields: Option<Vec<String>>,
}

impl QueryRequest {
    /// Create an empty request against a catalog
    pub fn new(catalog: impl Into<String>) -> Self {
        Self {
            catalog: catalog.into(),
            ..Default::default()
        }
    }

    /// Query a named orbital class
    pub fn for_class(catalog: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self::new(catalog).with_class(class_name)
    }

    /// Query custom cutoffs
    pub fn for_cutoffs(catalog: impl Into<String>, cutoffs: OrbitalCutoffs) -> Self {
        Self::new(catalog).with_cutoffs(cutoffs)
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_cutoffs(mut self, cutoffs: OrbitalCutoffs) -> Self {
        self.cutoffs = Some(cutoffs);
        self
    }

    /// Join a related table
    pub fn with_join(mut self, join: JoinTarget) -> Self {
        self.join = Some(join);
        self
    }

    /// Limit the number of rows
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sort the rows
    pub fn with_order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by = Some(order_by.into());
        self
    }

    /// Replace the default MPCORB projection
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }
}

/// A rendered query and the class it was resolved to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuiltQuery {
    /// ADQL text, terminated by `;`
    pub text: String,
    /// Resolved class, `None` for an unclassified custom query
    pub class: Option<OrbitalClass>,
    /// Cutoffs the WHERE clause was rendered from
    pub cutoffs: OrbitalCutoffs,
}

impl std::fmt::Display for BuiltQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Renders query requests, consulting a schema provider for join columns
pub struct QueryBuilder<'a> {
    schema: &'a dyn SchemaProvider,
}

impl<'a> QueryBuilder<'a> {
    /// Create a builder over a schema provider
    pub fn new(schema: &'a dyn SchemaProvider) -> Self {
        Self { schema }
    }

    /// Validate, classify and render a request
    ///
    /// Fails before producing any text on malformed input. A failed schema
    /// lookup for the join table is logged and the join is emitted without
    /// extra columns.
    pub async fn make_query(&self, request: &QueryRequest) -> Result<BuiltQuery> {
        validate_identifier(&request.catalog, "catalog")?;
        if request.limit == Some(0) {
            return Err(Error::invalid_argument("limit must be positive"));
        }

        let mut fields = match &request.fields {
            Some(fields) if fields.is_empty() => {
                return Err(Error::invalid_argument("field list must not be empty"));
            }
            Some(fields) => fields
                .iter()
                .map(|f| qualify(f, "field"))
                .collect::<Result<Vec<_>>>()?,
            None => DEFAULT_FIELDS
                .iter()
                .map(|f| format!("{}.{}", BASE_ALIAS, f))
                .collect(),
        };

        let order_by = request
            .order_by
            .as_deref()
            .map(render_order_by)
            .transpose()?;

        let resolved = classify(request.class_name.as_deref(), request.cutoffs.as_ref())?;
        resolved.cutoffs.validate()?;
        let conditions = render_conditions(&resolved.cutoffs);

        if let Some(join) = request.join {
            fields.extend(self.join_fields(&request.catalog, join).await);
        }

        let mut text = format!(
            "SELECT {} FROM {}.{} AS {}",
            fields.join(", "),
            request.catalog,
            BASE_TABLE,
            BASE_ALIAS
        );

        if let Some(join) = request.join {
            text.push_str(&format!(
                "\n    INNER JOIN {}.{} AS {alias} ON {}.ssObjectId = {alias}.ssObjectId",
                request.catalog,
                join.table(),
                BASE_ALIAS,
                alias = join.alias()
            ));
        }

        text.push_str("\n    WHERE ");
        text.push_str(&conditions.join(" AND "));

        if let Some(order_by) = order_by {
            text.push_str("\n    ORDER BY ");
            text.push_str(&order_by);
        }
        if let Some(limit) = request.limit {
            text.push_str(&format!("\n    LIMIT {}", limit));
        }
        text.push(';');

        tracing::debug!(
            "Built query (class: {}): {}",
            resolved.class.map(|c| c.as_str()).unwrap_or("none"),
            text
        );

        Ok(BuiltQuery {
            text,
            class: resolved.class,
            cutoffs: resolved.cutoffs,
        })
    }

    async fn join_fields(&self, catalog: &str, join: JoinTarget) -> Vec<String> {
        match self.schema.table_columns(catalog, join.table()).await {
            Ok(columns) => {
                let fields = join.projection(&columns);
                tracing::debug!(
                    "{}.{} provides {} of {} optional columns",
                    catalog,
                    join.table(),
                    fields.len(),
                    join.optional_columns().len()
                );
                fields
            }
            Err(e) => {
                tracing::warn!(
                    "Schema lookup for {}.{} failed, joining without extra columns: {}",
                    catalog,
                    join.table(),
                    e
                );
                Vec::new()
            }
        }
    }
}

/// WHERE conditions for a cutoff record, in clause order
///
/// Semi-major axis bounds become `q/(1-e)` inequalities. The Tisserand pair
/// renders as a radicand guard plus a `BETWEEN`, and only when both bounds
/// are present.
pub fn render_conditions(cutoffs: &OrbitalCutoffs) -> Vec<String> {
    let mut conditions = Vec::new();

    for (field, value) in cutoffs.defined() {
        let value = adql_number(value);
        let condition = match field {
            CutoffField::QMin => format!("mpc.q > {}", value),
            CutoffField::QMax => format!("mpc.q < {}", value),
            CutoffField::EMin => format!("mpc.e > {}", value),
            CutoffField::EMax => format!("mpc.e < {}", value),
            CutoffField::AMin => format!("{} > {}", SEMI_MAJOR_AXIS_EXPR, value),
            CutoffField::AMax => format!("{} < {}", SEMI_MAJOR_AXIS_EXPR, value),
            CutoffField::TjMin | CutoffField::TjMax => continue,
        };
        conditions.push(condition);
    }

    if let (Some(tj_min), Some(tj_max)) = (cutoffs.tj_min, cutoffs.tj_max) {
        let aj = adql_number(JUPITER_SEMI_MAJOR_AXIS);
        let radicand = format!("(mpc.q * (1 - mpc.e)) / ({} * (1 + mpc.e))", aj);
        conditions.push(format!("{} >= 0", radicand));
        conditions.push(format!(
            "({aj} * (1 - mpc.e)) / mpc.q + 2 * COS(RADIANS(mpc.incl)) * SQRT({radicand}) BETWEEN {} AND {}",
            adql_number(tj_min),
            adql_number(tj_max),
            aj = aj,
            radicand = radicand
        ));
    }

    conditions
}

/// Numeric literal with a decimal point for whole numbers (`50` renders as `50.0`)
pub fn adql_number(value: f64) -> String {
    format!("{:?}", value)
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn validate_identifier(s: &str, what: &str) -> Result<()> {
    if is_identifier(s) {
        Ok(())
    } else {
        Err(Error::invalid_argument(format!(
            "{} '{}' is not a valid identifier",
            what, s
        )))
    }
}

/// Column reference, prefixing bare names with the base alias
fn qualify(column: &str, what: &str) -> Result<String> {
    let column = column.trim();
    match column.split_once('.') {
        Some((table, name)) => {
            validate_identifier(table, what)?;
            validate_identifier(name, what)?;
            Ok(column.to_string())
        }
        None => {
            validate_identifier(column, what)?;
            Ok(format!("{}.{}", BASE_ALIAS, column))
        }
    }
}

fn render_order_by(order_by: &str) -> Result<String> {
    let mut parts = order_by.split_whitespace();
    let column = parts
        .next()
        .ok_or_else(|| Error::invalid_argument("order_by must name a column"))?;
    let column = qualify(column, "order_by column")?;

    match (parts.next(), parts.next()) {
        (None, _) => Ok(column),
        (Some(dir), None) if dir.eq_ignore_ascii_case("asc") => Ok(format!("{} ASC", column)),
        (Some(dir), None) if dir.eq_ignore_ascii_case("desc") => Ok(format!("{} DESC", column)),
        _ => Err(Error::invalid_argument(format!(
            "order_by '{}' must be '<column> [ASC|DESC]'",
            order_by
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::StaticSchema;

    const DP03: &str = "dp03_catalogs_10yr";

    const HEAD: &str = "SELECT mpc.incl, mpc.q, mpc.e, mpc.ssObjectID, mpc.mpcDesignation";

    const DIAS_JOIN: &str = ", dias.magTrueVband, dias.band FROM dp03_catalogs_10yr.MPCORB AS mpc\n    \
        INNER JOIN dp03_catalogs_10yr.DiaSource AS dias ON mpc.ssObjectId = dias.ssObjectId";

    const SSO_JOIN: &str = ", sso.g_H, sso.r_H, sso.i_H, sso.discoverySubmissionDate, sso.numObs, \
        (sso.g_H - sso.r_H) AS g_r_color, (sso.r_H - sso.i_H) AS r_i_color \
        FROM dp03_catalogs_10yr.MPCORB AS mpc\n    \
        INNER JOIN dp03_catalogs_10yr.SSObject AS sso ON mpc.ssObjectId = sso.ssObjectId";

    const JFC_WHERE: &str = "(mpc.q * (1 - mpc.e)) / (5.204 * (1 + mpc.e)) >= 0 AND \
        (5.204 * (1 - mpc.e)) / mpc.q + 2 * COS(RADIANS(mpc.incl)) * \
        SQRT((mpc.q * (1 - mpc.e)) / (5.204 * (1 + mpc.e))) BETWEEN 2.0 AND 3.0";

    /// Expected WHERE clause of every class, as the catalog tests pin them
    fn class_where(class: OrbitalClass) -> &'static str {
        match class {
            OrbitalClass::Neo => "mpc.q < 1.3 AND mpc.e < 1.0 AND mpc.q/(1-mpc.e) < 4.0",
            OrbitalClass::Mba => "mpc.q > 1.66 AND mpc.q/(1-mpc.e) > 2.0 AND mpc.q/(1-mpc.e) < 3.2",
            OrbitalClass::Jfc => JFC_WHERE,
            OrbitalClass::Lpc => "mpc.q/(1-mpc.e) > 50.0",
            OrbitalClass::Centaur => "mpc.q/(1-mpc.e) > 5.5 AND mpc.q/(1-mpc.e) < 30.1",
            OrbitalClass::Tno => "mpc.q/(1-mpc.e) > 30.1 AND mpc.q/(1-mpc.e) < 50.0",
            OrbitalClass::Jtrojan => "mpc.e < 0.3 AND mpc.q/(1-mpc.e) > 4.8 AND mpc.q/(1-mpc.e) < 5.4",
            OrbitalClass::Ntrojan => "mpc.q/(1-mpc.e) > 29.8 AND mpc.q/(1-mpc.e) < 30.4",
        }
    }

    fn no_join(catalog: &str, where_clause: &str) -> String {
        format!("{} FROM {}.MPCORB AS mpc\n    WHERE {};", HEAD, catalog, where_clause)
    }

    fn full_schema() -> StaticSchema {
        StaticSchema::new()
            .with_table(DP03, "DiaSource", ["diaSourceId", "ssObjectId", "magTrueVband", "band"])
            .with_table(
                DP03,
                "SSObject",
                ["ssObjectId", "g_H", "r_H", "i_H", "z_H", "discoverySubmissionDate", "numObs"],
            )
    }

    async fn build(request: QueryRequest) -> Result<BuiltQuery> {
        let schema = full_schema();
        QueryBuilder::new(&schema).make_query(&request).await
    }

    #[tokio::test]
    async fn test_neo_type_no_join() {
        let built = build(QueryRequest::for_class(DP03, "NEO")).await.unwrap();
        assert_eq!(
            built.text,
            "SELECT mpc.incl, mpc.q, mpc.e, mpc.ssObjectID, mpc.mpcDesignation FROM dp03_catalogs_10yr.MPCORB AS mpc\n    \
             WHERE mpc.q < 1.3 AND mpc.e < 1.0 AND mpc.q/(1-mpc.e) < 4.0;"
        );
        assert_eq!(built.class, Some(OrbitalClass::Neo));
    }

    #[tokio::test]
    async fn test_every_type_no_join() {
        for class in OrbitalClass::all() {
            let built = build(QueryRequest::for_class(DP03, class.as_str())).await.unwrap();
            assert_eq!(built.text, no_join(DP03, class_where(class)), "class {}", class);
            assert_eq!(built.class, Some(class));
        }
    }

    #[tokio::test]
    async fn test_every_type_no_join_dp1() {
        for class in OrbitalClass::all() {
            let built = build(QueryRequest::for_class("dp1_catalogs_10yr", class.as_str()))
                .await
                .unwrap();
            assert_eq!(built.text, no_join("dp1_catalogs_10yr", class_where(class)));
        }
    }

    #[tokio::test]
    async fn test_centaur_params_no_join() {
        let cutoffs = OrbitalCutoffs::new()
            .with(CutoffField::AMin, 5.5)
            .with(CutoffField::AMax, 30.1);
        let built = build(QueryRequest::for_cutoffs(DP03, cutoffs)).await.unwrap();
        assert_eq!(
            built.text,
            "SELECT mpc.incl, mpc.q, mpc.e, mpc.ssObjectID, mpc.mpcDesignation FROM dp03_catalogs_10yr.MPCORB AS mpc\n    \
             WHERE mpc.q/(1-mpc.e) > 5.5 AND mpc.q/(1-mpc.e) < 30.1;"
        );
        assert_eq!(built.class, Some(OrbitalClass::Centaur));
    }

    #[tokio::test]
    async fn test_every_params_no_join() {
        for class in OrbitalClass::all() {
            let built = build(QueryRequest::for_cutoffs(DP03, class.cutoffs())).await.unwrap();
            assert_eq!(built.text, no_join(DP03, class_where(class)));
            assert_eq!(built.class, Some(class));
        }
    }

    #[tokio::test]
    async fn test_jfc_params_no_join() {
        let cutoffs = OrbitalCutoffs::new()
            .with(CutoffField::TjMin, 2.0)
            .with(CutoffField::TjMax, 3.0);
        let built = build(QueryRequest::for_cutoffs(DP03, cutoffs)).await.unwrap();
        assert_eq!(
            built.text,
            "SELECT mpc.incl, mpc.q, mpc.e, mpc.ssObjectID, mpc.mpcDesignation FROM dp03_catalogs_10yr.MPCORB AS mpc\n    \
             WHERE (mpc.q * (1 - mpc.e)) / (5.204 * (1 + mpc.e)) >= 0 AND (5.204 * (1 - mpc.e)) / mpc.q + 2 * \
             COS(RADIANS(mpc.incl)) * SQRT((mpc.q * (1 - mpc.e)) / (5.204 * (1 + mpc.e))) BETWEEN 2.0 AND 3.0;"
        );
        assert_eq!(built.class, Some(OrbitalClass::Jfc));
    }

    #[tokio::test]
    async fn test_every_type_join_diasource() {
        for class in OrbitalClass::all() {
            let request = QueryRequest::for_class(DP03, class.as_str()).with_join(JoinTarget::DiaSource);
            let built = build(request).await.unwrap();
            let expected = format!("{}{}\n    WHERE {};", HEAD, DIAS_JOIN, class_where(class));
            assert_eq!(built.text, expected, "class {}", class);
        }
    }

    #[tokio::test]
    async fn test_neo_params_join_ssobject() {
        let cutoffs = OrbitalCutoffs::new()
            .with(CutoffField::QMax, 1.3)
            .with(CutoffField::AMax, 4.0)
            .with(CutoffField::EMax, 1.0);
        let request = QueryRequest::for_cutoffs(DP03, cutoffs).with_join(JoinTarget::SsObject);
        let built = build(request).await.unwrap();
        assert_eq!(
            built.text,
            "SELECT mpc.incl, mpc.q, mpc.e, mpc.ssObjectID, mpc.mpcDesignation, sso.g_H, sso.r_H, sso.i_H, \
             sso.discoverySubmissionDate, sso.numObs, (sso.g_H - sso.r_H) AS g_r_color, \
             (sso.r_H - sso.i_H) AS r_i_color FROM dp03_catalogs_10yr.MPCORB AS mpc\n    \
             INNER JOIN dp03_catalogs_10yr.SSObject AS sso ON mpc.ssObjectId = sso.ssObjectId\n    \
             WHERE mpc.q < 1.3 AND mpc.e < 1.0 AND mpc.q/(1-mpc.e) < 4.0;"
        );
        assert_eq!(built.class, Some(OrbitalClass::Neo));
    }

    #[tokio::test]
    async fn test_every_params_join_ssobject() {
        for class in OrbitalClass::all() {
            let request = QueryRequest::for_cutoffs(DP03, class.cutoffs()).with_join(JoinTarget::SsObject);
            let built = build(request).await.unwrap();
            let expected = format!("{}{}\n    WHERE {};", HEAD, SSO_JOIN, class_where(class));
            assert_eq!(built.text, expected, "class {}", class);
            assert_eq!(built.class, Some(class));
        }
    }

    #[tokio::test]
    async fn test_schema_failure_degrades_to_bare_join() {
        let schema = StaticSchema::new();
        let request = QueryRequest::for_class(DP03, "LPC").with_join(JoinTarget::SsObject);
        let built = QueryBuilder::new(&schema).make_query(&request).await.unwrap();
        assert_eq!(
            built.text,
            "SELECT mpc.incl, mpc.q, mpc.e, mpc.ssObjectID, mpc.mpcDesignation FROM dp03_catalogs_10yr.MPCORB AS mpc\n    \
             INNER JOIN dp03_catalogs_10yr.SSObject AS sso ON mpc.ssObjectId = sso.ssObjectId\n    \
             WHERE mpc.q/(1-mpc.e) > 50.0;"
        );
    }

    #[tokio::test]
    async fn test_partial_schema_projects_present_columns_only() {
        let schema = StaticSchema::new().with_table(DP03, "SSObject", ["ssObjectId", "r_H", "i_H"]);
        let request = QueryRequest::for_class(DP03, "TNO").with_join(JoinTarget::SsObject);
        let built = QueryBuilder::new(&schema).make_query(&request).await.unwrap();
        assert!(built.text.starts_with(
            "SELECT mpc.incl, mpc.q, mpc.e, mpc.ssObjectID, mpc.mpcDesignation, sso.r_H, sso.i_H, \
             (sso.r_H - sso.i_H) AS r_i_color FROM"
        ));
    }

    #[tokio::test]
    async fn test_unclassified_custom_query() {
        let cutoffs = OrbitalCutoffs::new()
            .with(CutoffField::QMin, 0.5)
            .with(CutoffField::EMin, 0.9);
        let built = build(QueryRequest::for_cutoffs(DP03, cutoffs)).await.unwrap();
        assert_eq!(built.text, no_join(DP03, "mpc.q > 0.5 AND mpc.e > 0.9"));
        assert_eq!(built.class, None);
    }

    #[tokio::test]
    async fn test_limit_order_and_fields() {
        let request = QueryRequest::for_class(DP03, "MBA")
            .with_fields(["q", "e", "mpc.incl"])
            .with_order_by("q desc")
            .with_limit(100);
        let built = build(request).await.unwrap();
        assert_eq!(
            built.text,
            "SELECT mpc.q, mpc.e, mpc.incl FROM dp03_catalogs_10yr.MPCORB AS mpc\n    \
             WHERE mpc.q > 1.66 AND mpc.q/(1-mpc.e) > 2.0 AND mpc.q/(1-mpc.e) < 3.2\n    \
             ORDER BY mpc.q DESC\n    LIMIT 100;"
        );
    }

    #[tokio::test]
    async fn test_both_or_neither_selector() {
        let both = QueryRequest::for_class(DP03, "NEO").with_cutoffs(OrbitalClass::Neo.cutoffs());
        assert!(matches!(build(both).await, Err(Error::InvalidArgument(_))));

        let neither = QueryRequest::new(DP03);
        assert!(matches!(build(neither).await, Err(Error::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn test_unknown_class() {
        let result = build(QueryRequest::for_class(DP03, "Asteroid")).await;
        assert!(matches!(result, Err(Error::UnknownClass(_))));
    }

    #[tokio::test]
    async fn test_malformed_input_rejected() {
        let lone_tj = OrbitalCutoffs::new().with(CutoffField::TjMax, 3.0);
        assert!(matches!(
            build(QueryRequest::for_cutoffs(DP03, lone_tj)).await,
            Err(Error::InvalidArgument(_))
        ));

        let empty = OrbitalCutoffs::new();
        assert!(build(QueryRequest::for_cutoffs(DP03, empty)).await.is_err());

        let bad_catalog = QueryRequest::for_class("dp03; DROP TABLE x", "NEO");
        assert!(build(bad_catalog).await.is_err());

        assert!(build(QueryRequest::for_class(DP03, "NEO").with_limit(0)).await.is_err());
        assert!(build(QueryRequest::for_class(DP03, "NEO").with_fields(["q q"])).await.is_err());
        assert!(build(QueryRequest::for_class(DP03, "NEO").with_order_by("q sideways")).await.is_err());
    }

    #[test]
    fn test_adql_number() {
        assert_eq!(adql_number(50.0), "50.0");
        assert_eq!(adql_number(1.66), "1.66");
        assert_eq!(adql_number(30.1), "30.1");
        assert_eq!(adql_number(5.204), "5.204");
    }

    #[test]
    fn test_conditions_order() {
        let cutoffs = OrbitalCutoffs::new()
            .with(CutoffField::AMax, 3.0)
            .with(CutoffField::QMin, 1.0)
            .with(CutoffField::EMax, 0.5)
            .with(CutoffField::AMin, 2.0)
            .with(CutoffField::EMin, 0.1)
            .with(CutoffField::QMax, 2.0);
        assert_eq!(
            render_conditions(&cutoffs),
            vec![
                "mpc.q > 1.0",
                "mpc.q < 2.0",
                "mpc.e > 0.1",
                "mpc.e < 0.5",
                "mpc.q/(1-mpc.e) > 2.0",
                "mpc.q/(1-mpc.e) < 3.0",
            ]
        );
    }
}
