//! HTTP client for an IVOA TAP service
//!
//! Jobs go through the UWS resources under `{base}/async`; schema lookups
//! use a synchronous query against `TAP_SCHEMA.columns`.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url};

use crate::config::TapConfig;
use crate::error::{Error, Result};
use crate::types::ResultTable;

use super::schema::SchemaProvider;
use super::tap::{JobHandle, JobPhase, TapService};

/// TAP client over reqwest
pub struct TapClient {
    /// Follows redirects (result documents are commonly served from storage URLs)
    client: Client,
    /// Leaves redirects alone so the job URL can be read from `Location`
    submit_client: Client,
    base_url: String,
    access_token: Option<String>,
    response_format: String,
}

impl TapClient {
    /// Create a client for the configured service
    pub fn new(config: &TapConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        let submit_client = Client::builder()
            .timeout(config.timeout())
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            client,
            submit_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            access_token: config.access_token.clone(),
            response_format: config.response_format.clone(),
        })
    }

    /// Service base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn query_form<'q>(&'q self, query: &'q str) -> [(&'static str, &'q str); 4] {
        [
            ("LANG", "ADQL"),
            ("REQUEST", "doQuery"),
            ("RESPONSEFORMAT", self.response_format.as_str()),
            ("QUERY", query),
        ]
    }

    /// Run a query synchronously and decode the result
    pub async fn query_sync(&self, query: &str) -> Result<ResultTable> {
        let url = format!("{}/sync", self.base_url);
        let response = self
            .authorize(self.client.post(&url))
            .form(&self.query_form(query))
            .send()
            .await?;
        let body = checked(response, "sync query").await?.text().await?;
        ResultTable::from_csv(&body)
    }
}

async fn checked(response: Response, what: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(Error::remote(format!("{} returned {}: {}", what, status, body.trim())))
}

/// Job URL from a job-creation response's `Location` header, resolved against the request URL
fn job_location(request_url: &str, location: Option<&str>) -> Result<String> {
    let location =
        location.ok_or_else(|| Error::remote("job creation response has no Location header"))?;
    let base = Url::parse(request_url)
        .map_err(|e| Error::remote(format!("invalid service URL {}: {}", request_url, e)))?;
    let url = base
        .join(location)
        .map_err(|e| Error::remote(format!("invalid job location {}: {}", location, e)))?;
    Ok(url.to_string())
}

/// Human-readable message from a UWS error document
///
/// VOTable error documents carry the message in the `QUERY_STATUS` INFO element;
/// anything else is returned as trimmed text.
fn error_text(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    if let Some(start) = body.find("QUERY_STATUS") {
        let rest = &body[start..];
        if let (Some(open), Some(close)) = (rest.find('>'), rest.find("</INFO>")) {
            if open < close {
                let message = rest[open + 1..close].trim();
                if !message.is_empty() {
                    return Some(message.to_string());
                }
            }
        }
    }

    Some(body.to_string())
}

/// ADQL listing the columns of `schema.table`
fn columns_query(schema: &str, table: &str) -> String {
    let qualified = format!("{}.{}", schema, table).replace('\'', "''");
    format!(
        "SELECT column_name FROM TAP_SCHEMA.columns WHERE table_name = '{}'",
        qualified
    )
}

#[async_trait]
impl TapService for TapClient {
    async fn submit(&self, query: &str) -> Result<JobHandle> {
        let url = format!("{}/async", self.base_url);
        let response = self
            .authorize(self.submit_client.post(&url))
            .form(&self.query_form(query))
            .send()
            .await?;

        let status = response.status();
        if !(status.is_redirection() || status.is_success()) {
            checked(response, "job creation").await?;
            return Err(Error::remote(format!("job creation returned {}", status)));
        }

        let location = response
            .headers()
            .get(reqwest::header::LOCATION)
            .and_then(|v| v.to_str().ok());
        let job = JobHandle::new(job_location(&url, location)?);
        tracing::debug!("Created job {} at {}", job.id(), job.url);

        let response = self
            .authorize(self.submit_client.post(format!("{}/phase", job.url)))
            .form(&[("PHASE", "RUN")])
            .send()
            .await?;
        let status = response.status();
        if !(status.is_redirection() || status.is_success()) {
            checked(response, "job start").await?;
        }

        Ok(job)
    }

    async fn poll(&self, job: &JobHandle) -> Result<JobPhase> {
        let response = self
            .authorize(self.client.get(format!("{}/phase", job.url)))
            .send()
            .await?;
        let text = checked(response, "phase lookup").await?.text().await?;
        Ok(JobPhase::parse(&text))
    }

    async fn fetch(&self, job: &JobHandle) -> Result<ResultTable> {
        let response = self
            .authorize(self.client.get(format!("{}/results/result", job.url)))
            .send()
            .await?;
        let body = checked(response, "result download").await?.text().await?;
        if body.trim().is_empty() {
            return Ok(ResultTable::default());
        }
        ResultTable::from_csv(&body)
    }

    async fn error_message(&self, job: &JobHandle) -> Result<Option<String>> {
        let response = self
            .authorize(self.client.get(format!("{}/error", job.url)))
            .send()
            .await?;
        if !response.status().is_success() {
            return Ok(None);
        }
        Ok(error_text(&response.text().await?))
    }

    fn name(&self) -> &str {
        "tap"
    }
}

#[async_trait]
impl SchemaProvider for TapClient {
    async fn table_columns(&self, schema: &str, table: &str) -> Result<Vec<String>> {
        let qualified = format!("{}.{}", schema, table);
        let result = self
            .query_sync(&columns_query(schema, table))
            .await
            .map_err(|e| Error::schema(&qualified, e.to_string()))?;

        let columns: Vec<String> = result
            .column_str("column_name")
            .map_err(|e| Error::schema(&qualified, e.to_string()))?
            .into_iter()
            .map(|name| name.trim().to_string())
            .collect();

        if columns.is_empty() {
            return Err(Error::schema(qualified, "table has no columns in TAP_SCHEMA"));
        }
        Ok(columns)
    }
}
