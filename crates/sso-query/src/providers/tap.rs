//! TAP service trait and UWS job types

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::ResultTable;

/// Handle to an asynchronous job on the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobHandle {
    /// Job resource URL (`{base}/async/{job-id}`)
    pub url: String,
}

impl JobHandle {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Job identifier (last path segment)
    pub fn id(&self) -> &str {
        self.url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or(&self.url)
    }
}

/// UWS execution phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobPhase {
    Pending,
    Queued,
    Executing,
    Completed,
    Error,
    Aborted,
    Held,
    Suspended,
    Archived,
    Unknown,
}

impl JobPhase {
    /// Parse the plain-text phase document; unrecognized text maps to `Unknown`
    pub fn parse(text: &str) -> Self {
        match text.trim().to_ascii_uppercase().as_str() {
            "PENDING" => JobPhase::Pending,
            "QUEUED" => JobPhase::Queued,
            "EXECUTING" | "RUN" | "RUNNING" => JobPhase::Executing,
            "COMPLETED" => JobPhase::Completed,
            "ERROR" => JobPhase::Error,
            "ABORTED" => JobPhase::Aborted,
            "HELD" => JobPhase::Held,
            "SUSPENDED" => JobPhase::Suspended,
            "ARCHIVED" => JobPhase::Archived,
            _ => JobPhase::Unknown,
        }
    }

    /// Phases the runner stops polling at
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            JobPhase::Completed | JobPhase::Error | JobPhase::Aborted | JobPhase::Archived
        )
    }

    /// Terminal phases that carry no usable result
    ///
    /// An archived job has had its results deleted.
    pub fn is_failure(&self) -> bool {
        matches!(self, JobPhase::Error | JobPhase::Aborted | JobPhase::Archived)
    }

    /// Phases from which the service moves a started job on by itself
    ///
    /// HELD and SUSPENDED need a client action and `Unknown` is not a
    /// phase at all, so polling them would never end.
    pub fn is_active(&self) -> bool {
        matches!(self, JobPhase::Pending | JobPhase::Queued | JobPhase::Executing)
    }
}

impl std::fmt::Display for JobPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            JobPhase::Pending => "PENDING",
            JobPhase::Queued => "QUEUED",
            JobPhase::Executing => "EXECUTING",
            JobPhase::Completed => "COMPLETED",
            JobPhase::Error => "ERROR",
            JobPhase::Aborted => "ABORTED",
            JobPhase::Held => "HELD",
            JobPhase::Suspended => "SUSPENDED",
            JobPhase::Archived => "ARCHIVED",
            JobPhase::Unknown => "UNKNOWN",
        };
        write!(f, "{}", text)
    }
}

/// Asynchronous table query service (IVOA TAP over UWS)
///
/// Implementations:
/// - `TapClient`: HTTP client for a remote TAP endpoint
#[async_trait]
pub trait TapService: Send + Sync {
    /// Create a job for `query` and start it
    async fn submit(&self, query: &str) -> Result<JobHandle>;

    /// Current phase of a job
    async fn poll(&self, job: &JobHandle) -> Result<JobPhase>;

    /// Result rows of a completed job
    async fn fetch(&self, job: &JobHandle) -> Result<ResultTable>;

    /// Error summary of a failed job, if the service provides one
    async fn error_message(&self, _job: &JobHandle) -> Result<Option<String>> {
        Ok(None)
    }

    /// Service name for logging
    fn name(&self) -> &str;
}
