//! Runs a query as an asynchronous job and collects its rows

use std::time::Duration;

use crate::error::{Error, Result};
use crate::providers::{JobPhase, TapService};
use crate::query::BuiltQuery;
use crate::types::ResultTable;

/// Submits queries to a TAP service and waits for their results
///
/// Polls at a fixed interval while the job is pending, queued or executing.
/// There is no retry and no overall deadline; HTTP timeouts are the service
/// client's.
pub struct QueryRunner<S: TapService> {
    service: S,
    poll_interval: Duration,
}

impl<S: TapService> QueryRunner<S> {
    /// Create a runner over a service
    pub fn new(service: S, poll_interval: Duration) -> Self {
        Self {
            service,
            poll_interval,
        }
    }

    /// Underlying service
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Run ADQL text to completion
    ///
    /// A job ending in `ERROR`, `ABORTED` or `ARCHIVED` becomes
    /// [`Error::RemoteQuery`] carrying the service's error text, and so does a
    /// job left in a phase that needs a client action (`HELD`, `SUSPENDED`)
    /// or that the service didn't report recognizably. An empty result is
    /// logged and returned as an empty table.
    pub async fn run(&self, query: &str) -> Result<ResultTable> {
        let job = self.service.submit(query).await?;
        tracing::info!("Submitted job {} to {}", job.id(), self.service.name());

        let mut last = None;
        let phase = loop {
            let phase = self.service.poll(&job).await?;
            if last != Some(phase) {
                tracing::info!("Job {} phase: {}", job.id(), phase);
                last = Some(phase);
            }
            if phase.is_terminal() {
                break phase;
            }
            if !phase.is_active() {
                let detail = format!("job {} stalled in phase {}", job.id(), phase);
                tracing::error!("Job {} failed: {}", job.id(), detail);
                return Err(Error::remote(detail));
            }
            tokio::time::sleep(self.poll_interval).await;
        };

        if phase.is_failure() {
            let detail = match self.service.error_message(&job).await {
                Ok(Some(message)) => message,
                Ok(None) => format!("job {} ended in phase {}", job.id(), phase),
                Err(e) => {
                    tracing::debug!("Could not read error document for job {}: {}", job.id(), e);
                    format!("job {} ended in phase {}", job.id(), phase)
                }
            };
            tracing::error!("Job {} failed: {}", job.id(), detail);
            return Err(Error::remote(detail));
        }

        debug_assert_eq!(phase, JobPhase::Completed);
        let table = self.service.fetch(&job).await?;
        if table.is_empty() {
            tracing::warn!("Job {} returned no rows", job.id());
        } else {
            tracing::info!("Job {} returned {} rows", job.id(), table.len());
        }
        Ok(table)
    }

    /// Run a built query, logging the class it was resolved to
    pub async fn run_query(&self, query: &BuiltQuery) -> Result<ResultTable> {
        match query.class {
            Some(class) => tracing::info!("Running {} query", class),
            None => tracing::info!("Running unclassified query"),
        }
        self.run(&query.text).await
    }
}
