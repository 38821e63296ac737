use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;

/// Wire body for `POST /problems/{id}/time`.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeReport {
    pub seconds: u64,
}

#[async_trait]
pub trait Reporter {
    /// Used at startup to verify all configurations are available to reach
    /// the reporting endpoint.
    fn health_check(&self) -> Result<()>;

    /// Sends one batch of elapsed seconds to the server. Callers treat the
    /// result as advisory; a failed report is dropped, never re-sent.
    async fn report_time(&self, seconds: u64) -> Result<()>;
}

pub type ReporterBox = Arc<dyn Reporter + Send + Sync>;
