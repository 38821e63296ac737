#[cfg(test)]
#[path = "tracker_test.rs"]
mod tests;

use std::time::Duration;
use std::time::Instant;

use anyhow::Result;
use tokio::time;
use tokio_util::sync::CancellationToken;

use super::Drafts;
use super::SessionClock;
use crate::domain::models::FieldBox;
use crate::domain::models::ReporterBox;

/// Glue between the code field, the local draft store, and the time
/// reporting endpoint. Built once per process, after a problem id is known.
pub struct SessionTracker {
    problem_id: String,
    drafts: Drafts,
    field: FieldBox,
    reporter: ReporterBox,
    clock: SessionClock,
    last_seen: Option<String>,
    poll_period: Duration,
    report_period: Duration,
}

impl SessionTracker {
    pub fn new(
        problem_id: &str,
        drafts: Drafts,
        field: FieldBox,
        reporter: ReporterBox,
        clock: SessionClock,
        poll_period: Duration,
        report_period: Duration,
    ) -> SessionTracker {
        return SessionTracker {
            problem_id: problem_id.to_string(),
            drafts,
            field,
            reporter,
            clock,
            last_seen: None,
            poll_period,
            report_period,
        };
    }

    /// Seeds the field from the stored draft, but only when the field is
    /// currently empty. A field that already carries content, such as
    /// starter code, is never clobbered.
    pub async fn restore(&mut self) -> Result<()> {
        let current = match self.field.read().await? {
            Some(content) => content,
            None => return Ok(()),
        };

        if current.is_empty() {
            if let Some(draft) = self.drafts.load(&self.problem_id).await? {
                if !draft.is_empty() {
                    self.field.write(&draft).await?;
                    tracing::debug!(problem_id = self.problem_id, "restored draft");
                    self.last_seen = Some(draft);
                    return Ok(());
                }
            }
        }

        self.last_seen = Some(current);
        return Ok(());
    }

    /// Change event analogue. Reads the field and writes its full value to
    /// the draft store whenever it differs from the last observed value,
    /// replacing any prior draft.
    pub async fn sync_field(&mut self) -> Result<()> {
        let current = match self.field.read().await? {
            Some(content) => content,
            None => return Ok(()),
        };

        if self.last_seen.as_deref() == Some(current.as_str()) {
            return Ok(());
        }

        self.drafts.save(&self.problem_id, &current).await?;
        self.last_seen = Some(current);
        return Ok(());
    }

    /// One reporting cycle. The clock moves forward no matter what, whole
    /// elapsed seconds are handed to a detached send, and a cycle that
    /// gathered less than a second sends nothing.
    pub fn flush_time(&mut self, now: Instant) -> Option<u64> {
        let seconds = self.clock.flush(now);
        if seconds == 0 {
            return None;
        }

        let reporter = self.reporter.clone();
        tokio::spawn(async move {
            if let Err(err) = reporter.report_time(seconds).await {
                tracing::debug!(error = ?err, seconds = seconds, "time report dropped");
            }
        });

        return Some(seconds);
    }

    /// Runs the tracker until cancelled. Field and storage failures inside
    /// the loop are logged and absorbed, never propagated.
    pub async fn run(&mut self, cancel_token: CancellationToken) -> Result<()> {
        if let Err(err) = self.restore().await {
            tracing::warn!(error = ?err, "unable to restore draft");
        }

        let mut poll = time::interval(self.poll_period);
        let mut report = time::interval_at(
            time::Instant::now() + self.report_period,
            self.report_period,
        );

        loop {
            tokio::select! {
                _ = cancel_token.cancelled() => {
                    return Ok(());
                }
                _ = poll.tick() => {
                    if let Err(err) = self.sync_field().await {
                        tracing::warn!(error = ?err, "unable to persist draft");
                    }
                }
                _ = report.tick() => {
                    self.flush_time(Instant::now());
                }
            }
        }
    }
}
