#[cfg(test)]
#[path = "http_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Reporter;
use crate::domain::models::TimeReport;

/// Posts elapsed seconds to the practice-code server. The CSRF token is
/// captured once at construction and echoed on every request, an unset token
/// goes out as an empty string rather than a missing header.
pub struct HttpReporter {
    url: String,
    problem_id: String,
    csrf_token: String,
}

impl Default for HttpReporter {
    fn default() -> HttpReporter {
        return HttpReporter {
            url: Config::get(ConfigKey::ServerUrl),
            problem_id: Config::get(ConfigKey::ProblemId),
            csrf_token: Config::get(ConfigKey::CsrfToken),
        };
    }
}

#[async_trait]
impl Reporter for HttpReporter {
    fn health_check(&self) -> Result<()> {
        if self.url.is_empty() {
            bail!("Server URL is not defined");
        }
        if self.problem_id.is_empty() {
            bail!("Problem id is not defined");
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn report_time(&self, seconds: u64) -> Result<()> {
        let res = reqwest::Client::new()
            .post(format!(
                "{url}/problems/{problem_id}/time",
                url = self.url,
                problem_id = self.problem_id
            ))
            .header("Content-Type", "application/json")
            .header("X-CSRFToken", &self.csrf_token)
            .json(&TimeReport { seconds })
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::debug!(status = res.status().as_u16(), "time report rejected");
            bail!("time report rejected");
        }

        return Ok(());
    }
}
