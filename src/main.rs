#![deny(clippy::implicit_return)]
#![allow(clippy::needless_return)]

mod application;
mod configuration;
mod domain;
mod infrastructure;

use std::env;
use std::process;
use std::sync::Arc;
use std::time::Duration;
use std::time::Instant;

use anyhow::Context;
use anyhow::Error;
use anyhow::Result;
use tokio_util::sync::CancellationToken;
use yansi::Paint;

use crate::application::cli;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::ReporterBox;
use crate::domain::services::Drafts;
use crate::domain::services::SessionClock;
use crate::domain::services::SessionTracker;
use crate::infrastructure::fields::FieldManager;
use crate::infrastructure::reporters::http::HttpReporter;

fn handle_error(err: Error) {
    eprintln!(
        "{}",
        Paint::red(format!(
            "Oh no! pctrack has failed with the following app version and error.\n\nVersion: {}\nError: {}",
            env!("CARGO_PKG_VERSION"),
            err
        ))
    );

    process::exit(1);
}

fn interval_from_config(key: ConfigKey) -> Result<Duration> {
    let seconds = Config::get(key)
        .parse::<u64>()
        .with_context(|| return format!("{key} must be a whole number of seconds"))?;
    if seconds == 0 {
        anyhow::bail!(format!("{key} must be at least one second"));
    }

    return Ok(Duration::from_secs(seconds));
}

async fn run_tracker(problem_id: &str) -> Result<()> {
    let poll_period = interval_from_config(ConfigKey::PollInterval)?;
    let report_period = interval_from_config(ConfigKey::ReportInterval)?;

    let field = FieldManager::get();
    let reporter: ReporterBox = Arc::new(HttpReporter::default());
    reporter.health_check()?;

    tracing::info!(problem_id = problem_id, field = %field.name(), "tracker starting");

    let mut tracker = SessionTracker::new(
        problem_id,
        Drafts::default(),
        field,
        reporter,
        SessionClock::new(Instant::now()),
        poll_period,
        report_period,
    );

    let cancel_token = CancellationToken::new();
    let loop_token = cancel_token.clone();

    let res = tokio::select! {
        res = tracker.run(loop_token) => res,
        _ = tokio::signal::ctrl_c() => {
            cancel_token.cancel();
            Ok(())
        }
    };

    return res;
}

#[tokio::main]
async fn main() {
    let debug_log_dir = env::var("PCTRACK_LOG_DIR").unwrap_or_else(|_| {
        return dirs::cache_dir()
            .unwrap()
            .join("pctrack")
            .to_string_lossy()
            .to_string();
    });

    let file_appender = tracing_appender::rolling::never(debug_log_dir, "debug.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    if env::var("RUST_LOG")
        .unwrap_or_else(|_| return "".to_string())
        .contains("pctrack")
    {
        tracing_subscriber::fmt()
            .json()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(writer)
            .init();
    }

    let ready_res = cli::parse().await;
    if let Err(ready_err) = ready_res {
        handle_error(ready_err);
        return;
    }
    if !ready_res.unwrap() {
        process::exit(0);
    }

    let problem_id = Config::get(ConfigKey::ProblemId);
    if problem_id.is_empty() {
        // No problem id means the whole tracker is inert.
        tracing::debug!("no problem id configured, nothing to track");
        process::exit(0);
    }

    if let Err(err) = run_tracker(&problem_id).await {
        handle_error(err);
    }

    process::exit(0);
}
