use anyhow::Result;

use super::HttpReporter;
use crate::domain::models::Reporter;

impl HttpReporter {
    fn with_url(url: String) -> HttpReporter {
        return HttpReporter {
            url,
            problem_id: "42".to_string(),
            csrf_token: "abc".to_string(),
        };
    }
}

#[tokio::test]
async fn it_posts_elapsed_seconds_with_the_csrf_token() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/problems/42/time")
        .match_header("Content-Type", "application/json")
        .match_header("X-CSRFToken", "abc")
        .match_body(mockito::Matcher::Json(serde_json::json!({"seconds": 125})))
        .with_status(200)
        .with_body(r#"{"ok":true}"#)
        .create();

    let reporter = HttpReporter::with_url(server.url());
    reporter.report_time(125).await?;

    mock.assert();
    return Ok(());
}

#[tokio::test]
async fn it_sends_an_empty_token_when_none_is_configured() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/problems/42/time")
        .match_header("X-CSRFToken", "")
        .with_status(200)
        .create();

    let mut reporter = HttpReporter::with_url(server.url());
    reporter.csrf_token = "".to_string();
    reporter.report_time(1).await?;

    mock.assert();
    return Ok(());
}

#[tokio::test]
async fn it_fails_on_rejected_reports() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/problems/42/time")
        .with_status(400)
        .create();

    let reporter = HttpReporter::with_url(server.url());
    let res = reporter.report_time(5).await;

    assert!(res.is_err());
    mock.assert();
}

#[test]
fn it_fails_health_checks_without_a_problem_id() {
    let reporter = HttpReporter {
        url: "http://localhost:5000".to_string(),
        problem_id: "".to_string(),
        csrf_token: "".to_string(),
    };
    assert!(reporter.health_check().is_err());
}
