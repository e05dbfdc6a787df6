//! Worker capability configuration (`--config`)

use crate::prelude::*;

const WORKER: &str = r#"
[capabilities]
twitter = ["searchbyquery", "getbyid"]

[defaults]
twitter = "getbyid"
"#;

#[test]
fn config_restricts_listed_job_types() {
    let temp = Project::empty();
    temp.file("worker.toml", WORKER);

    let run = temp
        .jg()
        .args(&["capabilities", "--config", "worker.toml"])
        .passes();
    let stdout = run.stdout();
    assert!(stdout.contains("twitter "));
    assert!(stdout.contains("(default: getbyid)"));
    assert!(!stdout.contains("reddit"));
    assert!(stdout.contains("tiktok"));
}

#[test]
fn unserved_job_type_is_rejected() {
    let temp = Project::empty();
    temp.file("worker.toml", WORKER);
    temp.jg()
        .args(&["capabilities", "reddit", "--config", "worker.toml"])
        .fails()
        .stderr_has("job type 'reddit' is not served by this worker");
}

#[test]
fn check_uses_configured_default() {
    let temp = Project::empty();
    temp.file("worker.toml", WORKER);
    temp.jg()
        .args(&["check", "twitter", "--config", "worker.toml"])
        .stdin(r#"{"query": "1234"}"#)
        .passes()
        .stdout_has("ok: twitter getbyid");
}

#[test]
fn check_rejects_unadvertised_capability() {
    let temp = Project::empty();
    temp.file("worker.toml", WORKER);
    temp.jg()
        .args(&["check", "twitter", "--config", "worker.toml"])
        .stdin(r#"{"type": "gettrends"}"#)
        .fails()
        .stderr_has("allowed: searchbyquery, getbyid");
}

#[test]
fn invalid_config_is_reported() {
    let temp = Project::empty();
    temp.file("bad.toml", "[capabilities]\ntwitter-apify = [\"searchbyquery\"]\n");
    temp.jg()
        .args(&["capabilities", "--config", "bad.toml"])
        .fails()
        .stderr_has("invalid worker configuration")
        .stderr_has("capability 'searchbyquery' is not supported by job type 'twitter-apify'");
}
