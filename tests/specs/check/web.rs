//! `jg check web`

use crate::prelude::*;
use serde_json::json;

#[test]
fn url_without_scheme_fails() {
    cli()
        .args(&["check", "web"])
        .stdin(r#"{"url": "example.com"}"#)
        .fails()
        .code(1)
        .stderr_has("invalid web arguments")
        .stderr_has("url must include a scheme");
}

#[test]
fn max_pages_defaults_to_one() {
    let run = cli()
        .args(&["check", "web", "-o", "json"])
        .stdin(r#"{"url": "https://example.com"}"#)
        .passes();
    similar_asserts::assert_eq!(
        run.stdout_json(),
        json!({
            "job_type": "web",
            "capability": "scraper",
            "arguments": {"url": "https://example.com", "max_depth": 0, "max_pages": 1},
        })
    );
}

#[test]
fn reads_arguments_from_file() {
    let temp = Project::empty();
    temp.file("job.json", r#"{"url": "https://example.com", "max_depth": 2}"#);
    temp.jg()
        .args(&["check", "web", "--file", "job.json"])
        .passes()
        .stdout_has("ok: web scraper (web)")
        .stdout_has(r#""max_depth":2"#);
}

#[test]
fn every_violation_is_listed() {
    cli()
        .args(&["check", "web"])
        .stdin(r#"{"url": "https://example.com", "max_depth": -1, "max_pages": -1}"#)
        .fails()
        .stderr_has("-> max depth must be non-negative: got -1")
        .stderr_has("-> max pages must be at least 1: got -1");
}
