//! Failure reporting and exit codes.

use crate::prelude::*;

#[test]
fn missing_subcommand_is_a_usage_error() {
    cli().fails().code(2);
}

#[test]
fn unknown_job_type_suggests_listing() {
    cli()
        .args(&["check", "myspace"])
        .stdin("{}")
        .fails()
        .code(1)
        .stderr_has("unknown job type 'myspace'")
        .stderr_has("jg capabilities");
}

#[test]
fn non_object_input_is_a_decode_error() {
    cli()
        .args(&["check", "web"])
        .stdin("[1, 2, 3]")
        .fails()
        .code(1)
        .stderr_has("arguments do not match the raw schema");
}

#[test]
fn type_mismatch_is_reported_as_decode_failure() {
    cli()
        .args(&["check", "web"])
        .stdin(r#"{"url": "https://example.com", "max_depth": "deep"}"#)
        .fails()
        .stderr_has("arguments do not match the web schema");
}

#[test]
fn missing_file_reports_path() {
    let temp = Project::empty();
    temp.jg()
        .args(&["check", "web", "--file", "nope.json"])
        .fails()
        .stderr_has("nope.json");
}

#[test]
fn verbose_logs_resolution() {
    cli()
        .args(&["-v", "check", "telemetry"])
        .stdin("{}")
        .passes()
        .stderr_has("resolved job arguments");
}

#[test]
fn quiet_by_default() {
    cli()
        .args(&["check", "telemetry"])
        .stdin("{}")
        .passes()
        .stderr_lacks("resolved job arguments");
}
