//! `jg capabilities`

use crate::prelude::*;

#[test]
fn lists_every_job_type() {
    let run = cli().args(&["capabilities"]).passes();
    let stdout = run.stdout();
    for job_type in [
        "web",
        "telemetry",
        "tiktok",
        "twitter",
        "twitter-credential",
        "twitter-api",
        "twitter-apify",
        "linkedin",
        "reddit",
    ] {
        assert!(
            stdout.lines().any(|line| line.starts_with(job_type)),
            "missing {job_type} in:\n{stdout}"
        );
    }
}

#[test]
fn single_job_type_shows_default() {
    cli()
        .args(&["capabilities", "reddit"])
        .passes()
        .stdout_has("scrapeurls, searchposts, searchusers, searchcommunities")
        .stdout_has("(default: scrapeurls)");
}

#[test]
fn json_output() {
    let run = cli()
        .args(&["capabilities", "linkedin", "--output", "json"])
        .passes();
    similar_asserts::assert_eq!(
        run.stdout_json(),
        serde_json::json!([{
            "job_type": "linkedin",
            "default": "searchbyquery",
            "capabilities": ["searchbyquery", "getprofile"],
        }])
    );
}

#[test]
fn unknown_job_type_fails() {
    cli()
        .args(&["capabilities", "myspace"])
        .fails()
        .stderr_has("unknown job type 'myspace'");
}
