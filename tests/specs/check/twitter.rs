//! `jg check twitter*`

use crate::prelude::*;

#[test]
fn missing_type_uses_default() {
    cli()
        .args(&["check", "twitter"])
        .stdin(r#"{"query": "rust"}"#)
        .passes()
        .stdout_has("ok: twitter searchbyquery");
}

#[test]
fn apify_defaults_to_followers() {
    cli()
        .args(&["check", "twitter-apify"])
        .stdin(r#"{"query": "jack"}"#)
        .passes()
        .stdout_has("ok: twitter-apify getfollowers");
}

#[test]
fn capability_outside_job_type_lists_allowed() {
    cli()
        .args(&["check", "twitter-apify"])
        .stdin(r#"{"type": "searchbyquery", "query": "rust"}"#)
        .fails()
        .stderr_has("capability 'searchbyquery' is not allowed for job type 'twitter-apify'")
        .stderr_has("allowed: getfollowing, getfollowers");
}

#[test]
fn type_is_case_insensitive() {
    cli()
        .args(&["check", "twitter-api"])
        .stdin(r#"{"type": "SearchByFullArchive", "query": "rust"}"#)
        .passes()
        .stdout_has("searchbyfullarchive");
}
