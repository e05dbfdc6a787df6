//! `jg check tiktok`

use crate::prelude::*;

#[test]
fn search_defaults_to_search_by_query() {
    cli()
        .args(&["check", "tiktok"])
        .stdin(r#"{"search": ["x"]}"#)
        .passes()
        .stdout_has("ok: tiktok searchbyquery");
}

#[test]
fn empty_payload_fails() {
    cli()
        .args(&["check", "tiktok"])
        .stdin("{}")
        .fails()
        .stderr_has("either search or start_urls must be provided");
}

#[test]
fn trending_fills_defaults() {
    let run = cli()
        .args(&["check", "tiktok", "-o", "json"])
        .stdin(r#"{"type": "searchbytrending", "country_code": "gb"}"#)
        .passes();
    let json = run.stdout_json();
    assert_eq!(json["capability"], "searchbytrending");
    assert_eq!(json["arguments"]["country_code"], "GB");
    assert_eq!(json["arguments"]["sort_by"], "trending");
    assert_eq!(json["arguments"]["period"], "7");
    assert_eq!(json["arguments"]["max_items"], 20);
}

#[test]
fn unknown_type_is_rejected() {
    cli()
        .args(&["check", "tiktok"])
        .stdin(r#"{"type": "dance"}"#)
        .fails()
        .stderr_has("unknown capability 'dance'");
}

#[test]
fn transcription_requires_tiktok_host() {
    cli()
        .args(&["check", "tiktok"])
        .stdin(r#"{"type": "transcription", "video_url": "https://youtube.com/watch?v=1"}"#)
        .fails()
        .stderr_has("video_url must point to tiktok.com");
}
