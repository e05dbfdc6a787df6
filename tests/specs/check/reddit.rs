//! `jg check reddit`

use crate::prelude::*;

#[test]
fn scrape_urls_with_queries_reports_both_problems() {
    cli()
        .args(&["check", "reddit"])
        .stdin(r#"{"type": "scrapeurls", "queries": ["a"]}"#)
        .fails()
        .stderr_has("urls must be provided for scrapeurls query type")
        .stderr_has("the scrapeurls query type does not admit queries");
}

#[test]
fn search_posts_fills_defaults() {
    let run = cli()
        .args(&["check", "reddit", "-o", "json"])
        .stdin(r#"{"type": "searchposts", "queries": ["a"]}"#)
        .passes();
    let args = &run.stdout_json()["arguments"];
    assert_eq!(args["max_items"], 10);
    assert_eq!(args["max_posts"], 10);
    assert_eq!(args["max_comments"], 10);
    assert_eq!(args["max_communities"], 2);
    assert_eq!(args["max_users"], 2);
    assert_eq!(args["max_results"], 10);
    assert_eq!(args["sort"], "new");
}

#[test]
fn bare_urls_default_to_scrape_urls() {
    cli()
        .args(&["check", "reddit"])
        .stdin(r#"{"urls": ["https://www.reddit.com/r/rust/comments/abc/title"]}"#)
        .passes()
        .stdout_has("ok: reddit scrapeurls");
}

#[test]
fn search_posts_with_urls_fails() {
    cli()
        .args(&["check", "reddit"])
        .stdin(
            r#"{"type": "searchposts", "queries": ["a"], "urls": ["https://www.reddit.com/r/rust/comments/abc"]}"#,
        )
        .fails()
        .stderr_has("urls can only be provided for the scrapeurls query type");
}
