// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    web = { "web", JobType::Web },
    telemetry = { "telemetry", JobType::Telemetry },
    tiktok = { "tiktok", JobType::Tiktok },
    twitter = { "twitter", JobType::Twitter },
    twitter_credential = { "twitter-credential", JobType::TwitterCredential },
    twitter_api = { "twitter-api", JobType::TwitterApi },
    twitter_apify = { "twitter-apify", JobType::TwitterApify },
    linkedin = { "linkedin", JobType::Linkedin },
    reddit = { "reddit", JobType::Reddit },
)]
fn parse_wire_name(input: &str, expected: JobType) {
    let parsed: JobType = input.parse().unwrap();
    assert_eq!(parsed, expected);
    assert_eq!(parsed.to_string(), input);
}

#[test]
fn unknown_job_type_is_rejected() {
    let err = "unknown".parse::<JobType>().unwrap_err();
    assert_eq!(err, CapabilityError::UnknownJobType("unknown".to_string()));
    assert_eq!(err.to_string(), "unknown job type: unknown");
}

#[test]
fn job_type_names_are_case_sensitive() {
    assert!("Twitter".parse::<JobType>().is_err());
}

#[test]
fn twitter_family_membership() {
    let twitter: Vec<JobType> = JobType::ALL
        .into_iter()
        .filter(JobType::is_twitter)
        .collect();
    assert_eq!(
        twitter,
        vec![
            JobType::Twitter,
            JobType::TwitterCredential,
            JobType::TwitterApi,
            JobType::TwitterApify
        ]
    );
}

#[test]
fn serde_uses_wire_names() {
    let json = serde_json::to_string(&JobType::TwitterApify).unwrap();
    assert_eq!(json, "\"twitter-apify\"");

    let parsed: JobType = serde_json::from_str("\"linkedin\"").unwrap();
    assert_eq!(parsed, JobType::Linkedin);

    assert!(serde_json::from_str::<JobType>("\"myspace\"").is_err());
}
