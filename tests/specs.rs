//! Behavioral specifications for the jg CLI.
//!
//! These tests are black-box: they invoke the CLI binary and verify
//! stdout, stderr, and exit codes.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

#[path = "specs/prelude.rs"]
mod prelude;

// cli/
#[path = "specs/cli/help.rs"]
mod cli_help;
#[path = "specs/cli/errors.rs"]
mod cli_errors;

// check/
#[path = "specs/check/web.rs"]
mod check_web;
#[path = "specs/check/tiktok.rs"]
mod check_tiktok;
#[path = "specs/check/twitter.rs"]
mod check_twitter;
#[path = "specs/check/reddit.rs"]
mod check_reddit;

// capabilities/
#[path = "specs/capabilities/list.rs"]
mod capabilities_list;
#[path = "specs/capabilities/config.rs"]
mod capabilities_config;
