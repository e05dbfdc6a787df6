//! Help and version output.

use crate::prelude::*;

#[test]
fn help_lists_subcommands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("check")
        .stdout_has("capabilities");
}

#[test]
fn check_help_documents_inputs() {
    cli()
        .args(&["check", "--help"])
        .passes()
        .stdout_has("--file")
        .stdout_has("--config")
        .stdout_has("--output");
}

#[test]
fn version_is_printed() {
    cli().args(&["--version"]).passes().stdout_has("jg ");
}
