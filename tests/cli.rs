// Surface tests for the seo-audit CLI: flag parsing, conflicts, and the
// argument errors clap reports before any command logic runs.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the seo-audit binary.
fn seo_audit() -> Command {
    Command::cargo_bin("seo-audit").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    seo_audit()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("seo-audit"));
}

#[test]
fn cli_help_flag() {
    seo_audit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Weighted-checklist SEO audit"));
}

#[test]
fn score_requires_responses_flag() {
    seo_audit()
        .arg("score")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn score_rejects_unknown_report_format() {
    seo_audit()
        .args(["score", "--responses", "responses.toml", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn catalog_rejects_text_format() {
    // The catalog overview only renders as markdown or json.
    seo_audit()
        .args(["catalog", "--format", "text"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn quiet_conflicts_with_verbose() {
    seo_audit()
        .args(["--quiet", "--verbose", "catalog"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
