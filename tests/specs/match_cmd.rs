// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for the `globfilter match` command.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

// =============================================================================
// Precedence
// =============================================================================

/// Inclusion wins over a matching exclusion; unmatched paths are denied.
#[test]
fn inclusion_wins_over_exclusion() {
    let tmp = temp_project(None);
    globfilter_cmd()
        .current_dir(tmp.path())
        .args(["match", "-i", "a/b/c/foo.json", "-e", "**.json"])
        .args(["data/my.json", "a/b/c/foo.json", "a/b/c/foo.bar"])
        .assert()
        .success()
        .stdout("a/b/c/foo.json\n");
}

/// Only exclusions configured: everything else is admitted.
#[test]
fn exclusions_only_admit_the_rest() {
    let tmp = temp_project(None);
    globfilter_cmd()
        .current_dir(tmp.path())
        .args(["match", "-e", "**.json", "-e", "**.jpg"])
        .args(["ab.json", "ab.jpg", "ab.gif"])
        .assert()
        .success()
        .stdout("ab.gif\n");
}

/// No patterns at all: every path is admitted.
#[test]
fn no_patterns_admit_everything() {
    let tmp = temp_project(None);
    globfilter_cmd()
        .current_dir(tmp.path())
        .args(["match", "x.txt", "y/z.md"])
        .assert()
        .success()
        .stdout("x.txt\ny/z.md\n");
}

/// `--rejected` prints the complement.
#[test]
fn rejected_prints_denied_paths() {
    let tmp = temp_project(None);
    globfilter_cmd()
        .current_dir(tmp.path())
        .args(["match", "--rejected", "-i", "**.md"])
        .args(["a.md", "b.txt", "c/d.md", "e.png"])
        .assert()
        .success()
        .stdout("b.txt\ne.png\n");
}

/// Matching ignores case and OS separators but prints paths as given.
#[test]
fn matching_is_case_insensitive() {
    let tmp = temp_project(None);
    globfilter_cmd()
        .current_dir(tmp.path())
        .args(["match", "-i", "content/**.md"])
        .args(["Content\\Posts\\A.MD", "static/a.md"])
        .assert()
        .success()
        .stdout("Content\\Posts\\A.MD\n");
}

/// `--case-sensitive` turns case folding off.
#[test]
fn case_sensitive_flag() {
    let tmp = temp_project(None);
    globfilter_cmd()
        .current_dir(tmp.path())
        .args(["match", "--case-sensitive", "-i", "Content/**"])
        .args(["Content/a.md", "content/b.md"])
        .assert()
        .success()
        .stdout("Content/a.md\n");
}

/// `--dirs` admits the ancestors of an inclusion.
#[test]
fn dirs_admit_inclusion_ancestors() {
    let tmp = temp_project(None);
    globfilter_cmd()
        .current_dir(tmp.path())
        .args(["match", "--dirs", "-i", "a/b/c/foo.json"])
        .args(["a", "a/b", "x"])
        .assert()
        .success()
        .stdout("a\na/b\n");
}

// =============================================================================
// Input and output
// =============================================================================

/// Paths are read from stdin when none are given.
#[test]
fn reads_paths_from_stdin() {
    let tmp = temp_project(None);
    let mut cmd = globfilter_cmd();
    cmd.current_dir(tmp.path()).args(["match", "-e", "**/drafts/**"]);
    assert_cmd::Command::from_std(cmd)
        .write_stdin("posts/a.md\nposts/drafts/b.md\n\nc.md\n")
        .assert()
        .success()
        .stdout("posts/a.md\nc.md\n");
}

/// Exit code 1 when nothing is printed.
#[test]
fn no_selected_paths_exit_one() {
    let tmp = temp_project(None);
    globfilter_cmd()
        .current_dir(tmp.path())
        .args(["match", "-i", "**.md", "a.txt"])
        .assert()
        .code(1)
        .stdout("");
}

/// `--output json` reports patterns and selected paths.
#[test]
fn json_output() {
    let tmp = temp_project(None);
    let output = globfilter_cmd()
        .current_dir(tmp.path())
        .args(["match", "-o", "json", "-i", "**.md", "-e", "drafts/**"])
        .args(["a.md", "b.txt"])
        .output()
        .expect("command should run");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["include"], serde_json::json!(["**.md"]));
    assert_eq!(json["exclude"], serde_json::json!(["drafts/**"]));
    assert_eq!(json["rejected"], false);
    assert_eq!(json["paths"], serde_json::json!(["a.md"]));
}

// =============================================================================
// Configuration
// =============================================================================

/// Patterns come from a discovered `globfilter.toml`.
#[test]
fn uses_discovered_config() {
    let tmp = temp_project(Some("[filter]\nexclude = [\"**.tmp\"]\n"));
    globfilter_cmd()
        .current_dir(tmp.path())
        .args(["match", "a.tmp", "b.md"])
        .assert()
        .success()
        .stdout("b.md\n");
}

/// Command-line patterns are added to the config patterns.
#[test]
fn flags_extend_config() {
    let tmp = temp_project(Some("[filter]\nexclude = [\"**.tmp\"]\n"));
    globfilter_cmd()
        .current_dir(tmp.path())
        .args(["match", "-e", "**.bak", "a.tmp", "b.bak", "c.md"])
        .assert()
        .success()
        .stdout("c.md\n");
}

/// `--config` points at an explicit file.
#[test]
fn explicit_config_file() {
    let tmp = temp_project(None);
    let config = tmp.path().join("custom.toml");
    std::fs::write(&config, "[filter]\ninclude = [\"docs/**\"]\n").unwrap();

    globfilter_cmd()
        .current_dir(tmp.path())
        .arg("match")
        .arg("--config")
        .arg(&config)
        .args(["docs/a.md", "src/b.rs"])
        .assert()
        .success()
        .stdout("docs/a.md\n");
}

// =============================================================================
// Errors
// =============================================================================

/// A malformed pattern is a configuration error, not "no match".
#[test]
fn invalid_pattern_exits_two() {
    let tmp = temp_project(None);
    globfilter_cmd()
        .current_dir(tmp.path())
        .args(["match", "-i", "ok/**", "-e", "bad/[", "ok/a.md"])
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicates::str::contains("invalid glob pattern \"bad/[\""));
}

/// A broken config file is a configuration error.
#[test]
fn invalid_config_exits_two() {
    let tmp = temp_project(Some("[filter]\ninclude = 3\n"));
    globfilter_cmd()
        .current_dir(tmp.path())
        .args(["match", "a.md"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("failed to parse config"));
}

/// A missing explicit config file is a configuration error.
#[test]
fn missing_config_exits_two() {
    let tmp = temp_project(None);
    globfilter_cmd()
        .current_dir(tmp.path())
        .args(["match", "--config", "nope.toml", "a.md"])
        .assert()
        .code(2)
        .stderr(
            predicates::str::contains("failed to read config")
                .and(predicates::str::contains("nope.toml")),
        );
}
