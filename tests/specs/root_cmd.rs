// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for the `globfilter root` command.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// One root per pattern, `.` when the pattern has no static root.
#[test]
fn prints_root_per_pattern() {
    globfilter_cmd()
        .args(["root", "data/foo.json", "a/b/**/foo.json"])
        .args(["dat?a/foo.json", "a/b[a-c]/foo.json"])
        .assert()
        .success()
        .stdout("data\na/b\n.\na\n");
}

/// `--output json` includes the pattern parts without bare wildcards.
#[test]
fn json_output_lists_parts() {
    let output = globfilter_cmd()
        .args(["root", "--output", "json", "a/*/c/foo.md"])
        .output()
        .expect("command should run");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "pattern": "a/*/c/foo.md",
            "root": "a",
            "parts": ["a", "c", "foo.md"],
        }])
    );
}
