// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::process::Command;
use tempfile::TempDir;

/// Returns a Command configured to run the globfilter binary
pub fn globfilter_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("globfilter"));
    cmd.env_remove("GLOBFILTER_CONFIG").env_remove("GLOBFILTER_LOG");
    cmd
}

/// Creates a temp directory with a `.git` marker and optional config content.
pub fn temp_project(config: Option<&str>) -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join(".git")).unwrap();
    if let Some(config) = config {
        std::fs::write(dir.path().join("globfilter.toml"), config).unwrap();
    }
    dir
}
