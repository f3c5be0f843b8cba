// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared unit test utilities.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;

use tempfile::TempDir;

use crate::discovery::CONFIG_FILE_NAME;

/// Creates a temp directory holding a `globfilter.toml` with `config`.
pub fn temp_project_with_config(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(CONFIG_FILE_NAME), config).unwrap();
    dir
}
