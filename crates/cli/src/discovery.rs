// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file discovery.
//!
//! Walks from a directory up to the enclosing git root looking for
//! `globfilter.toml`.

use std::path::{Path, PathBuf};

/// File name searched for by [`find_config`].
pub const CONFIG_FILE_NAME: &str = "globfilter.toml";

/// Find `globfilter.toml` starting from `start_dir`, stopping at the git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.is_file() {
            return Some(config_path);
        }
        if dir.join(".git").exists() {
            return None;
        }
    }
    None
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
