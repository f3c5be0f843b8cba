// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter configuration loaded from `globfilter.toml`.
//!
//! ```toml
//! version = 1
//!
//! [filter]
//! include = ["content/**.md"]
//! exclude = ["**/drafts/**"]
//! case_sensitive = false
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{ConfigError, GlobError};
use crate::filter::FilenameFilter;
use crate::glob::GlobCache;

const SUPPORTED_VERSION: i64 = 1;

/// Top-level configuration file.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Schema version; only `1` is accepted when present.
    pub version: Option<i64>,

    pub filter: FilterConfig,
}

/// Inclusion and exclusion patterns for one filter.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    /// Paths matching any of these are always admitted.
    #[serde(alias = "includes")]
    pub include: Vec<String>,

    /// Paths matching any of these are rejected unless included.
    #[serde(alias = "ignore")]
    pub exclude: Vec<String>,

    /// Compare paths case-sensitively.
    pub case_sensitive: bool,
}

impl FilterConfig {
    /// True when no pattern is configured.
    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }

    /// Add patterns after the configured ones, skipping duplicates.
    pub fn extend(&mut self, include: &[String], exclude: &[String]) {
        for pattern in include {
            if !self.include.contains(pattern) {
                self.include.push(pattern.clone());
            }
        }
        for pattern in exclude {
            if !self.exclude.contains(pattern) {
                self.exclude.push(pattern.clone());
            }
        }
    }

    /// Compile the configured patterns.
    ///
    /// Returns `None` when nothing is configured, which admits every path.
    pub fn build(&self) -> Result<Option<FilenameFilter>, GlobError> {
        if self.is_empty() {
            return Ok(None);
        }
        let cache = if self.case_sensitive {
            GlobCache::global_case_sensitive()
        } else {
            GlobCache::global()
        };
        FilenameFilter::with_cache(cache, &self.include, &self.exclude).map(Some)
    }
}

/// Parse configuration text. `path` is only used for error messages.
pub fn parse(content: &str, path: &Path) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(version) = config.version
        && version != SUPPORTED_VERSION
    {
        return Err(ConfigError::Version {
            path: path.to_path_buf(),
            version,
        });
    }
    Ok(config)
}

/// Read and parse a configuration file.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse(&content, path)?;
    tracing::debug!(
        path = %path.display(),
        include = config.filter.include.len(),
        exclude = config.filter.exclude.len(),
        "loaded config"
    );
    Ok(config)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
