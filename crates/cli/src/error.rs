// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and process exit codes.

use std::path::PathBuf;

use thiserror::Error;

/// A glob pattern failed to compile.
///
/// This is the only failure mode of the matching core. It is raised when a
/// pattern is compiled (directly or while building a filter), never while
/// matching a path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GlobError {
    #[error("invalid glob pattern {pattern:?}")]
    Compile {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("glob pattern {pattern:?} expands to more than {limit} alternatives")]
    TooComplex { pattern: String, limit: usize },
}

impl GlobError {
    /// The pattern that failed to compile.
    pub fn pattern(&self) -> &str {
        match self {
            GlobError::Compile { pattern, .. } | GlobError::TooComplex { pattern, .. } => {
                pattern
            }
        }
    }
}

/// Failure to load a filter configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unsupported config version {version} in {} (expected 1)", path.display())]
    Version { path: PathBuf, version: i64 },

    #[error(transparent)]
    Glob(#[from] GlobError),
}

/// Exit codes for the `globfilter` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// At least one path was printed.
    Success = 0,
    /// No path was printed.
    NoMatch = 1,
    /// Bad configuration file or glob pattern.
    ConfigError = 2,
    /// Unexpected failure (I/O on stdin/stdout).
    InternalError = 3,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
