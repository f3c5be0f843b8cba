// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Decide whether relative file paths are admitted by include/exclude globs.
//!
//! - [`normalize_path`] puts paths in the form every comparison uses.
//! - [`GlobCache`] compiles patterns once and shares them between filters.
//! - [`resolve_root_dir`] and [`filter_glob_parts`] let directory walkers
//!   skip subtrees before any glob is evaluated.
//! - [`FilenameFilter`] applies the inclusion/exclusion precedence.
//!
//! ```
//! use globfilter::FilenameFilter;
//!
//! let filter = FilenameFilter::new(["a/b/c/foo.json"], ["**.json"]).unwrap();
//! assert!(filter.matches("a/b/c/foo.json"));
//! assert!(!filter.matches("data/my.json"));
//! ```

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod filter;
pub mod glob;
pub mod path;
pub mod root;

pub use error::{ConfigError, GlobError};
pub use filter::{FilenameFilter, PathFilter, append_filter};
pub use glob::{CompiledGlob, GlobCache, get_glob};
pub use path::{clean_path, normalize_path};
pub use root::{filter_glob_parts, has_glob_char, resolve_root_dir};

#[cfg(test)]
pub mod test_utils;
