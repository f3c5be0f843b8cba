// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Include/exclude filtering of relative file paths.
//!
//! Decision order for [`FilenameFilter::matches`]:
//! 1. An unset filter (`None`) admits everything.
//! 2. A predicate filter returns the predicate's answer.
//! 3. A path matching any inclusion is admitted, even if it is also excluded.
//! 4. A path matching any exclusion is rejected.
//! 5. With inclusions configured, anything else is rejected.
//! 6. With only exclusions configured, anything else is admitted.

use std::fmt;
use std::sync::Arc;

use crate::error::GlobError;
use crate::glob::{CompiledGlob, GlobCache, candidate_path};

/// Something that decides whether a path is admitted.
pub trait PathFilter {
    /// Whether the file at `path` is admitted.
    fn matches(&self, path: &str) -> bool;

    /// Whether a walker should descend into the directory at `path`.
    fn matches_dir(&self, path: &str) -> bool {
        self.matches(path)
    }
}

/// No filter configured: every path is admitted.
impl<F: PathFilter> PathFilter for Option<F> {
    fn matches(&self, path: &str) -> bool {
        self.as_ref().is_none_or(|filter| filter.matches(path))
    }

    fn matches_dir(&self, path: &str) -> bool {
        self.as_ref().is_none_or(|filter| filter.matches_dir(path))
    }
}

impl<F: PathFilter + ?Sized> PathFilter for &F {
    fn matches(&self, path: &str) -> bool {
        (**self).matches(path)
    }

    fn matches_dir(&self, path: &str) -> bool {
        (**self).matches_dir(path)
    }
}

type Predicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Compiled inclusion and exclusion globs, or an inclusion predicate.
#[derive(Clone, Default)]
pub struct FilenameFilter {
    case_sensitive: bool,
    should_include: Option<Predicate>,
    inclusions: Vec<Arc<CompiledGlob>>,
    /// Ancestor directories of every inclusion, so walkers reach them.
    dir_inclusions: Vec<Arc<CompiledGlob>>,
    exclusions: Vec<Arc<CompiledGlob>>,
    nested: Vec<FilenameFilter>,
}

impl FilenameFilter {
    /// Build a filter using the process-wide glob cache.
    ///
    /// The first pattern that fails to compile aborts construction.
    pub fn new<I, E>(inclusions: I, exclusions: E) -> Result<Self, GlobError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        Self::with_cache(GlobCache::global(), inclusions, exclusions)
    }

    /// Build a filter compiling its globs through `cache`.
    pub fn with_cache<I, E>(
        cache: &GlobCache,
        inclusions: I,
        exclusions: E,
    ) -> Result<Self, GlobError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        let mut filter = Self {
            case_sensitive: cache.is_case_sensitive(),
            ..Self::default()
        };

        for inclusion in inclusions {
            let inclusion = inclusion.as_ref();
            filter.inclusions.push(cache.get_glob(inclusion)?);

            for dir in ancestor_dirs(inclusion) {
                if filter.dir_inclusions.iter().any(|g| g.pattern() == dir) {
                    continue;
                }
                // Derived from a pattern that compiled; a failure here is not
                // the caller's error.
                match cache.get_glob(&dir) {
                    Ok(glob) => filter.dir_inclusions.push(glob),
                    Err(err) => {
                        tracing::debug!(pattern = %dir, error = %err, "skipping directory glob");
                    }
                }
            }
        }

        for exclusion in exclusions {
            filter.exclusions.push(cache.get_glob(exclusion.as_ref())?);
        }

        tracing::debug!(
            inclusions = filter.inclusions.len(),
            exclusions = filter.exclusions.len(),
            "built filename filter"
        );
        Ok(filter)
    }

    /// A filter that admits exactly the paths `predicate` accepts.
    pub fn for_inclusion_fn<P>(predicate: P) -> Self
    where
        P: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            should_include: Some(Arc::new(predicate)),
            ..Self::default()
        }
    }

    /// Combine with `other`; the result admits a path only if both do.
    pub fn append(mut self, other: FilenameFilter) -> Self {
        self.nested.push(other);
        self
    }

    pub fn inclusion_patterns(&self) -> impl Iterator<Item = &str> {
        self.inclusions.iter().map(|g| g.pattern())
    }

    pub fn exclusion_patterns(&self) -> impl Iterator<Item = &str> {
        self.exclusions.iter().map(|g| g.pattern())
    }

    /// Whether the file at `path` is admitted.
    pub fn matches(&self, path: &str) -> bool {
        self.decide(path, false) && self.nested.iter().all(|f| f.matches(path))
    }

    /// Whether the directory at `path` may contain admitted files.
    ///
    /// Same as [`matches`](Self::matches), except that ancestors of an
    /// inclusion pattern are admitted too.
    pub fn matches_dir(&self, path: &str) -> bool {
        self.decide(path, true) && self.nested.iter().all(|f| f.matches_dir(path))
    }

    fn decide(&self, path: &str, is_dir: bool) -> bool {
        if let Some(predicate) = &self.should_include {
            return predicate(path);
        }

        let candidate = candidate_path(path, self.case_sensitive);
        let hit = |globs: &[Arc<CompiledGlob>]| {
            globs.iter().any(|g| g.matches_candidate(&candidate))
        };

        if hit(&self.inclusions) {
            return true;
        }
        if is_dir && hit(&self.dir_inclusions) {
            return true;
        }
        if hit(&self.exclusions) {
            return false;
        }
        self.inclusions.is_empty()
    }
}

impl PathFilter for FilenameFilter {
    fn matches(&self, path: &str) -> bool {
        FilenameFilter::matches(self, path)
    }

    fn matches_dir(&self, path: &str) -> bool {
        FilenameFilter::matches_dir(self, path)
    }
}

impl fmt::Debug for FilenameFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilenameFilter")
            .field("predicate", &self.should_include.is_some())
            .field("inclusions", &self.inclusion_patterns().collect::<Vec<_>>())
            .field("exclusions", &self.exclusion_patterns().collect::<Vec<_>>())
            .field("nested", &self.nested)
            .finish()
    }
}

/// Append `other` to a possibly unset filter.
pub fn append_filter(filter: Option<FilenameFilter>, other: FilenameFilter) -> FilenameFilter {
    match filter {
        Some(filter) => filter.append(other),
        None => other,
    }
}

/// `a/b/c/foo.json` yields `a`, `a/b`, `a/b/c`.
///
/// A directory segment with a separator inside `{...}` or `[...]` (as in
/// `{content,docs/en}/*.md`) ends the list with `<prefix>/**`, so every
/// directory below the static prefix stays walkable.
fn ancestor_dirs(pattern: &str) -> Vec<String> {
    let slashed = pattern.replace('\\', "/");
    let segments = split_segments(slashed.trim_start_matches('/'));
    let Some((_file, dirs)) = segments.split_last() else {
        return Vec::new();
    };

    let mut out = Vec::new();
    let mut prefix = String::new();
    for segment in dirs.iter().filter(|s| !s.is_empty()) {
        if !prefix.is_empty() {
            prefix.push('/');
        }
        if segment.contains('/') {
            prefix.push_str("**");
            out.push(prefix);
            break;
        }
        prefix.push_str(segment);
        out.push(prefix.clone());
    }
    out
}

/// Split on the `/` that are outside alternates and character classes.
fn split_segments(pattern: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut in_class = false;
    let mut start = 0;
    for (i, ch) in pattern.char_indices() {
        match ch {
            '[' if !in_class => in_class = true,
            ']' if in_class => in_class = false,
            '{' if !in_class => depth += 1,
            '}' if !in_class => depth = depth.saturating_sub(1),
            '/' if !in_class && depth == 0 => {
                segments.push(&pattern[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    segments.push(&pattern[start..]);
    segments
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
