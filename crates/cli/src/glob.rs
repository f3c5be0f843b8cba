// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Glob compilation and the shared compiled-glob cache.
//!
//! Glob syntax is delegated to `globset` with two adjustments:
//! - `*`, `?` and classes never match `/`, while `**` matches across
//!   separators wherever it appears (not only as a whole path segment).
//! - Patterns and paths compare case-insensitively unless the cache was
//!   created with [`GlobCache::case_sensitive`].

use std::sync::{Arc, LazyLock};

use dashmap::DashMap;
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

use crate::error::GlobError;
use crate::path::{clean_path, normalize_path};

static GLOBAL_CACHE: LazyLock<GlobCache> = LazyLock::new(GlobCache::new);
static GLOBAL_CASE_SENSITIVE_CACHE: LazyLock<GlobCache> =
    LazyLock::new(GlobCache::case_sensitive);

/// Compile `pattern` through the process-wide cache.
///
/// ```
/// let glob = globfilter::get_glob("**.JSON").unwrap();
/// assert!(glob.matches("data/my.json"));
/// ```
pub fn get_glob(pattern: &str) -> Result<Arc<CompiledGlob>, GlobError> {
    GlobCache::global().get_glob(pattern)
}

/// An immutable matcher for one pattern.
#[derive(Debug)]
pub struct CompiledGlob {
    pattern: String,
    case_sensitive: bool,
    matcher: GlobSet,
}

impl CompiledGlob {
    /// Compile without going through a cache.
    pub fn new(pattern: &str, case_sensitive: bool) -> Result<Self, GlobError> {
        let compile_error = |source| GlobError::Compile {
            pattern: pattern.to_string(),
            source,
        };

        let slashed = pattern.replace('\\', "/");
        let Some(variants) = expand_recursive_wildcards(slashed.trim_start_matches('/')) else {
            return Err(GlobError::TooComplex {
                pattern: pattern.to_string(),
                limit: MAX_GLOB_VARIANTS,
            });
        };
        let mut builder = GlobSetBuilder::new();
        for expanded in variants {
            let glob = GlobBuilder::new(&expanded)
                .case_insensitive(!case_sensitive)
                .literal_separator(true)
                .backslash_escape(false)
                .build()
                .map_err(compile_error)?;
            builder.add(glob);
        }
        let matcher = builder.build().map_err(compile_error)?;

        Ok(Self {
            pattern: pattern.to_string(),
            case_sensitive,
            matcher,
        })
    }

    /// The pattern this glob was compiled from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Test `path`, normalizing it first.
    pub fn matches(&self, path: &str) -> bool {
        self.matches_candidate(&candidate_path(path, self.case_sensitive))
    }

    /// Test a path already in the form produced by [`candidate_path`].
    pub(crate) fn matches_candidate(&self, candidate: &str) -> bool {
        self.matcher.is_match(candidate)
    }
}

/// The form paths are compared in: [`normalize_path`], or [`clean_path`]
/// when matching case-sensitively.
pub(crate) fn candidate_path(path: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        clean_path(path)
    } else {
        normalize_path(path)
    }
}

/// Concurrent memo of compiled globs, keyed by pattern string.
///
/// Entries are never evicted. Failed compiles are cached too, so a bad
/// pattern reports the same error on every request without recompiling.
#[derive(Debug, Default)]
pub struct GlobCache {
    case_sensitive: bool,
    entries: DashMap<String, Result<Arc<CompiledGlob>, GlobError>>,
}

impl GlobCache {
    /// An empty case-insensitive cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty cache whose globs compare paths case-sensitively.
    pub fn case_sensitive() -> Self {
        Self {
            case_sensitive: true,
            entries: DashMap::new(),
        }
    }

    /// The process-wide case-insensitive cache used by [`get_glob`].
    pub fn global() -> &'static GlobCache {
        &GLOBAL_CACHE
    }

    /// The process-wide case-sensitive cache.
    pub fn global_case_sensitive() -> &'static GlobCache {
        &GLOBAL_CASE_SENSITIVE_CACHE
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Return the cached glob for `pattern`, compiling it on first use.
    pub fn get_glob(&self, pattern: &str) -> Result<Arc<CompiledGlob>, GlobError> {
        if let Some(entry) = self.entries.get(pattern) {
            tracing::trace!(pattern, "glob cache hit");
            return entry.value().clone();
        }

        // Compile outside the shard lock. Concurrent misses may compile the
        // same pattern twice; the first entry published is the one kept.
        let compiled = CompiledGlob::new(pattern, self.case_sensitive).map(Arc::new);
        match &compiled {
            Ok(_) => tracing::debug!(pattern, "compiled glob"),
            Err(err) => tracing::debug!(pattern, error = %err, "glob failed to compile"),
        }

        self.entries
            .entry(pattern.to_string())
            .or_insert(compiled)
            .value()
            .clone()
    }

    /// Number of cached patterns, failed ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Most globs one pattern may expand to.
pub const MAX_GLOB_VARIANTS: usize = 64;

/// Rewrite every `**` that is not a whole path segment into `globset` syntax.
///
/// `globset` only gives `**` its recursive meaning next to `/` (or at the
/// ends of the pattern) and degrades it to `*` elsewhere. A pattern such as
/// `**.json` must still match `data/my.json`, so each partial `**` is
/// rewritten in place:
///
/// | form    | rewritten as          |
/// |---------|-----------------------|
/// | `**R`   | `**/*R`               |
/// | `L**R`  | `L{*,*/**/*}R`        |
/// | `L**`   | `L{*,*/**}`           |
///
/// Alternates cannot nest, so inside `{...}` the last two forms instead
/// split the pattern into one variant per choice. Returns `None` when that
/// would exceed [`MAX_GLOB_VARIANTS`].
fn expand_recursive_wildcards(pattern: &str) -> Option<Vec<String>> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut variants = vec![String::new()];
    let mut class_body_start: Option<usize> = None;
    let mut in_alternates = false;

    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];

        if let Some(start) = class_body_start {
            // A `]` right after the opening bracket is a literal member.
            if ch == ']' && i > start {
                class_body_start = None;
            }
            push_all(&mut variants, ch);
            i += 1;
            continue;
        }

        match ch {
            '[' => {
                let negated = matches!(chars.get(i + 1), Some('!' | '^'));
                class_body_start = Some(i + 1 + usize::from(negated));
            }
            '{' => in_alternates = true,
            '}' => in_alternates = false,
            '*' => {
                let run = chars[i..].iter().take_while(|&&c| c == '*').count();
                if run >= 2 {
                    let prev = i.checked_sub(1).map(|p| chars[p]);
                    let next = chars.get(i + run).copied();
                    let left = is_boundary(prev, in_alternates, &['{', ',']);
                    let right = is_boundary(next, in_alternates, &[',', '}']);
                    let options: &[&str] = match (left, right, in_alternates) {
                        (true, true, _) => &["**"],
                        (true, false, _) => &["**/*"],
                        (false, true, false) => &["{*,*/**}"],
                        (false, false, false) => &["{*,*/**/*}"],
                        (false, true, true) => &["*", "*/**"],
                        (false, false, true) => &["*", "*/**/*"],
                    };
                    if variants.len() * options.len() > MAX_GLOB_VARIANTS {
                        return None;
                    }
                    variants = variants
                        .iter()
                        .flat_map(|v| options.iter().map(move |o| format!("{v}{o}")))
                        .collect();
                    i += run;
                    continue;
                }
            }
            _ => {}
        }

        push_all(&mut variants, ch);
        i += 1;
    }

    variants.dedup();
    Some(variants)
}

fn is_boundary(ch: Option<char>, in_alternates: bool, alternate_edges: &[char]) -> bool {
    match ch {
        None | Some('/') => true,
        Some(c) => in_alternates && alternate_edges.contains(&c),
    }
}

fn push_all(variants: &mut [String], ch: char) {
    for variant in variants {
        variant.push(ch);
    }
}

#[cfg(test)]
#[path = "glob_tests.rs"]
mod tests;
