// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Static prefixes of glob patterns, for pruning directory walks.

/// Characters that make a path segment a glob rather than a literal name.
const GLOB_META: &[char] = &['*', '?', '[', ']', '{', '}'];

/// Whether `s` contains any glob metacharacter.
pub fn has_glob_char(s: &str) -> bool {
    s.contains(GLOB_META)
}

/// The leading directories of `pattern` that contain no glob metacharacter.
///
/// The last segment is the file name and never part of the root, even when
/// it is literal. Returns `""` when the first directory is already a glob or
/// the pattern has a single segment.
///
/// Alternates count as glob syntax along with `* ? [ ]`, so `a/{b,c}/x.md`
/// resolves to `a`.
///
/// ```
/// use globfilter::resolve_root_dir;
///
/// assert_eq!(resolve_root_dir("a/b/**/foo.json"), "a/b");
/// assert_eq!(resolve_root_dir("dat?a/foo.json"), "");
/// ```
pub fn resolve_root_dir(pattern: &str) -> String {
    let Some((dirs, _file)) = pattern.rsplit_once('/') else {
        return String::new();
    };

    dirs.split('/')
        .take_while(|segment| !has_glob_char(segment))
        .collect::<Vec<_>>()
        .join("/")
}

/// Drop the segments that are a bare wildcard (`*` or `**`), keeping order.
///
/// ```
/// use globfilter::filter_glob_parts;
///
/// assert_eq!(filter_glob_parts(["a", "*", "c"]), vec!["a", "c"]);
/// ```
pub fn filter_glob_parts<I, S>(parts: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parts
        .into_iter()
        .filter(|part| !matches!(part.as_ref(), "*" | "**"))
        .map(|part| part.as_ref().to_string())
        .collect()
}

#[cfg(test)]
#[path = "root_tests.rs"]
mod tests;
