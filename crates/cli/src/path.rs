// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Canonical path form used for every glob comparison.

/// Normalize a path for matching.
///
/// Same as [`clean_path`], with the whole string lower-cased first.
///
/// ```
/// use globfilter::normalize_path;
///
/// assert_eq!(normalize_path("/Data//FOO.json"), "data/foo.json");
/// assert_eq!(normalize_path("//"), "");
/// ```
pub fn normalize_path(path: &str) -> String {
    clean_path(&path.to_lowercase())
}

/// Case-preserving half of [`normalize_path`].
///
/// - Converts `\` to `/` so Windows paths compare like Unix paths.
/// - Drops empty and `.` segments; `..` consumes the previous segment.
///   Purely lexical, no filesystem access.
/// - Never returns a leading `/`; a path of only separators becomes `""`.
pub fn clean_path(path: &str) -> String {
    let slashed = path.replace('\\', "/");
    let rooted = slashed.starts_with('/');

    let mut out = Vec::<&str>::new();
    for segment in slashed.split('/') {
        match segment {
            "" | "." => {}
            ".." => match out.last() {
                Some(&last) if last != ".." => {
                    out.pop();
                }
                // Nothing above the root of an absolute path.
                _ if rooted => {}
                _ => out.push(".."),
            },
            _ => out.push(segment),
        }
    }
    out.join("/")
}

#[cfg(test)]
#[path = "path_tests.rs"]
mod tests;
