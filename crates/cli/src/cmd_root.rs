// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `globfilter root` command implementation.

use std::io::{self, BufWriter, Write};

use serde::Serialize;

use globfilter::cli::{OutputFormat, RootArgs};
use globfilter::error::ExitCode;
use globfilter::root::{filter_glob_parts, resolve_root_dir};

#[derive(Debug, Serialize, PartialEq)]
struct PatternRoot<'a> {
    pattern: &'a str,
    root: String,
    /// Pattern segments with bare wildcards removed.
    parts: Vec<String>,
}

/// Run the `globfilter root` command.
///
/// Text output prints one root per pattern, `.` when it has none.
pub fn run(args: &RootArgs) -> anyhow::Result<ExitCode> {
    let roots: Vec<PatternRoot<'_>> =
        args.patterns.iter().map(String::as_str).map(pattern_root).collect();

    let mut out = BufWriter::new(io::stdout().lock());
    match args.output {
        OutputFormat::Text => {
            for entry in &roots {
                let root = if entry.root.is_empty() { "." } else { entry.root.as_str() };
                writeln!(out, "{root}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &roots)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(ExitCode::Success)
}

fn pattern_root(pattern: &str) -> PatternRoot<'_> {
    PatternRoot {
        pattern,
        root: resolve_root_dir(pattern),
        parts: filter_glob_parts(pattern.split('/')),
    }
}

#[cfg(test)]
#[path = "cmd_root_tests.rs"]
mod tests;
