// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `globfilter match` command implementation.
//!
//! Builds one filter from the config file plus command-line patterns and
//! evaluates every path against it in parallel.

use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;

use rayon::prelude::*;
use serde::Serialize;

use globfilter::cli::{MatchArgs, OutputFormat};
use globfilter::config::{self, FilterConfig};
use globfilter::discovery;
use globfilter::error::ExitCode;
use globfilter::filter::PathFilter;

#[derive(Serialize)]
struct MatchReport<'a> {
    include: &'a [String],
    exclude: &'a [String],
    rejected: bool,
    paths: &'a [&'a str],
}

/// Run the `globfilter match` command.
pub fn run(config_path: Option<&Path>, args: &MatchArgs) -> anyhow::Result<ExitCode> {
    let mut filter_config = load_filter_config(config_path)?;
    filter_config.extend(&args.include, &args.exclude);
    if args.case_sensitive {
        filter_config.case_sensitive = true;
    }
    let filter = filter_config.build()?;
    if filter.is_none() {
        tracing::debug!("no patterns configured, every path is admitted");
    }

    let paths = if args.paths.is_empty() {
        read_paths(io::stdin().lock())?
    } else {
        args.paths.clone()
    };

    let selected: Vec<&str> = paths
        .par_iter()
        .filter(|path| {
            let admitted = if args.dirs {
                filter.matches_dir(path)
            } else {
                filter.matches(path)
            };
            admitted != args.rejected
        })
        .map(String::as_str)
        .collect();
    tracing::debug!(total = paths.len(), selected = selected.len(), "evaluated paths");

    let mut out = BufWriter::new(io::stdout().lock());
    match args.output {
        OutputFormat::Text => {
            for path in &selected {
                writeln!(out, "{path}")?;
            }
        }
        OutputFormat::Json => {
            let report = MatchReport {
                include: &filter_config.include,
                exclude: &filter_config.exclude,
                rejected: args.rejected,
                paths: &selected,
            };
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    Ok(if selected.is_empty() {
        ExitCode::NoMatch
    } else {
        ExitCode::Success
    })
}

/// Explicit `--config`, else the nearest `globfilter.toml`, else nothing.
fn load_filter_config(explicit: Option<&Path>) -> anyhow::Result<FilterConfig> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => discovery::find_config(&std::env::current_dir()?),
    };
    match path {
        Some(path) => Ok(config::load(&path)?.filter),
        None => Ok(FilterConfig::default()),
    }
}

/// One path per line; blank lines are skipped.
fn read_paths(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut paths = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let path = line.trim_end_matches('\r');
        if !path.trim().is_empty() {
            paths.push(path.to_string());
        }
    }
    Ok(paths)
}

#[cfg(test)]
#[path = "cmd_match_tests.rs"]
mod tests;
