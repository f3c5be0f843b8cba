// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Filter relative file paths with include/exclude globs
#[derive(Parser)]
#[command(name = "globfilter")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "GLOBFILTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the paths admitted by the filter
    Match(MatchArgs),
    /// Print the static root directory of glob patterns
    Root(RootArgs),
}

#[derive(clap::Args)]
pub struct MatchArgs {
    /// Paths to test (read from stdin, one per line, when omitted)
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    /// Inclusion pattern (repeatable, added after config patterns)
    #[arg(short, long = "include", value_name = "GLOB")]
    pub include: Vec<String>,

    /// Exclusion pattern (repeatable, added after config patterns)
    #[arg(short, long = "exclude", value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Compare paths case-sensitively
    #[arg(long)]
    pub case_sensitive: bool,

    /// Print rejected paths instead of admitted ones
    #[arg(long)]
    pub rejected: bool,

    /// Treat paths as directories (admit ancestors of inclusions)
    #[arg(long)]
    pub dirs: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct RootArgs {
    /// Glob patterns
    #[arg(value_name = "PATTERN", required = true)]
    pub patterns: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
