// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::Parser;
use tracing_subscriber::EnvFilter;

use globfilter::cli::{Cli, Command};
use globfilter::error::{ConfigError, ExitCode, GlobError};

mod cmd_match;
mod cmd_root;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Command::Match(args) => cmd_match::run(cli.config.as_deref(), args),
        Command::Root(args) => cmd_root::run(args),
    };

    match result {
        Ok(code) => code.into(),
        Err(err) => {
            eprintln!("globfilter: {err:#}");
            exit_code_for(&err).into()
        }
    }
}

/// Logs go to stderr; `GLOBFILTER_LOG` overrides the level chosen by `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("GLOBFILTER_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    if err.is::<ConfigError>() || err.is::<GlobError>() {
        ExitCode::ConfigError
    } else {
        ExitCode::InternalError
    }
}
