// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};

use frontend_env::config::DEFAULT_ENV_FILE;
use frontend_env::env::{load_env_file, EnvFile};
use frontend_env::lint::lint;
use frontend_env::logging::init_tracing;
use frontend_env::validate::{write_missing_report, write_success};
use frontend_env::{validate, ConfigError, FrontendConfig, ProcessEnv};

/// Validate and export the frontend's public environment
#[derive(Parser)]
#[command(name = "frontend-env")]
#[command(version, about = "Validate and export the frontend's public environment", long_about = None)]
struct Cli {
    /// Env file to load before validating (default: .env.local if present)
    #[arg(long, global = true, conflicts_with = "no_env_file")]
    env_file: Option<PathBuf>,

    /// Use the process environment only
    #[arg(long, global = true)]
    no_env_file: bool,

    /// Verbosity level
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Check required variables and exit
    Check,

    /// Check required variables, then print the frontend config as JSON
    Export {
        /// Indent the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), ConfigError> {
    let env_file = match (&cli.env_file, cli.no_env_file) {
        (_, true) => EnvFile::Disabled,
        (Some(path), false) => EnvFile::Explicit(path.as_path()),
        (None, false) => EnvFile::Default(Path::new(DEFAULT_ENV_FILE)),
    };
    load_env_file(&env_file)?;

    let env = ProcessEnv;
    let validated = validate(&env)?;

    let mut stderr = io::stderr().lock();
    write_success(&mut stderr)?;

    let config = FrontendConfig::from_validated(&env, validated);
    for warning in lint(&config) {
        writeln!(stderr, "⚠️  {warning}")?;
    }

    match cli.command.unwrap_or(Command::Export { pretty: false }) {
        Command::Check => {}
        Command::Export { pretty } => {
            let json = config.to_json(pretty)?;
            writeln!(io::stdout().lock(), "{json}")?;
        }
    }
    Ok(())
}

fn report_error(err: &ConfigError) {
    let mut stderr = io::stderr().lock();
    let written = match err {
        ConfigError::MissingRequired { missing } => write_missing_report(&mut stderr, missing),
        other => writeln!(stderr, "❌ {other}"),
    };
    if let Err(e) = written {
        tracing::error!(error = %e, "Failed to write diagnostics");
    }
}
