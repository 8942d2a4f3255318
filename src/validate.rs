// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Startup validation of the required frontend environment.
//!
//! [`validate`] is the only gate: it either hands back a [`Validated`]
//! token or a [`ConfigError::MissingRequired`] listing every absent name.
//! Turning that error into a process exit is left to the entry point.

use std::io::{self, Write};

use crate::config::{DEFAULT_ENV_FILE, ENV_EXAMPLE_FILE, REQUIRED_VARS};
use crate::env::EnvSource;
use crate::error::ConfigError;

pub const SUCCESS_MESSAGE: &str = "✅ All required environment variables are configured";

/// Proof that required variables were checked and found present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validated {
    _private: (),
}

/// Required variable names that are unset or empty, in declared order.
pub fn missing_required<E: EnvSource + ?Sized>(env: &E) -> Vec<&'static str> {
    REQUIRED_VARS
        .into_iter()
        .filter(|name| env.non_empty(name).is_none())
        .collect()
}

/// Check that every required variable is present and non-empty.
pub fn validate<E: EnvSource + ?Sized>(env: &E) -> Result<Validated, ConfigError> {
    let missing = missing_required(env);
    if !missing.is_empty() {
        tracing::debug!(?missing, "Missing required environment variables");
        return Err(ConfigError::MissingRequired { missing });
    }

    tracing::debug!("All required environment variables are configured");
    Ok(Validated { _private: () })
}

/// Write the human-readable failure report for `missing`.
pub fn write_missing_report<W: Write>(out: &mut W, missing: &[&str]) -> io::Result<()> {
    writeln!(out, "❌ Missing required environment variables:")?;
    for name in missing {
        writeln!(out, "   - {name}")?;
    }
    writeln!(
        out,
        "\n💡 Please check your {DEFAULT_ENV_FILE} file and ensure all required variables are configured."
    )?;
    writeln!(out, "   See {ENV_EXAMPLE_FILE} for reference.\n")
}

pub fn write_success<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{SUCCESS_MESSAGE}")
}
