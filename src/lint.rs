// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Non-fatal checks on the values of exported variables.
//!
//! Presence is enforced by [`crate::validate`]; anything found here is only
//! reported and never stops startup.

use std::fmt;

use url::Url;

use crate::config::{API_URL_ENV, STRIPE_PUBLISHABLE_KEY_ENV, WS_URL_ENV};
use crate::frontend::FrontendConfig;

/// A suspicious value in the frontend configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// Value does not parse as a URL.
    InvalidUrl { var: &'static str, reason: String },
    /// URL parses but uses a scheme the frontend cannot talk to.
    UnexpectedScheme {
        var: &'static str,
        scheme: String,
        expected: &'static [&'static str],
    },
    /// A Stripe secret key was put into a public variable.
    StripeSecretKey,
    /// Value does not look like a Stripe publishable key.
    StripeKeyFormat,
}

impl ConfigWarning {
    pub fn var(&self) -> &'static str {
        match self {
            ConfigWarning::InvalidUrl { var, .. } | ConfigWarning::UnexpectedScheme { var, .. } => {
                *var
            }
            ConfigWarning::StripeSecretKey | ConfigWarning::StripeKeyFormat => {
                STRIPE_PUBLISHABLE_KEY_ENV
            }
        }
    }
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::InvalidUrl { var, reason } => {
                write!(f, "{var} is not a valid URL: {reason}")
            }
            ConfigWarning::UnexpectedScheme {
                var,
                scheme,
                expected,
            } => write!(
                f,
                "{var} uses scheme '{scheme}', expected one of: {}",
                expected.join(", ")
            ),
            ConfigWarning::StripeSecretKey => write!(
                f,
                "{STRIPE_PUBLISHABLE_KEY_ENV} holds a Stripe secret key; it would be exposed in the public bundle"
            ),
            ConfigWarning::StripeKeyFormat => write!(
                f,
                "{STRIPE_PUBLISHABLE_KEY_ENV} does not look like a Stripe publishable key (expected 'pk_' prefix)"
            ),
        }
    }
}

const HTTP_SCHEMES: &[&str] = &["http", "https"];
const WS_SCHEMES: &[&str] = &["ws", "wss"];

/// Inspect exported values and collect warnings. Unset values are skipped.
pub fn lint(config: &FrontendConfig) -> Vec<ConfigWarning> {
    let warnings: Vec<_> = config
        .env
        .entries()
        .into_iter()
        .filter_map(|(var, value)| match (var, value?) {
            (API_URL_ENV, value) => check_url(API_URL_ENV, value, HTTP_SCHEMES),
            (WS_URL_ENV, value) => check_url(WS_URL_ENV, value, WS_SCHEMES),
            (STRIPE_PUBLISHABLE_KEY_ENV, value) => check_stripe_key(value),
            _ => None,
        })
        .collect();

    for warning in &warnings {
        tracing::debug!(var = warning.var(), "{warning}");
    }
    warnings
}

fn check_url(
    var: &'static str,
    value: &str,
    expected: &'static [&'static str],
) -> Option<ConfigWarning> {
    match Url::parse(value) {
        Ok(url) if expected.contains(&url.scheme()) => None,
        Ok(url) => Some(ConfigWarning::UnexpectedScheme {
            var,
            scheme: url.scheme().to_string(),
            expected,
        }),
        Err(e) => Some(ConfigWarning::InvalidUrl {
            var,
            reason: e.to_string(),
        }),
    }
}

fn check_stripe_key(value: &str) -> Option<ConfigWarning> {
    if value.starts_with("pk_") {
        None
    } else if value.starts_with("sk_") || value.starts_with("rk_") {
        Some(ConfigWarning::StripeSecretKey)
    } else {
        Some(ConfigWarning::StripeKeyFormat)
    }
}
