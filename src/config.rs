// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Frontend Environment Variables
//!
//! This module defines the environment variable names the web frontend
//! depends on, split into the ones that must be present for startup and the
//! ones that are passed through as-is.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `NEXT_PUBLIC_API_URL` | Base URL of the HTTP API | Required |
//! | `NEXT_PUBLIC_WS_URL` | WebSocket endpoint for live updates | Required |
//! | `NEXT_PUBLIC_STRIPE_PUBLISHABLE_KEY` | Stripe publishable key for checkout | Required |
//! | `NEXT_PUBLIC_APP_NAME` | Display name of the application | Optional |
//! | `NEXT_PUBLIC_APP_DESCRIPTION` | Display description of the application | Optional |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `warn` |

/// Environment variable name for the HTTP API base URL.
pub const API_URL_ENV: &str = "NEXT_PUBLIC_API_URL";

/// Environment variable name for the WebSocket endpoint.
pub const WS_URL_ENV: &str = "NEXT_PUBLIC_WS_URL";

/// Environment variable name for the Stripe publishable key.
///
/// Only the publishable (`pk_`) key belongs here; it ends up in the public
/// bundle.
pub const STRIPE_PUBLISHABLE_KEY_ENV: &str = "NEXT_PUBLIC_STRIPE_PUBLISHABLE_KEY";

/// Environment variable name for the application display name.
pub const APP_NAME_ENV: &str = "NEXT_PUBLIC_APP_NAME";

/// Environment variable name for the application description.
pub const APP_DESCRIPTION_ENV: &str = "NEXT_PUBLIC_APP_DESCRIPTION";

/// Variables whose absence halts startup, in the order they are reported.
pub const REQUIRED_VARS: [&str; 3] = [API_URL_ENV, WS_URL_ENV, STRIPE_PUBLISHABLE_KEY_ENV];

/// Variables passed through regardless of presence.
pub const OPTIONAL_VARS: [&str; 2] = [APP_NAME_ENV, APP_DESCRIPTION_ENV];

/// Env file loaded before validation unless disabled.
pub const DEFAULT_ENV_FILE: &str = ".env.local";

/// Reference file listing every variable, pointed to by the failure hint.
pub const ENV_EXAMPLE_FILE: &str = "env.example";

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Strict mode is never configurable.
pub const STRICT_MODE: bool = true;
