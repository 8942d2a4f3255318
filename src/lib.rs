// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Frontend Environment Guard
//!
//! Validates the public environment the web frontend needs before anything
//! else starts, and exports the resolved values for the frontend build.
//!
//! ## Modules
//!
//! - `config` - Variable names and fixed settings
//! - `env` - Environment access and env file loading
//! - `validate` - Required variable check and diagnostics
//! - `frontend` - The exported configuration snapshot
//! - `lint` - Non-fatal value checks
//! - `logging` - Tracing setup

pub mod config;
pub mod env;
pub mod error;
pub mod frontend;
pub mod lint;
pub mod logging;
pub mod validate;

pub use env::{EnvSource, MapEnv, ProcessEnv};
pub use error::ConfigError;
pub use frontend::{FrontendConfig, PublicEnv};
pub use validate::{validate, Validated};
