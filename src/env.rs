// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Access to environment variables.
//!
//! Validation reads through [`EnvSource`] so it can run against the real
//! process environment or against a fixed map.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::ConfigError;

/// A read-only view of environment variables.
pub trait EnvSource {
    /// Raw value of `name`, if set.
    fn var(&self, name: &str) -> Option<String>;

    /// Value of `name`, treating an empty string as unset.
    fn non_empty(&self, name: &str) -> Option<String> {
        self.var(name).filter(|value| !value.is_empty())
    }
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// An in-memory environment.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: BTreeMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvSource for MapEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// Which env file to load into the process environment before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvFile<'a> {
    /// Load the default file if it exists, skip it otherwise.
    Default(&'a Path),
    /// Load this file; failing to read it is an error.
    Explicit(&'a Path),
    /// Do not load anything.
    Disabled,
}

/// Load an env file into the process environment.
///
/// Variables already set in the process are kept. Returns the path that was
/// loaded, if any.
pub fn load_env_file<'a>(file: &EnvFile<'a>) -> Result<Option<&'a Path>, ConfigError> {
    let (path, must_exist) = match file {
        EnvFile::Disabled => return Ok(None),
        EnvFile::Default(path) => (*path, false),
        EnvFile::Explicit(path) => (*path, true),
    };

    if !must_exist && !path.exists() {
        tracing::debug!(path = %path.display(), "No env file found, using process environment only");
        return Ok(None);
    }

    dotenvy::from_path(path).map_err(|source| ConfigError::EnvFile {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "Loaded env file");
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_env_treats_empty_as_unset() {
        let env = MapEnv::new().with("SET", "value").with("EMPTY", "");

        assert_eq!(env.non_empty("SET").as_deref(), Some("value"));
        assert_eq!(env.var("EMPTY").as_deref(), Some(""));
        assert_eq!(env.non_empty("EMPTY"), None);
        assert_eq!(env.non_empty("UNSET"), None);
    }

    #[test]
    fn whitespace_values_are_kept_verbatim() {
        let env: MapEnv = [("NAME", "  padded ")].into_iter().collect();
        assert_eq!(env.non_empty("NAME").as_deref(), Some("  padded "));
    }

    #[test]
    fn disabled_env_file_loads_nothing() {
        assert_eq!(load_env_file(&EnvFile::Disabled).unwrap(), None);
    }

    #[test]
    fn missing_default_env_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env.local");
        assert_eq!(load_env_file(&EnvFile::Default(&path)).unwrap(), None);
    }

    #[test]
    fn missing_explicit_env_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.env");

        let err = load_env_file(&EnvFile::Explicit(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::EnvFile { .. }));
        assert!(err.to_string().contains("absent.env"));
    }
}
