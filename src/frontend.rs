// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! The resolved configuration handed to the frontend build.

use serde::Serialize;

use crate::config::{
    APP_DESCRIPTION_ENV, APP_NAME_ENV, API_URL_ENV, STRICT_MODE, STRIPE_PUBLISHABLE_KEY_ENV,
    WS_URL_ENV,
};
use crate::env::EnvSource;
use crate::error::ConfigError;
use crate::validate::{validate, Validated};

/// Public variables exposed to the application bundle.
///
/// Unset variables serialize as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PublicEnv {
    #[serde(rename = "NEXT_PUBLIC_API_URL")]
    pub api_url: Option<String>,
    #[serde(rename = "NEXT_PUBLIC_WS_URL")]
    pub ws_url: Option<String>,
    #[serde(rename = "NEXT_PUBLIC_STRIPE_PUBLISHABLE_KEY")]
    pub stripe_publishable_key: Option<String>,
    #[serde(rename = "NEXT_PUBLIC_APP_NAME")]
    pub app_name: Option<String>,
    #[serde(rename = "NEXT_PUBLIC_APP_DESCRIPTION")]
    pub app_description: Option<String>,
}

impl PublicEnv {
    /// Every exported variable with its value, required first.
    pub fn entries(&self) -> [(&'static str, Option<&str>); 5] {
        [
            (API_URL_ENV, self.api_url.as_deref()),
            (WS_URL_ENV, self.ws_url.as_deref()),
            (STRIPE_PUBLISHABLE_KEY_ENV, self.stripe_publishable_key.as_deref()),
            (APP_NAME_ENV, self.app_name.as_deref()),
            (APP_DESCRIPTION_ENV, self.app_description.as_deref()),
        ]
    }
}

/// Frontend configuration snapshot, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontendConfig {
    pub env: PublicEnv,
    pub react_strict_mode: bool,
}

impl FrontendConfig {
    /// Copy the exported variables out of `env`.
    ///
    /// Does not validate; values are passed through as-is and unset ones
    /// stay `None`.
    pub fn build<E: EnvSource + ?Sized>(env: &E) -> Self {
        Self {
            env: PublicEnv {
                api_url: env.var(API_URL_ENV),
                ws_url: env.var(WS_URL_ENV),
                stripe_publishable_key: env.var(STRIPE_PUBLISHABLE_KEY_ENV),
                app_name: env.var(APP_NAME_ENV),
                app_description: env.var(APP_DESCRIPTION_ENV),
            },
            react_strict_mode: STRICT_MODE,
        }
    }

    /// Build after a successful validation.
    pub fn from_validated<E: EnvSource + ?Sized>(env: &E, _validated: Validated) -> Self {
        Self::build(env)
    }

    /// Validate `env` and build the config in one step.
    pub fn load<E: EnvSource + ?Sized>(env: &E) -> Result<Self, ConfigError> {
        let validated = validate(env)?;
        Ok(Self::from_validated(env, validated))
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, ConfigError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OPTIONAL_VARS, REQUIRED_VARS};
    use crate::env::MapEnv;
    use serde_json::json;

    fn required_only() -> MapEnv {
        MapEnv::new()
            .with(API_URL_ENV, "https://api.example.com")
            .with(WS_URL_ENV, "wss://ws.example.com")
            .with(STRIPE_PUBLISHABLE_KEY_ENV, "pk_test_123")
    }

    #[test]
    fn build_without_optional_vars_leaves_them_unset() {
        let config = FrontendConfig::load(&required_only()).unwrap();

        assert_eq!(config.env.api_url.as_deref(), Some("https://api.example.com"));
        assert_eq!(config.env.ws_url.as_deref(), Some("wss://ws.example.com"));
        assert_eq!(config.env.stripe_publishable_key.as_deref(), Some("pk_test_123"));
        assert_eq!(config.env.app_name, None);
        assert_eq!(config.env.app_description, None);
        assert!(config.react_strict_mode);
    }

    #[test]
    fn build_passes_optional_vars_through() {
        let env = required_only()
            .with(APP_NAME_ENV, "SkillSwap")
            .with(APP_DESCRIPTION_ENV, "");
        let config = FrontendConfig::build(&env);

        assert_eq!(config.env.app_name.as_deref(), Some("SkillSwap"));
        assert_eq!(config.env.app_description.as_deref(), Some(""));
    }

    #[test]
    fn build_is_tolerant_of_an_empty_environment() {
        let config = FrontendConfig::build(&MapEnv::new());
        assert_eq!(config.env, PublicEnv::default());
        assert!(config.react_strict_mode);
    }

    #[test]
    fn load_refuses_incomplete_environment() {
        let env = MapEnv::new().with(API_URL_ENV, "https://api.example.com");
        assert!(matches!(
            FrontendConfig::load(&env),
            Err(ConfigError::MissingRequired { .. })
        ));
    }

    #[test]
    fn entries_list_required_then_optional_names() {
        let config = FrontendConfig::build(&required_only());
        let names: Vec<_> = config.env.entries().iter().map(|(name, _)| *name).collect();
        assert_eq!(&names[..3], &REQUIRED_VARS);
        assert_eq!(&names[3..], &OPTIONAL_VARS);
    }

    #[test]
    fn serializes_for_the_frontend_build() {
        let value = serde_json::to_value(FrontendConfig::build(&required_only())).unwrap();

        assert_eq!(
            value,
            json!({
                "env": {
                    "NEXT_PUBLIC_API_URL": "https://api.example.com",
                    "NEXT_PUBLIC_WS_URL": "wss://ws.example.com",
                    "NEXT_PUBLIC_STRIPE_PUBLISHABLE_KEY": "pk_test_123",
                    "NEXT_PUBLIC_APP_NAME": null,
                    "NEXT_PUBLIC_APP_DESCRIPTION": null
                },
                "reactStrictMode": true
            })
        );
    }

    #[test]
    fn compact_json_is_single_line() {
        let json = FrontendConfig::build(&required_only()).to_json(false).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.ends_with(r#""reactStrictMode":true}"#));
    }
}
