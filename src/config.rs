use crate::{
    error::{PlannerError, Result},
    services::{groq_client, DEFAULT_MODEL},
};
use std::{env, time::Duration};

pub const API_KEY_VAR: &str = "GROQ_API_KEY";
pub const BASE_URL_VAR: &str = "GROQ_BASE_URL";
pub const MODEL_VAR: &str = "GROQ_MODEL";
pub const TIMEOUT_VAR: &str = "GROQ_TIMEOUT_SECS";

/// Settings for talking to the generation provider.
#[derive(Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl PlannerConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: groq_client::DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: groq_client::DEFAULT_TIMEOUT,
        }
    }

    /// Read settings from the environment, loading a `.env` file first if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build settings from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                PlannerError::Config(format!(
                    "{API_KEY_VAR} environment variable must be set before planning a trip"
                ))
            })?;

        let mut config = Self::new(api_key);
        if let Some(base_url) = lookup(BASE_URL_VAR) {
            config.base_url = base_url;
        }
        if let Some(model) = lookup(MODEL_VAR) {
            config.model = model;
        }
        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                PlannerError::Config(format!(
                    "{TIMEOUT_VAR} must be a whole number of seconds, got {raw:?}"
                ))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(PlannerError::Config("API key must not be empty".to_string()));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(PlannerError::Config(format!(
                "base URL must start with http:// or https://, got {:?}",
                self.base_url
            )));
        }
        if self.model.trim().is_empty() {
            return Err(PlannerError::Config("model must not be empty".to_string()));
        }
        if self.timeout.is_zero() {
            return Err(PlannerError::Config("timeout must be greater than zero".to_string()));
        }
        Ok(())
    }
}

impl std::fmt::Debug for PlannerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlannerConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_missing_key_is_config_error() {
        let err = PlannerConfig::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
        assert!(err.to_string().contains(API_KEY_VAR));
    }

    #[test]
    fn test_defaults_and_overrides() {
        let config = PlannerConfig::from_lookup(lookup(&[(API_KEY_VAR, "gsk_test")])).unwrap();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, groq_client::DEFAULT_BASE_URL);

        let config = PlannerConfig::from_lookup(lookup(&[
            (API_KEY_VAR, "gsk_test"),
            (MODEL_VAR, "llama-3.1-8b-instant"),
            (BASE_URL_VAR, "http://127.0.0.1:8080/v1"),
            (TIMEOUT_VAR, "30"),
        ]))
        .unwrap();
        assert_eq!(config.model, "llama-3.1-8b-instant");
        assert_eq!(config.base_url, "http://127.0.0.1:8080/v1");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_bad_timeout_and_url_are_rejected() {
        assert!(PlannerConfig::from_lookup(lookup(&[
            (API_KEY_VAR, "gsk_test"),
            (TIMEOUT_VAR, "soon"),
        ]))
        .is_err());

        assert!(PlannerConfig::from_lookup(lookup(&[
            (API_KEY_VAR, "gsk_test"),
            (BASE_URL_VAR, "api.groq.com"),
        ]))
        .is_err());
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = PlannerConfig::new("gsk_secret");
        assert!(!format!("{config:?}").contains("gsk_secret"));
    }
}
