//! Client configuration

use std::time::Duration;

use serde::Deserialize;

pub const ORCID_PUBLIC_BASE_URL: &str = "https://pub.orcid.org/v2.0/";
pub const ORCID_SANDBOX_BASE_URL: &str = "https://pub.sandbox.orcid.org/v2.0/";

/// ORCID registry the client talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Public production registry
    #[default]
    Production,
    /// Public sandbox registry (test data)
    Sandbox,
}

impl Environment {
    /// Parse environment from string name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "production" | "public" => Some(Self::Production),
            "sandbox" => Some(Self::Sandbox),
            _ => None,
        }
    }

    pub fn base_url(&self) -> &'static str {
        match self {
            Self::Production => ORCID_PUBLIC_BASE_URL,
            Self::Sandbox => ORCID_SANDBOX_BASE_URL,
        }
    }
}

/// Runtime configuration for [`crate::OrcidClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub environment: Environment,
    /// Overrides the environment's base URL (mirrors, local fixtures)
    pub base_url: Option<String>,
    /// Whole-request timeout
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Production,
            base_url: None,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl ClientConfig {
    pub fn sandbox() -> Self {
        Self {
            environment: Environment::Sandbox,
            ..Default::default()
        }
    }

    /// Effective base URL, always ending in `/`
    pub fn base_url(&self) -> String {
        let base = self
            .base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.base_url());
        normalize_base_url(base)
    }
}

pub(crate) fn normalize_base_url(base: &str) -> String {
    if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{base}/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.base_url(), ORCID_PUBLIC_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn sandbox_base_url() {
        assert_eq!(ClientConfig::sandbox().base_url(), ORCID_SANDBOX_BASE_URL);
    }

    #[test]
    fn override_gets_trailing_slash() {
        let config = ClientConfig {
            base_url: Some("http://localhost:8080/v2.0".to_string()),
            ..Default::default()
        };
        assert_eq!(config.base_url(), "http://localhost:8080/v2.0/");
    }

    #[test]
    fn environment_from_name() {
        assert_eq!(Environment::from_name("Sandbox"), Some(Environment::Sandbox));
        assert_eq!(
            Environment::from_name("public"),
            Some(Environment::Production)
        );
        assert_eq!(Environment::from_name("staging"), None);
    }

    #[test]
    fn environment_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            environment: Environment,
        }
        let w: Wrapper = toml::from_str(r#"environment = "sandbox""#).unwrap();
        assert_eq!(w.environment, Environment::Sandbox);
    }
}
