//! Landing page configuration
//!
//! Defaults reproduce the production page: a two-minute offer countdown, a
//! ten-second trial clock in the header, and the FitHub tariffs endpoint.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Production API host.
pub const DEFAULT_API_URL: &str = "https://t-core.fit-hub.pro";

/// API host used when built with `ENVIRONMENT=development`.
pub const DEV_API_URL: &str = "http://localhost:7000";

/// Runtime configuration for the landing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    /// API host the tariff list is fetched from.
    pub api_url: String,
    /// Page-wide offer countdown that switches prices to full price.
    pub offer_seconds: u32,
    /// Header trial clock.
    pub trial_seconds: u32,
    /// Clocks below this many seconds blink.
    pub urgency_threshold_secs: u32,
    pub blink_interval_ms: u32,
    /// Length of the slide/fade once the offer expires.
    pub price_transition_ms: u32,
    pub currency: String,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            offer_seconds: 120,
            trial_seconds: 10,
            urgency_threshold_secs: 30,
            blink_interval_ms: 500,
            price_transition_ms: 700,
            currency: "₽".to_string(),
        }
    }
}

impl LandingConfig {
    /// Parse a TOML document; missing keys fall back to defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the page configuration from a TOML document and the build
    /// environment, in that order. Any layer that fails to parse or validate
    /// is dropped with a warning, so this always yields a usable config.
    pub fn resolve(toml_source: &str) -> Self {
        let base = Self::from_toml_str(toml_source).unwrap_or_else(|e| {
            tracing::warn!("Ignoring landing config file: {}", e);
            Self::default()
        });
        let config = base.clone().with_build_env();
        match config.validate() {
            Ok(()) => config,
            Err(e) => {
                tracing::warn!("Ignoring build overrides: {}", e);
                base
            }
        }
    }

    /// Apply compile-time environment variables.
    ///
    /// `ENVIRONMENT=development` points at a local API,
    /// `FITHUB_API_URL` overrides the host outright and
    /// `FITHUB_OFFER_SECONDS` overrides the offer duration. Invalid overrides
    /// are ignored with a warning.
    pub fn with_build_env(self) -> Self {
        self.apply_vars(
            option_env!("ENVIRONMENT"),
            option_env!("FITHUB_API_URL"),
            option_env!("FITHUB_OFFER_SECONDS"),
        )
    }

    fn apply_vars(
        mut self,
        environment: Option<&str>,
        api_url: Option<&str>,
        offer_seconds: Option<&str>,
    ) -> Self {
        if environment == Some("development") {
            self.api_url = DEV_API_URL.to_string();
        }

        if let Some(url) = api_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api_url = url.to_string();
        }

        if let Some(raw) = offer_seconds {
            match raw.trim().parse::<u32>() {
                Ok(secs) if secs > 0 => self.offer_seconds = secs,
                _ => tracing::warn!("Ignoring invalid FITHUB_OFFER_SECONDS: {:?}", raw),
            }
        }

        self
    }

    /// Reject values the page cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_url.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "api_url",
                reason: "must not be empty".to_string(),
            });
        }

        let positive = [
            ("offer_seconds", self.offer_seconds),
            ("trial_seconds", self.trial_seconds),
            ("blink_interval_ms", self.blink_interval_ms),
            ("price_transition_ms", self.price_transition_ms),
        ];
        for (field, value) in positive {
            if value == 0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be greater than zero".to_string(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LandingConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.offer_seconds, 120);
        assert_eq!(config.trial_seconds, 10);
        assert_eq!(config.urgency_threshold_secs, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = LandingConfig::from_toml_str("offer_seconds = 60\ncurrency = \"$\"").unwrap();
        assert_eq!(config.offer_seconds, 60);
        assert_eq!(config.currency, "$");
        assert_eq!(config.trial_seconds, 10);
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_toml_rejects_zero_duration() {
        let err = LandingConfig::from_toml_str("blink_interval_ms = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "blink_interval_ms", .. }));
    }

    #[test]
    fn test_toml_rejects_empty_url() {
        let err = LandingConfig::from_toml_str("api_url = \"  \"").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "api_url", .. }));
    }

    #[test]
    fn test_toml_parse_error() {
        let err = LandingConfig::from_toml_str("offer_seconds = \"soon\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_env_overrides() {
        let dev = LandingConfig::default().apply_vars(Some("development"), None, None);
        assert_eq!(dev.api_url, DEV_API_URL);

        let custom = LandingConfig::default().apply_vars(
            Some("development"),
            Some("https://example.test"),
            Some("45"),
        );
        assert_eq!(custom.api_url, "https://example.test");
        assert_eq!(custom.offer_seconds, 45);

        let bad = LandingConfig::default().apply_vars(None, Some(""), Some("zero"));
        assert_eq!(bad.api_url, DEFAULT_API_URL);
        assert_eq!(bad.offer_seconds, 120);
    }

    #[test]
    fn test_env_overrides_keep_file_values() {
        let file = LandingConfig::from_toml_str("trial_seconds = 15\ncurrency = \"$\"").unwrap();
        let config = file.apply_vars(None, Some("https://example.test"), None);
        assert_eq!(config.api_url, "https://example.test");
        assert_eq!(config.trial_seconds, 15);
        assert_eq!(config.currency, "$");
    }

    #[test]
    fn test_resolve_reads_toml() {
        let config = LandingConfig::resolve("offer_seconds = 90\nprice_transition_ms = 400");
        assert_eq!(config.offer_seconds, 90);
        assert_eq!(config.price_transition_ms, 400);
    }

    #[test]
    fn test_resolve_falls_back_on_bad_file() {
        let config = LandingConfig::resolve("offer_seconds = 0");
        assert_eq!(config.offer_seconds, 120);
        assert!(config.validate().is_ok());

        let config = LandingConfig::resolve("not toml at all [");
        assert!(config.validate().is_ok());
    }
}
