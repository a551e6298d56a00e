//! Configuration
//!
//! Everything the layer reads from its surroundings: which element ids and
//! marker attribute the markup uses, where the contact endpoint lives, and how
//! long a submission may take. All sections default to the values the site
//! markup ships with, so an empty JSON object is a valid configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::i18n::Language;

/// Default request deadline
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Default delay between cooperative cancellation and the forced timeout.
pub const DEFAULT_FALLBACK_MARGIN_MS: u64 = 50;

/// Default contact endpoint path
pub const DEFAULT_CONTACT_PATH: &str = "/api/kontakt";

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Markup hooks
    pub page: PageConfig,
    /// Submission protocol
    pub submit: SubmitConfig,
    /// Language of user-facing texts
    pub language: Language,
}

impl Config {
    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the protocol cannot work with.
    pub fn validate(&self) -> ConfigResult<()> {
        self.submit.validate()?;
        self.page.validate()
    }
}

/// Element ids and attributes the layer looks for in the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    /// Contact form id
    pub form_id: String,
    /// Status region id
    pub status_id: String,
    /// Lightbox overlay id
    pub overlay_id: String,
    /// Image slot id
    pub image_id: String,
    /// Video slot id
    pub video_id: String,
    /// Close control id
    pub close_id: String,
    /// Attribute marking lightbox triggers
    pub trigger_attribute: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            form_id: "kontakt-form".to_string(),
            status_id: "form-status".to_string(),
            overlay_id: "lb".to_string(),
            image_id: "lb-img".to_string(),
            video_id: "lb-video".to_string(),
            close_id: "lb-close".to_string(),
            trigger_attribute: "data-lightbox".to_string(),
        }
    }
}

impl PageConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.trigger_attribute.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "page.triggerAttribute",
                detail: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Submission protocol settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SubmitConfig {
    /// Absolute or host-relative endpoint the form is posted to
    pub endpoint: String,
    /// Deadline after which the request is cancelled
    pub timeout_ms: u64,
    /// Extra time granted after cancellation before the attempt is forced to
    /// fail
    pub fallback_margin_ms: u64,
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_CONTACT_PATH.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            fallback_margin_ms: DEFAULT_FALLBACK_MARGIN_MS,
        }
    }
}

impl SubmitConfig {
    /// Endpoint rooted at `base_url`, e.g. `http://127.0.0.1:5000`.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            endpoint: format!("{}{DEFAULT_CONTACT_PATH}", base_url.trim_end_matches('/')),
            ..Self::default()
        }
    }

    /// Request deadline
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Margin between cancellation and the forced failure
    pub fn fallback_margin(&self) -> Duration {
        Duration::from_millis(self.fallback_margin_ms)
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "submit.endpoint",
                detail: "must not be empty".to_string(),
            });
        }
        if self.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "submit.timeoutMs",
                detail: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.submit.timeout(), Duration::from_secs(10));
        assert_eq!(config.submit.fallback_margin(), Duration::from_millis(50));
        assert_eq!(config.page.overlay_id, "lb");
    }

    #[test]
    fn partial_sections_are_merged() {
        let config = Config::from_json(
            r#"{"submit":{"timeoutMs":2500},"page":{"formId":"quote"},"language":"pl-PL"}"#,
        )
        .unwrap();
        assert_eq!(config.submit.timeout_ms, 2500);
        assert_eq!(config.submit.fallback_margin_ms, DEFAULT_FALLBACK_MARGIN_MS);
        assert_eq!(config.page.form_id, "quote");
        assert_eq!(config.page.status_id, "form-status");
        assert_eq!(config.language, Language::PlPl);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = Config::from_json(r#"{"submit":{"timeoutMs":0}}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "submit.timeoutMs",
                ..
            }
        ));
    }

    #[test]
    fn empty_endpoint_is_rejected() {
        let err = Config::from_json(r#"{"submit":{"endpoint":"  "}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            Config::from_json("{"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn base_url_is_joined_with_contact_path() {
        let config = SubmitConfig::with_base_url("http://127.0.0.1:5000/");
        assert_eq!(config.endpoint, "http://127.0.0.1:5000/api/kontakt");
    }
}
