//! # Application configuration: `wildoasis.toml`
//!
//! Describes where the hosted backend lives and how the client behaves
//! around it. Filename: [`AppConfig::filename`] = `"wildoasis.toml"`.
//!
//! ## Structure
//!
//! ```toml
//! [backend]
//! url = "https://project.supabase.co"
//! anon_key = "public-anon-key"
//! image_bucket = "cabin-images"
//!
//! [queries]
//! retries = 3            # failed list fetches are retried this many times
//! retry_delay_ms = 1000
//!
//! [toasts]
//! success_ms = 3000
//! error_ms = 5000
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`AppConfig`] | Top-level config with TOML (de)serialisation and environment overrides. |
//! | [`BackendConfig`] | Service URL, public key and the bucket cabin photos go to. |
//! | [`QueryConfig`] | Retry policy for list queries. |
//! | [`ToastConfig`] | How long notifications stay on screen. |
//!
//! All structs derive `Default` so that a missing or empty file is equivalent
//! to the default configuration.

use serde::{Deserialize, Serialize};

/// Environment variable overriding [`BackendConfig::url`].
pub const ENV_BACKEND_URL: &str = "WILDOASIS_BACKEND_URL";
/// Environment variable overriding [`BackendConfig::anon_key`].
pub const ENV_ANON_KEY: &str = "WILDOASIS_ANON_KEY";
/// Environment variable overriding [`BackendConfig::image_bucket`].
pub const ENV_IMAGE_BUCKET: &str = "WILDOASIS_IMAGE_BUCKET";

/// Top-level configuration stored in `wildoasis.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub queries: QueryConfig,
    #[serde(default)]
    pub toasts: ToastConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the hosted service. Empty means "not configured".
    #[serde(default)]
    pub url: String,
    /// Public (anonymous) API key sent with every request.
    #[serde(default)]
    pub anon_key: String,
    #[serde(default = "default_image_bucket")]
    pub image_bucket: String,
}

fn default_image_bucket() -> String {
    "cabin-images".to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            anon_key: String::new(),
            image_bucket: default_image_bucket(),
        }
    }
}

impl BackendConfig {
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.anon_key.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueryConfig {
    #[serde(default = "default_retries")]
    pub retries: u32,
    #[serde(default = "default_retry_delay")]
    pub retry_delay_ms: u64,
}

fn default_retries() -> u32 {
    3
}

fn default_retry_delay() -> u64 {
    1000
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            retries: default_retries(),
            retry_delay_ms: default_retry_delay(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ToastConfig {
    #[serde(default = "default_success_ms")]
    pub success_ms: u64,
    #[serde(default = "default_error_ms")]
    pub error_ms: u64,
}

fn default_success_ms() -> u64 {
    3000
}

fn default_error_ms() -> u64 {
    5000
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            success_ms: default_success_ms(),
            error_ms: default_error_ms(),
        }
    }
}

impl AppConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "wildoasis.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Defaults overridden by the process environment (after loading `.env`).
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Load `.env` if present, then override from the process environment.
    pub fn apply_env(&mut self) {
        dotenvy::dotenv().ok();
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Override backend fields with whatever `lookup` returns for the
    /// `WILDOASIS_*` variables. Empty values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(url) = non_empty(ENV_BACKEND_URL) {
            self.backend.url = url.trim_end_matches('/').to_string();
        }
        if let Some(key) = non_empty(ENV_ANON_KEY) {
            self.backend.anon_key = key;
        }
        if let Some(bucket) = non_empty(ENV_IMAGE_BUCKET) {
            self.backend.image_bucket = bucket;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.backend.image_bucket, "cabin-images");
        assert_eq!(config.queries.retries, 3);
        assert_eq!(config.toasts.error_ms, 5000);
        assert!(!config.backend.is_configured());
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [backend]
            url = "https://example.supabase.co"
            anon_key = "abc"

            [toasts]
            success_ms = 1500
            "#,
        )
        .unwrap();
        assert!(config.backend.is_configured());
        assert_eq!(config.backend.image_bucket, "cabin-images");
        assert_eq!(config.toasts.success_ms, 1500);
        assert_eq!(config.toasts.error_ms, 5000);

        let reparsed = AppConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(reparsed, config);
    }

    #[test]
    fn overrides_ignore_blank_values() {
        let mut config = AppConfig::default();
        config.apply_overrides(|key| match key {
            ENV_BACKEND_URL => Some("https://x.supabase.co/".to_string()),
            ENV_ANON_KEY => Some("  ".to_string()),
            _ => None,
        });
        assert_eq!(config.backend.url, "https://x.supabase.co");
        assert_eq!(config.backend.anon_key, "");
        assert_eq!(config.backend.image_bucket, "cabin-images");
    }
}
