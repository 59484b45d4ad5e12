//! Site configuration module.
//!
//! Handles loading and validating `config.toml`. Configuration covers two
//! concerns: where the content origin lives (and how patiently we talk to
//! it), and the site-wide defaults that terminate every metadata fallback
//! chain.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [origin]
//! base_url = "https://cms.example.com/api"  # Content origin root
//! timeout_secs = 10                         # Per-request fetch timeout
//! revalidate_secs = 60                      # Bounded staleness window
//!
//! [site]
//! url = "https://www.example.com"           # Canonical site URL (og:url base)
//! name = "Example"                          # Site name, terminal title fallback
//! default_description = "Fast, discreet at-home testing."
//!
//! [site.default_image]
//! url = "https://www.example.com/images/og-default.png"
//! alt = "Example"
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want. Unknown
//! keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Content origin connection settings.
    pub origin: OriginConfig,
    /// Site-wide identity and metadata fallback terminals.
    pub site: SiteDefaults,
}

/// Where the content origin lives and how we talk to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OriginConfig {
    /// Root URL of the content origin API.
    pub base_url: String,
    /// Fetch timeout in seconds. A timed-out fetch is a transport error.
    pub timeout_secs: u64,
    /// Revalidation window in seconds. Lookups are served from cache for
    /// this long before the origin is consulted again. Zero disables
    /// caching entirely.
    pub revalidate_secs: u64,
}

impl Default for OriginConfig {
    fn default() -> Self {
        Self {
            base_url: "https://cms.example.com/api".to_string(),
            timeout_secs: 10,
            revalidate_secs: 60,
        }
    }
}

/// Site identity constants. Every metadata fallback chain terminates here,
/// which is what lets metadata derivation guarantee fully populated output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteDefaults {
    /// Canonical site URL, used as the og:url base for pages without an
    /// explicit Open Graph URL.
    pub url: String,
    /// Site name. Terminal fallback for page titles and image alt text.
    pub name: String,
    /// Terminal fallback for the not-found page description.
    pub default_description: String,
    /// Fallback Open Graph image. Must be a stable, always-available asset.
    pub default_image: DefaultImage,
}

impl Default for SiteDefaults {
    fn default() -> Self {
        Self {
            url: "https://www.example.com".to_string(),
            name: "Example".to_string(),
            default_description: "Fast, discreet at-home testing.".to_string(),
            default_image: DefaultImage::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DefaultImage {
    pub url: String,
    pub alt: String,
}

impl Default for DefaultImage {
    fn default() -> Self {
        Self {
            url: "https://www.example.com/images/og-default.png".to_string(),
            alt: "Example".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load config from a TOML file, or return stock defaults when the
    /// file does not exist. Parse and validation errors are not masked.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        let config = if path.exists() {
            let raw = fs::read_to_string(path)?;
            toml::from_str(&raw)?
        } else {
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = Url::parse(&self.origin.base_url)
            .map_err(|e| ConfigError::Validation(format!("origin.base_url: {e}")))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(ConfigError::Validation(
                "origin.base_url must be http or https".into(),
            ));
        }
        Url::parse(&self.site.url)
            .map_err(|e| ConfigError::Validation(format!("site.url: {e}")))?;
        if self.origin.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "origin.timeout_secs must be non-zero".into(),
            ));
        }
        if self.site.name.trim().is_empty() {
            return Err(ConfigError::Validation("site.name must not be empty".into()));
        }
        if self.site.default_image.url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site.default_image.url must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// A documented stock `config.toml`, printed by `pageforge gen-config`.
pub fn stock_config_toml() -> String {
    let doc = r#"# pageforge configuration
# All options are optional - the values below are the stock defaults.

[origin]
# Root URL of the content origin API. Page documents are fetched from
# {base_url}/pages/{slug}, the slug listing from {base_url}/pages.
base_url = "https://cms.example.com/api"
# Per-request fetch timeout in seconds.
timeout_secs = 10
# How long lookups may be served stale before refetching. Applies to both
# found and not-found results. Zero disables caching.
revalidate_secs = 60

[site]
# Canonical site URL. Used to build og:url and sitemap entries.
url = "https://www.example.com"
# Site name. Terminal fallback for titles and image alt text.
name = "Example"
# Terminal fallback description for the not-found page.
default_description = "Fast, discreet at-home testing."

[site.default_image]
# Fallback Open Graph image (1200x630). Must be a stable asset.
url = "https://www.example.com/images/og-default.png"
alt = "Example"
"#;
    doc.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        SiteConfig::default().validate().unwrap();
    }

    #[test]
    fn stock_toml_round_trips_to_defaults() {
        let parsed: SiteConfig = toml::from_str(&stock_config_toml()).unwrap();
        parsed.validate().unwrap();
        assert_eq!(parsed.origin.base_url, OriginConfig::default().base_url);
        assert_eq!(parsed.origin.revalidate_secs, 60);
        assert_eq!(parsed.site.name, "Example");
    }

    #[test]
    fn partial_config_overrides_only_named_values() {
        let config: SiteConfig = toml::from_str(
            r#"
            [origin]
            base_url = "https://content.acme.test/v2"
            "#,
        )
        .unwrap();
        assert_eq!(config.origin.base_url, "https://content.acme.test/v2");
        assert_eq!(config.origin.timeout_secs, 10);
        assert_eq!(config.site.name, "Example");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("[origin]\nbase_uri = \"typo\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn non_http_origin_fails_validation() {
        let mut config = SiteConfig::default();
        config.origin.base_url = "ftp://cms.example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_timeout_fails_validation() {
        let mut config = SiteConfig::default();
        config.origin.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_or_default_without_file_returns_stock() {
        let config = SiteConfig::load_or_default(Path::new("/nonexistent/config.toml")).unwrap();
        assert_eq!(config.origin.timeout_secs, 10);
    }

    #[test]
    fn load_or_default_reads_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "[site]\nname = \"Acme Health\"").unwrap();

        let config = SiteConfig::load_or_default(&path).unwrap();
        assert_eq!(config.site.name, "Acme Health");
    }

    #[test]
    fn load_or_default_surfaces_parse_errors() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "not [valid toml").unwrap();
        assert!(matches!(
            SiteConfig::load_or_default(&path),
            Err(ConfigError::Toml(_))
        ));
    }
}
