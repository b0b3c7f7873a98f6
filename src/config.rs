//! Site configuration module.
//!
//! Handles loading and validating `card-press.toml`. Configuration is a
//! single flat file next to the deck data; stock defaults apply when it is
//! absent. Unknown keys are rejected to catch typos early.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! # Absolute URL prefix the QR codes point at. Card pages live under
//! # <base_url>/cards/<id>/.
//! base_url = "https://example.github.io/adventure-cards"
//!
//! [site]
//! title = "Adventure Cards"       # Site name in page titles and headers
//! tagline = "Pick a card, go."    # Subtitle on the index page
//!
//! [qr]
//! enabled = true                  # Wire in the QR/imaging collaborator
//! svg_scale = 10                  # Pixels per module in saved SVGs
//! png_scale = 25                  # Pixels per module in saved/inline PNGs
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse; override just the values you want:
//!
//! ```toml
//! # Only point the QR codes somewhere else
//! base_url = "https://cards.example.org"
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `card-press.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute URL prefix encoded into QR codes.
    pub base_url: String,
    /// Site identity (title, tagline).
    pub site: SiteSection,
    /// Scannable-code generation settings.
    pub qr: QrConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            site: SiteSection::default(),
            qr: QrConfig::default(),
        }
    }
}

fn default_base_url() -> String {
    "https://example.github.io/adventure-cards".to_string()
}

impl SiteConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::Validation(
                "base_url must be an absolute http(s) URL".into(),
            ));
        }
        if self.qr.svg_scale == 0 || self.qr.png_scale == 0 {
            return Err(ConfigError::Validation(
                "qr.svg_scale and qr.png_scale must be non-zero".into(),
            ));
        }
        if self.site.title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site.title must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// URL of one card's page, the payload of its QR code.
    pub fn card_url(&self, id: &str) -> String {
        format!("{}/cards/{}/", self.base_url.trim_end_matches('/'), id)
    }
}

/// Site identity strings substituted into page chrome.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSection {
    /// Site name in page titles, headers, and footers.
    pub title: String,
    /// Subtitle on the index page.
    pub tagline: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: "Adventure Cards".to_string(),
            tagline: "Pick a card, go.".to_string(),
        }
    }
}

/// Scannable-code generation settings.
///
/// `enabled` is the configuration-time switch for the imaging collaborator:
/// the orchestrator checks it once and either generates QR assets and the
/// print sheet or skips both with a warning.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QrConfig {
    pub enabled: bool,
    /// Pixels per QR module in saved SVG files.
    pub svg_scale: u32,
    /// Pixels per QR module in saved and inline PNGs.
    pub png_scale: u32,
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            svg_scale: 10,
            png_scale: 25,
        }
    }
}

/// Load config from `card-press.toml` in the given directory.
///
/// A missing file yields the stock defaults; a present-but-invalid file is
/// an error, never silently ignored.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let path = dir.join("card-press.toml");
    let config = if path.exists() {
        let content = fs::read_to_string(&path)?;
        toml::from_str(&content)?
    } else {
        SiteConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// The documented stock config, printed by `card-press gen-config`.
pub fn stock_config_toml() -> String {
    let defaults = SiteConfig::default();
    format!(
        r#"# card-press configuration. All options are optional; the values below
# are the stock defaults. Place this file next to your cards.json.

# Absolute URL prefix the QR codes point at. Card pages live under
# <base_url>/cards/<id>/.
base_url = "{base_url}"

[site]
title = "{title}"
tagline = "{tagline}"

[qr]
# Wire in the QR/imaging collaborator. When false, the build still produces
# card pages and the index; QR assets and the print sheet are skipped with
# a warning.
enabled = {enabled}
# Pixels per QR module in saved SVGs / PNGs.
svg_scale = {svg_scale}
png_scale = {png_scale}
"#,
        base_url = defaults.base_url,
        title = defaults.site.title,
        tagline = defaults.site.tagline,
        enabled = defaults.qr.enabled,
        svg_scale = defaults.qr.svg_scale,
        png_scale = defaults.qr.png_scale,
    )
}
