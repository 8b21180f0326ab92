//! Viewer configuration module.
//!
//! Handles loading and validating `folio.toml`. Every value has a stock
//! default; a config file only needs the keys it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [gallery]
//! stagger_step_ms = 100     # Reveal delay per visible position after a filter change
//!
//! [motion]                  # Read by library hosts only; the CLI just validates
//! cursor_easing = 0.15      # Fraction of the remaining distance covered per frame
//! navbar_threshold = 50     # Scroll offset (px) after which the navbar is "scrolled"
//! back_to_top_threshold = 500
//! section_offset = 150      # Lead (px) applied when picking the active nav section
//! typing_interval_ms = 100  # Delay between typed characters in the hero tag
//! ```
//!
//! Unknown keys are rejected to catch typos early.

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

/// Viewer configuration loaded from `folio.toml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    /// Filter and lightbox settings.
    pub gallery: GalleryConfig,
    /// Scroll and pointer effect constants.
    pub motion: MotionConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Milliseconds of reveal delay added per position in the visible set.
    pub stagger_step_ms: u32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            stagger_step_ms: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MotionConfig {
    pub cursor_easing: f64,
    pub navbar_threshold: f64,
    pub back_to_top_threshold: f64,
    pub section_offset: f64,
    pub typing_interval_ms: u32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            cursor_easing: 0.15,
            navbar_threshold: 50.0,
            back_to_top_threshold: 500.0,
            section_offset: 150.0,
            typing_interval_ms: 100,
        }
    }
}

impl ViewerConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gallery.stagger_step_ms > 10_000 {
            return Err(ConfigError::Validation(
                "gallery.stagger_step_ms must be at most 10000".into(),
            ));
        }
        if self.motion.typing_interval_ms > 10_000 {
            return Err(ConfigError::Validation(
                "motion.typing_interval_ms must be at most 10000".into(),
            ));
        }
        let easing = self.motion.cursor_easing;
        if !(easing > 0.0 && easing <= 1.0) {
            return Err(ConfigError::Validation(
                "motion.cursor_easing must be in (0, 1]".into(),
            ));
        }
        for (name, value) in [
            ("navbar_threshold", self.motion.navbar_threshold),
            ("back_to_top_threshold", self.motion.back_to_top_threshold),
            ("section_offset", self.motion.section_offset),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Validation(format!(
                    "motion.{name} must be a non-negative number"
                )));
            }
        }
        Ok(())
    }
}

/// Parse and validate a config from TOML text.
pub fn parse_config(content: &str) -> Result<ViewerConfig, ConfigError> {
    let config: ViewerConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load config from `path`, falling back to stock defaults when it is absent.
pub fn load_config(path: &Path) -> Result<ViewerConfig, ConfigError> {
    if !path.exists() {
        return Ok(ViewerConfig::default());
    }
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// A documented `folio.toml` with every option at its stock value.
pub fn stock_config_toml() -> &'static str {
    r#"# folio-gallery configuration
# All options are optional. Values shown are the stock defaults.

[gallery]
# Reveal delay per visible position after a filter change, in milliseconds.
stagger_step_ms = 100

# The [motion] keys tune the scroll and pointer helpers for library hosts.
# The check and replay commands validate them but never read them.
[motion]
# Fraction of the remaining pointer distance the cursor covers each frame.
cursor_easing = 0.15
# Scroll offset (px) after which the navbar switches to its compact style.
navbar_threshold = 50.0
# Scroll offset (px) after which the back-to-top button appears.
back_to_top_threshold = 500.0
# Lead (px) applied to section tops when highlighting the current nav link.
section_offset = 150.0
# Delay between characters of the hero typing effect, in milliseconds.
typing_interval_ms = 100
"#
}
