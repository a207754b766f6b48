//! Page behavior configuration.
//!
//! Every field has a default matching the shipped page. A page may override
//! any subset through a JSON `data-page-config` attribute on the root
//! element; unknown keys are rejected so typos surface in the console.

use serde::Deserialize;

use crate::consts::{
    MIN_MESSAGE_CHARS, NAV_SCROLLED_THRESHOLD_PX, REVEAL_BOTTOM_MARGIN_PCT, REVEAL_THRESHOLD, SECTION_LOOKAHEAD_PX,
    THEME_STORAGE_KEY,
};

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Errors produced while reading page configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The attribute value was not valid JSON for [`PageConfig`].
    #[error("config parse failed: {0}")]
    Parse(String),

    /// A value parsed but is outside its allowed range.
    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Tunables for the tracker, reveal engine, form and theme.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Added to the scroll offset to form the section checkpoint.
    pub lookahead_px: f64,
    /// Sticky nav is marked scrolled when the offset is strictly greater.
    pub scrolled_threshold_px: f64,
    /// Visible fraction that triggers a reveal, `0.0..=1.0`.
    pub reveal_threshold: f64,
    /// Bottom root-margin shrink, as a percentage of viewport height.
    pub reveal_bottom_margin_pct: f64,
    pub min_message_chars: usize,
    pub theme_storage_key: String,
    /// Raise console logging to debug level.
    pub debug: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            lookahead_px: SECTION_LOOKAHEAD_PX,
            scrolled_threshold_px: NAV_SCROLLED_THRESHOLD_PX,
            reveal_threshold: REVEAL_THRESHOLD,
            reveal_bottom_margin_pct: REVEAL_BOTTOM_MARGIN_PCT,
            min_message_chars: MIN_MESSAGE_CHARS,
            theme_storage_key: THEME_STORAGE_KEY.to_owned(),
            debug: false,
        }
    }
}

impl PageConfig {
    /// Build config from an optional JSON attribute value.
    ///
    /// `None` or a blank string yields the defaults.
    pub fn from_json(raw: Option<&str>) -> Result<Self, ConfigError> {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Ok(Self::default());
        };
        let config: Self = serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("lookahead_px", self.lookahead_px)?;
        non_negative("scrolled_threshold_px", self.scrolled_threshold_px)?;
        non_negative("reveal_bottom_margin_pct", self.reveal_bottom_margin_pct)?;
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(ConfigError::Invalid {
                field: "reveal_threshold",
                reason: format!("{} is outside 0.0..=1.0", self.reveal_threshold),
            });
        }
        if self.theme_storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid { field: "theme_storage_key", reason: "must not be empty".to_owned() });
        }
        Ok(())
    }

    /// Root margin string in the form the observer API expects.
    #[must_use]
    pub fn reveal_root_margin(&self) -> String {
        format!("0px 0px -{}% 0px", self.reveal_bottom_margin_pct)
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, reason: format!("{value} must be a finite, non-negative number") })
    }
}
