use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::reveal::{validate_threshold, RevealError, DEFAULT_VISIBILITY_THRESHOLD};

/// Typewriter speed of the hero line.
pub const DEFAULT_HERO_INTERVAL_MS: u32 = 50;

/// Typewriter speed of the explanation card prose.
pub const DEFAULT_CARD_INTERVAL_MS: u32 = 5;

pub const DEFAULT_LOGO_SRC: &str = "/bnb-logo.png";

pub const DEFAULT_REPOSITORY_URL: &str = "https://github.com/makhak123/v0-bnb-on-solana";

/// Errors from loading or validating a [`PageConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Invalid {field}: {source}")]
    InvalidReveal {
        field: &'static str,
        #[source]
        source: RevealError,
    },

    #[error("{field} must not be empty")]
    Empty { field: &'static str },
}

/// Tunable page settings. Every field has a default, so partial JSON is fine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Milliseconds between characters of the hero line.
    pub hero_interval_ms: u32,

    /// Milliseconds between characters of each explanation card.
    pub card_interval_ms: u32,

    /// Share of a card that must be on screen before its text starts.
    pub visibility_threshold: f64,

    /// Image shown at the top of the hero.
    pub logo_src: String,

    /// Target of the hero's repository button.
    pub repository_url: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            hero_interval_ms: DEFAULT_HERO_INTERVAL_MS,
            card_interval_ms: DEFAULT_CARD_INTERVAL_MS,
            visibility_threshold: DEFAULT_VISIBILITY_THRESHOLD,
            logo_src: DEFAULT_LOGO_SRC.to_string(),
            repository_url: DEFAULT_REPOSITORY_URL.to_string(),
        }
    }
}

impl PageConfig {
    /// Parse and validate. An empty or whitespace-only string yields the defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: PageConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hero_interval_ms == 0 {
            return Err(ConfigError::InvalidReveal {
                field: "hero_interval_ms",
                source: RevealError::ZeroInterval,
            });
        }
        if self.card_interval_ms == 0 {
            return Err(ConfigError::InvalidReveal {
                field: "card_interval_ms",
                source: RevealError::ZeroInterval,
            });
        }
        validate_threshold(self.visibility_threshold).map_err(|source| {
            ConfigError::InvalidReveal {
                field: "visibility_threshold",
                source,
            }
        })?;
        if self.logo_src.trim().is_empty() {
            return Err(ConfigError::Empty { field: "logo_src" });
        }
        if self.repository_url.trim().is_empty() {
            return Err(ConfigError::Empty {
                field: "repository_url",
            });
        }
        Ok(())
    }
}
