//! Viewer configuration.
//!
//! Configuration is plain serde data. It can be written as JSON, or as TOML
//! when the `toml` feature is enabled.
//!
//! # Example
//!
//! ```rust
//! use chronoscope::{Character, Config};
//!
//! let json = r#"{
//!     "initial": { "character": "vega", "sort_ascending": false },
//!     "reveal_step": 5
//! }"#;
//! let config = Config::from_json(json).unwrap();
//!
//! assert_eq!(config.initial.character, Character::Vega);
//! assert_eq!(config.reveal_step, 5);
//! assert!(config.color);
//! ```
use crate::error::{ChronoscopeError, Result};
use crate::query::QueryParameters;
use crate::types::MAX_PCT;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Query parameters the viewer starts with.
    #[serde(default)]
    pub initial: QueryParameters,

    /// Increment of the reveal threshold control (1-100, default: 10).
    #[serde(default = "Config::default_reveal_step")]
    pub reveal_step: u8,

    /// Emit ANSI colors from the character palette when rendering.
    #[serde(default = "Config::default_color")]
    pub color: bool,
}

impl Config {
    const fn default_reveal_step() -> u8 {
        10
    }

    const fn default_color() -> bool {
        true
    }

    pub fn with_initial(mut self, params: QueryParameters) -> Self {
        self.initial = params;
        self
    }

    pub fn with_reveal_step(mut self, step: u8) -> Self {
        assert!(
            (1..=MAX_PCT).contains(&step),
            "Reveal step must be between 1 and 100"
        );
        self.reveal_step = step;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_PCT).contains(&self.reveal_step) {
            return Err(ChronoscopeError::InvalidInput(format!(
                "Reveal step must be between 1 and {}, got: {}",
                MAX_PCT, self.reveal_step
            )));
        }

        if !(0..=i32::from(MAX_PCT)).contains(&self.initial.min_reveal) {
            return Err(ChronoscopeError::InvalidInput(format!(
                "Initial minimum reveal out of range [0, {}]: {}",
                MAX_PCT, self.initial.min_reveal
            )));
        }

        Ok(())
    }

    /// Load configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load configuration from TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load configuration from a file, choosing the format by extension.
    ///
    /// `.toml` files need the `toml` feature; anything else is read as JSON.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        log::debug!("Loading configuration from {}", path.display());

        if is_toml {
            #[cfg(feature = "toml")]
            return Self::from_toml(&contents);
            #[cfg(not(feature = "toml"))]
            return Err(ChronoscopeError::InvalidInput(format!(
                "{} is a TOML file but the `toml` feature is disabled",
                path.display()
            )));
        }

        Self::from_json(&contents)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial: QueryParameters::default(),
            reveal_step: Self::default_reveal_step(),
            color: Self::default_color(),
        }
    }
}
