//! Builder for timeline views.
//!
//! Collects configuration, catalogs and initial query overrides, validates
//! them, and produces a [`TimelineView`].

use crate::catalog::CatalogSet;
use crate::config::Config;
use crate::error::Result;
use crate::types::Character;
use crate::view::TimelineView;
use std::path::Path;

#[derive(Debug)]
pub struct ViewBuilder<'a> {
    catalogs: CatalogSet<'a>,
    config: Config,
    character: Option<Character>,
}

impl ViewBuilder<'static> {
    /// Create a new builder over the built-in catalogs with default configuration.
    pub fn new() -> Self {
        Self {
            catalogs: CatalogSet::builtin(),
            config: Config::default(),
            character: None,
        }
    }
}

impl<'a> ViewBuilder<'a> {
    /// Use a different pair of catalogs.
    pub fn catalogs<'b>(self, catalogs: CatalogSet<'b>) -> ViewBuilder<'b> {
        ViewBuilder {
            catalogs,
            config: self.config,
            character: self.character,
        }
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Read configuration from a JSON or TOML file.
    pub fn config_path<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        self.config = Config::from_path(path)?;
        Ok(self)
    }

    /// Start on `character` regardless of the configured initial character.
    pub fn character(mut self, character: Character) -> Self {
        self.character = Some(character);
        self
    }

    pub fn build(self) -> Result<TimelineView<'a>> {
        self.config.validate()?;

        let mut view = TimelineView::new(self.catalogs, &self.config);
        if let Some(character) = self.character {
            view.select_character(character);
        }
        Ok(view)
    }
}

impl Default for ViewBuilder<'static> {
    fn default() -> Self {
        Self::new()
    }
}
