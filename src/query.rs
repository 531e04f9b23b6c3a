//! Scene query engine.
//!
//! [`derive`] filters a catalog by arc, free-text search and minimum reveal
//! percentage, then stably sorts by reveal percentage. It is a pure function of
//! its inputs: it never mutates the catalog and always returns the same
//! sequence for the same arguments.
//!
//! ```rust
//! use chronoscope::{catalog, derive, QueryParameters, StoryArc};
//!
//! let params = QueryParameters::default().with_arc(StoryArc::Duality);
//! let ids: Vec<&str> = derive(catalog::icarus(), &params)
//!     .iter()
//!     .map(|scene| scene.id.as_str())
//!     .collect();
//!
//! assert_eq!(ids, ["S71x", "S90"]);
//! ```

use crate::catalog::{Catalog, CatalogSet};
use crate::types::{ArcFilter, Character, Scene};
use serde::{Deserialize, Serialize};

/// Inputs to [`derive`].
///
/// Values are replaced rather than edited: every `with_*` method consumes the
/// parameters and returns a new value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QueryParameters {
    /// Selects the active catalog. [`derive`] itself filters whichever
    /// catalog it is handed; [`derive_from`] uses this to pick one.
    pub character: Character,
    /// Case-insensitive substring filter. Surrounding whitespace is ignored.
    pub search_text: String,
    pub arc_filter: ArcFilter,
    /// Inclusive lower bound on `reveal_pct`. Negative values filter nothing.
    pub min_reveal: i32,
    pub sort_ascending: bool,
}

impl Default for QueryParameters {
    fn default() -> Self {
        Self {
            character: Character::default(),
            search_text: String::new(),
            arc_filter: ArcFilter::All,
            min_reveal: 0,
            sort_ascending: true,
        }
    }
}

impl QueryParameters {
    pub fn with_character(mut self, character: Character) -> Self {
        self.character = character;
        self
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_arc(mut self, filter: impl Into<ArcFilter>) -> Self {
        self.arc_filter = filter.into();
        self
    }

    pub fn with_min_reveal(mut self, min_reveal: i32) -> Self {
        if min_reveal < 0 {
            log::debug!("Minimum reveal {} is below zero; treating as 0", min_reveal);
        }
        self.min_reveal = min_reveal.max(0);
        self
    }

    pub fn with_sort_ascending(mut self, ascending: bool) -> Self {
        self.sort_ascending = ascending;
        self
    }

    /// Flip the sort direction.
    pub fn toggled_sort(self) -> Self {
        let ascending = !self.sort_ascending;
        self.with_sort_ascending(ascending)
    }

    /// Lowercased, trimmed search text, or `None` when the search is blank.
    pub fn search_needle(&self) -> Option<String> {
        let trimmed = self.search_text.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
    }

    /// Number of filters that can exclude scenes (arc, search, reveal).
    pub fn active_filter_count(&self) -> usize {
        [
            self.arc_filter != ArcFilter::All,
            self.search_needle().is_some(),
            self.min_reveal > 0,
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }
}

pub fn matches_arc(scene: &Scene, filter: &ArcFilter) -> bool {
    filter.matches(scene.arc)
}

/// `needle` must already be trimmed and lowercased.
pub fn matches_search(scene: &Scene, needle: &str) -> bool {
    scene.search_haystack().contains(needle)
}

pub fn meets_reveal(scene: &Scene, min_reveal: i32) -> bool {
    i32::from(scene.reveal_pct) >= min_reveal
}

/// Whether `scene` passes every filter in `params`.
pub fn matches(scene: &Scene, params: &QueryParameters) -> bool {
    let needle = params.search_needle();
    matches_arc(scene, &params.arc_filter)
        && needle
            .as_deref()
            .is_none_or(|needle| matches_search(scene, needle))
        && meets_reveal(scene, params.min_reveal)
}

/// Filter and sort `catalog` according to `params`.
///
/// Filters apply in order (arc, search, minimum reveal) and the survivors are
/// stably sorted by `reveal_pct` in the requested direction. Scenes with equal
/// reveal percentages keep their catalog order in both directions. An empty
/// result means nothing matched.
pub fn derive<'a>(catalog: &'a Catalog, params: &QueryParameters) -> Vec<&'a Scene> {
    let needle = params.search_needle();

    let mut scenes: Vec<&'a Scene> = catalog
        .iter()
        .filter(|scene| matches_arc(scene, &params.arc_filter))
        .filter(|scene| {
            needle
                .as_deref()
                .is_none_or(|needle| matches_search(scene, needle))
        })
        .filter(|scene| meets_reveal(scene, params.min_reveal))
        .collect();

    if params.sort_ascending {
        scenes.sort_by(|a, b| a.reveal_pct.cmp(&b.reveal_pct));
    } else {
        scenes.sort_by(|a, b| b.reveal_pct.cmp(&a.reveal_pct));
    }

    log::trace!(
        "Derived {} of {} {} scenes (arc={}, search={:?}, min_reveal={}, ascending={})",
        scenes.len(),
        catalog.len(),
        catalog.character(),
        params.arc_filter,
        params.search_text,
        params.min_reveal,
        params.sort_ascending
    );

    scenes
}

/// [`derive`] against the catalog `params.character` selects from `catalogs`.
pub fn derive_from<'a>(catalogs: &CatalogSet<'a>, params: &QueryParameters) -> Vec<&'a Scene> {
    derive(catalogs.get(params.character), params)
}
