//! Presentation-side state for the timeline.
//!
//! [`TimelineView`] owns the single current [`QueryParameters`] value. Every
//! user action builds a new value and replaces the old one; nothing edits the
//! parameters in place. The derived list is memoized by parameter equality, so
//! asking for it repeatedly without an intervening action does not re-run the
//! query.
//!
//! ```rust
//! use chronoscope::{Character, TimelineView};
//!
//! let mut view = TimelineView::builtin();
//! view.set_search("cipher");
//! assert_eq!(view.derived().len(), 2);
//!
//! // Switching character keeps the search, which matches nothing for Vega.
//! view.select_character(Character::Vega);
//! assert!(view.derived().is_empty());
//! assert_eq!(view.params().search_text, "cipher");
//! ```

use crate::catalog::{Catalog, CatalogSet};
use crate::config::Config;
use crate::query::{QueryParameters, derive};
use crate::theme::Theme;
use crate::types::{ArcFilter, Character, MAX_PCT, Scene};
use parking_lot::Mutex;
use serde::Serialize;

/// Counts shown alongside the derived list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewSummary {
    pub character: Character,
    pub shown: usize,
    pub total: usize,
}

impl ViewSummary {
    pub fn is_empty(&self) -> bool {
        self.shown == 0
    }
}

struct Memo<'a> {
    params: QueryParameters,
    scenes: Vec<&'a Scene>,
}

pub struct TimelineView<'a> {
    catalogs: CatalogSet<'a>,
    params: QueryParameters,
    reveal_step: u8,
    memo: Mutex<Option<Memo<'a>>>,
}

impl TimelineView<'static> {
    /// View over the built-in catalogs with default configuration.
    pub fn builtin() -> Self {
        Self::new(CatalogSet::builtin(), &Config::default())
    }
}

impl<'a> TimelineView<'a> {
    pub fn new(catalogs: CatalogSet<'a>, config: &Config) -> Self {
        Self {
            catalogs,
            params: config.initial.clone(),
            reveal_step: config.reveal_step.clamp(1, MAX_PCT),
            memo: Mutex::new(None),
        }
    }

    pub fn params(&self) -> &QueryParameters {
        &self.params
    }

    pub fn character(&self) -> Character {
        self.params.character
    }

    /// The catalog the current character selects.
    pub fn catalog(&self) -> &'a Catalog {
        self.catalogs.get(self.params.character)
    }

    pub fn theme(&self) -> &'static Theme {
        Theme::for_character(self.params.character)
    }

    pub fn reveal_step(&self) -> u8 {
        self.reveal_step
    }

    /// Replace the current parameters wholesale.
    pub fn replace(&mut self, params: QueryParameters) {
        if params != self.params {
            log::debug!("Query parameters replaced: {:?} -> {:?}", self.params, params);
        }
        self.params = params;
    }

    fn update(&mut self, f: impl FnOnce(QueryParameters) -> QueryParameters) {
        let next = f(self.params.clone());
        self.replace(next);
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.update(|p| p.with_search(text));
    }

    pub fn select_arc(&mut self, filter: impl Into<ArcFilter>) {
        let filter = filter.into();
        self.update(|p| p.with_arc(filter));
    }

    /// Set the reveal threshold the way the slider control would: clamped to
    /// [0, 100] and snapped down to a multiple of the reveal step. 100 is
    /// always reachable.
    pub fn set_min_reveal(&mut self, value: i32) {
        let snapped = snap_to_step(value, self.reveal_step);
        self.update(|p| p.with_min_reveal(snapped));
    }

    pub fn raise_min_reveal(&mut self) {
        self.set_min_reveal(
            self.params
                .min_reveal
                .saturating_add(i32::from(self.reveal_step)),
        );
    }

    pub fn lower_min_reveal(&mut self) {
        self.set_min_reveal(
            self.params
                .min_reveal
                .saturating_sub(i32::from(self.reveal_step)),
        );
    }

    pub fn toggle_sort(&mut self) {
        self.update(QueryParameters::toggled_sort);
    }

    /// Swap the active catalog. Search, arc, threshold and sort are kept.
    pub fn select_character(&mut self, character: Character) {
        self.update(|p| p.with_character(character));
    }

    pub fn toggle_character(&mut self) {
        let next = self.params.character.other();
        self.select_character(next);
    }

    /// Clear search, arc and threshold. Character and sort direction stay.
    pub fn reset_filters(&mut self) {
        self.update(|p| {
            p.with_search(String::new())
                .with_arc(ArcFilter::All)
                .with_min_reveal(0)
        });
    }

    /// The filtered, sorted scenes for the current parameters.
    pub fn derived(&self) -> Vec<&'a Scene> {
        let mut memo = self.memo.lock();

        if let Some(cached) = memo.as_ref()
            && cached.params == self.params
        {
            return cached.scenes.clone();
        }

        let scenes = derive(self.catalog(), &self.params);
        *memo = Some(Memo {
            params: self.params.clone(),
            scenes: scenes.clone(),
        });
        scenes
    }

    pub fn summary(&self) -> ViewSummary {
        ViewSummary {
            character: self.params.character,
            shown: self.derived().len(),
            total: self.catalog().len(),
        }
    }

    #[cfg(test)]
    fn is_memoized(&self) -> bool {
        self.memo
            .lock()
            .as_ref()
            .is_some_and(|cached| cached.params == self.params)
    }
}

fn snap_to_step(value: i32, step: u8) -> i32 {
    let max = i32::from(MAX_PCT);
    let step = i32::from(step.max(1));
    let value = value.clamp(0, max);
    if value == max {
        max
    } else {
        value - value % step
    }
}

impl std::fmt::Debug for TimelineView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimelineView")
            .field("params", &self.params)
            .field("reveal_step", &self.reveal_step)
            .finish()
    }
}
