//! Plain-text timeline rendering.
//!
//! Produces the hero block, lore strip, a controls summary and one card per
//! derived scene, stacked along a vertical spine. An empty derived list renders
//! an explicit "no scenes match" line instead of cards.

use crate::catalog::Catalog;
use crate::query::QueryParameters;
use crate::theme::{Rgb, Theme};
use crate::types::Scene;
use crate::view::{TimelineView, ViewSummary};

const INDENT: &str = "   ";
const SPINE: &str = "┃";
const NODE: &str = "●";
const BAR_CELLS: u8 = 10;

pub const EMPTY_STATE: &str = "No scenes match the current filters.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    pub color: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, color: Rgb, text: &str) -> String {
        if self.color {
            color.paint(text)
        } else {
            text.to_string()
        }
    }

    /// Render everything the view currently shows.
    pub fn render_view(&self, view: &TimelineView<'_>) -> String {
        let scenes = view.derived();
        let summary = view.summary();
        self.render(view.theme(), view.params(), &summary, view.catalog(), &scenes)
    }

    pub fn render(
        &self,
        theme: &Theme,
        params: &QueryParameters,
        summary: &ViewSummary,
        catalog: &Catalog,
        scenes: &[&Scene],
    ) -> String {
        let mut lines = self.hero(theme);
        lines.push(String::new());
        lines.push(self.controls(theme, params, summary));
        lines.push(String::new());

        if scenes.is_empty() {
            lines.push(format!("{INDENT}{}", self.paint(theme.muted, EMPTY_STATE)));
        } else {
            let spine = self.paint(theme.muted, SPINE);
            for scene in scenes {
                lines.push(format!("{INDENT}{spine}"));
                lines.extend(self.card(theme, catalog, scene));
            }
            lines.push(format!("{INDENT}{spine}"));
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    fn hero(&self, theme: &Theme) -> Vec<String> {
        let title = format!(
            "{}  {} CHRONOLOGY",
            theme.icon,
            theme.character.name().to_uppercase()
        );
        let lore = theme.lore.join(" · ");

        vec![
            self.paint(theme.accent, &title),
            format!("{INDENT}{}", self.paint(theme.glow, theme.tagline)),
            String::new(),
            format!("{INDENT}{}", self.paint(theme.muted, &lore)),
        ]
    }

    fn controls(&self, theme: &Theme, params: &QueryParameters, summary: &ViewSummary) -> String {
        let search = match params.search_text.trim() {
            "" => "—".to_string(),
            text => format!("\"{text}\""),
        };
        let direction = if params.sort_ascending {
            "ascending"
        } else {
            "descending"
        };
        let counts = format!("showing {} of {}", summary.shown, summary.total);
        let filters = match params.active_filter_count() {
            0 => "no filters".to_string(),
            1 => "1 filter".to_string(),
            n => format!("{n} filters"),
        };

        format!(
            "{INDENT}search: {search}  arc: {}  reveal ≥ {}%  sort: {direction}   {} ({filters})",
            params.arc_filter,
            params.min_reveal,
            self.paint(theme.accent, &counts)
        )
    }

    fn card(&self, theme: &Theme, catalog: &Catalog, scene: &Scene) -> Vec<String> {
        let spine = self.paint(theme.muted, SPINE);
        let node = self.paint(theme.accent, NODE);
        let mut lines = Vec::with_capacity(5);

        let mut header = format!(
            "{INDENT}{node}  {}  {}  [{}] {}%",
            self.paint(theme.glow, &scene.id),
            scene.title,
            scene.arc,
            scene.reveal_pct
        );
        if let Some(date) = &scene.date {
            header.push_str(&format!("  · {date}"));
        }
        lines.push(header);
        lines.push(format!("{INDENT}{spine}  {}", scene.summary));

        let mut details = Vec::new();
        if let Some(status) = scene.status_pct {
            details.push(format!("status {} {status}%", progress_bar(status)));
        }
        if !scene.tags.is_empty() {
            details.push(format!("tags: {}", scene.tags.join(", ")));
        }
        if !details.is_empty() {
            lines.push(format!("{INDENT}{spine}  {}", details.join("    ")));
        }

        let deps = catalog.dependencies_of(scene);
        if !deps.is_empty() {
            let listed: Vec<String> = deps
                .into_iter()
                .map(|(id, resolved)| match resolved {
                    Some(_) => id.to_string(),
                    None => format!("{id}?"),
                })
                .collect();
            lines.push(format!("{INDENT}{spine}  after: {}", listed.join(", ")));
        }

        let unlocks: Vec<&str> = catalog
            .dependents_of(&scene.id)
            .into_iter()
            .map(|dependent| dependent.id.as_str())
            .collect();
        if !unlocks.is_empty() {
            lines.push(format!("{INDENT}{spine}  unlocks: {}", unlocks.join(", ")));
        }

        lines
    }
}

fn progress_bar(pct: u8) -> String {
    let filled = pct.min(100) / BAR_CELLS;
    let empty = BAR_CELLS - filled;
    format!(
        "{}{}",
        "█".repeat(usize::from(filled)),
        "░".repeat(usize::from(empty))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Character, StoryArc};

    fn plain(view: &TimelineView<'_>) -> String {
        Renderer::new(false).render_view(view)
    }

    #[test]
    fn test_render_lists_cards_in_derived_order() {
        let mut view = TimelineView::builtin();
        view.set_search("cipher");
        let out = plain(&view);

        let s90 = out.find("S90").unwrap();
        let finale = out.find("0717").unwrap();
        assert!(s90 < finale);
        assert!(out.contains("ICARUS CHRONOLOGY"));
        assert!(out.contains("showing 2 of 7"));
        assert!(out.contains("(1 filter)"));
        assert!(out.contains("search: \"cipher\""));
        assert!(out.contains("after: S50, S71x"));
        assert!(out.contains("unlocks: 0717"));
        assert!(!out.contains(EMPTY_STATE));
    }

    #[test]
    fn test_render_empty_state() {
        let mut view = TimelineView::builtin();
        view.select_character(Character::Vega);
        view.set_search("cipher");
        let out = plain(&view);

        assert!(out.contains("VEGA CHRONOLOGY"));
        assert!(out.contains(EMPTY_STATE));
        assert!(out.contains("showing 0 of 7"));
        assert!(out.contains("(1 filter)"));
        assert!(!out.contains(NODE));
    }

    #[test]
    fn test_render_without_color_has_no_escapes() {
        let out = plain(&TimelineView::builtin());
        assert!(!out.contains('\x1b'));
        assert!(out.contains("showing 7 of 7"));
        assert!(out.contains("(no filters)"));
        assert!(out.contains("unlocks: S71x, S90"));

        let colored = Renderer::new(true).render_view(&TimelineView::builtin());
        assert!(colored.contains('\x1b'));
    }

    #[test]
    fn test_render_marks_unresolved_dependencies() {
        let catalog = Catalog::new(
            Character::Icarus,
            vec![Scene::new("A", "Alpha", StoryArc::Echo, 10, "x").with_dependencies(["ghost"])],
        )
        .unwrap();
        let scenes: Vec<&Scene> = catalog.iter().collect();
        let params = QueryParameters::default();
        let summary = ViewSummary {
            character: Character::Icarus,
            shown: 1,
            total: 1,
        };

        let out = Renderer::new(false).render(
            Theme::for_character(Character::Icarus),
            &params,
            &summary,
            &catalog,
            &scenes,
        );
        assert!(out.contains("after: ghost?"));
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0), "░░░░░░░░░░");
        assert_eq!(progress_bar(55), "█████░░░░░");
        assert_eq!(progress_bar(100), "██████████");
        assert_eq!(progress_bar(255), "██████████");
    }
}
