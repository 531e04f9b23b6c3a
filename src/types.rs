//! Core record types for scene chronologies.
//!
//! Scenes are plain serializable values. The arc and character sets are closed
//! enumerations; parsing a label outside them is an error, except through
//! [`ArcFilter::from_label`], which turns unknown labels into a filter that
//! matches nothing.
use crate::error::{ChronoscopeError, Result};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// Highest value a reveal or status percentage may take.
pub const MAX_PCT: u8 = 100;

/// Narrative phase a scene belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StoryArc {
    Origin,
    Awakening,
    Descent,
    Fracture,
    Echo,
    Convergence,
    Duality,
    Eclipse,
    Singularity,
}

impl StoryArc {
    /// Every arc, in narrative order.
    pub const ALL: [StoryArc; 9] = [
        StoryArc::Origin,
        StoryArc::Awakening,
        StoryArc::Descent,
        StoryArc::Fracture,
        StoryArc::Echo,
        StoryArc::Convergence,
        StoryArc::Duality,
        StoryArc::Eclipse,
        StoryArc::Singularity,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StoryArc::Origin => "Origin",
            StoryArc::Awakening => "Awakening",
            StoryArc::Descent => "Descent",
            StoryArc::Fracture => "Fracture",
            StoryArc::Echo => "Echo",
            StoryArc::Convergence => "Convergence",
            StoryArc::Duality => "Duality",
            StoryArc::Eclipse => "Eclipse",
            StoryArc::Singularity => "Singularity",
        }
    }
}

impl fmt::Display for StoryArc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StoryArc {
    type Err = ChronoscopeError;

    /// Exact, case-sensitive match against the arc labels.
    fn from_str(s: &str) -> Result<Self> {
        StoryArc::ALL
            .iter()
            .copied()
            .find(|arc| arc.label() == s)
            .ok_or_else(|| ChronoscopeError::UnknownArc(s.to_string()))
    }
}

/// The two characters whose chronologies can be viewed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Character {
    #[default]
    Icarus,
    Vega,
}

impl Character {
    pub const ALL: [Character; 2] = [Character::Icarus, Character::Vega];

    pub fn name(&self) -> &'static str {
        match self {
            Character::Icarus => "Icarus",
            Character::Vega => "Vega",
        }
    }

    /// The character a two-state toggle switches to.
    pub fn other(&self) -> Character {
        match self {
            Character::Icarus => Character::Vega,
            Character::Vega => Character::Icarus,
        }
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Character {
    type Err = ChronoscopeError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        Character::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ChronoscopeError::UnknownCharacter(s.to_string()))
    }
}

/// One narrative unit in a character's chronology.
///
/// # Example
///
/// ```rust
/// use chronoscope::{Scene, StoryArc};
///
/// let scene = Scene::new("S01", "First Light", StoryArc::Origin, 20, "A spark in the dark.")
///     .with_tags(["memory", "light"])
///     .with_status(80);
///
/// assert_eq!(scene.reveal_pct, 20);
/// assert!(scene.search_haystack().contains("memory light"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    pub id: String,
    pub title: String,
    pub arc: StoryArc,
    /// Position along the narrative disclosure order, 0..=100.
    pub reveal_pct: u8,
    /// Informational completion indicator, never used by queries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_pct: Option<u8>,
    pub summary: String,
    /// Ids of scenes this one narratively depends on. Not checked for
    /// existence or cycles.
    #[serde(default, skip_serializing_if = "SmallVec::is_empty")]
    pub dependencies: SmallVec<[String; 2]>,
    #[serde(default, skip_serializing_if = "SmallVec::is_empty")]
    pub tags: SmallVec<[String; 4]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl Scene {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        arc: StoryArc,
        reveal_pct: u8,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            arc,
            reveal_pct,
            status_pct: None,
            summary: summary.into(),
            dependencies: SmallVec::new(),
            tags: SmallVec::new(),
            date: None,
        }
    }

    pub fn with_status(mut self, status_pct: u8) -> Self {
        self.status_pct = Some(status_pct);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Lowercased text the free-text search runs against: id, title, summary,
    /// arc and the space-joined tags, separated by single spaces.
    ///
    /// Joining tags with a plain space means a search term can straddle two
    /// adjacent tags.
    pub fn search_haystack(&self) -> String {
        let tags = self.tags.join(" ");
        format!(
            "{} {} {} {} {}",
            self.id,
            self.title,
            self.summary,
            self.arc.label(),
            tags
        )
        .to_lowercase()
    }

    /// Check the record on its own: non-empty id, percentages within range.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(ChronoscopeError::InvalidInput(
                "Scene id cannot be empty".into(),
            ));
        }

        if self.reveal_pct > MAX_PCT {
            return Err(ChronoscopeError::InvalidInput(format!(
                "Scene '{}' reveal percentage out of range [0, {}]: {}",
                self.id, MAX_PCT, self.reveal_pct
            )));
        }

        if let Some(status) = self.status_pct
            && status > MAX_PCT
        {
            return Err(ChronoscopeError::InvalidInput(format!(
                "Scene '{}' status percentage out of range [0, {}]: {}",
                self.id, MAX_PCT, status
            )));
        }

        Ok(())
    }
}

/// Arc selection for a query: every arc, one arc, or a label outside the
/// enumeration that matches no scene.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ArcFilter {
    #[default]
    All,
    Only(StoryArc),
    Unrecognized(String),
}

impl ArcFilter {
    pub const ALL_LABEL: &'static str = "All";

    /// Lenient parse used for user-facing selectors. Never fails.
    pub fn from_label(label: &str) -> Self {
        if label == Self::ALL_LABEL {
            return ArcFilter::All;
        }

        match label.parse::<StoryArc>() {
            Ok(arc) => ArcFilter::Only(arc),
            Err(_) => {
                log::debug!("Arc filter '{}' is not a known arc; it will match nothing", label);
                ArcFilter::Unrecognized(label.to_string())
            }
        }
    }

    pub fn matches(&self, arc: StoryArc) -> bool {
        match self {
            ArcFilter::All => true,
            ArcFilter::Only(wanted) => *wanted == arc,
            ArcFilter::Unrecognized(_) => false,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ArcFilter::All => Self::ALL_LABEL,
            ArcFilter::Only(arc) => arc.label(),
            ArcFilter::Unrecognized(label) => label,
        }
    }

    /// Selector options in display order: "All" followed by every arc.
    pub fn options() -> impl Iterator<Item = ArcFilter> {
        std::iter::once(ArcFilter::All).chain(StoryArc::ALL.into_iter().map(ArcFilter::Only))
    }
}

impl From<StoryArc> for ArcFilter {
    fn from(arc: StoryArc) -> Self {
        ArcFilter::Only(arc)
    }
}

impl From<String> for ArcFilter {
    fn from(label: String) -> Self {
        ArcFilter::from_label(&label)
    }
}

impl From<ArcFilter> for String {
    fn from(filter: ArcFilter) -> Self {
        filter.label().to_string()
    }
}

impl fmt::Display for ArcFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arc_labels_round_trip() {
        for arc in StoryArc::ALL {
            assert_eq!(arc.label().parse::<StoryArc>().unwrap(), arc);
        }
    }

    #[test]
    fn test_arc_parse_is_case_sensitive() {
        assert!(matches!(
            "duality".parse::<StoryArc>(),
            Err(ChronoscopeError::UnknownArc(_))
        ));
        assert!(" Duality".parse::<StoryArc>().is_err());
    }

    #[test]
    fn test_character_parse() {
        assert_eq!("vega".parse::<Character>().unwrap(), Character::Vega);
        assert_eq!(" ICARUS ".parse::<Character>().unwrap(), Character::Icarus);
        assert!("daedalus".parse::<Character>().is_err());
        assert_eq!(Character::Icarus.other(), Character::Vega);
        assert_eq!(Character::default(), Character::Icarus);
    }

    #[test]
    fn test_arc_filter_from_label() {
        assert_eq!(ArcFilter::from_label("All"), ArcFilter::All);
        assert_eq!(
            ArcFilter::from_label("Echo"),
            ArcFilter::Only(StoryArc::Echo)
        );
        assert_eq!(
            ArcFilter::from_label("all"),
            ArcFilter::Unrecognized("all".into())
        );
    }

    #[test]
    fn test_arc_filter_matches() {
        assert!(ArcFilter::All.matches(StoryArc::Eclipse));
        assert!(ArcFilter::Only(StoryArc::Eclipse).matches(StoryArc::Eclipse));
        assert!(!ArcFilter::Only(StoryArc::Eclipse).matches(StoryArc::Echo));
        for arc in StoryArc::ALL {
            assert!(!ArcFilter::Unrecognized("Prologue".into()).matches(arc));
        }
    }

    #[test]
    fn test_arc_filter_options() {
        let options: Vec<ArcFilter> = ArcFilter::options().collect();
        assert_eq!(options.len(), 10);
        assert_eq!(options[0], ArcFilter::All);
        assert_eq!(options[9], ArcFilter::Only(StoryArc::Singularity));
    }

    #[test]
    fn test_arc_filter_serde_as_label() {
        let json = serde_json::to_string(&ArcFilter::Only(StoryArc::Duality)).unwrap();
        assert_eq!(json, "\"Duality\"");

        let filter: ArcFilter = serde_json::from_str("\"All\"").unwrap();
        assert_eq!(filter, ArcFilter::All);

        let filter: ArcFilter = serde_json::from_str("\"Prologue\"").unwrap();
        assert_eq!(filter, ArcFilter::Unrecognized("Prologue".into()));
    }

    #[test]
    fn test_search_haystack_contents() {
        let scene = Scene::new("X1", "Glass Tower", StoryArc::Fracture, 30, "Cracks Spread")
            .with_tags(["shard", "mirror"]);

        assert_eq!(
            scene.search_haystack(),
            "x1 glass tower cracks spread fracture shard mirror"
        );
        // Tags are joined with a space, so a term may span two of them.
        assert!(scene.search_haystack().contains("shard mirror"));
    }

    #[test]
    fn test_scene_validate() {
        let ok = Scene::new("A", "A", StoryArc::Origin, 100, "").with_status(0);
        assert!(ok.validate().is_ok());

        let bad_reveal = Scene::new("A", "A", StoryArc::Origin, 101, "");
        assert!(bad_reveal.validate().is_err());

        let bad_status = Scene::new("A", "A", StoryArc::Origin, 10, "").with_status(150);
        assert!(bad_status.validate().is_err());

        let empty_id = Scene::new("  ", "A", StoryArc::Origin, 10, "");
        assert!(empty_id.validate().is_err());
    }

    #[test]
    fn test_scene_serde_skips_empty_optionals() {
        let scene = Scene::new("S01", "First Light", StoryArc::Origin, 20, "spark");
        let json = serde_json::to_value(&scene).unwrap();
        assert_eq!(json["arc"], "Origin");
        assert_eq!(json["reveal_pct"], 20);
        assert!(json.get("tags").is_none());
        assert!(json.get("status_pct").is_none());

        let back: Scene = serde_json::from_value(json).unwrap();
        assert_eq!(back, scene);
    }
}
