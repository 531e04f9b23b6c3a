//! Scene catalogs, one per character.
//!
//! The built-in catalogs are constructed once on first access and live for the
//! rest of the process. Nothing in the crate mutates a catalog after
//! construction; queries borrow scenes out of it.

mod icarus;
mod vega;

use crate::error::{ChronoscopeError, Result};
use crate::types::{Character, Scene};
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use std::path::Path;

static ICARUS: Lazy<Catalog> = Lazy::new(|| Catalog::builtin(Character::Icarus, icarus::scenes()));
static VEGA: Lazy<Catalog> = Lazy::new(|| Catalog::builtin(Character::Vega, vega::scenes()));

/// Ordered, immutable collection of scenes belonging to one character.
#[derive(Debug, Clone)]
pub struct Catalog {
    character: Character,
    scenes: Vec<Scene>,
    index: FxHashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from externally supplied scenes.
    ///
    /// # Errors
    ///
    /// Returns an error if any scene fails [`Scene::validate`] or if two
    /// scenes share an id.
    pub fn new(character: Character, scenes: Vec<Scene>) -> Result<Self> {
        let mut index = FxHashMap::default();
        index.reserve(scenes.len());

        for (pos, scene) in scenes.iter().enumerate() {
            scene.validate()?;
            if index.insert(scene.id.clone(), pos).is_some() {
                return Err(ChronoscopeError::DuplicateSceneId {
                    character,
                    id: scene.id.clone(),
                });
            }
        }

        let catalog = Self {
            character,
            scenes,
            index,
        };
        catalog.warn_unresolved_dependencies();
        Ok(catalog)
    }

    fn builtin(character: Character, scenes: Vec<Scene>) -> Self {
        let index: FxHashMap<String, usize> = scenes
            .iter()
            .enumerate()
            .map(|(pos, scene)| (scene.id.clone(), pos))
            .collect();
        debug_assert_eq!(index.len(), scenes.len(), "built-in scene ids must be unique");

        Self {
            character,
            scenes,
            index,
        }
    }

    /// Load a catalog from a JSON array of scenes.
    pub fn from_json(character: Character, json: &str) -> Result<Self> {
        let scenes: Vec<Scene> = serde_json::from_str(json)?;
        Self::new(character, scenes)
    }

    /// Load a catalog from a JSON file on disk.
    pub fn from_path<P: AsRef<Path>>(character: Character, path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading {} catalog from {}", character, path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(character, &json)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.scenes)?)
    }

    pub fn character(&self) -> Character {
        self.character
    }

    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Scene> {
        self.scenes.iter()
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Scene> {
        self.index.get(id).map(|&pos| &self.scenes[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Highest reveal percentage in the catalog, `None` when empty.
    pub fn max_reveal(&self) -> Option<u8> {
        self.scenes.iter().map(|scene| scene.reveal_pct).max()
    }

    /// Resolve a scene's dependency ids against this catalog, in declared
    /// order. Unknown ids resolve to `None`.
    pub fn dependencies_of<'a>(&'a self, scene: &'a Scene) -> Vec<(&'a str, Option<&'a Scene>)> {
        scene
            .dependencies
            .iter()
            .map(|id| (id.as_str(), self.get(id)))
            .collect()
    }

    /// Scenes that list `id` among their dependencies, in catalog order.
    pub fn dependents_of(&self, id: &str) -> Vec<&Scene> {
        self.scenes
            .iter()
            .filter(|scene| scene.dependencies.iter().any(|dep| dep == id))
            .collect()
    }

    fn warn_unresolved_dependencies(&self) {
        for scene in &self.scenes {
            for dep in &scene.dependencies {
                if !self.contains(dep) {
                    log::warn!(
                        "Scene '{}' in the {} catalog depends on unknown scene '{}'",
                        scene.id,
                        self.character,
                        dep
                    );
                }
            }
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Scene;
    type IntoIter = std::slice::Iter<'a, Scene>;

    fn into_iter(self) -> Self::IntoIter {
        self.scenes.iter()
    }
}

/// The built-in Icarus catalog.
pub fn icarus() -> &'static Catalog {
    &ICARUS
}

/// The built-in Vega catalog.
pub fn vega() -> &'static Catalog {
    &VEGA
}

/// The built-in catalog for `character`.
pub fn builtin(character: Character) -> &'static Catalog {
    match character {
        Character::Icarus => icarus(),
        Character::Vega => vega(),
    }
}

/// One catalog per character. Selecting a character swaps the whole catalog.
#[derive(Debug, Clone, Copy)]
pub struct CatalogSet<'a> {
    icarus: &'a Catalog,
    vega: &'a Catalog,
}

impl<'a> CatalogSet<'a> {
    /// Pair two catalogs.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if a catalog is supplied for the wrong character.
    pub fn new(icarus: &'a Catalog, vega: &'a Catalog) -> Result<Self> {
        for (expected, catalog) in [(Character::Icarus, icarus), (Character::Vega, vega)] {
            if catalog.character() != expected {
                return Err(ChronoscopeError::InvalidInput(format!(
                    "Expected the {} catalog, got the {} catalog",
                    expected,
                    catalog.character()
                )));
            }
        }
        Ok(Self { icarus, vega })
    }

    pub fn get(&self, character: Character) -> &'a Catalog {
        match character {
            Character::Icarus => self.icarus,
            Character::Vega => self.vega,
        }
    }
}

impl CatalogSet<'static> {
    pub fn builtin() -> Self {
        Self {
            icarus: icarus(),
            vega: vega(),
        }
    }
}

impl Default for CatalogSet<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StoryArc;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_catalogs_are_valid() {
        for character in Character::ALL {
            let catalog = builtin(character);
            assert_eq!(catalog.character(), character);
            assert_eq!(catalog.len(), 7);

            let rebuilt = Catalog::new(character, catalog.scenes().to_vec()).unwrap();
            assert_eq!(rebuilt.scenes(), catalog.scenes());

            for scene in catalog {
                for (dep, resolved) in catalog.dependencies_of(scene) {
                    assert!(resolved.is_some(), "{} -> {} is dangling", scene.id, dep);
                }
            }
        }
    }

    #[test]
    fn test_builtin_catalogs_do_not_share_ids() {
        let icarus_ids: HashSet<&str> = icarus().iter().map(|s| s.id.as_str()).collect();
        assert!(vega().iter().all(|s| !icarus_ids.contains(s.id.as_str())));
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = icarus();
        assert_eq!(catalog.get("S90").unwrap().title, "The Ledger Key");
        assert!(catalog.get("V-Ω").is_none());
        assert!(vega().contains("V-Ω"));
        assert_eq!(catalog.max_reveal(), Some(100));
    }

    #[test]
    fn test_dependents_of() {
        let dependents: Vec<&str> = icarus()
            .dependents_of("S50")
            .into_iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(dependents, vec!["S71x", "S90"]);
        assert!(icarus().dependents_of("0717").is_empty());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let scenes = vec![
            Scene::new("A", "one", StoryArc::Origin, 10, ""),
            Scene::new("A", "two", StoryArc::Echo, 20, ""),
        ];
        let err = Catalog::new(Character::Vega, scenes).unwrap_err();
        assert!(matches!(
            err,
            ChronoscopeError::DuplicateSceneId { character: Character::Vega, ref id } if id == "A"
        ));
    }

    #[test]
    fn test_dangling_dependency_is_not_an_error() {
        let scenes =
            vec![Scene::new("A", "one", StoryArc::Origin, 10, "").with_dependencies(["ghost"])];
        let catalog = Catalog::new(Character::Icarus, scenes).unwrap();
        let scene = catalog.get("A").unwrap();
        assert_eq!(catalog.dependencies_of(scene), vec![("ghost", None)]);
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"id": "A", "title": "Alpha", "arc": "Echo", "reveal_pct": 40, "summary": "first"},
            {"id": "B", "title": "Beta", "arc": "Duality", "reveal_pct": 10, "summary": "second",
             "tags": ["x", "y"], "status_pct": 50}
        ]"#;
        let catalog = Catalog::from_json(Character::Vega, json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.scenes()[1].tags.len(), 2);

        let bad_arc = r#"[{"id": "A", "title": "A", "arc": "Prologue", "reveal_pct": 1, "summary": ""}]"#;
        assert!(matches!(
            Catalog::from_json(Character::Vega, bad_arc),
            Err(ChronoscopeError::Json(_))
        ));

        let bad_pct = r#"[{"id": "A", "title": "A", "arc": "Echo", "reveal_pct": 120, "summary": ""}]"#;
        assert!(matches!(
            Catalog::from_json(Character::Vega, bad_pct),
            Err(ChronoscopeError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_catalog_set_selects_whole_catalog() {
        let set = CatalogSet::builtin();
        assert!(std::ptr::eq(set.get(Character::Icarus), icarus()));
        assert!(std::ptr::eq(set.get(Character::Vega), vega()));

        assert!(CatalogSet::new(vega(), icarus()).is_err());
    }
}
