//! Built-in Icarus chronology.

use crate::types::{Scene, StoryArc};

pub(super) fn scenes() -> Vec<Scene> {
    vec![
        Scene::new(
            "S00x",
            "Wax and Feather",
            StoryArc::Origin,
            10,
            "A workshop above the sea, two pairs of wings drying in the salt wind.",
        )
        .with_status(100)
        .with_tags(["prologue", "wings", "workshop"])
        .with_date("Year 0"),
        Scene::new(
            "S01",
            "First Ascent",
            StoryArc::Awakening,
            20,
            "The first climb over the harbor. The warning about the sun is given and ignored.",
        )
        .with_status(90)
        .with_dependencies(["S00x"])
        .with_tags(["flight", "warning"])
        .with_date("Year 0, dawn"),
        Scene::new(
            "S23f",
            "Melting Point",
            StoryArc::Descent,
            40,
            "Feathers loosen one by one. The fall is slower than anyone remembers it.",
        )
        .with_status(70)
        .with_dependencies(["S01"])
        .with_tags(["fall", "sun", "wax"]),
        Scene::new(
            "S50",
            "Salt Archive",
            StoryArc::Echo,
            60,
            "Fishermen keep a ledger of everything that washed ashore that morning.",
        )
        .with_status(55)
        .with_dependencies(["S23f"])
        .with_tags(["archive", "sea"])
        .with_date("Year 3"),
        Scene::new(
            "S71x",
            "Two Reflections",
            StoryArc::Duality,
            75,
            "A second Icarus appears in the tide pools, older and unburned.",
        )
        .with_status(40)
        .with_dependencies(["S50"])
        .with_tags(["mirror", "doppelganger"]),
        Scene::new(
            "S90",
            "The Ledger Key",
            StoryArc::Duality,
            90,
            "The archive entries line up into a message only one of the two can read.",
        )
        .with_status(20)
        .with_dependencies(["S50", "S71x"])
        .with_tags(["cipher", "archive", "reveal"]),
        Scene::new(
            "0717",
            "Noon, Seventh Month",
            StoryArc::Singularity,
            100,
            "The date hidden in the message. Both reflections fly toward it at once.",
        )
        .with_dependencies(["S90"])
        .with_tags(["cipher", "finale", "sun"])
        .with_date("07/17"),
    ]
}
