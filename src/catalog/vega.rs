//! Built-in Vega chronology.

use crate::types::{Scene, StoryArc};

pub(super) fn scenes() -> Vec<Scene> {
    vec![
        Scene::new(
            "V-00",
            "Cold Ignition",
            StoryArc::Singularity,
            5,
            "A star collapses somewhere far away and a signal starts its long trip.",
        )
        .with_status(100)
        .with_tags(["signal", "prologue"]),
        Scene::new(
            "V-01",
            "Lyra Station",
            StoryArc::Origin,
            15,
            "Vega wakes aboard a listening post with no memory of the crew.",
        )
        .with_status(95)
        .with_tags(["station", "amnesia"])
        .with_date("Cycle 1"),
        Scene::new(
            "V-12",
            "Static Choir",
            StoryArc::Awakening,
            30,
            "The antennas pick up voices singing in a pattern that repeats every hour.",
        )
        .with_status(80)
        .with_dependencies(["V-01"])
        .with_tags(["signal", "voices"]),
        Scene::new(
            "V-2a",
            "Empty Bunks",
            StoryArc::Echo,
            30,
            "Personal logs from the missing crew, each one ending mid-sentence.",
        )
        .with_status(75)
        .with_dependencies(["V-01"])
        .with_tags(["logs", "crew"]),
        Scene::new(
            "V-3c",
            "Triangulation",
            StoryArc::Convergence,
            55,
            "The signal, the logs and the station clock all point at the same coordinates.",
        )
        .with_status(50)
        .with_dependencies(["V-12", "V-2a"])
        .with_tags(["coordinates", "signal"])
        .with_date("Cycle 9"),
        Scene::new(
            "V-47",
            "Occultation",
            StoryArc::Eclipse,
            80,
            "A dark body passes in front of the star and the choir goes silent.",
        )
        .with_status(25)
        .with_dependencies(["V-3c"])
        .with_tags(["silence", "eclipse"]),
        Scene::new(
            "V-Ω",
            "Event Horizon",
            StoryArc::Singularity,
            100,
            "Vega answers the signal and the station falls toward its source.",
        )
        .with_dependencies(["V-47", "V-00"])
        .with_tags(["finale", "signal", "horizon"])
        .with_date("Cycle ∞"),
    ]
}
