//! Cosmetic palette per character.
//!
//! Themes only feed rendering. The query engine never reads them.

use crate::types::Character;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Wrap `text` in a 24-bit ANSI foreground color.
    pub fn paint(&self, text: &str) -> String {
        format!("\x1b[38;2;{};{};{}m{}\x1b[0m", self.0, self.1, self.2, text)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub character: Character,
    pub icon: char,
    pub accent: Rgb,
    pub glow: Rgb,
    pub muted: Rgb,
    pub tagline: &'static str,
    /// Short lines shown in the lore strip under the hero.
    pub lore: &'static [&'static str],
}

const ICARUS: Theme = Theme {
    character: Character::Icarus,
    icon: '☀',
    accent: Rgb(0xf5, 0x9e, 0x0b),
    glow: Rgb(0xfd, 0xe6, 0x8a),
    muted: Rgb(0x92, 0x40, 0x0e),
    tagline: "Every ascent is a countdown.",
    lore: &[
        "Wings of wax and feather",
        "A warning given twice",
        "The sea keeps the record",
    ],
};

const VEGA: Theme = Theme {
    character: Character::Vega,
    icon: '✦',
    accent: Rgb(0x81, 0x8c, 0xf8),
    glow: Rgb(0xc7, 0xd2, 0xfe),
    muted: Rgb(0x31, 0x2e, 0x81),
    tagline: "The signal was always an invitation.",
    lore: &[
        "A station that listens",
        "A crew that stopped writing",
        "A star that answers back",
    ],
};

impl Theme {
    pub fn for_character(character: Character) -> &'static Theme {
        match character {
            Character::Icarus => &ICARUS,
            Character::Vega => &VEGA,
        }
    }
}
