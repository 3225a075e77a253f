//! Time-of-day mood derivation.
//!
//! DESIGN
//! ======
//! The mood is a pure projection of wall-clock time. Nothing caches it: each
//! read samples the clock again, so a session that spans a boundary hour picks
//! up the new mood on its next render without any background timer.

#[cfg(test)]
#[path = "mood_test.rs"]
mod mood_test;

use std::fmt;

use time::OffsetDateTime;

/// One of the four contiguous windows of the day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoodName {
    Morning,
    Day,
    Evening,
    Night,
}

impl MoodName {
    /// Window containing `hour` (0-23). Boundaries are half-open.
    #[must_use]
    pub fn for_hour(hour: u8) -> Self {
        match hour {
            5..=9 => Self::Morning,
            10..=15 => Self::Day,
            16..=18 => Self::Evening,
            _ => Self::Night,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Day => "day",
            Self::Evening => "evening",
            Self::Night => "night",
        }
    }
}

/// CSS hex color literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color(&'static str);

impl Color {
    #[must_use]
    pub const fn hex(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Display colors and message keyed to the time of day.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoodDescriptor {
    pub name: MoodName,
    pub background_color: Color,
    pub container_color: Color,
    pub map_color: Color,
    pub mood_message: &'static str,
    pub mood_accent_color: Color,
}

/// Mood for the local wall-clock time `now`.
#[must_use]
pub fn compute(now: OffsetDateTime) -> MoodDescriptor {
    descriptor(MoodName::for_hour(now.hour()))
}

/// Fixed palette for a mood window.
#[must_use]
pub fn descriptor(name: MoodName) -> MoodDescriptor {
    match name {
        MoodName::Morning => MoodDescriptor {
            name,
            background_color: Color("#FAF8F3"),
            container_color: Color("#F5F0E8"),
            map_color: Color("#E8DCC8"),
            mood_message: "Aaj sheher shaant hai 🌿",
            mood_accent_color: Color("#6B8CA8"),
        },
        MoodName::Day => MoodDescriptor {
            name,
            background_color: Color("#F0EBE0"),
            container_color: Color("#E8DCC8"),
            map_color: Color("#D4C8B0"),
            mood_message: "Sheher apni raftar mein hai",
            mood_accent_color: Color("#8F7A66"),
        },
        MoodName::Evening => MoodDescriptor {
            name,
            background_color: Color("#E8EEF2"),
            container_color: Color("#DCE4E9"),
            map_color: Color("#C8D4DB"),
            mood_message: "Shaam ka sukoon chha raha hai",
            mood_accent_color: Color("#6B8CA8"),
        },
        MoodName::Night => MoodDescriptor {
            name,
            background_color: Color("#DDE1E6"),
            container_color: Color("#CED5DB"),
            map_color: Color("#B8C2CA"),
            mood_message: "Raat mein sheher dheere bolta hai 🌙",
            mood_accent_color: Color("#5A6B7A"),
        },
    }
}
