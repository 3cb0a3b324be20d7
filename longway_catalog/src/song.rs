// Song records and act difficulty rules.
//
// A `Song` mirrors one row of the exported chart catalog: id, title, artist,
// album, genre, difficulty, length, year. The map generator only reads
// `title` (boss lookup) and `difficulty` (act filtering); the rest rides along
// so renderers can show it.
//
// Difficulty in the export ranges 0..=6, with -1 for "unrated". `tier()`
// clamps into that range, and every rule compares tiers, never raw values.

use serde::{Deserialize, Serialize};

/// Lowest difficulty tier.
pub const MIN_DIFFICULTY: u8 = 0;

/// Highest difficulty tier.
pub const MAX_DIFFICULTY: u8 = 6;

/// One chart in the catalog. Immutable once loaded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub album: String,
    #[serde(default)]
    pub genre: String,
    pub difficulty: i32,
    /// Track length in milliseconds.
    #[serde(default)]
    pub length: u32,
    #[serde(default)]
    pub year: String,
}

impl Song {
    /// Minimal record with only the fields the generator reads.
    pub fn new(id: impl Into<String>, title: impl Into<String>, difficulty: i32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: String::new(),
            album: String::new(),
            genre: String::new(),
            difficulty,
            length: 0,
            year: String::new(),
        }
    }

    /// Difficulty clamped into `[MIN_DIFFICULTY, MAX_DIFFICULTY]`.
    pub fn tier(&self) -> u8 {
        self.difficulty
            .clamp(i32::from(MIN_DIFFICULTY), i32::from(MAX_DIFFICULTY)) as u8
    }
}

/// Which songs an act admits, by tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyRule {
    /// Tier `<=` the bound.
    AtMost(u8),
    /// Tier `>=` the bound.
    AtLeast(u8),
}

impl DifficultyRule {
    pub fn admits(self, song: &Song) -> bool {
        match self {
            DifficultyRule::AtMost(max) => song.tier() <= max,
            DifficultyRule::AtLeast(min) => song.tier() >= min,
        }
    }
}
