// Data-driven map configuration.
//
// Every tunable number the generator reads lives in `MapConfig`: acts per
// run, rows per act, row widths, the out-degree cap, challenge pool bounds
// and attempt ceilings for rejection sampling. `MapConfig::default()` is the
// shipped balance; `from_json()` lets designers iterate without recompiling.
//
// Per-act rules are grouped into `ActProfile` entries (difficulty rule plus
// pool size bounds). Act `n` uses `acts[n - 1]`; acts past the end of the
// list reuse the last profile.
//
// See also: `generate.rs` which reads every field here, `connect.rs` for the
// out-degree cap, `challenge.rs` for pool sampling.
//
// **Critical constraint: determinism.** Config values feed directly into the
// draw sequence. Two generators with different configs produce different
// runs from the same seed.

use longway_catalog::DifficultyRule;
use serde::{Deserialize, Serialize};

/// Rejected configuration values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed map config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("a run needs at least one act")]
    NoActs,

    #[error("an act needs at least 2 rows (entry and boss), got {0}")]
    TooFewRows(usize),

    #[error("invalid row width bounds: min {min}, max {max}")]
    RowWidth { min: usize, max: usize },

    #[error("max_out_edges must be at least 1")]
    NoOutEdges,

    #[error("no act profiles configured")]
    NoProfiles,

    #[error("act profile {index}: min_pool {min} exceeds max_pool {max}")]
    PoolBounds { index: usize, min: usize, max: usize },

    #[error("attempt factor '{0}' must be at least 1")]
    ZeroAttempts(&'static str),
}

/// Song filter and challenge pool bounds for one act.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActProfile {
    /// Which catalog songs the act draws from.
    pub rule: DifficultyRule,
    /// Smallest challenge size, before clamping to the filtered song count.
    pub min_pool: usize,
    /// Largest challenge size, before clamping to the filtered song count.
    pub max_pool: usize,
}

impl ActProfile {
    pub const fn new(rule: DifficultyRule, min_pool: usize, max_pool: usize) -> Self {
        Self {
            rule,
            min_pool,
            max_pool,
        }
    }
}

/// Top-level map configuration. Loaded once, never mutated during generation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Acts per run.
    pub total_acts: usize,
    /// Rows per act, including the entry row and the boss row.
    pub rows_per_act: usize,
    /// Narrowest non-boss row before growth clamping.
    pub min_nodes_per_row: usize,
    /// Widest non-boss row.
    pub max_nodes_per_row: usize,
    /// Outbound edge cap per node. Also caps row growth: a row is at most
    /// `max_out_edges` times as wide as the row before it.
    pub max_out_edges: usize,
    /// How many of a challenge's songs the player must clear.
    pub picks_per_challenge: usize,
    /// Title of the song every boss node plays.
    pub boss_title: String,
    /// Rejection-sampling ceiling for extra edges, per column of the next row.
    pub connect_attempts_per_column: usize,
    /// Rejection-sampling ceiling for challenge songs, per song in the pool.
    pub sample_attempts_per_song: usize,
    /// Per-act profiles, in act order.
    pub acts: Vec<ActProfile>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            total_acts: 3,
            rows_per_act: 8,
            min_nodes_per_row: 2,
            max_nodes_per_row: 5,
            max_out_edges: 2,
            picks_per_challenge: 3,
            boss_title: "Bohemian Rhapsody".to_string(),
            connect_attempts_per_column: 3,
            sample_attempts_per_song: 8,
            acts: vec![
                ActProfile::new(DifficultyRule::AtMost(3), 9, 12),
                ActProfile::new(DifficultyRule::AtMost(5), 6, 9),
                ActProfile::new(DifficultyRule::AtLeast(3), 3, 5),
            ],
        }
    }
}

impl MapConfig {
    /// Parse and validate a config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: MapConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the bounds the generator relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_acts == 0 {
            return Err(ConfigError::NoActs);
        }
        if self.rows_per_act < 2 {
            return Err(ConfigError::TooFewRows(self.rows_per_act));
        }
        if self.min_nodes_per_row == 0 || self.min_nodes_per_row > self.max_nodes_per_row {
            return Err(ConfigError::RowWidth {
                min: self.min_nodes_per_row,
                max: self.max_nodes_per_row,
            });
        }
        if self.max_out_edges == 0 {
            return Err(ConfigError::NoOutEdges);
        }
        if self.acts.is_empty() {
            return Err(ConfigError::NoProfiles);
        }
        for (index, profile) in self.acts.iter().enumerate() {
            if profile.min_pool > profile.max_pool {
                return Err(ConfigError::PoolBounds {
                    index,
                    min: profile.min_pool,
                    max: profile.max_pool,
                });
            }
        }
        if self.connect_attempts_per_column == 0 {
            return Err(ConfigError::ZeroAttempts("connect_attempts_per_column"));
        }
        if self.sample_attempts_per_song == 0 {
            return Err(ConfigError::ZeroAttempts("sample_attempts_per_song"));
        }
        Ok(())
    }

    /// Profile for a 1-based act index. Acts past the list reuse the last one.
    pub fn profile(&self, act_index: usize) -> &ActProfile {
        let i = act_index.saturating_sub(1).min(self.acts.len() - 1);
        &self.acts[i]
    }
}
