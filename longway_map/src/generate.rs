// Run and act generation.
//
// `RunGenerator::generate(seed)` creates one `RunRng` from the seed and
// builds acts 1..=total_acts in order, threading that single generator
// through every step. Acts are NOT seeded independently: the draw order
// below is the reproducibility contract, and changing it changes every run.
//
// Per act:
// 1. Filter the catalog with the act's `DifficultyRule` (catalog order kept).
// 2. Pick the challenge pool size: one draw, skipped when the clamped bounds
//    collapse to a single value.
// 3. For each row: draw its width (non-boss rows only; the boss row is always
//    1 wide and draws nothing), clamp it to `max_out_edges` times the previous
//    row, build each node's challenge in column order, then connect the
//    previous row to this one.
//
// A catalog too small for the pool bounds shrinks the pool instead of
// failing. The growth clamp keeps every row coverable by the connector, so a
// `ConnectReport` gap only shows up with hand-built configs and is logged.
//
// See also: `connect.rs` for the edge pass, `challenge.rs` for song
// sampling, `config.rs` for every constant used here.

use crate::challenge::{boss_challenge, build_challenge};
use crate::config::{ActProfile, ConfigError, MapConfig};
use crate::connect::connect_rows;
use crate::types::{Act, Node, NodeKind, Row, Run};
use log::{debug, warn};
use longway_catalog::{Catalog, Song};
use longway_prng::RunRng;

/// Generates runs from seeds against one catalog and config.
#[derive(Clone, Debug)]
pub struct RunGenerator<'a> {
    catalog: &'a Catalog,
    config: MapConfig,
}

impl<'a> RunGenerator<'a> {
    /// Validate `config` and bind it to `catalog`.
    pub fn new(catalog: &'a Catalog, config: MapConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { catalog, config })
    }

    /// Generator with the shipped balance.
    pub fn with_defaults(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            config: MapConfig::default(),
        }
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Generate a complete run. Same seed, same catalog, same config: same run.
    pub fn generate(&self, seed: u32) -> Run {
        let mut rng = RunRng::new(seed);
        let acts = (1..=self.config.total_acts)
            .map(|index| self.generate_act(index, &mut rng))
            .collect();
        Run { seed, acts }
    }

    /// Generate one act, drawing from the caller's stream.
    pub fn generate_act(&self, act_index: usize, rng: &mut RunRng) -> Act {
        let config = &self.config;
        let pool = act_pool(self.catalog, config, act_index);
        let pool_size = pick_pool_size(config.profile(act_index), pool.len(), rng);
        let boss = boss_challenge(self.catalog, config);

        let mut rows: Vec<Row> = Vec::with_capacity(config.rows_per_act);
        for row in 0..config.rows_per_act {
            let is_boss = row == config.rows_per_act - 1;
            let count = if is_boss {
                1
            } else {
                row_node_count(config, rows.last().map(Vec::len), rng)
            };

            let mut nodes: Row = Vec::with_capacity(count);
            for col in 0..count {
                let node = if is_boss {
                    Node::new(col, NodeKind::Boss, boss.clone())
                } else {
                    Node::new(
                        col,
                        NodeKind::Challenge,
                        build_challenge(&pool, pool_size, config, rng),
                    )
                };
                nodes.push(node);
            }

            if let Some(prev) = rows.last_mut() {
                let report = connect_rows(prev, &nodes, config, rng);
                if !report.is_complete() {
                    warn!(
                        "act {act_index} row {row}: columns {:?} have no inbound edge",
                        report.uncovered
                    );
                }
            }
            rows.push(nodes);
        }

        let act = Act {
            index: act_index,
            rows,
        };
        debug!(
            "act {act_index}: {} songs admitted, pool size {pool_size}, rows {:?}",
            pool.len(),
            act.row_sizes()
        );
        act
    }
}

/// Generate a run from the default config.
pub fn generate_run(catalog: &Catalog, seed: u32) -> Run {
    RunGenerator::with_defaults(catalog).generate(seed)
}

/// Challenge pool size for an act with `available` admitted songs.
///
/// Both bounds are clamped to `available`; if they collapse to one value it
/// is returned without drawing.
pub fn pick_pool_size(profile: &ActProfile, available: usize, rng: &mut RunRng) -> usize {
    let min = profile.min_pool.min(available);
    let max = profile.max_pool.min(available);
    if min >= max {
        return min;
    }
    rng.range_usize_inclusive(min, max)
}

/// Width of a non-boss row.
///
/// Drawn uniformly in `[min_nodes_per_row, max_nodes_per_row]`, then capped
/// at `max_out_edges * prev_len` so the connector can cover every node. The
/// entry row (`prev_len == None`) is not capped.
pub fn row_node_count(config: &MapConfig, prev_len: Option<usize>, rng: &mut RunRng) -> usize {
    let count = rng.range_usize_inclusive(config.min_nodes_per_row, config.max_nodes_per_row);
    match prev_len {
        Some(prev) => count.min(config.max_out_edges.saturating_mul(prev)).max(1),
        None => count,
    }
}

/// Songs an act may draw from, in catalog order.
pub fn act_pool<'c>(catalog: &'c Catalog, config: &MapConfig, act_index: usize) -> Vec<&'c Song> {
    catalog.filtered(config.profile(act_index).rule)
}
