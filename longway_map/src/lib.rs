// longway_map: deterministic run-map generator.
//
// Builds the branching route for one run of Long Way To The Top: a fixed
// number of acts, each a layered DAG of rows that narrows to a single boss
// node. Every node carries a challenge (a handful of catalog songs).
// No rendering, no I/O: callers pass in a `Catalog` and a seed and get a
// `Run` back.
//
// Module overview:
// - `types.rs`:      Run, Act, Row, Node, NodeKind, Challenge.
// - `config.rs`:     MapConfig + ActProfile, every tunable constant, JSON-loadable.
// - `generate.rs`:   RunGenerator: acts, row widths, pool sizing, draw order.
// - `connect.rs`:    Row connector (coverage pass + capped enrichment pass).
// - `challenge.rs`:  Bounded distinct sampling, node and boss challenges.
// - `navigation.rs`: Read-only route queries for clients and renderers.
//
// **Critical constraint: determinism.** A run is a pure function of
// `(catalog, config, seed)`. All randomness comes from one `RunRng` threaded
// by `&mut` through a fixed traversal order. No `HashMap` iteration, no
// system time, no shared generators across threads.

pub mod challenge;
pub mod config;
pub mod connect;
pub mod generate;
pub mod navigation;
pub mod types;

pub use config::{ActProfile, ConfigError, MapConfig};
pub use generate::{RunGenerator, generate_run};
pub use types::{Act, Challenge, Node, NodeKind, Row, Run};
