// Run map data model.
//
// A `Run` is a list of `Act`s; an act is a list of rows; a row is a list of
// `Node`s indexed by column. Each node carries its `Challenge` and the
// columns of the next row it links to. The last row of every act holds one
// boss node with no outbound edges.
//
// Renderers treat these types as read-only: they may walk rows in reverse
// (boss on top) and lay nodes out by (row, column), but never mutate edges.
// All types derive `Serialize` so a run can be handed to a renderer as JSON.

use longway_catalog::Song;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Outbound edge targets: distinct column indices into the next row.
pub type Edges = SmallVec<[usize; 2]>;

/// One row of an act, indexed by column.
pub type Row = Vec<Node>;

/// What a node asks of the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Challenge,
    Boss,
}

/// A curated set of songs attached to one node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub name: String,
    pub summary: String,
    pub songs: Vec<Song>,
}

/// A map node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Column within the row.
    pub col: usize,
    pub kind: NodeKind,
    pub challenge: Challenge,
    /// Columns of the next row reachable from this node.
    pub edges: Edges,
}

impl Node {
    pub fn new(col: usize, kind: NodeKind, challenge: Challenge) -> Self {
        Self {
            col,
            kind,
            challenge,
            edges: Edges::new(),
        }
    }

    pub fn is_boss(&self) -> bool {
        self.kind == NodeKind::Boss
    }
}

/// One act: row 0 is the entry, the last row is the boss.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Act {
    /// 1-based act number.
    pub index: usize,
    pub rows: Vec<Row>,
}

impl Act {
    /// The boss node, if the act has been fully generated.
    pub fn boss(&self) -> Option<&Node> {
        self.rows.last().and_then(|row| row.first())
    }

    /// Node count of every row, in generation order.
    pub fn row_sizes(&self) -> Vec<usize> {
        self.rows.iter().map(Vec::len).collect()
    }

    pub fn node(&self, row: usize, col: usize) -> Option<&Node> {
        self.rows.get(row).and_then(|r| r.get(col))
    }
}

/// A complete generated run. Reproducible from `seed` and the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub seed: u32,
    pub acts: Vec<Act>,
}

impl Run {
    /// Act by its 1-based index.
    pub fn act(&self, index: usize) -> Option<&Act> {
        self.acts.iter().find(|a| a.index == index)
    }
}
