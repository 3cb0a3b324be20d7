// Read-only route queries over a generated act.
//
// Players start on any entry-row node and move one row at a time along
// outbound edges. A client holding the player's committed column asks
// `next_choices()` for the columns it may move to. A node with no edges
// (only possible in a map with a coverage gap) opens the whole next row
// rather than stranding the player.
//
// `inbound_sources()` answers the reverse question for "move back" UIs and
// for reachability checks; `orphans()` lists every non-entry node nobody
// links to. `display_rows()` gives the boss-on-top order the CLI renderer
// walks.
//
// Nothing here mutates the map.

use crate::types::{Act, Row};

/// Columns a player may start on.
pub fn entry_columns(act: &Act) -> Vec<usize> {
    act.rows
        .first()
        .map(|row| (0..row.len()).collect())
        .unwrap_or_default()
}

/// Columns of row `row + 1` reachable after committing to `(row, col)`.
///
/// Empty on the last row. Unknown coordinates and nodes without edges open
/// every column of the next row.
pub fn next_choices(act: &Act, row: usize, col: usize) -> Vec<usize> {
    let Some(next) = row.checked_add(1).and_then(|r| act.rows.get(r)) else {
        return Vec::new();
    };
    match act.node(row, col) {
        Some(node) if !node.edges.is_empty() => node.edges.to_vec(),
        _ => (0..next.len()).collect(),
    }
}

/// Columns of row `row - 1` with an edge into `(row, col)`, ascending.
pub fn inbound_sources(act: &Act, row: usize, col: usize) -> Vec<usize> {
    if row == 0 {
        return Vec::new();
    }
    act.rows
        .get(row - 1)
        .map(|prev| {
            prev.iter()
                .filter(|n| n.edges.contains(&col))
                .map(|n| n.col)
                .collect()
        })
        .unwrap_or_default()
}

/// `(row, col)` of every non-entry node without an inbound edge.
pub fn orphans(act: &Act) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    for (row, nodes) in act.rows.iter().enumerate().skip(1) {
        for node in nodes {
            if inbound_sources(act, row, node.col).is_empty() {
                out.push((row, node.col));
            }
        }
    }
    out
}

/// Rows from boss to entry, each paired with its generation-order index.
pub fn display_rows(act: &Act) -> impl Iterator<Item = (usize, &Row)> {
    act.rows.iter().enumerate().rev()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Challenge, Node, NodeKind};

    fn node(col: usize, edges: &[usize]) -> Node {
        let mut n = Node::new(
            col,
            NodeKind::Challenge,
            Challenge {
                name: "Challenge".to_string(),
                summary: String::new(),
                songs: Vec::new(),
            },
        );
        n.edges.extend_from_slice(edges);
        n
    }

    /// Row 0: two nodes, col 0 -> {1}, col 1 -> {}.
    /// Row 1: two nodes, col 0 -> {0}, col 1 -> {0}.
    /// Row 2: one node.
    fn sample_act() -> Act {
        Act {
            index: 1,
            rows: vec![
                vec![node(0, &[1]), node(1, &[])],
                vec![node(0, &[0]), node(1, &[0])],
                vec![node(0, &[])],
            ],
        }
    }

    #[test]
    fn entry_is_whole_first_row() {
        assert_eq!(entry_columns(&sample_act()), vec![0, 1]);
        let empty = Act {
            index: 1,
            rows: Vec::new(),
        };
        assert!(entry_columns(&empty).is_empty());
    }

    #[test]
    fn moving_down_follows_edges() {
        let act = sample_act();
        assert_eq!(next_choices(&act, 0, 0), vec![1]);
        assert_eq!(next_choices(&act, 1, 1), vec![0]);
    }

    #[test]
    fn edgeless_node_opens_next_row() {
        let act = sample_act();
        assert_eq!(next_choices(&act, 0, 1), vec![0, 1]);
        assert_eq!(next_choices(&act, 0, 9), vec![0, 1]);
    }

    #[test]
    fn last_row_has_no_choices() {
        assert!(next_choices(&sample_act(), 2, 0).is_empty());
        assert!(next_choices(&sample_act(), 7, 0).is_empty());
        assert!(next_choices(&sample_act(), usize::MAX, 0).is_empty());
    }

    #[test]
    fn moving_up_finds_incoming_edge() {
        let act = sample_act();
        assert_eq!(inbound_sources(&act, 1, 1), vec![0]);
        assert_eq!(inbound_sources(&act, 2, 0), vec![0, 1]);
        assert!(inbound_sources(&act, 0, 0).is_empty());
    }

    #[test]
    fn orphans_lists_unreached_nodes() {
        let act = sample_act();
        assert_eq!(orphans(&act), vec![(1, 0)]);
    }

    #[test]
    fn display_order_is_boss_first() {
        let act = sample_act();
        let order: Vec<usize> = display_rows(&act).map(|(i, _)| i).collect();
        assert_eq!(order, vec![2, 1, 0]);
    }
}
