// Row connector: wires edges from one row to the next.
//
// Two passes over a bipartite edge assignment:
//
// 1. Coverage. For each column of the next row, in order, pick one node of
//    the previous row uniformly among those still below the out-degree cap,
//    and link it to that column. If every previous node is saturated the
//    column is skipped and reported; this cannot happen when the next row is
//    at most `max_out_edges` times as wide as the previous one, which the
//    act generator enforces.
// 2. Enrichment. Each previous node with spare capacity draws extra distinct
//    targets via `pick_distinct`, up to the cap, with a ceiling of
//    `connect_attempts_per_column * next.len()` draws per node.
//
// The result is written into each previous node's `edges`. Target order is
// the order they were assigned: the coverage column first, extras after.
//
// See also: `generate.rs` which calls `connect_rows()` once per row
// transition, `challenge.rs` for `pick_distinct`.

use crate::challenge::pick_distinct;
use crate::config::MapConfig;
use crate::types::{Edges, Node};
use longway_prng::RunRng;

/// Outcome of connecting two rows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConnectReport {
    /// Next-row columns the coverage pass could not give an inbound edge.
    pub uncovered: Vec<usize>,
}

impl ConnectReport {
    pub fn is_complete(&self) -> bool {
        self.uncovered.is_empty()
    }
}

/// Link every node of `prev` to columns of `next`, replacing any existing
/// edges on `prev`.
pub fn connect_rows(
    prev: &mut [Node],
    next: &[Node],
    config: &MapConfig,
    rng: &mut RunRng,
) -> ConnectReport {
    let mut report = ConnectReport::default();
    if prev.is_empty() || next.is_empty() {
        report.uncovered = (0..next.len()).collect();
        return report;
    }

    let cap = config.max_out_edges;
    let mut targets: Vec<Edges> = vec![Edges::new(); prev.len()];

    // Coverage pass.
    for col in 0..next.len() {
        let open: Vec<usize> = (0..prev.len())
            .filter(|&i| targets[i].len() < cap)
            .collect();
        if open.is_empty() {
            report.uncovered.push(col);
            continue;
        }
        let src = open[rng.next_int(open.len())];
        targets[src].push(col);
    }

    // Enrichment pass.
    let attempt_limit = config.connect_attempts_per_column.saturating_mul(next.len());
    for node_targets in targets.iter_mut() {
        let spare = cap.saturating_sub(node_targets.len());
        let unclaimed = next.len() - node_targets.len();
        let want = spare.min(unclaimed);
        if want == 0 {
            continue;
        }
        let extra = pick_distinct(next.len(), want, node_targets.as_slice(), attempt_limit, rng);
        node_targets.extend(extra);
    }

    for (node, node_targets) in prev.iter_mut().zip(targets) {
        node.edges = node_targets;
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Challenge, NodeKind};

    fn row(n: usize) -> Vec<Node> {
        (0..n)
            .map(|col| {
                Node::new(
                    col,
                    NodeKind::Challenge,
                    Challenge {
                        name: "Challenge".to_string(),
                        summary: String::new(),
                        songs: Vec::new(),
                    },
                )
            })
            .collect()
    }

    fn inbound(prev: &[Node], col: usize) -> usize {
        prev.iter().filter(|n| n.edges.contains(&col)).count()
    }

    fn assert_valid_edges(prev: &[Node], next_len: usize, cap: usize) {
        for node in prev {
            assert!(node.edges.len() <= cap, "too many edges: {:?}", node.edges);
            assert!(node.edges.iter().all(|t| *t < next_len));
            let mut sorted = node.edges.to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), node.edges.len(), "duplicate targets");
        }
    }

    #[test]
    fn every_next_node_is_covered_within_capacity() {
        let config = MapConfig::default();
        for seed in 0..500 {
            let mut rng = RunRng::new(seed);
            for (p, n) in [(1, 1), (1, 2), (2, 4), (3, 5), (5, 2), (4, 1), (2, 3)] {
                let mut prev = row(p);
                let next = row(n);
                let report = connect_rows(&mut prev, &next, &config, &mut rng);
                assert!(report.is_complete(), "seed {seed} {p}->{n}: {report:?}");
                assert_valid_edges(&prev, n, 2);
                for col in 0..n {
                    assert!(inbound(&prev, col) >= 1, "seed {seed} {p}->{n} col {col}");
                }
            }
        }
    }

    #[test]
    fn every_prev_node_gets_an_edge() {
        let config = MapConfig::default();
        let mut rng = RunRng::new(17);
        let mut prev = row(5);
        let next = row(2);
        connect_rows(&mut prev, &next, &config, &mut rng);
        // With 2 targets available and attempts to spare, each node fills up.
        for node in &prev {
            assert!(!node.edges.is_empty());
        }
    }

    #[test]
    fn single_target_row_links_everyone_to_it() {
        let config = MapConfig::default();
        let mut rng = RunRng::new(4);
        let mut prev = row(4);
        let next = row(1);
        connect_rows(&mut prev, &next, &config, &mut rng);
        for node in &prev {
            assert_eq!(node.edges.as_slice(), &[0]);
        }
    }

    #[test]
    fn saturated_prev_leaves_gap_without_panicking() {
        let config = MapConfig::default();
        let mut rng = RunRng::new(8);
        let mut prev = row(1);
        let next = row(3);
        let report = connect_rows(&mut prev, &next, &config, &mut rng);
        assert_eq!(prev[0].edges.as_slice(), &[0, 1]);
        assert_eq!(report.uncovered, vec![2]);
        assert!(!report.is_complete());
    }

    #[test]
    fn respects_configured_cap() {
        let config = MapConfig {
            max_out_edges: 3,
            ..MapConfig::default()
        };
        let mut rng = RunRng::new(23);
        let mut prev = row(2);
        let next = row(6);
        let report = connect_rows(&mut prev, &next, &config, &mut rng);
        assert!(report.is_complete());
        assert_valid_edges(&prev, 6, 3);
    }

    #[test]
    fn replaces_existing_edges() {
        let config = MapConfig::default();
        let mut prev = row(2);
        prev[0].edges.push(7);
        let next = row(2);
        connect_rows(&mut prev, &next, &config, &mut RunRng::new(2));
        assert_valid_edges(&prev, 2, 2);
    }

    #[test]
    fn empty_prev_reports_everything_uncovered() {
        let config = MapConfig::default();
        let mut prev: Vec<Node> = Vec::new();
        let next = row(3);
        let mut rng = RunRng::new(1);
        let report = connect_rows(&mut prev, &next, &config, &mut rng);
        assert_eq!(report.uncovered, vec![0, 1, 2]);
        assert_eq!(rng, RunRng::new(1));
    }

    #[test]
    fn deterministic_for_same_seed() {
        let config = MapConfig::default();
        let mut a = row(3);
        let mut b = row(3);
        let next = row(5);
        connect_rows(&mut a, &next, &config, &mut RunRng::new(42));
        connect_rows(&mut b, &next, &config, &mut RunRng::new(42));
        assert_eq!(a, b);
    }
}
