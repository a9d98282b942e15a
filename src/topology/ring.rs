//! Ring construction.
//!
//! A ring connects `n` nodes in sequential order and closes the cycle from
//! the last node back to the first.

use crate::topology::naming::DEFAULT_NODE_PREFIX;
use crate::topology::types::{Graph, GraphBuilder, Node};

/// Build a ring of `n_nodes` nodes named `node1..nodeN`.
///
/// Returns `None` when `n_nodes <= 0`. A one-node ring has no edges (the
/// closing edge would be a self-loop) and a two-node ring has a single edge
/// (the closing edge would repeat the same unordered pair).
pub fn build_ring(name: &str, n_nodes: i64) -> Option<Graph> {
    if n_nodes <= 0 {
        return None;
    }

    let names: Vec<String> = (1..=n_nodes)
        .map(|i| format!("{}{}", DEFAULT_NODE_PREFIX, i))
        .collect();

    let mut builder = GraphBuilder::new(name);
    for node_name in &names {
        builder.add_node(Node::new(node_name.clone()));
    }
    for pair in names.windows(2) {
        builder.add_edge(&pair[0], &pair[1]);
    }
    // Close the cycle; the builder drops this edge again for the degenerate
    // one- and two-node rings.
    builder.add_edge(&names[names.len() - 1], &names[0]);

    Some(builder.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_node_ring_is_a_single_cycle() {
        let graph = build_ring("ring", 4).unwrap();

        let names: Vec<&str> = graph.nodes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["node1", "node2", "node3", "node4"]);
        assert_eq!(graph.edge_count(), 4);
        assert!(graph.has_edge("node1", "node2"));
        assert!(graph.has_edge("node2", "node3"));
        assert!(graph.has_edge("node3", "node4"));
        assert!(graph.has_edge("node4", "node1"));
        for name in names {
            assert_eq!(graph.degree(name), 2);
        }
    }

    #[test]
    fn test_non_positive_counts_yield_no_graph() {
        assert!(build_ring("ring", 0).is_none());
        assert!(build_ring("ring", -1).is_none());
    }

    #[test]
    fn test_one_node_ring_has_no_edges() {
        let graph = build_ring("ring", 1).unwrap();
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.nodes[0].name, "node1");
    }

    #[test]
    fn test_two_node_ring_has_one_edge() {
        let graph = build_ring("ring", 2).unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.has_edge("node1", "node2"));
    }

    #[test]
    fn test_ring_nodes_carry_no_labels() {
        let graph = build_ring("ring", 3).unwrap();
        assert!(graph.nodes.iter().all(|n| n.joined_labels().is_none()));
    }

    #[test]
    fn test_identical_inputs_build_identical_graphs() {
        let first = build_ring("ring", 5).unwrap();
        let second = build_ring("ring", 5).unwrap();
        assert_eq!(first.nodes, second.nodes);
        assert_eq!(first.edges, second.edges);
    }
}
