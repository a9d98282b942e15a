//! Graph value types.
//!
//! This file defines the immutable graph model shared by the fabric and ring
//! builders, plus the builder that accumulates nodes and edges and hands back
//! a finished read-only graph.

use std::collections::HashSet;

use serde::Serialize;

/// Attribute key under which joined node labels are rendered
pub const LABEL_KEY: &str = "conf";

/// Separator used to join a node's labels into a single attribute value
pub const LABEL_SEPARATOR: &str = ";";

/// A named node with an ordered, possibly empty list of labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub name: String,
    pub labels: Vec<String>,
}

impl Node {
    /// Create a node with no labels
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            labels: Vec::new(),
        }
    }

    /// Create a node carrying the given labels
    pub fn with_labels(name: impl Into<String>, labels: Vec<String>) -> Self {
        Self {
            name: name.into(),
            labels,
        }
    }

    /// The single joined attribute value, or `None` when the node has no
    /// labels. Empty label lists produce no attribute at all rather than an
    /// empty string.
    pub fn joined_labels(&self) -> Option<String> {
        if self.labels.is_empty() {
            None
        } else {
            Some(self.labels.join(LABEL_SEPARATOR))
        }
    }
}

/// An undirected connection between two named nodes.
///
/// The `source`/`target` split records insertion order for rendering only;
/// the pair is semantically unordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

impl Edge {
    /// Whether this edge joins the two given nodes, in either order
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }
}

/// A finished topology graph
#[derive(Debug, Clone, Serialize)]
pub struct Graph {
    pub name: String,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Look up a node by name
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// Number of edges incident to the named node
    pub fn degree(&self, name: &str) -> usize {
        self.edges
            .iter()
            .filter(|e| e.source == name || e.target == name)
            .count()
    }

    /// Whether an edge joins the two named nodes, in either order
    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        self.edges.iter().any(|e| e.connects(a, b))
    }
}

/// Accumulates nodes and edges for one build, enforcing the graph invariants:
/// node names are unique, no self-loops, and each unordered pair of nodes is
/// connected at most once.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    name: String,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    node_names: HashSet<String>,
    edge_pairs: HashSet<(String, String)>,
}

impl GraphBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Add a node; a node with an already-known name is ignored
    pub fn add_node(&mut self, node: Node) {
        if self.node_names.insert(node.name.clone()) {
            self.nodes.push(node);
        }
    }

    /// Add an undirected edge between two existing nodes. Self-loops and
    /// already-present unordered pairs are ignored.
    pub fn add_edge(&mut self, source: &str, target: &str) {
        if source == target {
            return;
        }
        if !self.node_names.contains(source) || !self.node_names.contains(target) {
            log::warn!(
                "skipping edge between unknown nodes '{}' and '{}'",
                source,
                target
            );
            return;
        }
        let pair = if source < target {
            (source.to_string(), target.to_string())
        } else {
            (target.to_string(), source.to_string())
        };
        if self.edge_pairs.insert(pair) {
            self.edges.push(Edge {
                source: source.to_string(),
                target: target.to_string(),
            });
        }
    }

    /// Consume the builder and return the finished graph
    pub fn finish(self) -> Graph {
        Graph {
            name: self.name,
            nodes: self.nodes,
            edges: self.edges,
        }
    }
}
