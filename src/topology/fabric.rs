//! Clos fabric construction.
//!
//! A fabric is built from an ordered list of tier specifications. Every node
//! of one tier is connected to every node of the immediately following tier
//! (a full bipartite mesh per boundary); there are no intra-tier or skip-tier
//! edges.

use crate::topology::naming::NodeNamer;
use crate::topology::spec::TierSpec;
use crate::topology::types::{Graph, GraphBuilder, Node};

/// Build a multi-tier Clos fabric.
///
/// Returns `None` when no tiers are given. Tiers with `count <= 0` contribute
/// no nodes and no edges at their boundaries. A single tier yields nodes but
/// zero edges.
pub fn build_fabric(name: &str, specs: &[TierSpec]) -> Option<Graph> {
    if specs.is_empty() {
        return None;
    }

    // One naming counter for the whole build, shared across tiers.
    let mut namer = NodeNamer::new();
    let mut tiers: Vec<Vec<Node>> = Vec::with_capacity(specs.len());
    for spec in specs {
        let size = usize::try_from(spec.count).unwrap_or(0);
        let mut tier = Vec::with_capacity(size);
        for i in 0..size {
            let node_name = namer.name(spec.prefix.as_deref(), i);
            tier.push(Node::with_labels(node_name, spec.labels.clone()));
        }
        tiers.push(tier);
    }

    let mut builder = GraphBuilder::new(name);
    for tier in &tiers {
        for node in tier {
            builder.add_node(node.clone());
        }
    }
    for boundary in tiers.windows(2) {
        for upper in &boundary[0] {
            for lower in &boundary[1] {
                builder.add_edge(&upper.name, &lower.name);
            }
        }
    }

    Some(builder.finish())
}
