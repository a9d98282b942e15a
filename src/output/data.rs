//! JSON export of the graph structure.

use crate::topology::types::Graph;

/// Serialize a graph (name, nodes with their label lists, edges) as pretty
/// JSON.
pub fn to_json(graph: &Graph) -> serde_json::Result<String> {
    serde_json::to_string_pretty(graph)
}
