//! Graphviz DOT serialization.
//!
//! Graphs are rendered into a directed container (`digraph`) with every edge
//! carrying `dir=none`: the topologies are undirected, and the arrowless
//! directed edge is the conventional rendering for that in DOT.

use crate::topology::types::{Graph, LABEL_KEY};

/// Render a graph in DOT notation
pub fn to_dot(graph: &Graph) -> String {
    let mut out = String::new();
    if graph.name.is_empty() {
        out.push_str("digraph {\n");
    } else {
        out.push_str(&format!("digraph {} {{\n", quote(&graph.name)));
    }
    for node in &graph.nodes {
        match node.joined_labels() {
            Some(conf) => out.push_str(&format!(
                "\t{}\t[{}={}];\n",
                quote(&node.name),
                LABEL_KEY,
                quote_always(&conf)
            )),
            None => out.push_str(&format!("\t{};\n", quote(&node.name))),
        }
    }
    for edge in &graph.edges {
        out.push_str(&format!(
            "\t{} -> {}\t[dir=none];\n",
            quote(&edge.source),
            quote(&edge.target)
        ));
    }
    out.push_str("}\n");
    out
}

/// Whether an identifier can appear unquoted in DOT output
fn is_plain_id(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn quote(s: &str) -> String {
    if is_plain_id(s) {
        s.to_string()
    } else {
        quote_always(s)
    }
}

fn quote_always(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}
