//! Node naming policy.
//!
//! Nodes in a tier with an explicit prefix are named `{prefix}{index}` with a
//! 0-based per-tier index. Nodes in prefix-less tiers share one counter for
//! the whole build, so their names stay unique across tiers.

/// Prefix used when a tier specification carries no explicit name prefix
pub const DEFAULT_NODE_PREFIX: &str = "node";

/// Build-scoped naming state. One namer is created per build invocation; the
/// default-prefix counter advances only when a node is named without a tier
/// prefix.
#[derive(Debug, Default)]
pub struct NodeNamer {
    next_default: usize,
}

impl NodeNamer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the name for the node at `index` within its tier
    pub fn name(&mut self, prefix: Option<&str>, index: usize) -> String {
        match prefix {
            Some(prefix) => format!("{}{}", prefix, index),
            None => {
                let n = self.next_default;
                self.next_default += 1;
                format!("{}{}", DEFAULT_NODE_PREFIX, n)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixed_names_use_tier_index() {
        let mut namer = NodeNamer::new();
        assert_eq!(namer.name(Some("spine"), 0), "spine0");
        assert_eq!(namer.name(Some("spine"), 1), "spine1");
        // An explicit prefix must not advance the shared counter
        assert_eq!(namer.name(None, 7), "node0");
    }

    #[test]
    fn test_default_names_share_one_counter() {
        let mut namer = NodeNamer::new();
        // Tier index is ignored in the default branch
        assert_eq!(namer.name(None, 0), "node0");
        assert_eq!(namer.name(None, 1), "node1");
        assert_eq!(namer.name(None, 0), "node2");
    }
}
