//! Topology construction.
//!
//! Builders for the two supported topologies (multi-tier Clos fabric and
//! ring), the tier specification parser, and the shared graph model.

pub mod fabric;
pub mod naming;
pub mod ring;
pub mod spec;
pub mod types;

pub use fabric::build_fabric;
pub use naming::{NodeNamer, DEFAULT_NODE_PREFIX};
pub use ring::build_ring;
pub use spec::{SpecError, TierSpec};
pub use types::{Edge, Graph, GraphBuilder, Node, LABEL_KEY, LABEL_SEPARATOR};
