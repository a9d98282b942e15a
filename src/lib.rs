//! # Topogen - Topology description generator for network experiments
//!
//! This library builds textual descriptions of two canonical network
//! topologies as graphs with optional per-node annotations:
//!
//! - **Clos fabric**: an arbitrary number of tiers, each described by a
//!   compact `COUNT[:PREFIX[:LABEL...]]` specification, with a full bipartite
//!   mesh between every pair of consecutive tiers.
//! - **Ring**: `n` nodes forming exactly one cycle.
//!
//! ## Architecture
//!
//! - `topology`: tier specification parsing, node naming, and the two
//!   builders producing immutable [`Graph`](topology::Graph) values
//! - `output`: serialization of finished graphs to Graphviz DOT or JSON
//! - `bench`: timing statistics backing the `timebench` binary
//!
//! ## Example Usage
//!
//! ```rust
//! use topogen::output::to_dot;
//! use topogen::topology::{build_fabric, TierSpec};
//!
//! let specs: Vec<TierSpec> = ["2:spine", "4:leaf"]
//!     .iter()
//!     .map(|s| s.parse())
//!     .collect::<Result<_, _>>()?;
//!
//! let graph = build_fabric("clos", &specs).expect("tiers were given");
//! assert_eq!(graph.node_count(), 6);
//! assert_eq!(graph.edge_count(), 8);
//! println!("{}", to_dot(&graph));
//! # Ok::<(), topogen::topology::SpecError>(())
//! ```
//!
//! ## Determinism
//!
//! The builders are pure and sequential: two builds with identical inputs
//! produce identical node and edge sets. The only mutable state is the
//! default-prefix naming counter, scoped to a single build call.
//!
//! ## Error Handling
//!
//! [`SpecError`](topology::SpecError) (a non-integer count field in a tier
//! specification) is the only library-level error. Zero tiers and
//! non-positive node counts are defined non-error outcomes: the builders
//! return `None` instead of a graph.

pub mod bench;
pub mod output;
pub mod topology;
