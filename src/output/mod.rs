//! Graph serialization.
//!
//! The builders hand over a finished [`Graph`](crate::topology::Graph) value;
//! these modules turn it into a textual exchange format.

pub mod data;
pub mod dot;

pub use data::to_json;
pub use dot::to_dot;
