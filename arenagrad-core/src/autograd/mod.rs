//! Reverse-mode differentiation over the value graph.
//!
//! [`Graph`] is the mutable view used to build expressions; `backward` walks
//! the nodes reachable from a root in reverse topological order.

pub mod backward;
pub mod grad_check;
pub mod graph;

pub use backward::topological_order;
pub use graph::{Graph, GraphView, NodeLookup};
