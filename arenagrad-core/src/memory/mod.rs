//! Memory management: the bump arena backing every graph node.

pub mod arena;

pub use arena::Arena;
