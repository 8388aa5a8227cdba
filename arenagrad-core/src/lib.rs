//! Scalar reverse-mode automatic differentiation on arena-allocated graphs,
//! with a small feed-forward network built on top.
//!
//! Model parameters live in a long-lived [`NodeArena`] owned by a
//! [`Network`]; each training example records onto a short-lived tape that
//! is reset after the update step.

pub mod autograd;
pub mod error;
pub mod export;
pub mod memory;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod value;

pub use autograd::{Graph, GraphView};
pub use error::ArenagradError;
pub use memory::Arena;
pub use nn::{Activation, LayerConfig, Network};
pub use optim::{Optimizer, Sgd};
pub use value::{Node, NodeArena, Op, Space, Value, ValueKind};
