//! # Scalar Operations Module (`ops`)
//!
//! Every operator that can appear in a computation graph is defined here.
//!
//! ## Structure:
//!
//! - **Submodules:** Operations are grouped logically (`arithmetic`, `math_elem`, `activation`).
//! - **`_op` Functions:** Each operation has a core function (named `xxx_op`) that computes the
//!   forward value from the operands' current data, records a new node on the tape, and returns
//!   its handle. [`Graph`](crate::autograd::Graph) exposes them as methods (`g.add(a, b)`).
//! - **`_backward` Functions:** The chain-rule step for the op. They are invoked by the backward
//!   traversal through a single dispatch on the node's [`Op`](crate::value::Op) tag and always
//!   accumulate into the operands' gradients.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, div, pow, neg.
//! - [`math_elem`]: exp, ln.
//! - [`activation`]: tanh, sigmoid, relu.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;
