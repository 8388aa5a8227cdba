use crate::autograd::Graph;
use crate::value::Value;

/// Common interface of the building blocks of a [`Network`](super::Network).
///
/// A module holds parameter handles only; the nodes themselves live in the
/// network's parameter arena, so a forward pass needs a [`Graph`] built over
/// that arena.
pub trait Module: std::fmt::Debug {
    /// Records the forward pass for `input` and returns the outputs.
    ///
    /// # Panics
    /// If `input.len()` differs from [`Module::n_in`].
    fn forward(&self, graph: &mut Graph<'_>, input: &[Value]) -> Vec<Value>;

    /// Learnable parameters, weights before bias, neuron by neuron.
    fn parameters(&self) -> Vec<Value>;

    fn n_in(&self) -> usize;

    fn n_out(&self) -> usize;
}
