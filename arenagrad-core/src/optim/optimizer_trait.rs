use crate::nn::Network;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers update a network's parameters from the gradients accumulated
/// by the last backward pass(es).
pub trait Optimizer {
    /// Performs a single optimization step on every parameter of `net`.
    fn step(&mut self, net: &mut Network);

    /// Clears the gradients of every parameter of `net`.
    ///
    /// Gradients accumulate across backward passes, so this is called once
    /// per step.
    fn zero_grad(&mut self, net: &mut Network);

    fn learning_rate(&self) -> f64;
}
