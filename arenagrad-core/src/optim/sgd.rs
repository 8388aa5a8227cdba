use crate::nn::Network;
use crate::optim::optimizer_trait::Optimizer;

/// Stochastic gradient descent without momentum:
/// `param -= learning_rate * grad`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Self {
        Sgd { learning_rate }
    }

    pub fn set_learning_rate(&mut self, learning_rate: f64) {
        log::debug!(
            "sgd learning rate {} -> {}",
            self.learning_rate,
            learning_rate
        );
        self.learning_rate = learning_rate;
    }
}

impl Optimizer for Sgd {
    fn step(&mut self, net: &mut Network) {
        net.update(self.learning_rate);
    }

    fn zero_grad(&mut self, net: &mut Network) {
        net.zero_grad();
    }

    fn learning_rate(&self) -> f64 {
        self.learning_rate
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
