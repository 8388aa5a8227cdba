//! Parameter initialization schemes.

use crate::error::{fatal, ArenagradError};
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rand_distr::Normal;

/// How fresh weights and biases are drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Init {
    /// Uniform over `[low, high)`.
    Uniform { low: f64, high: f64 },
    /// Normal(0, sqrt(1 / n_in)).
    XavierNormal,
    /// Every parameter set to the same value.
    Constant(f64),
}

impl Default for Init {
    fn default() -> Self {
        Init::Uniform {
            low: -1.0,
            high: 1.0,
        }
    }
}

impl Init {
    /// Returns a sampler for a neuron with `n_in` inputs.
    ///
    /// # Panics
    /// On an empty uniform range or `n_in == 0` for `XavierNormal`.
    pub fn sampler(self, n_in: usize) -> Sampler {
        match self {
            Init::Uniform { low, high } => {
                if !(low < high) {
                    fatal(ArenagradError::InvalidConfig(format!(
                        "empty uniform range [{}, {})",
                        low, high
                    )));
                }
                Sampler::Uniform(Uniform::new(low, high))
            }
            Init::XavierNormal => {
                let std_dev = (1.0 / n_in as f64).sqrt();
                match Normal::new(0.0, std_dev) {
                    Ok(normal) => Sampler::Normal(normal),
                    Err(e) => fatal(ArenagradError::InvalidConfig(format!(
                        "xavier init with n_in = {}: {}",
                        n_in, e
                    ))),
                }
            }
            Init::Constant(c) => Sampler::Constant(c),
        }
    }
}

/// A ready-to-draw distribution built by [`Init::sampler`].
#[derive(Debug, Clone, Copy)]
pub enum Sampler {
    Uniform(Uniform<f64>),
    Normal(Normal<f64>),
    Constant(f64),
}

impl Sampler {
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            Sampler::Uniform(d) => d.sample(rng),
            Sampler::Normal(d) => d.sample(rng),
            Sampler::Constant(c) => *c,
        }
    }
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
