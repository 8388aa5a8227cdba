use super::init::Sampler;
use super::module::Module;
use crate::autograd::Graph;
use crate::error::{fatal, ArenagradError};
use crate::value::{NodeArena, Value, ValueKind};
use rand::Rng;

/// One unit computing `sum(w_i * x_i) + b`.
///
/// Holds handles to its weights and bias in the owning network's parameter
/// arena. The nonlinearity belongs to the enclosing [`Layer`](super::Layer).
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
}

impl Neuron {
    /// Allocates `n_in` weights and a bias in `params`, drawn from `sampler`.
    ///
    /// `prefix` is prepended to the parameter labels (`{prefix}.w{i}`,
    /// `{prefix}.b`).
    pub fn new<R: Rng + ?Sized>(
        params: &mut NodeArena,
        n_in: usize,
        sampler: &Sampler,
        rng: &mut R,
        prefix: &str,
    ) -> Self {
        Self::from_fn(params, n_in, prefix, || sampler.sample(rng))
    }

    /// Like [`Neuron::new`], taking each parameter value from `next` in
    /// order: weights first, then the bias.
    pub(crate) fn from_fn(
        params: &mut NodeArena,
        n_in: usize,
        prefix: &str,
        mut next: impl FnMut() -> f64,
    ) -> Self {
        let mut alloc = |data: f64, label: String| {
            let v = params.leaf(data, ValueKind::Param);
            params.node_mut(v).set_label(label);
            v
        };
        let weights = (0..n_in)
            .map(|i| alloc(next(), format!("{}.w{}", prefix, i)))
            .collect();
        let bias = alloc(next(), format!("{}.b", prefix));
        Neuron { weights, bias }
    }

    pub fn weights(&self) -> &[Value] {
        &self.weights
    }

    pub fn bias(&self) -> Value {
        self.bias
    }

    /// Records `sum(w_i * x_i) + b` on `graph` and returns it.
    ///
    /// # Panics
    /// If `x.len()` differs from the number of weights.
    pub fn pre_activation(&self, graph: &mut Graph<'_>, x: &[Value]) -> Value {
        if x.len() != self.weights.len() {
            fatal(ArenagradError::DimensionMismatch {
                expected: self.weights.len(),
                actual: x.len(),
                operation: "neuron forward".to_string(),
            });
        }
        let mut acc = graph.sum(&[]);
        for (&w, &xi) in self.weights.iter().zip(x) {
            let prod = graph.mul(w, xi);
            acc = graph.add(acc, prod);
        }
        graph.add(acc, self.bias)
    }
}

impl Module for Neuron {
    fn forward(&self, graph: &mut Graph<'_>, input: &[Value]) -> Vec<Value> {
        vec![self.pre_activation(graph, input)]
    }

    fn parameters(&self) -> Vec<Value> {
        let mut params = self.weights.clone();
        params.push(self.bias);
        params
    }

    fn n_in(&self) -> usize {
        self.weights.len()
    }

    fn n_out(&self) -> usize {
        1
    }
}
