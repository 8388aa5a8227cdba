use super::init::{Init, Sampler};
use super::layer::{validate_configs, Layer, LayerConfig};
use super::losses;
use super::module::Module;
use super::neuron::Neuron;
use crate::autograd::{Graph, GraphView};
use crate::error::{fatal, ArenagradError};
use crate::value::{NodeArena, Value};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// A feed-forward stack of [`Layer`]s together with the arena holding their
/// parameters.
///
/// The parameter arena lives as long as the network. Every forward pass
/// records onto a tape passed in by the caller, which the caller resets
/// between examples.
#[derive(Debug)]
pub struct Network {
    params: NodeArena,
    layers: Vec<Layer>,
}

impl Network {
    /// Builds a network with every weight and bias drawn from Uniform(-1, 1).
    ///
    /// # Panics
    /// If `configs` is empty, has a zero width, or breaks the layer chain.
    pub fn new<R: Rng + ?Sized>(configs: &[LayerConfig], rng: &mut R) -> Self {
        Self::with_init(configs, Init::default(), rng)
    }

    /// Reproducible construction from a fixed seed.
    pub fn seeded(configs: &[LayerConfig], seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::new(configs, &mut rng)
    }

    pub fn with_init<R: Rng + ?Sized>(configs: &[LayerConfig], init: Init, rng: &mut R) -> Self {
        if let Err(e) = validate_configs(configs) {
            fatal(e);
        }
        let samplers: Vec<Sampler> = configs.iter().map(|c| init.sampler(c.n_in)).collect();
        Self::build(configs, |layer| samplers[layer].sample(rng))
    }

    /// Allocates every parameter in layer, neuron, weights-then-bias order,
    /// taking its value from `next(layer_index)`. `configs` must be valid.
    pub(crate) fn build(configs: &[LayerConfig], mut next: impl FnMut(usize) -> f64) -> Self {
        let mut params = NodeArena::params();
        let layers = configs
            .iter()
            .enumerate()
            .map(|(l, cfg)| {
                let neurons = (0..cfg.n_out)
                    .map(|j| {
                        Neuron::from_fn(&mut params, cfg.n_in, &format!("L{}.N{}", l, j), || {
                            next(l)
                        })
                    })
                    .collect();
                Layer::new(neurons, cfg.activation)
            })
            .collect();
        let net = Network { params, layers };
        log::debug!(
            "built network with {} layers and {} parameters",
            net.layers.len(),
            net.parameter_count()
        );
        net
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn configs(&self) -> Vec<LayerConfig> {
        self.layers.iter().map(Layer::config).collect()
    }

    /// Input width of the first layer.
    pub fn n_in(&self) -> usize {
        self.layers.first().map_or(0, |l| l.n_in())
    }

    /// Output width of the last layer.
    pub fn n_out(&self) -> usize {
        self.layers.last().map_or(0, |l| l.n_out())
    }

    /// Every parameter handle, layer by layer, weights before bias.
    pub fn parameters(&self) -> Vec<Value> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    pub fn parameter_count(&self) -> usize {
        self.layers
            .iter()
            .map(|l| l.n_out() * (l.n_in() + 1))
            .sum()
    }

    /// The parameter arena, for reading weights and gradients.
    pub fn params(&self) -> &NodeArena {
        &self.params
    }

    /// A graph over this network's parameters and `tape`, for building
    /// losses and running backward after [`Network::forward`].
    pub fn graph<'a>(&'a mut self, tape: &'a mut NodeArena) -> Graph<'a> {
        Graph::new(&mut self.params, tape)
    }

    /// Read-only counterpart of [`Network::graph`].
    pub fn view<'a>(&'a self, tape: &'a NodeArena) -> GraphView<'a> {
        GraphView::new(&self.params, tape)
    }

    /// Records a full forward pass on `tape` and returns the output layer.
    ///
    /// # Panics
    /// If `x.len()` differs from [`Network::n_in`].
    pub fn forward(&mut self, tape: &mut NodeArena, x: &[Value]) -> Vec<Value> {
        if x.len() != self.n_in() {
            fatal(ArenagradError::DimensionMismatch {
                expected: self.n_in(),
                actual: x.len(),
                operation: "network input".to_string(),
            });
        }
        let Network { params, layers } = self;
        let mut graph = Graph::new(params, tape);
        let mut out = x.to_vec();
        for layer in layers.iter() {
            out = layer.forward(&mut graph, &out);
        }
        out
    }

    /// Runs `x` through the network and returns the index of the largest
    /// output (lowest index on ties). Leaves the recorded nodes on `tape`.
    pub fn predict(&mut self, tape: &mut NodeArena, x: &[f64]) -> usize {
        let inputs = tape.inputs(x);
        let out = self.forward(tape, &inputs);
        let graph = self.graph(tape);
        losses::argmax(&graph, &out)
    }

    /// Resets every parameter gradient to 0.
    pub fn zero_grad(&mut self) {
        for v in self.parameters() {
            self.params.node_mut(v).grad = 0.0;
        }
    }

    /// Plain gradient descent: `data -= learning_rate * grad`.
    pub fn update(&mut self, learning_rate: f64) {
        for v in self.parameters() {
            let node = self.params.node_mut(v);
            node.data -= learning_rate * node.grad;
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Network({} layers, {} parameters)",
            self.layers.len(),
            self.parameter_count()
        )?;
        for (l, layer) in self.layers.iter().enumerate() {
            writeln!(
                f,
                "  Layer {}: {} -> {} ({})",
                l,
                layer.n_in(),
                layer.n_out(),
                layer.activation()
            )?;
            for (j, neuron) in layer.neurons().iter().enumerate() {
                let weights: Vec<String> = neuron
                    .weights()
                    .iter()
                    .map(|&w| format!("{:.4}", self.params.node(w).data))
                    .collect();
                writeln!(
                    f,
                    "    Neuron {}: w=[{}] b={:.4}",
                    j,
                    weights.join(", "),
                    self.params.node(neuron.bias()).data
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "network_test.rs"]
mod tests;
