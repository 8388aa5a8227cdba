use super::activation::Activation;
use super::module::Module;
use super::neuron::Neuron;
use crate::autograd::Graph;
use crate::error::{fatal, ArenagradError};
use crate::value::Value;

/// Shape and activation of one layer, used to describe a network before it
/// is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerConfig {
    pub n_in: usize,
    pub n_out: usize,
    pub activation: Activation,
}

impl LayerConfig {
    pub const fn new(n_in: usize, n_out: usize, activation: Activation) -> Self {
        LayerConfig {
            n_in,
            n_out,
            activation,
        }
    }
}

/// Checks that `configs` describes a buildable network: at least one layer,
/// no zero widths, and each layer's output width equal to the next layer's
/// input width.
pub fn validate_configs(configs: &[LayerConfig]) -> Result<(), ArenagradError> {
    if configs.is_empty() {
        return Err(ArenagradError::InvalidConfig(
            "a network needs at least one layer".to_string(),
        ));
    }
    for (i, cfg) in configs.iter().enumerate() {
        if cfg.n_in == 0 || cfg.n_out == 0 {
            return Err(ArenagradError::InvalidConfig(format!(
                "layer {} has zero width ({} -> {})",
                i, cfg.n_in, cfg.n_out
            )));
        }
    }
    for (i, pair) in configs.windows(2).enumerate() {
        if pair[0].n_out != pair[1].n_in {
            return Err(ArenagradError::InvalidConfig(format!(
                "layer {} outputs {} values but layer {} takes {}",
                i,
                pair[0].n_out,
                i + 1,
                pair[1].n_in
            )));
        }
    }
    Ok(())
}

/// Neurons of equal input width sharing one activation.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
    n_in: usize,
    activation: Activation,
}

impl Layer {
    /// Wraps already-built neurons under one activation.
    ///
    /// # Panics
    /// If `neurons` is empty or their widths differ.
    pub fn new(neurons: Vec<Neuron>, activation: Activation) -> Self {
        let n_in = match neurons.first() {
            Some(n) => n.weights().len(),
            None => fatal(ArenagradError::InvalidConfig(
                "a layer needs at least one neuron".to_string(),
            )),
        };
        for n in &neurons {
            if n.weights().len() != n_in {
                fatal(ArenagradError::DimensionMismatch {
                    expected: n_in,
                    actual: n.weights().len(),
                    operation: "layer construction".to_string(),
                });
            }
        }
        Layer {
            neurons,
            n_in,
            activation,
        }
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn config(&self) -> LayerConfig {
        LayerConfig::new(self.n_in, self.neurons.len(), self.activation)
    }
}

impl Module for Layer {
    fn forward(&self, graph: &mut Graph<'_>, input: &[Value]) -> Vec<Value> {
        if input.len() != self.n_in {
            fatal(ArenagradError::DimensionMismatch {
                expected: self.n_in,
                actual: input.len(),
                operation: "layer forward".to_string(),
            });
        }
        self.neurons
            .iter()
            .map(|n| {
                let pre = n.pre_activation(graph, input);
                self.activation.apply(graph, pre)
            })
            .collect()
    }

    fn parameters(&self) -> Vec<Value> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn n_in(&self) -> usize {
        self.n_in
    }

    fn n_out(&self) -> usize {
        self.neurons.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::NodeArena;

    fn constant_layer(params: &mut NodeArena, n_in: usize, n_out: usize) -> Layer {
        let neurons = (0..n_out)
            .map(|j| {
                Neuron::from_fn(params, n_in, &format!("L0.N{}", j), || j as f64)
            })
            .collect();
        Layer::new(neurons, Activation::Relu)
    }

    #[test]
    fn test_validate_configs() {
        let ok = [
            LayerConfig::new(2, 3, Activation::Tanh),
            LayerConfig::new(3, 1, Activation::Linear),
        ];
        assert!(validate_configs(&ok).is_ok());

        let broken_chain = [
            LayerConfig::new(2, 3, Activation::Tanh),
            LayerConfig::new(4, 1, Activation::Linear),
        ];
        assert!(matches!(
            validate_configs(&broken_chain),
            Err(ArenagradError::InvalidConfig(_))
        ));
        assert!(validate_configs(&[]).is_err());
        assert!(validate_configs(&[LayerConfig::new(0, 1, Activation::Relu)]).is_err());
    }

    #[test]
    fn test_layer_forward_applies_every_neuron() {
        let mut params = NodeArena::params();
        let mut tape = NodeArena::tape();
        let layer = constant_layer(&mut params, 2, 3);
        assert_eq!(layer.config(), LayerConfig::new(2, 3, Activation::Relu));
        assert_eq!(layer.parameters().len(), 9);

        let mut g = Graph::new(&mut params, &mut tape);
        let x = g.inputs(&[1.0, 1.0]);
        let y = layer.forward(&mut g, &x);
        // neuron j: relu(j*1 + j*1 + j)
        assert_eq!(g.data_of(&y), vec![0.0, 3.0, 6.0]);
    }

    #[test]
    #[should_panic(expected = "Dimension mismatch in layer forward")]
    fn test_layer_rejects_wrong_width() {
        let mut params = NodeArena::params();
        let mut tape = NodeArena::tape();
        let layer = constant_layer(&mut params, 2, 1);
        let mut g = Graph::new(&mut params, &mut tape);
        let x = g.inputs(&[1.0]);
        let _ = layer.forward(&mut g, &x);
    }
}
