use crate::autograd::Graph;
use crate::error::ArenagradError;
use crate::value::Value;
use std::fmt;

/// Nonlinearity applied uniformly to every neuron of a layer.
///
/// The discriminants are the codes stored in model files and must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Activation {
    Tanh = 0,
    Relu = 1,
    Sigmoid = 2,
    Linear = 3,
}

impl Activation {
    pub fn code(self) -> u32 {
        self as u32
    }

    pub fn from_code(code: u32) -> Result<Self, ArenagradError> {
        match code {
            0 => Ok(Activation::Tanh),
            1 => Ok(Activation::Relu),
            2 => Ok(Activation::Sigmoid),
            3 => Ok(Activation::Linear),
            other => Err(ArenagradError::UnknownActivation(other)),
        }
    }

    /// Applies the activation to `v`. `Linear` records nothing and returns `v`.
    pub fn apply(self, graph: &mut Graph<'_>, v: Value) -> Value {
        match self {
            Activation::Tanh => graph.tanh(v),
            Activation::Relu => graph.relu(v),
            Activation::Sigmoid => graph.sigmoid(v),
            Activation::Linear => v,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Activation::Tanh => "tanh",
            Activation::Relu => "relu",
            Activation::Sigmoid => "sigmoid",
            Activation::Linear => "linear",
        }
    }
}

impl TryFrom<u32> for Activation {
    type Error = ArenagradError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        Activation::from_code(code)
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
