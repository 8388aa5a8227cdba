//! Trainable models built from value operations.
//!
//! A [`Network`] owns a parameter arena and an ordered list of [`Layer`]s;
//! every forward pass records onto a caller-supplied tape.

pub mod activation;
pub mod init;
pub mod layer;
pub mod losses;
pub mod module;
pub mod network;
pub mod neuron;
pub mod serialize;

pub use activation::Activation;
pub use init::Init;
pub use layer::{Layer, LayerConfig};
pub use module::Module;
pub use network::Network;
pub use neuron::Neuron;
