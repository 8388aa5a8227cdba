//! Dataset access for `arenagrad`: the IDX image/label corpus format and
//! index samplers for driving a per-example training loop.

pub mod datasets;
pub mod samplers;

pub use datasets::{Dataset, MnistDataset};
pub use samplers::{RandomSampler, Sampler, SequentialSampler};
