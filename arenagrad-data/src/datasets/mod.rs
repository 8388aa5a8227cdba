pub mod idx;
pub mod mnist;
pub mod traits;

pub use mnist::MnistDataset;
pub use traits::Dataset;
