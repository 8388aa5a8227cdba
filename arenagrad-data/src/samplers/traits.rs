use std::fmt::Debug;

/// Defines the order in which a training loop visits dataset indices.
pub trait Sampler: Debug + Send + Sync {
    /// Returns an iterator over the indices of a dataset.
    ///
    /// # Arguments
    ///
    /// * `dataset_len` - The total number of items in the dataset.
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync>;

    /// Returns the number of indices [`Sampler::iter`] yields for a dataset
    /// of `dataset_len` items.
    fn len(&self, dataset_len: usize) -> usize;
}
