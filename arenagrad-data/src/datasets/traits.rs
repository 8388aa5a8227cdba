use arenagrad_core::ArenagradError;

/// Represents a dataset that can be accessed by index.
///
/// `Item` is whatever one sample is; for a labeled corpus it is usually an
/// `(inputs, label)` pair.
pub trait Dataset {
    type Item;

    /// Returns the item at the given index.
    ///
    /// # Errors
    ///
    /// Returns `ArenagradError::IndexOutOfBounds` if the index is out of
    /// bounds.
    fn get(&self, index: usize) -> Result<Self::Item, ArenagradError>;

    /// Returns the total number of items in the dataset.
    fn len(&self) -> usize;

    /// Checks if the dataset is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
