use super::traits::Sampler;

/// Visits dataset indices in order, optionally stopping after a prefix.
///
/// `SequentialSampler::new()` covers the whole dataset;
/// `SequentialSampler::first(n)` covers indices `0..min(n, dataset_len)`,
/// which is how evaluation runs over a fixed leading slice of a test set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequentialSampler {
    limit: Option<usize>,
}

impl SequentialSampler {
    pub fn new() -> Self {
        SequentialSampler { limit: None }
    }

    pub fn first(limit: usize) -> Self {
        SequentialSampler { limit: Some(limit) }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}

impl Sampler for SequentialSampler {
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync> {
        Box::new(0..self.len(dataset_len))
    }

    fn len(&self, dataset_len: usize) -> usize {
        self.limit.map_or(dataset_len, |n| n.min(dataset_len))
    }
}

#[cfg(test)]
#[path = "sequential_sampler_test.rs"]
mod tests;
