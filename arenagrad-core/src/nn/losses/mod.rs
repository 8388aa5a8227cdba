//! Loss and normalization functions built purely from value operations.

pub mod cross_entropy;
pub mod mse;
pub mod softmax;

pub use cross_entropy::cross_entropy;
pub use mse::mse;
pub use softmax::softmax;

use crate::autograd::Graph;
use crate::error::{fatal, ArenagradError};
use crate::value::Value;

/// Index of the largest value; the lowest index wins ties.
///
/// # Panics
/// If `values` is empty.
pub fn argmax(graph: &Graph<'_>, values: &[Value]) -> usize {
    if values.is_empty() {
        fatal(ArenagradError::DimensionMismatch {
            expected: 1,
            actual: 0,
            operation: "argmax".to_string(),
        });
    }
    let mut best = 0;
    let mut best_data = graph.data(values[0]);
    for (i, &v) in values.iter().enumerate().skip(1) {
        let d = graph.data(v);
        if d > best_data {
            best = i;
            best_data = d;
        }
    }
    best
}

/// Largest data among `values`, used to shift logits before `exp`.
pub(crate) fn max_data(graph: &Graph<'_>, values: &[Value]) -> f64 {
    values
        .iter()
        .map(|&v| graph.data(v))
        .fold(f64::NEG_INFINITY, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::NodeArena;

    #[test]
    fn test_argmax_prefers_lowest_index_on_ties() {
        let mut params = NodeArena::params();
        let mut tape = NodeArena::tape();
        let mut g = Graph::new(&mut params, &mut tape);
        let v = g.inputs(&[0.1, 0.9, 0.9, -2.0]);
        assert_eq!(argmax(&g, &v), 1);
    }

    #[test]
    #[should_panic(expected = "Dimension mismatch in argmax")]
    fn test_argmax_of_nothing_is_fatal() {
        let mut params = NodeArena::params();
        let mut tape = NodeArena::tape();
        let g = Graph::new(&mut params, &mut tape);
        let _ = argmax(&g, &[]);
    }
}
