use crate::autograd::Graph;
use crate::error::{fatal, ArenagradError};
use crate::value::Value;

/// Mean squared error between `pred` and the constant `target`:
/// `sum((pred_i - target_i)^2) / n`.
///
/// # Panics
/// If the lengths differ or the slices are empty.
pub fn mse(graph: &mut Graph<'_>, pred: &[Value], target: &[f64]) -> Value {
    if pred.len() != target.len() || pred.is_empty() {
        fatal(ArenagradError::DimensionMismatch {
            expected: pred.len().max(1),
            actual: target.len(),
            operation: "mse".to_string(),
        });
    }
    let two = graph.constant(2.0);
    let mut squares = Vec::with_capacity(pred.len());
    for (&p, &t) in pred.iter().zip(target) {
        let t = graph.constant(t);
        let diff = graph.sub(p, t);
        squares.push(graph.pow(diff, two));
    }
    let total = graph.sum(&squares);
    let n = graph.constant(pred.len() as f64);
    graph.div(total, n)
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
