use super::softmax::shifted_exps;
use crate::autograd::Graph;
use crate::error::{fatal, ArenagradError};
use crate::value::Value;

/// `-ln(softmax(logits)[target])`, built from a max-shifted softmax.
///
/// # Panics
/// If `target` is not a valid index into `logits`, or if the target
/// probability underflows to zero.
pub fn cross_entropy(graph: &mut Graph<'_>, logits: &[Value], target: usize) -> Value {
    if target >= logits.len() {
        fatal(ArenagradError::TargetOutOfRange {
            index: target,
            classes: logits.len(),
        });
    }
    let exps = shifted_exps(graph, logits);
    let total = graph.sum(&exps);
    let p = graph.div(exps[target], total);
    let log_p = graph.log(p);
    graph.neg(log_p)
}

#[cfg(test)]
#[path = "cross_entropy_test.rs"]
mod tests;
