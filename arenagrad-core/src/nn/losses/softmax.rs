use super::max_data;
use crate::autograd::Graph;
use crate::value::Value;

/// Numerically stable softmax.
///
/// The largest logit is subtracted (as a constant) before `exp`, so the sum
/// is at least 1 and no exponential overflows.
pub fn softmax(graph: &mut Graph<'_>, logits: &[Value]) -> Vec<Value> {
    if logits.is_empty() {
        return Vec::new();
    }
    let exps = shifted_exps(graph, logits);
    let total = graph.sum(&exps);
    exps.iter().map(|&e| graph.div(e, total)).collect()
}

/// `exp(logit_i - max)` for every logit.
pub(crate) fn shifted_exps(graph: &mut Graph<'_>, logits: &[Value]) -> Vec<Value> {
    let max = max_data(graph, logits);
    let max = graph.constant(max);
    logits
        .iter()
        .map(|&l| {
            let shifted = graph.sub(l, max);
            graph.exp(shifted)
        })
        .collect()
}
