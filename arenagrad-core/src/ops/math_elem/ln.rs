use crate::autograd::Graph;
use crate::error::{fatal, ArenagradError};
use crate::value::{Node, Op, Value};

/// Records the natural logarithm of `a`.
///
/// # Panics
/// If `a` is not strictly positive when the node is built.
pub fn ln_op(graph: &mut Graph<'_>, a: Value) -> Value {
    let a_data = graph.data(a);
    if a_data <= 0.0 {
        fatal(ArenagradError::LogDomain { value: a_data });
    }
    graph.record(Node::unary(a_data.ln(), Op::Log, a))
}

/// d(ln a)/da = 1/a
pub(crate) fn ln_backward(graph: &mut Graph<'_>, grad: f64, a: Value) {
    let a_data = graph.data(a);
    graph.accumulate(a, grad / a_data);
}

#[cfg(test)]
#[path = "ln_test.rs"]
mod tests;
