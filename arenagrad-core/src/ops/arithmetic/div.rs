use crate::autograd::Graph;
use crate::error::{fatal, ArenagradError};
use crate::value::{Node, Op, Value};

/// Records `a / b`.
///
/// # Panics
/// If `b` holds exactly zero when the node is built.
pub fn div_op(graph: &mut Graph<'_>, a: Value, b: Value) -> Value {
    let b_data = graph.data(b);
    if b_data == 0.0 {
        fatal(ArenagradError::DivisionByZero);
    }
    let data = graph.data(a) / b_data;
    graph.record(Node::binary(data, Op::Div, a, b))
}

/// d(a/b)/da = 1/b, d(a/b)/db = -a/b^2
pub(crate) fn div_backward(graph: &mut Graph<'_>, grad: f64, a: Value, b: Value) {
    let a_data = graph.data(a);
    let b_data = graph.data(b);
    graph.accumulate(a, grad / b_data);
    graph.accumulate(b, -a_data / (b_data * b_data) * grad);
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
