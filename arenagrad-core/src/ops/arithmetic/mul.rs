use crate::autograd::Graph;
use crate::value::{Node, Op, Value};

/// Records `a * b`.
pub fn mul_op(graph: &mut Graph<'_>, a: Value, b: Value) -> Value {
    let data = graph.data(a) * graph.data(b);
    graph.record(Node::binary(data, Op::Mul, a, b))
}

/// d(ab)/da = b, d(ab)/db = a
pub(crate) fn mul_backward(graph: &mut Graph<'_>, grad: f64, a: Value, b: Value) {
    let a_data = graph.data(a);
    let b_data = graph.data(b);
    graph.accumulate(a, b_data * grad);
    graph.accumulate(b, a_data * grad);
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
