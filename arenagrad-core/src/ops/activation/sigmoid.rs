use crate::autograd::Graph;
use crate::value::{Node, Op, Value};

/// Records `1 / (1 + e^-a)`.
pub fn sigmoid_op(graph: &mut Graph<'_>, a: Value) -> Value {
    let data = 1.0 / (1.0 + (-graph.data(a)).exp());
    graph.record(Node::unary(data, Op::Sigmoid, a))
}

/// d(sigmoid a)/da = s * (1 - s)
pub(crate) fn sigmoid_backward(graph: &mut Graph<'_>, out: f64, grad: f64, a: Value) {
    graph.accumulate(a, out * (1.0 - out) * grad);
}
