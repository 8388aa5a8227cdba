use crate::autograd::Graph;
use crate::value::{Node, Op, Value};

/// Records `tanh(a)`.
pub fn tanh_op(graph: &mut Graph<'_>, a: Value) -> Value {
    let data = graph.data(a).tanh();
    graph.record(Node::unary(data, Op::Tanh, a))
}

/// d(tanh a)/da = 1 - tanh(a)^2
pub(crate) fn tanh_backward(graph: &mut Graph<'_>, out: f64, grad: f64, a: Value) {
    graph.accumulate(a, (1.0 - out * out) * grad);
}
