use crate::autograd::Graph;
use crate::value::{Node, Op, Value};

/// Records `a + b`.
pub fn add_op(graph: &mut Graph<'_>, a: Value, b: Value) -> Value {
    let data = graph.data(a) + graph.data(b);
    graph.record(Node::binary(data, Op::Add, a, b))
}

/// d(a+b)/da = 1, d(a+b)/db = 1
pub(crate) fn add_backward(graph: &mut Graph<'_>, grad: f64, a: Value, b: Value) {
    graph.accumulate(a, grad);
    graph.accumulate(b, grad);
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
