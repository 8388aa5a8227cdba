use super::graph::{Graph, NodeLookup};
use crate::ops::{activation, arithmetic, math_elem};
use crate::value::{Op, Operands, Value};
use std::collections::HashSet;

/// Orders every node reachable from `root` so that each node comes after all
/// of its operands.
///
/// Iterative post-order depth-first walk with an explicit stack. A node is
/// marked on first expansion and emitted once all of its operands have been
/// emitted, so shared sub-expressions are emitted exactly once.
pub fn topological_order<G: NodeLookup + ?Sized>(graph: &G, root: Value) -> Vec<Value> {
    let mut order = Vec::new();
    let mut visited: HashSet<Value> = HashSet::new();
    // (node, operands already pushed)
    let mut stack: Vec<(Value, bool)> = vec![(root, false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            order.push(node);
            continue;
        }
        if !visited.insert(node) {
            continue;
        }
        stack.push((node, true));
        for operand in graph.node(node).operands().iter() {
            if !visited.contains(&operand) {
                stack.push((operand, false));
            }
        }
    }
    order
}

impl Graph<'_> {
    /// Reverse-mode differentiation from `root`.
    ///
    /// Seeds `root.grad = 1.0` and runs every reachable node's gradient rule
    /// in reverse topological order, so a node propagates only after all of
    /// its consumers have contributed to it. Gradients of leaves accumulate,
    /// which is why parameters must be zeroed between steps.
    pub fn backward(&mut self, root: Value) {
        let order = topological_order(&*self, root);
        log::trace!("backward: {} reachable nodes", order.len());

        self.set_grad(root, 1.0);
        for &node in order.iter().rev() {
            apply_backward_rule(self, node);
        }
    }
}

/// Propagates the gradient of `node` into its operands according to its op.
fn apply_backward_rule(graph: &mut Graph<'_>, node: Value) {
    let (op, operands, out, grad) = {
        let n = graph.node(node);
        (n.op(), n.operands(), n.data, n.grad)
    };

    match (op, operands) {
        (Op::None, _) => {}
        (Op::Add, Operands::Binary(a, b)) => arithmetic::add::add_backward(graph, grad, a, b),
        (Op::Sub, Operands::Binary(a, b)) => arithmetic::sub::sub_backward(graph, grad, a, b),
        (Op::Mul, Operands::Binary(a, b)) => arithmetic::mul::mul_backward(graph, grad, a, b),
        (Op::Div, Operands::Binary(a, b)) => arithmetic::div::div_backward(graph, grad, a, b),
        (Op::Pow, Operands::Binary(a, b)) => {
            arithmetic::pow::pow_backward(graph, out, grad, a, b)
        }
        (Op::Neg, Operands::Unary(a)) => arithmetic::neg::neg_backward(graph, grad, a),
        (Op::Exp, Operands::Unary(a)) => math_elem::exp::exp_backward(graph, out, grad, a),
        (Op::Log, Operands::Unary(a)) => math_elem::ln::ln_backward(graph, grad, a),
        (Op::Tanh, Operands::Unary(a)) => activation::tanh::tanh_backward(graph, out, grad, a),
        (Op::Sigmoid, Operands::Unary(a)) => {
            activation::sigmoid::sigmoid_backward(graph, out, grad, a)
        }
        (Op::Relu, Operands::Unary(a)) => activation::relu::relu_backward(graph, grad, a),
        (op, operands) => {
            // Nodes are only built through the op constructors, which always
            // record the right arity.
            log::warn!(
                "backward: op {} recorded with {} operands, skipping",
                op,
                operands.len()
            );
        }
    }
}

#[cfg(test)]
#[path = "backward_test.rs"]
mod tests;
