use crate::error::{fatal, ArenagradError};
use crate::ops;
use crate::value::{Node, NodeArena, Space, Value, ValueKind};

/// Read access to nodes across both arenas.
///
/// Implemented by the mutable [`Graph`] and the shared [`GraphView`], so
/// traversals and export work with either.
pub trait NodeLookup {
    fn node(&self, v: Value) -> &Node;
}

fn check_spaces(params: &NodeArena, tape: &NodeArena) {
    if params.space() != Space::Params {
        fatal(ArenagradError::WrongSpace {
            expected: Space::Params,
            actual: params.space(),
        });
    }
    if tape.space() != Space::Tape {
        fatal(ArenagradError::WrongSpace {
            expected: Space::Tape,
            actual: tape.space(),
        });
    }
}

/// Shared, read-only view over a parameter arena and a tape.
#[derive(Debug, Clone, Copy)]
pub struct GraphView<'a> {
    params: &'a NodeArena,
    tape: &'a NodeArena,
}

impl<'a> GraphView<'a> {
    pub fn new(params: &'a NodeArena, tape: &'a NodeArena) -> Self {
        check_spaces(params, tape);
        GraphView { params, tape }
    }

    #[track_caller]
    pub fn node(&self, v: Value) -> &'a Node {
        match v.space() {
            Space::Params => self.params.node(v),
            Space::Tape => self.tape.node(v),
        }
    }
}

impl NodeLookup for GraphView<'_> {
    fn node(&self, v: Value) -> &Node {
        GraphView::node(self, v)
    }
}

/// Mutable view over a parameter arena and a tape.
///
/// Every operator constructor allocates its result on the tape. Operands may
/// come from either arena, so a `Graph` can combine model parameters with
/// per-example inputs, and backward can push gradients into both.
#[derive(Debug)]
pub struct Graph<'a> {
    params: &'a mut NodeArena,
    tape: &'a mut NodeArena,
}

impl<'a> Graph<'a> {
    pub fn new(params: &'a mut NodeArena, tape: &'a mut NodeArena) -> Self {
        check_spaces(params, tape);
        Graph { params, tape }
    }

    fn arena(&self, space: Space) -> &NodeArena {
        match space {
            Space::Params => &*self.params,
            Space::Tape => &*self.tape,
        }
    }

    fn arena_mut(&mut self, space: Space) -> &mut NodeArena {
        match space {
            Space::Params => &mut *self.params,
            Space::Tape => &mut *self.tape,
        }
    }

    #[track_caller]
    pub fn node(&self, v: Value) -> &Node {
        self.arena(v.space()).node(v)
    }

    #[track_caller]
    pub fn node_mut(&mut self, v: Value) -> &mut Node {
        self.arena_mut(v.space()).node_mut(v)
    }

    /// Borrows both arenas read-only.
    pub fn view(&self) -> GraphView<'_> {
        GraphView {
            params: &*self.params,
            tape: &*self.tape,
        }
    }

    pub fn contains(&self, v: Value) -> bool {
        self.arena(v.space()).contains(v)
    }

    // --- Accessors ---

    pub fn data(&self, v: Value) -> f64 {
        self.node(v).data
    }

    pub fn grad(&self, v: Value) -> f64 {
        self.node(v).grad
    }

    pub fn set_data(&mut self, v: Value, data: f64) {
        self.node_mut(v).data = data;
    }

    pub fn set_grad(&mut self, v: Value, grad: f64) {
        self.node_mut(v).grad = grad;
    }

    pub fn kind(&self, v: Value) -> ValueKind {
        self.node(v).kind
    }

    pub fn set_kind(&mut self, v: Value, kind: ValueKind) {
        self.node_mut(v).kind = kind;
    }

    pub fn label(&self, v: Value) -> Option<&str> {
        self.node(v).label()
    }

    pub fn set_label(&mut self, v: Value, label: impl Into<String>) {
        self.node_mut(v).set_label(label);
    }

    /// Data of several values, in order.
    pub fn data_of(&self, values: &[Value]) -> Vec<f64> {
        values.iter().map(|&v| self.data(v)).collect()
    }

    /// Number of nodes currently on the tape.
    pub fn tape_len(&self) -> usize {
        self.tape.len()
    }

    // --- Leaves ---

    /// A tape leaf without a diagnostic role.
    pub fn leaf(&mut self, data: f64) -> Value {
        self.tape.leaf(data, ValueKind::None)
    }

    /// A tape leaf fed from a data sample.
    pub fn input(&mut self, data: f64) -> Value {
        self.tape.leaf(data, ValueKind::Input)
    }

    pub fn inputs(&mut self, data: &[f64]) -> Vec<Value> {
        self.tape.inputs(data)
    }

    /// A labeled tape leaf holding a literal.
    pub fn constant(&mut self, data: f64) -> Value {
        let v = self.tape.leaf(data, ValueKind::None);
        self.tape.node_mut(v).set_label(format!("{}", data));
        v
    }

    /// A parameter leaf; lives as long as the parameter arena.
    pub fn param(&mut self, data: f64) -> Value {
        self.params.leaf(data, ValueKind::Param)
    }

    /// Appends a finished node to the tape.
    pub(crate) fn record(&mut self, node: Node) -> Value {
        self.tape.push(node)
    }

    /// Adds `delta` to the gradient of `v`.
    #[inline]
    pub(crate) fn accumulate(&mut self, v: Value, delta: f64) {
        self.node_mut(v).grad += delta;
    }

    // --- Operators (see `crate::ops`) ---

    pub fn add(&mut self, a: Value, b: Value) -> Value {
        ops::arithmetic::add_op(self, a, b)
    }

    pub fn sub(&mut self, a: Value, b: Value) -> Value {
        ops::arithmetic::sub_op(self, a, b)
    }

    pub fn mul(&mut self, a: Value, b: Value) -> Value {
        ops::arithmetic::mul_op(self, a, b)
    }

    pub fn div(&mut self, a: Value, b: Value) -> Value {
        ops::arithmetic::div_op(self, a, b)
    }

    pub fn pow(&mut self, a: Value, b: Value) -> Value {
        ops::arithmetic::pow_op(self, a, b)
    }

    pub fn neg(&mut self, a: Value) -> Value {
        ops::arithmetic::neg_op(self, a)
    }

    pub fn exp(&mut self, a: Value) -> Value {
        ops::math_elem::exp_op(self, a)
    }

    pub fn log(&mut self, a: Value) -> Value {
        ops::math_elem::ln_op(self, a)
    }

    pub fn tanh(&mut self, a: Value) -> Value {
        ops::activation::tanh_op(self, a)
    }

    pub fn sigmoid(&mut self, a: Value) -> Value {
        ops::activation::sigmoid_op(self, a)
    }

    pub fn relu(&mut self, a: Value) -> Value {
        ops::activation::relu_op(self, a)
    }

    /// Chained sum of `values`, started from a zero [`ValueKind::Seed`] node.
    pub fn sum(&mut self, values: &[Value]) -> Value {
        let mut acc = self.tape.leaf(0.0, ValueKind::Seed);
        for &v in values {
            acc = self.add(acc, v);
        }
        acc
    }
}

impl NodeLookup for Graph<'_> {
    fn node(&self, v: Value) -> &Node {
        Graph::node(self, v)
    }
}
