//! Graph nodes and the handles used to address them.
//!
//! A [`Value`] is a small `Copy` handle naming a slot in one of two arenas:
//! the long-lived parameter arena owned by a model, or the per-example tape.
//! The node itself ([`Node`]) lives in the arena and is only reachable through
//! a [`NodeArena`] or a [`Graph`](crate::autograd::Graph).

use crate::error::{fatal, ArenagradError};
use crate::memory::Arena;
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_ARENA_ID: AtomicU32 = AtomicU32::new(0);

/// Which arena a [`Value`] lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Space {
    /// Long-lived model parameters.
    Params,
    /// Per-example computation graph, reset after every backward pass.
    Tape,
}

/// Handle to a node in a [`NodeArena`].
///
/// The handle records which arena minted it and in which generation; once
/// that arena is reset the handle is stale, and presenting it to any other
/// arena is a foreign access. Both are fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Value {
    space: Space,
    arena: u32,
    generation: u32,
    index: usize,
}

impl Value {
    pub fn space(&self) -> Space {
        self.space
    }

    /// Id of the [`NodeArena`] this handle belongs to.
    pub fn arena(&self) -> u32 {
        self.arena
    }

    /// Slot of this node inside its arena.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

/// Diagnostic role of a node. Has no effect on computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueKind {
    /// Weight or bias owned by a model.
    Param,
    /// Leaf fed in from a data sample.
    Input,
    /// Zero accumulator that starts a chained sum.
    Seed,
    #[default]
    None,
}

/// Operation that produced a node; selects the gradient rule in backward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    None,
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Neg,
    Exp,
    Log,
    Tanh,
    Sigmoid,
    Relu,
}

impl Op {
    /// Number of operands the op consumes.
    pub fn arity(self) -> usize {
        match self {
            Op::None => 0,
            Op::Neg | Op::Exp | Op::Log | Op::Tanh | Op::Sigmoid | Op::Relu => 1,
            Op::Add | Op::Sub | Op::Mul | Op::Div | Op::Pow => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Op::None => "NONE",
            Op::Add => "ADD",
            Op::Sub => "SUB",
            Op::Mul => "MUL",
            Op::Div => "DIV",
            Op::Pow => "POW",
            Op::Neg => "NEG",
            Op::Exp => "EXP",
            Op::Log => "LOG",
            Op::Tanh => "TANH",
            Op::Sigmoid => "SIGMOID",
            Op::Relu => "RELU",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Operand list of a node, sized by the arity of its op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operands {
    None,
    Unary(Value),
    Binary(Value, Value),
}

impl Operands {
    pub fn len(self) -> usize {
        match self {
            Operands::None => 0,
            Operands::Unary(_) => 1,
            Operands::Binary(_, _) => 2,
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Operands::None)
    }

    /// Operands in order (left before right).
    pub fn iter(self) -> impl Iterator<Item = Value> {
        let pair = match self {
            Operands::None => [None, None],
            Operands::Unary(a) => [Some(a), None],
            Operands::Binary(a, b) => [Some(a), Some(b)],
        };
        pair.into_iter().flatten()
    }
}

/// A scalar in the computation graph.
#[derive(Debug, Clone)]
pub struct Node {
    pub data: f64,
    pub grad: f64,
    pub kind: ValueKind,
    op: Op,
    operands: Operands,
    label: Option<Box<str>>,
}

impl Node {
    /// A node without operands (input, parameter or constant).
    pub fn leaf(data: f64, kind: ValueKind) -> Self {
        Node {
            data,
            grad: 0.0,
            kind,
            op: Op::None,
            operands: Operands::None,
            label: None,
        }
    }

    pub(crate) fn unary(data: f64, op: Op, a: Value) -> Self {
        debug_assert_eq!(op.arity(), 1);
        Node {
            op,
            operands: Operands::Unary(a),
            ..Node::leaf(data, ValueKind::None)
        }
    }

    pub(crate) fn binary(data: f64, op: Op, a: Value, b: Value) -> Self {
        debug_assert_eq!(op.arity(), 2);
        Node {
            op,
            operands: Operands::Binary(a, b),
            ..Node::leaf(data, ValueKind::None)
        }
    }

    pub fn op(&self) -> Op {
        self.op
    }

    pub fn operands(&self) -> Operands {
        self.operands
    }

    pub fn is_leaf(&self) -> bool {
        self.operands.is_empty()
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = Some(label.into().into_boxed_str());
    }
}

/// An [`Arena`] of [`Node`]s bound to one [`Space`].
///
/// All node access goes through [`NodeArena::node`] / [`NodeArena::node_mut`],
/// which reject handles minted by another arena or in an earlier generation.
/// Every arena gets a process-unique id at construction.
#[derive(Debug)]
pub struct NodeArena {
    space: Space,
    id: u32,
    nodes: Arena<Node>,
}

impl NodeArena {
    pub fn new(space: Space) -> Self {
        NodeArena {
            space,
            id: NEXT_ARENA_ID.fetch_add(1, Ordering::Relaxed),
            nodes: Arena::new(),
        }
    }

    /// Arena for long-lived model parameters.
    pub fn params() -> Self {
        Self::new(Space::Params)
    }

    /// Arena for a per-example graph.
    pub fn tape() -> Self {
        Self::new(Space::Tape)
    }

    pub fn space(&self) -> Space {
        self.space
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// Stores `node` and returns its handle.
    pub fn push(&mut self, node: Node) -> Value {
        let index = self.nodes.alloc(node);
        Value {
            space: self.space,
            arena: self.id,
            generation: self.nodes.generation(),
            index,
        }
    }

    /// Allocates a leaf holding `data`.
    pub fn leaf(&mut self, data: f64, kind: ValueKind) -> Value {
        self.push(Node::leaf(data, kind))
    }

    /// Allocates one [`ValueKind::Input`] leaf per element of `data`.
    pub fn inputs(&mut self, data: &[f64]) -> Vec<Value> {
        data.iter()
            .map(|&x| self.leaf(x, ValueKind::Input))
            .collect()
    }

    /// True if `v` addresses a live node of this arena.
    pub fn contains(&self, v: Value) -> bool {
        v.arena == self.id
            && v.space == self.space
            && v.generation == self.nodes.generation()
            && v.index < self.nodes.len()
    }

    #[track_caller]
    fn check(&self, v: Value) {
        if v.arena != self.id || v.space != self.space {
            fatal(ArenagradError::ForeignHandle {
                expected: self.space,
                expected_arena: self.id,
                actual: v.space,
                actual_arena: v.arena,
            });
        }
        if v.generation != self.nodes.generation() || v.index >= self.nodes.len() {
            fatal(ArenagradError::StaleHandle {
                space: v.space,
                index: v.index,
                handle_generation: v.generation,
                arena_generation: self.nodes.generation(),
            });
        }
    }

    #[track_caller]
    pub fn node(&self, v: Value) -> &Node {
        self.check(v);
        &self.nodes[v.index]
    }

    #[track_caller]
    pub fn node_mut(&mut self, v: Value) -> &mut Node {
        self.check(v);
        &mut self.nodes[v.index]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub fn generation(&self) -> u32 {
        self.nodes.generation()
    }

    /// Discards every node; handles minted so far become stale.
    pub fn reset(&mut self) {
        self.nodes.reset();
    }

    /// Frees the backing storage; the arena cannot be used afterwards.
    pub fn release(&mut self) {
        self.nodes.release();
    }
}
