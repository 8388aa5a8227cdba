//! Graphviz export.
//!
//! Walks the nodes reachable from a root (the same order backward uses) and
//! writes one box per node with its label, data, grad and op. Nothing in the
//! graph is modified.

use crate::autograd::{topological_order, NodeLookup};
use crate::error::ArenagradError;
use crate::value::{Node, Op, Space, Value, ValueKind};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::process::Command;

fn op_color(op: Op) -> &'static str {
    match op {
        Op::Add => "lightgreen",
        Op::Sub => "orange",
        Op::Mul => "lightblue",
        Op::Div => "pink",
        Op::Tanh => "yellow",
        Op::Pow => "violet",
        _ => "white",
    }
}

fn kind_color(kind: ValueKind) -> &'static str {
    match kind {
        ValueKind::Input => "gold",
        ValueKind::Param => "lightcyan",
        ValueKind::Seed => "lightpink",
        ValueKind::None => "white",
    }
}

fn node_color(node: &Node) -> &'static str {
    if node.is_leaf() {
        kind_color(node.kind)
    } else {
        op_color(node.op())
    }
}

/// Stable node id: `p<index>` for parameters, `t<index>` for tape nodes.
fn node_id(v: Value) -> String {
    match v.space() {
        Space::Params => format!("p{}", v.index()),
        Space::Tape => format!("t{}", v.index()),
    }
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Writes the graph reachable from `root` as a Graphviz `digraph`.
///
/// Accepts a [`Graph`](crate::autograd::Graph) or, when only shared access
/// to the arenas is available, a [`GraphView`](crate::autograd::GraphView).
pub fn write_dot<G, W>(graph: &G, root: Value, mut w: W) -> Result<(), ArenagradError>
where
    G: NodeLookup + ?Sized,
    W: Write,
{
    writeln!(w, "digraph G {{")?;
    writeln!(w, "  node [shape=box, fontname=\"Courier\"];")?;
    for v in topological_order(graph, root) {
        let node = graph.node(v);
        let id = node_id(v);
        let prefix = match node.label() {
            Some(label) => format!("{}\\n", escape(label)),
            None => String::new(),
        };
        writeln!(
            w,
            "  {} [label=\"{}data={:.4}\\ngrad={:.4}\\nop={}\", style=filled, fillcolor={}];",
            id,
            prefix,
            node.data,
            node.grad,
            node.op(),
            node_color(node)
        )?;
        for operand in node.operands().iter() {
            writeln!(w, "  {} -> {};", node_id(operand), id)?;
        }
    }
    writeln!(w, "}}")?;
    w.flush()?;
    Ok(())
}

/// Writes the graph reachable from `root` to a `.dot` file at `path`.
pub fn export_dot<G, P>(graph: &G, root: Value, path: P) -> Result<(), ArenagradError>
where
    G: NodeLookup + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::create(path)?;
    write_dot(graph, root, BufWriter::new(file))?;
    log::debug!("wrote graph to {}", path.display());
    Ok(())
}

/// Renders a `.dot` file to PNG with the external `dot -Tpng` command.
pub fn render_png<P: AsRef<Path>, Q: AsRef<Path>>(dot_path: P, png_path: Q) -> Result<(), ArenagradError> {
    let dot_path = dot_path.as_ref();
    let png_path = png_path.as_ref();
    let output = Command::new("dot")
        .arg("-Tpng")
        .arg(dot_path)
        .arg("-o")
        .arg(png_path)
        .output()
        .map_err(|e| ArenagradError::RenderFailed(format!("could not run dot: {}", e)))?;
    if !output.status.success() {
        return Err(ArenagradError::RenderFailed(format!(
            "dot exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }
    log::info!("rendered {}", png_path.display());
    Ok(())
}

#[cfg(test)]
#[path = "dot_test.rs"]
mod tests;
