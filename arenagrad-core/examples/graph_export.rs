//! # Graph export
//!
//! Records one forward/backward pass of a tiny network and writes the
//! resulting graph as Graphviz text. If the `dot` binary is on the `PATH`, a
//! PNG is rendered next to it.
//!
//! `cargo run --example graph_export -- [output_stem]`

use arenagrad_core::export::{export_dot, render_png};
use arenagrad_core::nn::losses::mse;
use arenagrad_core::{Activation, ArenagradError, LayerConfig, Network, NodeArena};

fn main() -> Result<(), ArenagradError> {
    env_logger::init();
    let stem = std::env::args().nth(1).unwrap_or_else(|| "graph".to_string());
    let dot_path = format!("{}.dot", stem);
    let png_path = format!("{}.png", stem);

    let configs = [
        LayerConfig::new(2, 2, Activation::Tanh),
        LayerConfig::new(2, 1, Activation::Linear),
    ];
    let mut net = Network::seeded(&configs, 7);
    let mut tape = NodeArena::tape();

    let inputs = tape.inputs(&[1.0, 0.0]);
    let out = net.forward(&mut tape, &inputs);
    let mut graph = net.graph(&mut tape);
    let loss = mse(&mut graph, &out, &[1.0]);
    graph.set_label(loss, "loss");
    graph.backward(loss);

    export_dot(&graph, loss, &dot_path)?;
    println!("Wrote {} ({} tape nodes)", dot_path, graph.tape_len());

    match render_png(&dot_path, &png_path) {
        Ok(()) => println!("DAG exported to {}", png_path),
        Err(e) => log::warn!("skipping PNG: {}", e),
    }
    Ok(())
}
