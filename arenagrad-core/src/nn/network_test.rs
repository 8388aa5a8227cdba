use super::*;
use crate::nn::Activation;
use approx::assert_relative_eq;

fn xor_configs() -> [LayerConfig; 2] {
    [
        LayerConfig::new(2, 4, Activation::Tanh),
        LayerConfig::new(4, 2, Activation::Linear),
    ]
}

#[test]
fn test_shape_and_parameter_count() {
    let net = Network::seeded(&xor_configs(), 1);
    assert_eq!(net.n_in(), 2);
    assert_eq!(net.n_out(), 2);
    assert_eq!(net.layers().len(), 2);
    assert_eq!(net.parameter_count(), 4 * 3 + 2 * 5);
    assert_eq!(net.parameters().len(), net.parameter_count());
    assert_eq!(net.params().len(), net.parameter_count());
    assert_eq!(net.configs(), xor_configs().to_vec());
}

#[test]
fn test_initial_weights_are_in_unit_range() {
    let net = Network::seeded(&xor_configs(), 9);
    for v in net.parameters() {
        let w = net.params().node(v).data;
        assert!((-1.0..1.0).contains(&w));
    }
}

#[test]
fn test_seeded_construction_is_reproducible() {
    let a = Network::seeded(&xor_configs(), 42);
    let b = Network::seeded(&xor_configs(), 42);
    let data = |n: &Network| -> Vec<f64> {
        n.parameters().iter().map(|&v| n.params().node(v).data).collect()
    };
    assert_eq!(data(&a), data(&b));
}

#[test]
fn test_forward_is_deterministic() {
    let mut net = Network::seeded(&xor_configs(), 5);
    let mut tape = NodeArena::tape();
    let mut run = |net: &mut Network| {
        tape.reset();
        let x = tape.inputs(&[0.25, -0.75]);
        let out = net.forward(&mut tape, &x);
        net.graph(&mut tape).data_of(&out)
    };
    let first = run(&mut net);
    let second = run(&mut net);
    assert_eq!(first, second);
}

#[test]
fn test_update_and_zero_grad() {
    let configs = [LayerConfig::new(1, 1, Activation::Linear)];
    let mut net = Network::build(&configs, |_| 0.5);
    let mut tape = NodeArena::tape();
    let x = tape.inputs(&[2.0]);
    let out = net.forward(&mut tape, &x);
    net.graph(&mut tape).backward(out[0]);

    let params = net.parameters();
    assert_relative_eq!(net.params().node(params[0]).grad, 2.0);
    assert_relative_eq!(net.params().node(params[1]).grad, 1.0);

    net.update(0.1);
    assert_relative_eq!(net.params().node(params[0]).data, 0.3);
    assert_relative_eq!(net.params().node(params[1]).data, 0.4);

    net.zero_grad();
    for &v in &params {
        assert_eq!(net.params().node(v).grad, 0.0);
    }
    // idempotent
    net.zero_grad();
    for &v in &params {
        assert_eq!(net.params().node(v).grad, 0.0);
    }
}

#[test]
fn test_predict_returns_argmax() {
    let configs = [LayerConfig::new(1, 3, Activation::Linear)];
    // zero weights, biases 1, 3, 5
    let mut values = [0.0, 1.0, 0.0, 3.0, 0.0, 5.0].into_iter();
    let mut net = Network::build(&configs, |_| values.next().unwrap_or(0.0));
    let mut tape = NodeArena::tape();
    assert_eq!(net.predict(&mut tape, &[7.0]), 2);
}

#[test]
#[should_panic(expected = "Dimension mismatch in network input")]
fn test_forward_rejects_wrong_input_width() {
    let mut net = Network::seeded(&xor_configs(), 0);
    let mut tape = NodeArena::tape();
    let x = tape.inputs(&[1.0, 2.0, 3.0]);
    let _ = net.forward(&mut tape, &x);
}

#[test]
#[should_panic(expected = "Invalid network configuration")]
fn test_broken_chain_is_fatal() {
    let configs = [
        LayerConfig::new(2, 3, Activation::Tanh),
        LayerConfig::new(2, 1, Activation::Linear),
    ];
    let _ = Network::seeded(&configs, 0);
}

#[test]
fn test_display_lists_layers() {
    let net = Network::seeded(&xor_configs(), 3);
    let text = net.to_string();
    assert!(text.starts_with("Network(2 layers, 22 parameters)"));
    assert!(text.contains("Layer 0: 2 -> 4 (tanh)"));
    assert!(text.contains("Layer 1: 4 -> 2 (linear)"));
}

#[test]
#[should_panic(expected = "Value handle from the Params arena")]
fn test_parameter_of_another_network_is_fatal() {
    let a = Network::seeded(&xor_configs(), 1);
    let mut b = Network::seeded(&xor_configs(), 2);
    let mut tape = NodeArena::tape();
    let w = a.parameters()[0];
    let g = b.graph(&mut tape);
    let _ = g.data(w);
}

#[test]
fn test_each_network_owns_its_handles() {
    let a = Network::seeded(&xor_configs(), 1);
    let b = Network::seeded(&xor_configs(), 1);
    let wa = a.parameters()[0];
    let wb = b.parameters()[0];
    assert_eq!(wa.index(), wb.index());
    assert_ne!(wa, wb);
    assert!(a.params().contains(wa));
    assert!(!b.params().contains(wa));
}

#[test]
fn test_view_reads_without_mutable_access() {
    let net = Network::seeded(&xor_configs(), 4);
    let tape = NodeArena::tape();
    let view = net.view(&tape);
    let w = net.parameters()[0];
    assert_eq!(view.node(w).data, net.params().node(w).data);
}
