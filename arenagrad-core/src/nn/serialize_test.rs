use super::*;
use crate::value::NodeArena;

fn configs() -> [LayerConfig; 2] {
    [
        LayerConfig::new(3, 2, Activation::Relu),
        LayerConfig::new(2, 1, Activation::Sigmoid),
    ]
}

fn header(layers: &[(u32, u32, u32)]) -> Vec<u8> {
    let mut bytes = (layers.len() as u32).to_ne_bytes().to_vec();
    for &(n_in, n_out, act) in layers {
        bytes.extend_from_slice(&n_in.to_ne_bytes());
        bytes.extend_from_slice(&n_out.to_ne_bytes());
        bytes.extend_from_slice(&act.to_ne_bytes());
    }
    bytes
}

#[test]
fn test_write_layout() {
    let net = Network::seeded(&configs(), 4);
    let mut bytes = Vec::new();
    net.write_to(&mut bytes).unwrap();
    // 4 + layer 0 (12 + 2*4*8) + layer 1 (12 + 1*3*8)
    assert_eq!(bytes.len(), 4 + 12 + 64 + 12 + 24);
    assert_eq!(&bytes[0..4], &2u32.to_ne_bytes());
    assert_eq!(&bytes[12..16], &Activation::Relu.code().to_ne_bytes());

    let first_weight = net.params().node(net.layers()[0].neurons()[0].weights()[0]).data;
    assert_eq!(&bytes[16..24], &first_weight.to_ne_bytes());
}

#[test]
fn test_roundtrip_is_bit_exact() {
    let mut net = Network::seeded(&configs(), 8);
    let mut bytes = Vec::new();
    net.write_to(&mut bytes).unwrap();
    let mut loaded = Network::read_from(bytes.as_slice()).unwrap();

    assert_eq!(loaded.configs(), net.configs());
    let bits = |n: &Network| -> Vec<u64> {
        n.parameters()
            .iter()
            .map(|&v| n.params().node(v).data.to_bits())
            .collect()
    };
    assert_eq!(bits(&loaded), bits(&net));

    let mut tape = NodeArena::tape();
    let x = tape.inputs(&[0.3, -0.1, 0.8]);
    let a = net.forward(&mut tape, &x);
    let a = net.graph(&mut tape).data(a[0]);
    let b = loaded.forward(&mut tape, &x);
    let b = loaded.graph(&mut tape).data(b[0]);
    assert_eq!(a.to_bits(), b.to_bits());
}

#[test]
fn test_truncated_file() {
    let net = Network::seeded(&configs(), 8);
    let mut bytes = Vec::new();
    net.write_to(&mut bytes).unwrap();
    bytes.truncate(bytes.len() - 3);
    let err = Network::read_from(bytes.as_slice()).unwrap_err();
    assert!(matches!(err, ArenagradError::Truncated { .. }), "{}", err);
}

#[test]
fn test_empty_input_is_truncated() {
    let err = Network::read_from(&[0u8; 0][..]).unwrap_err();
    assert!(matches!(err, ArenagradError::Truncated { .. }));
}

#[test]
fn test_unknown_activation() {
    let bytes = header(&[(1, 1, 9)]);
    let err = Network::read_from(bytes.as_slice()).unwrap_err();
    assert!(matches!(err, ArenagradError::UnknownActivation(9)));
}

#[test]
fn test_zero_layers_and_zero_width() {
    let err = Network::read_from(&0u32.to_ne_bytes()[..]).unwrap_err();
    assert!(matches!(err, ArenagradError::CorruptModel(_)));

    let bytes = header(&[(0, 2, 0)]);
    let err = Network::read_from(bytes.as_slice()).unwrap_err();
    assert!(matches!(err, ArenagradError::CorruptModel(_)));
}

#[test]
fn test_broken_chain() {
    let mut bytes = header(&[(1, 2, 3)]);
    for _ in 0..4 {
        bytes.extend_from_slice(&0.5f64.to_ne_bytes());
    }
    bytes.extend_from_slice(&3u32.to_ne_bytes());
    bytes.extend_from_slice(&1u32.to_ne_bytes());
    bytes.extend_from_slice(&3u32.to_ne_bytes());
    // layer count says 1, so patch it to 2
    bytes[0..4].copy_from_slice(&2u32.to_ne_bytes());
    let err = Network::read_from(bytes.as_slice()).unwrap_err();
    assert!(matches!(err, ArenagradError::CorruptModel(_)), "{}", err);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Network::load(dir.path().join("nope.bin")).unwrap_err();
    assert!(matches!(err, ArenagradError::Io(_)));
}
