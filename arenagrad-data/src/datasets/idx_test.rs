use super::*;

fn image_file(count: u32, rows: u32, cols: u32, pixels: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::new();
    for v in [IMAGE_MAGIC, count, rows, cols] {
        bytes.extend_from_slice(&v.to_be_bytes());
    }
    bytes.extend_from_slice(pixels);
    bytes
}

fn label_file(labels: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&LABEL_MAGIC.to_be_bytes());
    bytes.extend_from_slice(&(labels.len() as u32).to_be_bytes());
    bytes.extend_from_slice(labels);
    bytes
}

#[test]
fn test_read_images() {
    let bytes = image_file(2, 2, 3, &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
    let images = read_images(bytes.as_slice(), "mem").unwrap();
    assert_eq!((images.count, images.rows, images.cols), (2, 2, 3));
    assert_eq!(images.pixels.len(), 12);
    assert_eq!(images.pixels[7], 7);
}

#[test]
fn test_read_labels() {
    let bytes = label_file(&[3, 1, 4]);
    assert_eq!(read_labels(bytes.as_slice(), "mem").unwrap(), vec![3, 1, 4]);
}

#[test]
fn test_wrong_magic_is_rejected() {
    // a label file where images are expected
    let bytes = label_file(&[1, 2]);
    match read_images(bytes.as_slice(), "labels.idx") {
        Err(ArenagradError::InvalidMagic {
            path,
            expected,
            actual,
        }) => {
            assert_eq!(path, "labels.idx");
            assert_eq!(expected, 2051);
            assert_eq!(actual, 2049);
        }
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn test_truncated_pixels() {
    let bytes = image_file(2, 2, 2, &[1, 2, 3, 4, 5]);
    let err = read_images(bytes.as_slice(), "mem").unwrap_err();
    assert!(matches!(err, ArenagradError::Truncated { .. }), "{}", err);
}

#[test]
fn test_truncated_header() {
    let bytes = &image_file(1, 1, 1, &[0])[..10];
    let err = read_images(bytes, "mem").unwrap_err();
    assert!(matches!(err, ArenagradError::Truncated { .. }));
}

#[test]
fn test_truncated_labels() {
    let mut bytes = label_file(&[1, 2, 3]);
    bytes.pop();
    let err = read_labels(bytes.as_slice(), "mem").unwrap_err();
    assert!(matches!(err, ArenagradError::Truncated { .. }));
}
