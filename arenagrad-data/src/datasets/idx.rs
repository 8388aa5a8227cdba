//! Reader for the big-endian IDX files used by the MNIST corpus.
//!
//! Images: `u32 magic (2051), u32 count, u32 rows, u32 cols`, then
//! `count * rows * cols` pixel bytes, row-major.
//! Labels: `u32 magic (2049), u32 count`, then one byte per label.

use arenagrad_core::ArenagradError;
use std::io::Read;

pub const IMAGE_MAGIC: u32 = 2051;
pub const LABEL_MAGIC: u32 = 2049;

/// Raw image block of an IDX image file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdxImages {
    pub count: usize,
    pub rows: usize,
    pub cols: usize,
    pub pixels: Vec<u8>,
}

fn read_be_u32<R: Read>(r: &mut R, context: &str) -> Result<u32, ArenagradError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)
        .map_err(|e| ArenagradError::from_read(e, context))?;
    Ok(u32::from_be_bytes(buf))
}

fn check_magic<R: Read>(r: &mut R, expected: u32, source: &str) -> Result<(), ArenagradError> {
    let actual = read_be_u32(r, "magic number")?;
    if actual != expected {
        return Err(ArenagradError::InvalidMagic {
            path: source.to_string(),
            expected,
            actual,
        });
    }
    Ok(())
}

/// Reads exactly `len` bytes without trusting `len` for the allocation.
fn read_bytes<R: Read>(r: &mut R, len: usize, context: &str) -> Result<Vec<u8>, ArenagradError> {
    let mut buf = Vec::new();
    r.take(len as u64).read_to_end(&mut buf)?;
    if buf.len() < len {
        return Err(ArenagradError::Truncated {
            context: format!("{} ({} of {} bytes)", context, buf.len(), len),
        });
    }
    Ok(buf)
}

/// Parses an IDX image file. `source` names the input in error messages.
pub fn read_images<R: Read>(mut r: R, source: &str) -> Result<IdxImages, ArenagradError> {
    check_magic(&mut r, IMAGE_MAGIC, source)?;
    let count = read_be_u32(&mut r, "image count")? as usize;
    let rows = read_be_u32(&mut r, "image rows")? as usize;
    let cols = read_be_u32(&mut r, "image cols")? as usize;
    let total = count
        .checked_mul(rows)
        .and_then(|n| n.checked_mul(cols))
        .ok_or_else(|| {
            ArenagradError::InvalidDataset(format!(
                "{}: {} images of {}x{} overflow",
                source, count, rows, cols
            ))
        })?;
    let pixels = read_bytes(&mut r, total, "image pixels")?;
    log::debug!("read {} images of {}x{} from {}", count, rows, cols, source);
    Ok(IdxImages {
        count,
        rows,
        cols,
        pixels,
    })
}

/// Parses an IDX label file.
pub fn read_labels<R: Read>(mut r: R, source: &str) -> Result<Vec<u8>, ArenagradError> {
    check_magic(&mut r, LABEL_MAGIC, source)?;
    let count = read_be_u32(&mut r, "label count")? as usize;
    let labels = read_bytes(&mut r, count, "labels")?;
    log::debug!("read {} labels from {}", count, source);
    Ok(labels)
}

#[cfg(test)]
#[path = "idx_test.rs"]
mod tests;
