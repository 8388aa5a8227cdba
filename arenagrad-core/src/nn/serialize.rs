//! Binary model file.
//!
//! Layout, all fields in host byte order:
//!
//! ```text
//! u32 layer_count
//! per layer:  u32 n_in, u32 n_out, u32 activation
//!   per neuron: n_in x f64 weight, f64 bias
//! ```

use super::activation::Activation;
use super::layer::LayerConfig;
use super::module::Module;
use super::network::Network;
use crate::error::ArenagradError;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

fn write_u32<W: Write>(w: &mut W, v: u32) -> Result<(), ArenagradError> {
    w.write_all(&v.to_ne_bytes())?;
    Ok(())
}

fn read_u32<R: Read>(r: &mut R, context: &str) -> Result<u32, ArenagradError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)
        .map_err(|e| ArenagradError::from_read(e, context))?;
    Ok(u32::from_ne_bytes(buf))
}

fn read_f64<R: Read>(r: &mut R, context: &str) -> Result<f64, ArenagradError> {
    let mut buf = [0u8; 8];
    r.read_exact(&mut buf)
        .map_err(|e| ArenagradError::from_read(e, context))?;
    Ok(f64::from_ne_bytes(buf))
}

fn to_u32(n: usize, what: &str) -> Result<u32, ArenagradError> {
    u32::try_from(n).map_err(|_| {
        ArenagradError::CorruptModel(format!("{} {} does not fit in a u32", what, n))
    })
}

impl Network {
    /// Writes the architecture and every weight and bias to `w`.
    pub fn write_to<W: Write>(&self, mut w: W) -> Result<(), ArenagradError> {
        write_u32(&mut w, to_u32(self.layers().len(), "layer count")?)?;
        for layer in self.layers() {
            write_u32(&mut w, to_u32(layer.n_in(), "input width")?)?;
            write_u32(&mut w, to_u32(layer.n_out(), "output width")?)?;
            write_u32(&mut w, layer.activation().code())?;
            for neuron in layer.neurons() {
                for &weight in neuron.weights() {
                    w.write_all(&self.params().node(weight).data.to_ne_bytes())?;
                }
                w.write_all(&self.params().node(neuron.bias()).data.to_ne_bytes())?;
            }
        }
        w.flush()?;
        Ok(())
    }

    /// Rebuilds a network from the bytes produced by [`Network::write_to`].
    ///
    /// Never panics on bad input: truncation, an unknown activation code,
    /// zero widths and broken layer chains are all returned as errors.
    pub fn read_from<R: Read>(mut r: R) -> Result<Network, ArenagradError> {
        let layer_count = read_u32(&mut r, "layer count")?;
        if layer_count == 0 {
            return Err(ArenagradError::CorruptModel(
                "model has no layers".to_string(),
            ));
        }

        let mut configs: Vec<LayerConfig> = Vec::new();
        let mut values: Vec<f64> = Vec::new();
        for l in 0..layer_count {
            let context = format!("layer {} header", l);
            let n_in = read_u32(&mut r, &context)? as usize;
            let n_out = read_u32(&mut r, &context)? as usize;
            let activation = Activation::from_code(read_u32(&mut r, &context)?)?;

            if n_in == 0 || n_out == 0 {
                return Err(ArenagradError::CorruptModel(format!(
                    "layer {} has zero width ({} -> {})",
                    l, n_in, n_out
                )));
            }
            if let Some(prev) = configs.last() {
                if prev.n_out != n_in {
                    return Err(ArenagradError::CorruptModel(format!(
                        "layer {} takes {} inputs but the previous layer outputs {}",
                        l, n_in, prev.n_out
                    )));
                }
            }

            let context = format!("layer {} parameters", l);
            for _ in 0..n_out * (n_in + 1) {
                values.push(read_f64(&mut r, &context)?);
            }
            configs.push(LayerConfig::new(n_in, n_out, activation));
        }

        let mut next = values.into_iter();
        let net = Network::build(&configs, |_| next.next().unwrap_or(0.0));
        log::debug!("loaded network with {} parameters", net.parameter_count());
        Ok(net)
    }

    /// Saves the network to `path`, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ArenagradError> {
        let path = path.as_ref();
        let file = File::create(path)?;
        self.write_to(BufWriter::new(file))?;
        log::debug!("saved model to {}", path.display());
        Ok(())
    }

    /// Loads a network saved with [`Network::save`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Network, ArenagradError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let net = Network::read_from(BufReader::new(file))?;
        log::debug!("loaded model from {}", path.display());
        Ok(net)
    }
}

#[cfg(test)]
#[path = "serialize_test.rs"]
mod tests;
