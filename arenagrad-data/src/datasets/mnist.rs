use super::idx::{read_images, read_labels};
use super::traits::Dataset;
use arenagrad_core::ArenagradError;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Paired IDX image and label files, held as raw bytes.
///
/// Samples are served as `(pixels / 255.0, label)`.
#[derive(Debug, Clone)]
pub struct MnistDataset {
    rows: usize,
    cols: usize,
    pixels: Vec<u8>,
    labels: Vec<u8>,
}

impl MnistDataset {
    /// Loads an image file and its label file.
    ///
    /// # Errors
    /// I/O failures, wrong magic numbers, truncated files, and image/label
    /// count mismatches.
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(images: P, labels: Q) -> Result<Self, ArenagradError> {
        let images = images.as_ref();
        let labels = labels.as_ref();
        let image_file = BufReader::new(File::open(images)?);
        let label_file = BufReader::new(File::open(labels)?);
        let dataset = Self::from_readers(
            image_file,
            &images.display().to_string(),
            label_file,
            &labels.display().to_string(),
        )?;
        log::info!(
            "loaded {} images of size {}x{} from {}",
            dataset.len(),
            dataset.rows,
            dataset.cols,
            images.display()
        );
        Ok(dataset)
    }

    /// Same as [`MnistDataset::load`] over arbitrary readers; the names only
    /// appear in error messages.
    pub fn from_readers<R1: Read, R2: Read>(
        images: R1,
        images_name: &str,
        labels: R2,
        labels_name: &str,
    ) -> Result<Self, ArenagradError> {
        let images = read_images(images, images_name)?;
        let labels = read_labels(labels, labels_name)?;
        if images.count != labels.len() {
            return Err(ArenagradError::InvalidDataset(format!(
                "{} has {} images but {} has {} labels",
                images_name,
                images.count,
                labels_name,
                labels.len()
            )));
        }
        Ok(MnistDataset {
            rows: images.rows,
            cols: images.cols,
            pixels: images.pixels,
            labels,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Pixels per image, the input width of a model trained on this data.
    pub fn image_size(&self) -> usize {
        self.rows * self.cols
    }

    fn check_index(&self, index: usize) -> Result<(), ArenagradError> {
        if index >= self.labels.len() {
            return Err(ArenagradError::IndexOutOfBounds {
                index,
                len: self.labels.len(),
            });
        }
        Ok(())
    }

    /// Raw pixel bytes of one image.
    pub fn image(&self, index: usize) -> Result<&[u8], ArenagradError> {
        self.check_index(index)?;
        let size = self.image_size();
        Ok(&self.pixels[index * size..(index + 1) * size])
    }

    pub fn label(&self, index: usize) -> Result<u8, ArenagradError> {
        self.check_index(index)?;
        Ok(self.labels[index])
    }

    /// Draws one image as text: `#` for pixels above 128, `.` otherwise.
    pub fn render_ascii(&self, index: usize) -> Result<String, ArenagradError> {
        let image = self.image(index)?;
        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for row in image.chunks(self.cols.max(1)) {
            out.extend(row.iter().map(|&px| if px > 128 { '#' } else { '.' }));
            out.push('\n');
        }
        Ok(out)
    }
}

impl Dataset for MnistDataset {
    type Item = (Vec<f64>, usize);

    fn get(&self, index: usize) -> Result<Self::Item, ArenagradError> {
        let image = self.image(index)?;
        let inputs = image.iter().map(|&px| f64::from(px) / 255.0).collect();
        Ok((inputs, usize::from(self.labels[index])))
    }

    fn len(&self) -> usize {
        self.labels.len()
    }
}

#[cfg(test)]
#[path = "mnist_test.rs"]
mod tests;
