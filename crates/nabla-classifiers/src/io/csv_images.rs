//! Delimited-text image dataset reader.
//!
//! Each row is one example: the 0/1 label followed by `h·w·c` pixel byte
//! values in row-major order. The image shape is fixed by the reader
//! configuration, as the exercises run on fixed-size inputs.

use std::path::Path;

use anyhow::{Context, Result};
use ndarray::{Array1, Array4};

use crate::dataset::ImageDataset;
use crate::error::DatasetError;

/// Configuration for reading delimited image files.
#[derive(Debug, Clone)]
pub struct CsvImageConfig {
    pub delimiter: u8,
    pub has_headers: bool,
    /// Side length of the (square) images.
    pub image_side: usize,
    /// Color channels per pixel.
    pub channels: usize,
}

impl Default for CsvImageConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_headers: false,
            image_side: 64,
            channels: 3,
        }
    }
}

impl CsvImageConfig {
    fn pixels_per_image(&self) -> usize {
        self.image_side * self.image_side * self.channels
    }
}

/// Read one split (images + labels) from a delimited file.
pub fn read_image_csv<P: AsRef<Path>>(
    path: P,
    config: &CsvImageConfig,
) -> Result<(Array4<u8>, Array1<u8>)> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(config.has_headers)
        .from_path(&path)
        .with_context(|| format!("Failed to open dataset file: {}", path.as_ref().display()))?;

    let expected = config.pixels_per_image();
    let mut pixels = Vec::new();
    let mut labels = Vec::new();

    for (row_idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read row {}", row_idx + 1))?;

        let label_field = record
            .get(0)
            .ok_or(DatasetError::Empty)
            .with_context(|| format!("Missing label at row {}", row_idx + 1))?;
        let label = label_field
            .trim()
            .parse::<i64>()
            .with_context(|| format!("Invalid label '{}' at row {}", label_field, row_idx + 1))?;
        if label != 0 && label != 1 {
            return Err(DatasetError::LabelOutOfRange {
                row: row_idx + 1,
                value: label,
            }
            .into());
        }
        labels.push(label as u8);

        let found = record.len() - 1;
        if found != expected {
            return Err(DatasetError::PixelCountMismatch {
                row: row_idx + 1,
                expected,
                found,
            }
            .into());
        }
        for (col_idx, field) in record.iter().skip(1).enumerate() {
            let px = field.trim().parse::<u8>().with_context(|| {
                format!(
                    "Invalid pixel value '{}' at row {}, column {}",
                    field,
                    row_idx + 1,
                    col_idx + 2
                )
            })?;
            pixels.push(px);
        }
    }

    let m = labels.len();
    if m == 0 {
        return Err(DatasetError::Empty)
            .with_context(|| format!("No examples in {}", path.as_ref().display()));
    }

    let images = Array4::from_shape_vec(
        (m, config.image_side, config.image_side, config.channels),
        pixels,
    )
    .context("Pixel buffer does not match the configured image shape")?;

    Ok((images, Array1::from_vec(labels)))
}

/// Load a train/test dataset from two delimited files.
pub fn load_dataset_csv<P: AsRef<Path>>(
    train_path: P,
    test_path: P,
    config: &CsvImageConfig,
    classes: Vec<String>,
) -> Result<ImageDataset> {
    let (train_x, train_y) = read_image_csv(&train_path, config)?;
    let (test_x, test_y) = read_image_csv(&test_path, config)?;
    let dataset = ImageDataset::new(train_x, train_y, test_x, test_y, classes)?;
    Ok(dataset)
}
