//! Data structures and helpers for the binary image dataset.
//!
//! This module defines `ImageDataset` (the fixed-shape train/test split the
//! exercises run on), its conversion into flattened training matrices, and a
//! seeded synthetic generator so the pipeline runs without external data.

use ndarray::{Array1, Array2, Array4};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use crate::error::DatasetError;
use crate::preprocessing::{flatten_and_scale, labels_to_f32};

/// A fixed-shape binary image dataset with a train/test split.
#[derive(Debug, Clone)]
pub struct ImageDataset {
    /// Training images, shape `(m_train, h, w, c)`.
    pub train_x: Array4<u8>,
    /// Training labels, 0 or 1.
    pub train_y: Array1<u8>,
    /// Test images, shape `(m_test, h, w, c)`.
    pub test_x: Array4<u8>,
    /// Test labels, 0 or 1.
    pub test_y: Array1<u8>,
    /// Class names indexed by label value.
    pub classes: Vec<String>,
}

/// Flattened, pixel-scaled matrices ready for model training. Features are
/// rows, examples are columns.
#[derive(Debug, Clone)]
pub struct DatasetMatrices {
    pub train_x: Array2<f32>,
    pub train_y: Array1<f32>,
    pub test_x: Array2<f32>,
    pub test_y: Array1<f32>,
}

impl ImageDataset {
    /// Build a dataset, validating that images and labels agree and that
    /// every label is 0 or 1.
    pub fn new(
        train_x: Array4<u8>,
        train_y: Array1<u8>,
        test_x: Array4<u8>,
        test_y: Array1<u8>,
        classes: Vec<String>,
    ) -> Result<Self, DatasetError> {
        if train_x.dim().0 == 0 {
            return Err(DatasetError::Empty);
        }
        if train_x.dim().0 != train_y.len() {
            return Err(DatasetError::LengthMismatch {
                images: train_x.dim().0,
                labels: train_y.len(),
            });
        }
        if test_x.dim().0 != test_y.len() {
            return Err(DatasetError::LengthMismatch {
                images: test_x.dim().0,
                labels: test_y.len(),
            });
        }
        for (row, &label) in train_y.iter().chain(test_y.iter()).enumerate() {
            if label > 1 {
                return Err(DatasetError::LabelOutOfRange {
                    row,
                    value: label as i64,
                });
            }
        }
        Ok(ImageDataset {
            train_x,
            train_y,
            test_x,
            test_y,
            classes,
        })
    }

    /// Side length of the (square) images.
    pub fn num_px(&self) -> usize {
        self.train_x.dim().1
    }

    pub fn log_summary(&self) {
        let (m_train, h, w, c) = self.train_x.dim();
        let m_test = self.test_x.dim().0;
        let positives = self.train_y.iter().filter(|&&v| v == 1).count();

        println!("----- Input Data Summary -----");
        println!("Info: {} training examples, {} test examples", m_train, m_test);
        println!("Info: each image is of size ({}, {}, {})", h, w, c);
        println!(
            "Info: {} positive and {} negative training labels",
            positives,
            m_train - positives
        );
        if !self.classes.is_empty() {
            println!("Info: classes: {}", self.classes.join(", "));
        }
        println!("-------------------------------");
    }

    /// Flatten and scale both splits into the matrices the model trains on.
    pub fn to_matrices(&self) -> DatasetMatrices {
        DatasetMatrices {
            train_x: flatten_and_scale(&self.train_x),
            train_y: labels_to_f32(&self.train_y),
            test_x: flatten_and_scale(&self.test_x),
            test_y: labels_to_f32(&self.test_y),
        }
    }
}

/// Generate a seeded, linearly separable synthetic dataset with the same
/// shapes as the CSV path: two Gaussian pixel blobs, one per class.
///
/// Class 0 images are dark (pixel mean 80), class 1 images are bright (pixel
/// mean 170); both have stddev 25 and are clamped to the byte range. Labels
/// alternate so both splits stay balanced.
pub fn synthetic(
    m_train: usize,
    m_test: usize,
    num_px: usize,
    channels: usize,
    seed: u64,
) -> ImageDataset {
    let mut rng = StdRng::seed_from_u64(seed);
    let dark = Normal::new(80.0f32, 25.0).expect("stddev is positive");
    let bright = Normal::new(170.0f32, 25.0).expect("stddev is positive");

    let mut sample_split = |m: usize| {
        let mut pixels = Vec::with_capacity(m * num_px * num_px * channels);
        let mut labels = Vec::with_capacity(m);
        for i in 0..m {
            let label = (i % 2) as u8;
            let dist = if label == 1 { &bright } else { &dark };
            for _ in 0..num_px * num_px * channels {
                let v = dist.sample(&mut rng).clamp(0.0, 255.0);
                pixels.push(v.round() as u8);
            }
            labels.push(label);
        }
        let images = Array4::from_shape_vec((m, num_px, num_px, channels), pixels)
            .expect("pixel count matches shape");
        (images, Array1::from_vec(labels))
    };

    let (train_x, train_y) = sample_split(m_train);
    let (test_x, test_y) = sample_split(m_test);

    ImageDataset {
        train_x,
        train_y,
        test_x,
        test_y,
        classes: vec!["negative".to_string(), "positive".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthetic_shapes_and_balance() {
        let ds = synthetic(10, 4, 8, 3, 1);
        assert_eq!(ds.train_x.dim(), (10, 8, 8, 3));
        assert_eq!(ds.test_x.dim(), (4, 8, 8, 3));
        assert_eq!(ds.train_y.iter().filter(|&&v| v == 1).count(), 5);
    }

    #[test]
    fn synthetic_is_deterministic() {
        let a = synthetic(4, 2, 4, 1, 7);
        let b = synthetic(4, 2, 4, 1, 7);
        assert_eq!(a.train_x, b.train_x);
        assert_eq!(a.test_y, b.test_y);
    }

    #[test]
    fn new_rejects_bad_labels() {
        let images = Array4::<u8>::zeros((2, 2, 2, 1));
        let labels = Array1::from_vec(vec![0u8, 3u8]);
        let err = ImageDataset::new(
            images.clone(),
            labels,
            images,
            Array1::from_vec(vec![0u8, 1u8]),
            vec![],
        );
        assert!(matches!(err, Err(DatasetError::LabelOutOfRange { .. })));
    }
}
