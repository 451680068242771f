//! IO utilities for loading external image datasets.

pub mod csv_images;

pub use csv_images::{load_dataset_csv, read_image_csv, CsvImageConfig};
