use std::error::Error;
use std::fmt;

/// Custom error type for dataset construction and loading failures
#[derive(Debug)]
pub enum DatasetError {
    LabelOutOfRange { row: usize, value: i64 },
    PixelCountMismatch { row: usize, expected: usize, found: usize },
    LengthMismatch { images: usize, labels: usize },
    Empty,
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DatasetError::LabelOutOfRange { row, value } => {
                write!(f, "Label at row {} must be 0 or 1, got {}", row, value)
            }
            DatasetError::PixelCountMismatch { row, expected, found } => write!(
                f,
                "Row {} has {} pixel values, expected {}",
                row, found, expected
            ),
            DatasetError::LengthMismatch { images, labels } => write!(
                f,
                "Image and label counts must be equal, got {} images and {} labels",
                images, labels
            ),
            DatasetError::Empty => write!(f, "Dataset contains no examples"),
        }
    }
}

impl Error for DatasetError {}
