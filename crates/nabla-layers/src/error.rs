use std::error::Error;
use std::fmt;

/// Custom error type for layer hyper-parameter and shape failures
#[derive(Debug)]
pub enum LayerError {
    /// The filter does not fit inside the padded input.
    FilterTooLarge { filter: usize, padded: usize },
    /// Filter height and width differ.
    FilterNotSquare { rows: usize, cols: usize },
    /// Input channel count disagrees with the filter's.
    ChannelMismatch { input: usize, filter: usize },
    /// Bias length disagrees with the number of filters.
    BiasMismatch { bias: usize, filters: usize },
    /// The pooling window does not fit inside the input.
    WindowTooLarge { window: usize, extent: usize },
    ZeroStride,
    EmptyWindow,
}

impl fmt::Display for LayerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LayerError::FilterTooLarge { filter, padded } => write!(
                f,
                "Filter of size {} does not fit a padded input extent of {}",
                filter, padded
            ),
            LayerError::FilterNotSquare { rows, cols } => {
                write!(f, "Filter must be square, got {}x{}", rows, cols)
            }
            LayerError::ChannelMismatch { input, filter } => write!(
                f,
                "Input has {} channels but the filter expects {}",
                input, filter
            ),
            LayerError::BiasMismatch { bias, filters } => write!(
                f,
                "Bias has {} entries but there are {} filters",
                bias, filters
            ),
            LayerError::WindowTooLarge { window, extent } => write!(
                f,
                "Pooling window of size {} does not fit an input extent of {}",
                window, extent
            ),
            LayerError::ZeroStride => write!(f, "Stride must be at least 1"),
            LayerError::EmptyWindow => write!(f, "Pooling window must be at least 1"),
        }
    }
}

impl Error for LayerError {}
