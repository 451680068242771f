//! nabla-layers: forward-pass building blocks of a convolutional neural
//! network.
//!
//! Zero-padding, single-step convolution, a full convolutional-layer forward
//! pass, and max/average pooling, all over NHWC `ndarray` tensors
//! (`(batch, height, width, channels)`). Layers return the caches a backward
//! pass would consume; no backward pass is implemented here.

pub mod conv;
pub mod error;
pub mod init;
pub mod padding;
pub mod pooling;

pub use conv::{conv_forward, conv_single_step, ConvCache, ConvParams};
pub use error::LayerError;
pub use padding::zero_pad;
pub use pooling::{pool_forward, PoolCache, PoolMode, PoolParams};
