use std::fmt;
use std::str::FromStr;

use ndarray::{s, Array4, Axis, Zip};
use serde::{Deserialize, Serialize};

use crate::error::LayerError;

/// How a pooling window is reduced to a single value per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoolMode {
    Max,
    Average,
}

impl FromStr for PoolMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "max" => Ok(PoolMode::Max),
            "average" => Ok(PoolMode::Average),
            _ => Err(format!("Unknown pooling mode: {}", s)),
        }
    }
}

impl fmt::Display for PoolMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PoolMode::Max => write!(f, "max"),
            PoolMode::Average => write!(f, "average"),
        }
    }
}

/// Hyper-parameters of a pooling layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolParams {
    /// Side length of the square pooling window.
    pub window: usize,
    pub stride: usize,
}

/// Values a backward pass would need: the layer input and hyper-parameters.
#[derive(Debug, Clone)]
pub struct PoolCache {
    pub a_prev: Array4<f32>,
    pub params: PoolParams,
}

/// Forward pass of a pooling layer.
///
/// The `(m, h_prev, w_prev, c)` input reduces to
/// `(m, (h_prev − window)/stride + 1, (w_prev − window)/stride + 1, c)`;
/// every output cell is the max or the mean of its window, per channel.
/// The batch axis is processed in parallel.
pub fn pool_forward(
    a_prev: &Array4<f32>,
    params: &PoolParams,
    mode: PoolMode,
) -> Result<(Array4<f32>, PoolCache), LayerError> {
    let (m, h_prev, w_prev, c) = a_prev.dim();

    if params.stride == 0 {
        return Err(LayerError::ZeroStride);
    }
    if params.window == 0 {
        return Err(LayerError::EmptyWindow);
    }
    if params.window > h_prev || params.window > w_prev {
        return Err(LayerError::WindowTooLarge {
            window: params.window,
            extent: h_prev.min(w_prev),
        });
    }

    let f = params.window;
    let stride = params.stride;
    let n_h = (h_prev - f) / stride + 1;
    let n_w = (w_prev - f) / stride + 1;

    let mut a = Array4::<f32>::zeros((m, n_h, n_w, c));

    Zip::from(a.axis_iter_mut(Axis(0)))
        .and(a_prev.axis_iter(Axis(0)))
        .par_for_each(|mut a_i, prev_i| {
            for h in 0..n_h {
                let vert_start = h * stride;
                for w in 0..n_w {
                    let horiz_start = w * stride;
                    for ch in 0..c {
                        let window = prev_i.slice(s![
                            vert_start..vert_start + f,
                            horiz_start..horiz_start + f,
                            ch
                        ]);
                        a_i[[h, w, ch]] = match mode {
                            PoolMode::Max => {
                                window.iter().copied().fold(f32::NEG_INFINITY, f32::max)
                            }
                            PoolMode::Average => {
                                window.iter().sum::<f32>() / (f * f) as f32
                            }
                        };
                    }
                }
            }
        });

    let cache = PoolCache {
        a_prev: a_prev.clone(),
        params: *params,
    };

    Ok((a, cache))
}
