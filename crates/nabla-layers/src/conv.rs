use ndarray::{s, Array1, Array4, ArrayView3, Axis, Zip};
use serde::{Deserialize, Serialize};

use crate::error::LayerError;
use crate::padding::zero_pad;

/// Hyper-parameters of a convolutional layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvParams {
    pub stride: usize,
    pub pad: usize,
}

impl Default for ConvParams {
    fn default() -> Self {
        ConvParams { stride: 1, pad: 0 }
    }
}

/// Values a backward pass would need: the layer inputs and hyper-parameters.
#[derive(Debug, Clone)]
pub struct ConvCache {
    pub a_prev: Array4<f32>,
    pub weights: Array4<f32>,
    pub bias: Array1<f32>,
    pub params: ConvParams,
}

/// Apply one filter to one window of the input: the elementwise product of
/// an `(f, f, c_prev)` slice with same-shaped weights, summed, plus the bias.
pub fn conv_single_step(a_slice: &ArrayView3<f32>, weights: &ArrayView3<f32>, bias: f32) -> f32 {
    debug_assert_eq!(a_slice.dim(), weights.dim());
    let product: f32 = a_slice.iter().zip(weights.iter()).map(|(a, w)| a * w).sum();
    product + bias
}

/// Forward pass of a convolutional layer.
///
/// `a_prev` holds the previous layer's activations with shape
/// `(m, h_prev, w_prev, c_prev)`, `weights` the filter bank with shape
/// `(f, f, c_prev, c)`, and `bias` one value per filter. The output shape is
/// `(m, (h_prev − f + 2·pad)/stride + 1, (w_prev − f + 2·pad)/stride + 1, c)`
/// with floor division. The batch axis is processed in parallel.
pub fn conv_forward(
    a_prev: &Array4<f32>,
    weights: &Array4<f32>,
    bias: &Array1<f32>,
    params: &ConvParams,
) -> Result<(Array4<f32>, ConvCache), LayerError> {
    let (m, h_prev, w_prev, c_prev) = a_prev.dim();
    let (f_h, f_w, filter_c, n_c) = weights.dim();

    if params.stride == 0 {
        return Err(LayerError::ZeroStride);
    }
    if f_h != f_w {
        return Err(LayerError::FilterNotSquare { rows: f_h, cols: f_w });
    }
    if filter_c != c_prev {
        return Err(LayerError::ChannelMismatch {
            input: c_prev,
            filter: filter_c,
        });
    }
    if bias.len() != n_c {
        return Err(LayerError::BiasMismatch {
            bias: bias.len(),
            filters: n_c,
        });
    }

    let f = f_h;
    let padded_h = h_prev + 2 * params.pad;
    let padded_w = w_prev + 2 * params.pad;
    if f == 0 || f > padded_h || f > padded_w {
        return Err(LayerError::FilterTooLarge {
            filter: f,
            padded: padded_h.min(padded_w),
        });
    }

    let n_h = (padded_h - f) / params.stride + 1;
    let n_w = (padded_w - f) / params.stride + 1;
    let stride = params.stride;

    let a_prev_pad = zero_pad(a_prev, params.pad);
    let mut z = Array4::<f32>::zeros((m, n_h, n_w, n_c));

    Zip::from(z.axis_iter_mut(Axis(0)))
        .and(a_prev_pad.axis_iter(Axis(0)))
        .par_for_each(|mut z_i, a_i| {
            for h in 0..n_h {
                let vert_start = h * stride;
                for w in 0..n_w {
                    let horiz_start = w * stride;
                    let window = a_i.slice(s![
                        vert_start..vert_start + f,
                        horiz_start..horiz_start + f,
                        ..
                    ]);
                    for c in 0..n_c {
                        let filter = weights.slice(s![.., .., .., c]);
                        z_i[[h, w, c]] = conv_single_step(&window, &filter, bias[c]);
                    }
                }
            }
        });

    let cache = ConvCache {
        a_prev: a_prev.clone(),
        weights: weights.clone(),
        bias: bias.clone(),
        params: *params,
    };

    Ok((z, cache))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    #[test]
    fn single_step_sums_window() {
        let a = Array3::from_shape_vec((2, 2, 1), vec![1.0, 1.0, 1.0, 1.0]).unwrap();
        let w = Array3::from_shape_vec((2, 2, 1), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let z = conv_single_step(&a.view(), &w.view(), -1.0);
        assert!((z - 9.0).abs() < 1e-6);
    }

    #[test]
    fn params_deserialize_with_defaults() {
        let params: ConvParams = serde_json::from_str("{\"stride\": 2}").unwrap();
        assert_eq!(params, ConvParams { stride: 2, pad: 0 });
    }
}
