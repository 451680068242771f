//! Image preprocessing shared by the CLI and the models.
//!
//! Provides the flatten/scale pipeline that turns an `(m, h, w, c)` pixel
//! tensor into the `(h·w·c, m)` feature matrix the logistic model trains on,
//! plus a per-feature standard scaler for non-pixel feature matrices.

use ndarray::{Array1, Array2, Array4};

/// Reshape a batch of images into a feature matrix with one column per
/// example. Pixels keep their row-major order within each image, matching
/// the layout of the flattened training data.
pub fn flatten_images(images: &Array4<u8>) -> Array2<f32> {
    let (m, h, w, c) = images.dim();
    let n_features = h * w * c;

    let mut out = Array2::<f32>::zeros((n_features, m));
    for (i, image) in images.outer_iter().enumerate() {
        for (j, &px) in image.iter().enumerate() {
            out[[j, i]] = px as f32;
        }
    }
    out
}

/// Map pixel bytes into [0, 1].
pub fn scale_pixels(x: &Array2<f32>) -> Array2<f32> {
    x.mapv(|v| v / 255.0)
}

/// Flatten a batch of images and scale the pixels in one call.
pub fn flatten_and_scale(images: &Array4<u8>) -> Array2<f32> {
    scale_pixels(&flatten_images(images))
}

/// Convert 0/1 byte labels into the `f32` vector the model consumes.
pub fn labels_to_f32(labels: &Array1<u8>) -> Array1<f32> {
    labels.mapv(|v| v as f32)
}

/// Simple standard scaler (per-row mean/std, one row per feature).
#[derive(Clone, Debug)]
pub struct Scaler {
    pub mean: Vec<f32>,
    pub std: Vec<f32>,
}

impl Scaler {
    /// Minimum stddev to avoid division by zero when transforming.
    const MIN_STD: f32 = 1e-6;
}

/// Fit a `Scaler` from an `Array2<f32>` where rows are features and columns
/// are examples.
pub fn fit_scaler(x: &Array2<f32>) -> Scaler {
    let (nrows, ncols) = x.dim();
    assert!(nrows > 0 && ncols > 0, "fit_scaler requires non-empty matrix");

    let ncols_f = ncols as f32;
    let mut mean = vec![0.0f32; nrows];
    for r in 0..nrows {
        for c in 0..ncols {
            mean[r] += x[[r, c]];
        }
    }
    for v in mean.iter_mut() {
        *v /= ncols_f;
    }

    let mut std = vec![0.0f32; nrows];
    for r in 0..nrows {
        for c in 0..ncols {
            let d = x[[r, c]] - mean[r];
            std[r] += d * d;
        }
    }
    for v in std.iter_mut() {
        *v = (*v / ncols_f).sqrt().max(Scaler::MIN_STD);
    }

    Scaler { mean, std }
}

/// Standardize every feature row using the provided `Scaler` and return a
/// new `Array2<f32>`.
pub fn transform_all(x: &Array2<f32>, sc: &Scaler) -> Array2<f32> {
    let (nrows, ncols) = x.dim();
    let mut out = Array2::<f32>::zeros((nrows, ncols));
    for r in 0..nrows {
        for c in 0..ncols {
            out[[r, c]] = (x[[r, c]] - sc.mean[r]) / sc.std[r];
        }
    }
    out
}

/// Optional convenience: fit scaler and return transformed matrix in one call.
pub fn fit_transform(x: &Array2<f32>) -> Array2<f32> {
    let sc = fit_scaler(x);
    transform_all(x, &sc)
}
