use ndarray::{s, Array4};

/// Pad the height and width axes of an NHWC batch with zeros.
///
/// An `(m, h, w, c)` input becomes `(m, h + 2·pad, w + 2·pad, c)`; the
/// original content sits unchanged in the central block and every element
/// outside it is exactly zero. The batch and channel axes are untouched.
pub fn zero_pad(x: &Array4<f32>, pad: usize) -> Array4<f32> {
    if pad == 0 {
        return x.clone();
    }

    let (m, h, w, c) = x.dim();
    let mut padded = Array4::<f32>::zeros((m, h + 2 * pad, w + 2 * pad, c));
    padded
        .slice_mut(s![.., pad..pad + h, pad..pad + w, ..])
        .assign(x);
    padded
}
