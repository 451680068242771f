//! Seeded random tensors for demos and tests.

use ndarray::{Array1, Array4};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};

/// A standard-normal NHWC tensor from a fixed seed.
pub fn randn4(shape: (usize, usize, usize, usize), seed: u64) -> Array4<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = shape.0 * shape.1 * shape.2 * shape.3;
    let data: Vec<f32> = (0..n).map(|_| StandardNormal.sample(&mut rng)).collect();
    Array4::from_shape_vec(shape, data).expect("element count matches shape")
}

/// A standard-normal vector from a fixed seed.
pub fn randn1(len: usize, seed: u64) -> Array1<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let data: Vec<f32> = (0..len).map(|_| StandardNormal.sample(&mut rng)).collect();
    Array1::from_vec(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_tensor() {
        assert_eq!(randn4((2, 3, 3, 1), 1), randn4((2, 3, 3, 1), 1));
        assert_eq!(randn1(8, 5), randn1(8, 5));
    }

    #[test]
    fn different_seeds_differ() {
        assert_ne!(randn4((1, 2, 2, 1), 1), randn4((1, 2, 2, 1), 2));
    }
}
