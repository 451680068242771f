use ndarray::{Array1, Array2};

use crate::config::TrainConfig;

/// A small trait abstraction for binary classifiers trained on a feature
/// matrix with one column per example. This centralizes the contract in the
/// `models` module so implementations can live next to model code.
pub trait BinaryClassifier {
    /// Fit the model on `x` of shape `(n_features, m)` and 0/1 labels `y` of
    /// length `m`. Returns the cost recorded during training.
    fn fit(&mut self, x: &Array2<f32>, y: &Array1<f32>, config: &TrainConfig) -> Vec<f32>;

    /// Predict hard 0/1 labels, one per example column.
    fn predict(&self, x: &Array2<f32>) -> Array1<f32>;

    /// Predict probabilities in (0, 1), one per example column.
    fn predict_proba(&self, x: &Array2<f32>) -> Array1<f32>;

    /// Optional human readable name for the model
    fn name(&self) -> &str {
        "classifier"
    }
}
