use ndarray::{Array1, Array2};

use crate::config::TrainConfig;
use crate::models::classifier_trait::BinaryClassifier;

/// Guard added inside the cost logarithms so activations saturated at 0 or 1
/// cannot produce an infinite cost.
pub const LOG_EPS: f32 = 1e-5;

/// Numerically plain logistic sigmoid.
pub fn sigmoid(z: f32) -> f32 {
    1.0 / (1.0 + (-z).exp())
}

/// Cost gradients from one forward/backward pass.
#[derive(Debug, Clone)]
pub struct Gradients {
    pub dw: Array1<f32>,
    pub db: f32,
}

/// Logistic-regression binary classifier: one weight per input feature and a
/// scalar bias, trained by plain gradient descent on the cross-entropy cost.
#[derive(Debug, Clone)]
pub struct LogisticRegression {
    pub w: Array1<f32>,
    pub b: f32,
}

impl LogisticRegression {
    /// Zero-initialized model for `dim` input features.
    pub fn new(dim: usize) -> Self {
        LogisticRegression {
            w: Array1::zeros(dim),
            b: 0.0,
        }
    }

    /// Forward and backward pass over the whole dataset.
    ///
    /// `x` has shape `(n_features, m)` with one column per example, `y` holds
    /// the 0/1 labels. Returns the gradients and the cross-entropy cost.
    ///
    /// Panics if `x` and `y` disagree on the number of examples or `x` and
    /// the weights disagree on the number of features.
    pub fn propagate(&self, x: &Array2<f32>, y: &Array1<f32>) -> (Gradients, f32) {
        let m = x.ncols();
        assert_eq!(y.len(), m, "x has {} example columns but y has {}", m, y.len());
        assert_eq!(
            x.nrows(),
            self.w.len(),
            "x has {} feature rows but the model has {} weights",
            x.nrows(),
            self.w.len()
        );

        let m_f = m as f32;
        let a = (self.w.dot(x) + self.b).mapv(sigmoid);

        let cost = -a
            .iter()
            .zip(y.iter())
            .map(|(&ai, &yi)| yi * (ai + LOG_EPS).ln() + (1.0 - yi) * (1.0 - ai + LOG_EPS).ln())
            .sum::<f32>()
            / m_f;

        let dz = &a - y;
        let dw = x.dot(&dz) / m_f;
        let db = dz.sum() / m_f;

        (Gradients { dw, db }, cost)
    }

    /// Raw activations `sigmoid(w·x + b)`, one per example column.
    pub fn activations(&self, x: &Array2<f32>) -> Array1<f32> {
        (self.w.dot(x) + self.b).mapv(sigmoid)
    }
}

impl BinaryClassifier for LogisticRegression {
    /// Gradient descent for `config.num_iterations` steps. The cost is
    /// recorded every `config.cost_interval` iterations and returned as the
    /// training history.
    fn fit(&mut self, x: &Array2<f32>, y: &Array1<f32>, config: &TrainConfig) -> Vec<f32> {
        let mut costs = Vec::new();
        let cost_interval = config.cost_interval.max(1);

        for i in 0..config.num_iterations {
            let (grads, cost) = self.propagate(x, y);

            self.w.scaled_add(-config.learning_rate, &grads.dw);
            self.b -= config.learning_rate * grads.db;

            if i % cost_interval == 0 {
                costs.push(cost);
                if config.print_cost {
                    log::info!("Cost after iteration {}: {:.6}", i, cost);
                }
            }
        }

        costs
    }

    fn predict(&self, x: &Array2<f32>) -> Array1<f32> {
        self.activations(x)
            .mapv(|p| if p > 0.5 { 1.0 } else { 0.0 })
    }

    fn predict_proba(&self, x: &Array2<f32>) -> Array1<f32> {
        self.activations(x)
    }

    fn name(&self) -> &str {
        "logistic-regression"
    }
}

/// Classification accuracy in percent: `100 − 100 · mean(|pred − label|)`.
pub fn accuracy(predictions: &Array1<f32>, labels: &Array1<f32>) -> f32 {
    assert_eq!(
        predictions.len(),
        labels.len(),
        "Predictions and labels must have equal length"
    );
    let mean_error = (predictions - labels).mapv(f32::abs).mean().unwrap_or(0.0);
    100.0 - mean_error * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_is_bounded_and_centered() {
        for &z in &[-50.0, -5.0, -0.5, 0.0, 0.5, 5.0, 50.0] {
            let s = sigmoid(z);
            assert!(s > 0.0 && s < 1.0, "sigmoid({}) = {}", z, s);
        }
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-7);
    }

    #[test]
    fn zero_init_shapes() {
        let model = LogisticRegression::new(4);
        assert_eq!(model.w.len(), 4);
        assert!(model.w.iter().all(|&v| v == 0.0));
        assert_eq!(model.b, 0.0);
    }
}
