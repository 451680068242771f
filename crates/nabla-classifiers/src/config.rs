use serde::{Deserialize, Serialize};

/// Gradient-descent settings for a single model.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct TrainConfig {
    /// Step size for each gradient-descent update.
    pub learning_rate: f32,
    /// Number of gradient-descent iterations.
    pub num_iterations: usize,
    /// Record the cost every this many iterations.
    pub cost_interval: usize,
    /// Log the recorded cost as training progresses.
    pub print_cost: bool,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            learning_rate: 0.005,
            num_iterations: 3000,
            cost_interval: 100,
            print_cost: false,
        }
    }
}

/// Settings for a learning-rate sweep: one model is trained from scratch per
/// rate, everything else held fixed.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct SweepConfig {
    pub learning_rates: Vec<f32>,
    pub num_iterations: usize,
    pub cost_interval: usize,
    pub print_cost: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            learning_rates: vec![0.01, 0.001, 0.0001],
            num_iterations: 3000,
            cost_interval: 100,
            print_cost: false,
        }
    }
}

impl SweepConfig {
    /// The per-model training settings for one rate of the sweep.
    pub fn train_config(&self, learning_rate: f32) -> TrainConfig {
        TrainConfig {
            learning_rate,
            num_iterations: self.num_iterations,
            cost_interval: self.cost_interval,
            print_cost: self.print_cost,
        }
    }
}
