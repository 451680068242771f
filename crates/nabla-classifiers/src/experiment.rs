//! Training experiment drivers: single-model training and the
//! learning-rate sweep the CLI runs.

use ndarray::Array1;

use crate::config::{SweepConfig, TrainConfig};
use crate::dataset::DatasetMatrices;
use crate::models::{accuracy, BinaryClassifier, LogisticRegression};

/// The outcome of training one model at one learning rate.
#[derive(Debug, Clone)]
pub struct ModelRun {
    pub learning_rate: f32,
    /// Cost recorded every `cost_interval` iterations.
    pub costs: Vec<f32>,
    pub train_accuracy: f32,
    pub test_accuracy: f32,
    pub model: LogisticRegression,
}

impl ModelRun {
    /// Predicted probabilities on the test split.
    pub fn test_probabilities(&self, data: &DatasetMatrices) -> Array1<f32> {
        self.model.predict_proba(&data.test_x)
    }
}

/// Train a zero-initialized model and evaluate it on both splits.
pub fn run_model(data: &DatasetMatrices, config: &TrainConfig) -> ModelRun {
    let mut model = LogisticRegression::new(data.train_x.nrows());
    let costs = model.fit(&data.train_x, &data.train_y, config);

    let train_pred = model.predict(&data.train_x);
    let test_pred = model.predict(&data.test_x);
    let train_accuracy = accuracy(&train_pred, &data.train_y);
    let test_accuracy = accuracy(&test_pred, &data.test_y);

    println!("train accuracy: {} %", train_accuracy);
    println!("test accuracy: {} %", test_accuracy);

    ModelRun {
        learning_rate: config.learning_rate,
        costs,
        train_accuracy,
        test_accuracy,
        model,
    }
}

/// Train one model per learning rate, from scratch each time.
pub fn run_sweep(data: &DatasetMatrices, config: &SweepConfig) -> Vec<ModelRun> {
    let mut runs = Vec::with_capacity(config.learning_rates.len());

    for &learning_rate in &config.learning_rates {
        log::info!("Training with learning rate {}", learning_rate);
        let run = run_model(data, &config.train_config(learning_rate));
        runs.push(run);
        println!("{}", "-".repeat(50));
    }

    runs
}
