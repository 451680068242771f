use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ArgMatches;
use serde::{Deserialize, Serialize};

/// Parameters for the `classify train` pipeline: where the dataset comes
/// from, the learning-rate sweep to run, and where the report goes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifyTrainConfig {
    /// Training split, delimited text (ignored when `synthetic` is set).
    pub train_data: String,
    /// Test split, delimited text (ignored when `synthetic` is set).
    pub test_data: String,
    /// Generate a seeded synthetic dataset instead of reading files.
    pub synthetic: bool,
    pub seed: u64,
    pub image_side: usize,
    pub channels: usize,
    pub class_names: Vec<String>,
    pub learning_rates: Vec<f32>,
    pub num_iterations: usize,
    pub cost_interval: usize,
    pub print_cost: bool,
    pub output_report: String,
    pub no_report: bool,
}

impl Default for ClassifyTrainConfig {
    fn default() -> Self {
        ClassifyTrainConfig {
            train_data: String::new(),
            test_data: String::new(),
            synthetic: false,
            seed: 1,
            image_side: 64,
            channels: 3,
            class_names: vec!["negative".to_string(), "positive".to_string()],
            learning_rates: vec![0.01, 0.001, 0.0001],
            num_iterations: 3000,
            cost_interval: 100,
            print_cost: true,
            output_report: String::from("nabla_report.html"),
            no_report: false,
        }
    }
}

impl ClassifyTrainConfig {
    pub fn from_arguments(config_path: &PathBuf, matches: &ArgMatches) -> Result<Self> {
        let config_json = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let mut config: ClassifyTrainConfig = serde_json::from_str(&config_json)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

        // Apply CLI overrides
        if matches.get_flag("synthetic") {
            config.synthetic = true;
        }

        if let Some(train_data) = matches.get_one::<String>("train_data") {
            validate_tsv_or_csv_file(train_data)?;
            config.train_data = train_data.clone();
        } else if !config.synthetic {
            validate_tsv_or_csv_file(&config.train_data)?;
        }

        if let Some(test_data) = matches.get_one::<String>("test_data") {
            validate_tsv_or_csv_file(test_data)?;
            config.test_data = test_data.clone();
        } else if !config.synthetic {
            validate_tsv_or_csv_file(&config.test_data)?;
        }

        if let Some(output_report) = matches.get_one::<String>("output_report") {
            config.output_report = output_report.clone();
        }

        if matches.get_flag("no_report") {
            config.no_report = true;
        }

        if let Some(&seed) = matches.get_one::<u64>("seed") {
            config.seed = seed;
        }

        Ok(config)
    }
}

pub fn validate_tsv_or_csv_file(path: &str) -> Result<()> {
    let pb = PathBuf::from(path);

    let ext = pb
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());
    match ext.as_deref() {
        Some("tsv") | Some("csv") => {}
        _ => anyhow::bail!("File must have a .tsv or .csv extension: {}", path),
    }

    if !pb.exists() {
        anyhow::bail!("File does not exist: {}", path);
    }

    Ok(())
}
