//! End-to-end `classify train` pipeline: load or synthesize the dataset,
//! run the learning-rate sweep, and write the HTML report.

use anyhow::{Context, Result};
use maud::html;

use nabla_classifiers::config::SweepConfig;
use nabla_classifiers::dataset::{self, ImageDataset};
use nabla_classifiers::experiment::{run_sweep, ModelRun};
use nabla_classifiers::io::{load_dataset_csv, CsvImageConfig};
use nabla_classifiers::report::plots::{plot_cost_curves, plot_probability_histogram};
use nabla_classifiers::report::{Report, ReportSection};

use crate::classify::input::ClassifyTrainConfig;

/// Default synthetic split sizes, matching the fixed dataset the exercise
/// was built around.
const SYNTHETIC_TRAIN: usize = 209;
const SYNTHETIC_TEST: usize = 50;

pub fn run_training(config: &ClassifyTrainConfig) -> Result<()> {
    let dataset = load_dataset(config)?;
    dataset.log_summary();

    let data = dataset.to_matrices();
    let sweep = SweepConfig {
        learning_rates: config.learning_rates.clone(),
        num_iterations: config.num_iterations,
        cost_interval: config.cost_interval,
        print_cost: config.print_cost,
    };

    let runs = run_sweep(&data, &sweep);

    if !config.no_report {
        let report = build_report(&runs, &data, config.cost_interval);
        report
            .save_to_file(&config.output_report)
            .context("Failed to write the training report")?;
        log::info!("Report saved to {}", config.output_report);
    }

    Ok(())
}

fn load_dataset(config: &ClassifyTrainConfig) -> Result<ImageDataset> {
    if config.synthetic {
        log::info!("Generating synthetic dataset with seed {}", config.seed);
        return Ok(dataset::synthetic(
            SYNTHETIC_TRAIN,
            SYNTHETIC_TEST,
            config.image_side,
            config.channels,
            config.seed,
        ));
    }

    let reader_config = CsvImageConfig {
        delimiter: delimiter_for(&config.train_data),
        has_headers: false,
        image_side: config.image_side,
        channels: config.channels,
    };
    load_dataset_csv(
        &config.train_data,
        &config.test_data,
        &reader_config,
        config.class_names.clone(),
    )
}

fn delimiter_for(path: &str) -> u8 {
    if path.to_lowercase().ends_with(".tsv") {
        b'\t'
    } else {
        b','
    }
}

fn build_report(runs: &[ModelRun], data: &dataset::DatasetMatrices, cost_interval: usize) -> Report {
    let mut report = Report::new("nabla Training Report");

    let mut intro = ReportSection::new("Introduction");
    intro.add_content(html! {
        "Logistic-regression models trained by gradient descent, one per learning rate. "
        "Below are the recorded cost curves and the test-set probability distribution of the best model."
    });
    report.add_section(intro);

    let mut costs = ReportSection::new("Cost Curves");
    costs.add_content(html! {
        "Cross-entropy cost recorded every " (cost_interval) " iterations."
    });
    costs.add_plot(plot_cost_curves(runs, cost_interval));
    report.add_section(costs);

    if let Some(best) = runs
        .iter()
        .max_by(|a, b| a.test_accuracy.total_cmp(&b.test_accuracy))
    {
        let mut accuracy = ReportSection::new("Accuracy");
        accuracy.add_content(html! {
            table {
                tr { th { "Learning rate" } th { "Train accuracy (%)" } th { "Test accuracy (%)" } }
                @for run in runs {
                    tr {
                        td { (run.learning_rate) }
                        td { (format!("{:.2}", run.train_accuracy)) }
                        td { (format!("{:.2}", run.test_accuracy)) }
                    }
                }
            }
        });
        report.add_section(accuracy);

        let probabilities = best.test_probabilities(data);
        if let Ok(plot) = plot_probability_histogram(
            &probabilities,
            &data.test_y,
            format!("Test probabilities, learning rate = {}", best.learning_rate).as_str(),
        ) {
            let mut section = ReportSection::new("Probability Distribution");
            section.add_content(html! {
                "Predicted probabilities on the test split for the best model by test accuracy."
            });
            section.add_plot(plot);
            report.add_section(section);
        }
    }

    report
}
