use anyhow::Result;
use maud::html;

use nabla_classifiers::config::SweepConfig;
use nabla_classifiers::dataset::synthetic;
use nabla_classifiers::experiment::run_sweep;
use nabla_classifiers::report::plots::{plot_cost_curves, plot_probability_histogram};
use nabla_classifiers::report::{Report, ReportSection};

fn main() -> Result<()> {
    env_logger::init();

    // Seeded synthetic dataset: 209 training and 50 test images of 16x16x3
    let dataset = synthetic(209, 50, 16, 3, 1);
    dataset.log_summary();
    let data = dataset.to_matrices();

    let config = SweepConfig {
        learning_rates: vec![0.01, 0.001, 0.0001],
        num_iterations: 1500,
        cost_interval: 100,
        print_cost: true,
    };
    let runs = run_sweep(&data, &config);

    // Create a new report
    let mut report = Report::new("Synthetic Sweep Report");

    let mut intro_section = ReportSection::new("Introduction");
    intro_section.add_content(html! {
        "Logistic regression trained on a seeded synthetic dataset at three learning rates."
    });
    report.add_section(intro_section);

    let mut plot_section = ReportSection::new("Cost Curves");
    plot_section.add_content(html! {
        "This plot shows the gradient-descent cost per learning rate."
    });
    plot_section.add_plot(plot_cost_curves(&runs, config.cost_interval));

    if let Some(run) = runs.first() {
        let probabilities = run.test_probabilities(&data);
        let plot = plot_probability_histogram(
            &probabilities,
            &data.test_y,
            "Test-set predicted probabilities",
        )
        .unwrap();
        plot_section.add_content(html! {
            "Now we show the predicted-probability distribution on the test split."
        });
        plot_section.add_plot(plot);
    }
    report.add_section(plot_section);

    // Save the report to an HTML file
    report.save_to_file("synthetic_sweep_report.html")?;

    println!("Report saved to synthetic_sweep_report.html");

    Ok(())
}
