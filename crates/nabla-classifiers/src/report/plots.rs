use ndarray::Array1;
use plotly::common::Mode;
use plotly::layout::{Axis, Layout};
use plotly::{Histogram, Plot, Scatter};

use crate::experiment::ModelRun;

/// Plot the recorded gradient-descent cost of every sweep run, one line per
/// learning rate. `cost_interval` converts recorded indices back into
/// iteration numbers for the x-axis.
pub fn plot_cost_curves(runs: &[ModelRun], cost_interval: usize) -> Plot {
    let mut plot = Plot::new();

    for run in runs {
        let iterations: Vec<f64> = (0..run.costs.len())
            .map(|i| (i * cost_interval) as f64)
            .collect();
        let costs: Vec<f64> = run.costs.iter().map(|&c| c as f64).collect();

        plot.add_trace(
            Scatter::new(iterations, costs)
                .name(format!("learning rate = {}", run.learning_rate).as_str())
                .mode(Mode::Lines),
        );
    }

    plot.set_layout(
        Layout::new()
            .title("Gradient-Descent Cost")
            .x_axis(Axis::new().title("Iteration"))
            .y_axis(Axis::new().title("Cost")),
    );

    plot
}

/// Plot a histogram of predicted probabilities for the positive and negative
/// examples.
pub fn plot_probability_histogram(
    probabilities: &Array1<f32>,
    labels: &Array1<f32>,
    title: &str,
) -> Result<Plot, String> {
    // Assert that the probabilities and labels have the same length
    assert_eq!(
        probabilities.len(),
        labels.len(),
        "Probabilities and labels must have the same length"
    );

    // Assert that the labels are only two classes
    assert!(
        labels.iter().all(|&l| l == 0.0 || l == 1.0),
        "Labels must be composed of only two classes, 1 for positives and 0 for negatives"
    );

    let mut positives = Vec::new();
    let mut negatives = Vec::new();

    for (p, label) in probabilities.iter().zip(labels.iter()) {
        if *label == 1.0 {
            positives.push(*p);
        } else {
            negatives.push(*p);
        }
    }

    let trace_positive = Histogram::new(positives).name("Positive");
    let trace_negative = Histogram::new(negatives).name("Negative");

    let layout = Layout::new()
        .title(title)
        .x_axis(Axis::new().title("Predicted probability"))
        .y_axis(Axis::new().title("Count"));

    let mut plot = Plot::new();
    plot.add_trace(trace_positive);
    plot.add_trace(trace_negative);
    plot.set_layout(layout);

    Ok(plot)
}
