//! nabla-classifiers: logistic-regression building blocks for binary image
//! classification.
//!
//! This crate provides a gradient-descent trained logistic-regression model,
//! image preprocessing utilities (flattening and pixel scaling), dataset
//! handling and CSV loading, a learning-rate sweep driver, and
//! reporting/plotting helpers used by the CLI and the integration tests.
//!
//! The design favors small, testable modules; everything operates on dense
//! `ndarray` arrays with one column per training example.
pub mod config;
pub mod dataset;
pub mod error;
pub mod experiment;
pub mod io;
pub mod models;
pub mod preprocessing;
pub mod report;
