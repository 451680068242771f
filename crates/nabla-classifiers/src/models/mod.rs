pub mod classifier_trait;
pub mod logistic;

pub use classifier_trait::BinaryClassifier;
pub use logistic::{accuracy, sigmoid, Gradients, LogisticRegression};
