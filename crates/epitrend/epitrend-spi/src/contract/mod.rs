//! Contract definitions for epitrend.
//!
//! This module contains the trait seams between pipeline stages.

mod decomposer;
mod label_classifier;
mod outlier_detector;
mod smoother;

pub use decomposer::Decomposer;
pub use label_classifier::LabelClassifier;
pub use outlier_detector::OutlierDetector;
pub use smoother::Smoother;
