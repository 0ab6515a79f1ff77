pub mod builder;
pub mod estimate;
pub mod launcher;
pub mod options;

pub use builder::QuadratureEstimatorBuilder;
pub use estimate::Estimate;
pub use launcher::QuadratureEstimator;
pub use options::{EstimatorOptions, LogLevel};
