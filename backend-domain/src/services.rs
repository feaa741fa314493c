// Pure domain services

pub mod classifier;
pub mod normalizer;
pub mod stats_aggregator;

pub use classifier::*;
pub use normalizer::*;
pub use stats_aggregator::*;
