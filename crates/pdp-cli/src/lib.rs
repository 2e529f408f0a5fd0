//! CLI library components for the benchmark generator.

pub mod logging;
pub mod pipeline;
pub mod types;
