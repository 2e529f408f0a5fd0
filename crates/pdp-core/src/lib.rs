#![deny(unsafe_code)]

//! Benchmark generation for every supported sport.
//!
//! Each sport runs the same pipeline: an enumeration driver walks the
//! cohort space declared in `pdp-standards`, an eligibility filter drops
//! combinations that are not benchmarked, and a synthesizer assembles one
//! record per surviving combination. Generators are looked up through the
//! [`GeneratorRegistry`].

pub mod athletics;
pub mod generator;
pub mod irish_dancing;
pub mod rugby;
pub mod validate;

pub use generator::{BenchmarkGenerator, GeneratorRegistry, build_default_registry, default_registry};
pub use validate::validate_records;
